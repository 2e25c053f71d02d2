//! # Application State
//!
//! Core state for the dashboard shell. Domain logic only - no TUI-specific
//! types. Presentation state (focus, selections, pages) lives in `tui`.
//!
//! ```text
//! App
//! ├── header: Header                 // title + search prompt engine
//! ├── route: Option<Route>           // None until the first navigation
//! ├── source: Arc<dyn ProjectSource> // project collection
//! ├── lookup: Arc<dyn EntityLookup>  // id → display name for detail routes
//! ├── projects: Vec<Project>         // newest start date first
//! ├── loading_projects: bool
//! ├── fetch_generation: u64          // latest project fetch issued
//! ├── projects_error: Option<String>
//! └── status_message: String         // status line text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::catalog::{CatalogLookup, EntityLookup, Project, ProjectSource};
use crate::core::config::{ConfigError, HeaderConfig};
use crate::core::header::Header;
use crate::core::route::Route;

pub struct App {
    pub header: Header,
    pub route: Option<Route>,
    pub source: Arc<dyn ProjectSource>,
    pub lookup: Arc<dyn EntityLookup>,
    pub projects: Vec<Project>,
    pub loading_projects: bool,
    /// Bumped per fetch; only the matching `ProjectsLoaded` is applied.
    pub fetch_generation: u64,
    pub projects_error: Option<String>,
    pub status_message: String,
}

impl App {
    /// Mounts the shell. The lookup defaults to searching `source` by id.
    pub fn mount(
        header_config: &HeaderConfig,
        source: Arc<dyn ProjectSource>,
    ) -> Result<Self, ConfigError> {
        let lookup: Arc<dyn EntityLookup> = Arc::new(CatalogLookup::new(source.clone()));
        Ok(Self {
            header: Header::mount(header_config)?,
            route: None,
            source,
            lookup,
            projects: Vec::new(),
            loading_projects: false,
            fetch_generation: 0,
            projects_error: None,
            status_message: String::new(),
        })
    }

    /// Swaps in a different keyed-lookup provider.
    pub fn with_lookup(mut self, lookup: Arc<dyn EntityLookup>) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn current_path(&self) -> &str {
        self.route.as_ref().map(|r| r.path.as_str()).unwrap_or("/")
    }

    /// The projects list lives at the detail parent itself (`/projects`).
    pub fn on_projects_page(&self) -> bool {
        self.current_path() == self.header.detail_parent()
    }

    pub fn on_detail_page(&self) -> bool {
        self.route
            .as_ref()
            .and_then(|r| r.detail_id(self.header.detail_parent()))
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_mount_defaults() {
        let app = test_app();
        assert!(app.route.is_none());
        assert_eq!(app.current_path(), "/");
        assert_eq!(app.header.title(), "Dashboard");
        assert!(app.projects.is_empty());
        assert!(!app.loading_projects);
        assert_eq!(app.fetch_generation, 0);
        assert!(!app.on_projects_page());
        assert!(!app.on_detail_page());
    }
}
