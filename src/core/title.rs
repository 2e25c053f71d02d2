//! # Title Resolution
//!
//! Turns the current route into the heading shown in the header.
//!
//! ```text
//! navigate(route) ──► exact match in route map? ──► mapped title
//!        │
//!        ├──► detail route with id? ──► LookupTicket { generation, id }
//!        │                                  │ (runtime runs the lookup)
//!        │                                  ▼
//!        │                      resolve(generation, outcome)
//!        │                        ├─ stale generation → dropped
//!        │                        ├─ Ok(Some(name))  → name
//!        │                        └─ not found / err → detail fallback
//!        │
//!        └──► neither ──► default title
//! ```
//!
//! Every navigation bumps `generation`. Only the lookup carrying the newest
//! generation may write the title, so a slow answer for a page the user has
//! already left can never overwrite the title of the page they are on.

use std::collections::BTreeMap;

use log::{debug, info, warn};

use crate::catalog::LookupOutcome;
use crate::core::config::ConfigError;
use crate::core::route::Route;

pub const DEFAULT_TITLE: &str = "Dashboard";
pub const DEFAULT_DETAIL_FALLBACK: &str = "Project Details";
pub const DEFAULT_DETAIL_PARENT: &str = "/projects";

#[derive(Debug, Clone, PartialEq)]
pub struct TitleConfig {
    /// Exact path → title.
    pub routes: BTreeMap<String, String>,
    /// Shown when nothing matches.
    pub default_title: String,
    /// Shown when a detail lookup fails or finds nothing.
    pub detail_fallback: String,
    /// Parent segment of detail routes, e.g. `/projects` for `/projects/42`.
    pub detail_parent: String,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            routes: default_routes(),
            default_title: DEFAULT_TITLE.to_string(),
            detail_fallback: DEFAULT_DETAIL_FALLBACK.to_string(),
            detail_parent: DEFAULT_DETAIL_PARENT.to_string(),
        }
    }
}

pub fn default_routes() -> BTreeMap<String, String> {
    [
        ("/explore", "Explore"),
        ("/contractors", "Contractors"),
        ("/projects", "Projects"),
        ("/users", "Users"),
    ]
    .into_iter()
    .map(|(path, title)| (path.to_string(), title.to_string()))
    .collect()
}

/// A lookup the runtime should run on behalf of the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub generation: u64,
    pub id: String,
}

pub struct TitleResolver {
    config: TitleConfig,
    title: String,
    current: Option<Route>,
    generation: u64,
    /// Generation of the lookup still allowed to land, if any.
    pending: Option<u64>,
}

impl TitleResolver {
    pub fn new(config: TitleConfig) -> Result<Self, ConfigError> {
        if config.default_title.trim().is_empty() {
            return Err(ConfigError::Invalid("default title is empty".to_string()));
        }
        if config.detail_fallback.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "detail fallback title is empty".to_string(),
            ));
        }
        if let Some((path, _)) = config.routes.iter().find(|(_, t)| t.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("empty title for route {path}")));
        }

        Ok(Self {
            title: config.default_title.clone(),
            config,
            current: None,
            generation: 0,
            pending: None,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while a lookup for the current route may still change the title.
    pub fn pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn detail_parent(&self) -> &str {
        &self.config.detail_parent
    }

    /// Recomputes the title for `route`.
    ///
    /// Returns a ticket when the route needs an async lookup. Re-submitting
    /// the route already shown is a no-op and never issues a second lookup.
    pub fn navigate(&mut self, route: &Route) -> Option<LookupTicket> {
        if self.current.as_ref() == Some(route) {
            debug!("Route {} unchanged, keeping title {:?}", route.path, self.title);
            return None;
        }

        self.generation += 1;
        self.pending = None;
        self.current = Some(route.clone());

        let mapped = self.config.routes.get(&route.path);
        if let Some(title) = mapped {
            self.title = title.clone();
        }

        if let Some(id) = route.detail_id(&self.config.detail_parent) {
            // Keep whatever is on screen until the lookup lands.
            self.pending = Some(self.generation);
            info!(
                "Route {} needs lookup of id {} (generation {})",
                route.path, id, self.generation
            );
            return Some(LookupTicket {
                generation: self.generation,
                id: id.to_string(),
            });
        }

        if mapped.is_none() {
            self.title = self.config.default_title.clone();
        }
        debug!("Route {} → title {:?}", route.path, self.title);
        None
    }

    /// Applies a finished lookup. Returns false when the result was stale.
    pub fn resolve(&mut self, generation: u64, outcome: LookupOutcome) -> bool {
        if self.pending != Some(generation) {
            debug!(
                "Discarding lookup result for generation {} (current {})",
                generation, self.generation
            );
            return false;
        }
        self.pending = None;

        self.title = match outcome {
            Ok(Some(name)) if !name.trim().is_empty() => name,
            Ok(_) => {
                info!("Lookup found nothing, using fallback title");
                self.config.detail_fallback.clone()
            }
            Err(e) => {
                warn!("Lookup failed: {}", e);
                self.config.detail_fallback.clone()
            }
        };
        true
    }
}
