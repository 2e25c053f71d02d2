//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::{
    CatalogError, EntityLookup, LookupError, LookupOutcome, Project, ProjectSource, Venue,
};
use crate::core::config::HeaderConfig;
use crate::core::state::App;

/// In-memory project collection, or a canned failure.
pub struct StaticSource {
    result: Result<Vec<Project>, CatalogError>,
}

impl StaticSource {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            result: Ok(projects),
        }
    }

    pub fn with_names(names: &[(u64, &str)]) -> Self {
        Self::new(
            names
                .iter()
                .map(|(id, name)| sample_project(*id, name, "2024-01-01"))
                .collect(),
        )
    }

    pub fn failing(err: CatalogError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl ProjectSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>, CatalogError> {
        self.result.clone()
    }
}

/// Lookup double answering from a fixed id → name table.
pub struct MapLookup {
    names: HashMap<String, String>,
}

impl MapLookup {
    pub fn new(names: &[(&str, &str)]) -> Self {
        Self {
            names: names
                .iter()
                .map(|(id, name)| (id.to_string(), name.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl EntityLookup for MapLookup {
    async fn lookup(&self, id: &str) -> LookupOutcome {
        if id == "boom" {
            return Err(LookupError::Unavailable("connection refused".to_string()));
        }
        Ok(self.names.get(id).cloned())
    }
}

pub fn sample_project(id: u64, name: &str, start: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
        start_date: start.to_string(),
        end_date: "2030-12-31".to_string(),
        status: "Active".to_string(),
        venue: Venue {
            name: "Main Hall".to_string(),
        },
    }
}

/// Creates a test App with default header settings and an in-memory catalog.
pub fn test_app() -> App {
    let source: Arc<dyn ProjectSource> = Arc::new(StaticSource::with_names(&[
        (1, "Harbour Fit-out"),
        (2, "Library Annex"),
    ]));
    App::mount(&HeaderConfig::default(), source).unwrap()
}
