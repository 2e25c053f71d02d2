//! # Entity Lookup
//!
//! The header needs exactly one thing from the data layer: turn an id taken
//! from a detail route into something a human can read. `EntityLookup` is
//! that capability, with three possible answers:
//!
//! - `Ok(Some(name))` found
//! - `Ok(None)` no entity with that id
//! - `Err(_)` the source could not answer
//!
//! `CatalogLookup` implements it over any `ProjectSource` by loading the whole
//! collection and searching it, which is all a static `projects.json` allows.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::source::{CatalogError, ProjectSource};

#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    /// The backing source could not be reached or read.
    Unavailable(String),
    /// The source answered with something that is not a project collection.
    Malformed(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Unavailable(msg) => write!(f, "lookup unavailable: {msg}"),
            LookupError::Malformed(msg) => write!(f, "malformed lookup response: {msg}"),
        }
    }
}

impl std::error::Error for LookupError {}

impl From<CatalogError> for LookupError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Parse(msg) => LookupError::Malformed(msg),
            other => LookupError::Unavailable(other.to_string()),
        }
    }
}

/// Result of a single lookup: a display name, not-found, or an error.
pub type LookupOutcome = Result<Option<String>, LookupError>;

#[async_trait]
pub trait EntityLookup: Send + Sync {
    async fn lookup(&self, id: &str) -> LookupOutcome;
}

/// Keyed lookup over a full project collection.
pub struct CatalogLookup {
    source: Arc<dyn ProjectSource>,
}

impl CatalogLookup {
    pub fn new(source: Arc<dyn ProjectSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl EntityLookup for CatalogLookup {
    async fn lookup(&self, id: &str) -> LookupOutcome {
        let projects = self.source.fetch_projects().await?;
        let found = projects
            .into_iter()
            .find(|p| p.matches_id(id))
            .map(|p| p.name);
        debug!(
            "Lookup of id {} via {}: {}",
            id,
            self.source.name(),
            if found.is_some() { "found" } else { "not found" }
        );
        Ok(found)
    }
}
