use std::fmt;

use async_trait::async_trait;

use super::types::Project;

/// Errors that can occur while loading the project collection.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Local file could not be read.
    Io(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Server answered with a non-success status.
    Api { status: u16, message: String },
    /// Payload was not a valid project collection.
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(msg) => write!(f, "I/O error: {msg}"),
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Anything that can hand over the full project collection.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Returns the name of the source, for logs.
    fn name(&self) -> &str;

    /// Fetches every project. No caching: each call goes to the backing store.
    async fn fetch_projects(&self) -> Result<Vec<Project>, CatalogError>;
}

/// Parses a JSON project collection, shared by every source.
pub(crate) fn parse_projects(body: &str) -> Result<Vec<Project>, CatalogError> {
    serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))
}
