//! Dashhead library exports for testing

use clap::ValueEnum;

pub mod catalog;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Where the project collection is loaded from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    #[default]
    File,
    Http,
}

impl SourceKind {
    /// Parses the names accepted in config files and env vars.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "file" => Some(SourceKind::File),
            "http" => Some(SourceKind::Http),
            _ => None,
        }
    }
}
