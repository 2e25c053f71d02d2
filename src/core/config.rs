//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.dashhead/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::SourceKind;
use crate::core::prompt::PromptConfig;
use crate::core::title::TitleConfig;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DashConfig {
    #[serde(default)]
    pub header: HeaderSection,
    #[serde(default)]
    pub routes: BTreeMap<String, String>,
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub table: TableSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HeaderSection {
    pub prefix: Option<String>,
    pub words: Option<Vec<String>>,
    pub typing_speed_ms: Option<u64>,
    pub deleting_speed_ms: Option<u64>,
    pub dwell_ms: Option<u64>,
    pub default_title: Option<String>,
    pub detail_fallback: Option<String>,
    pub detail_parent: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogSection {
    pub source: Option<String>,
    pub file: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TableSection {
    pub page_size: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PROJECTS_FILE: &str = "projects.json";
pub const DEFAULT_PROJECTS_URL: &str = "http://localhost:3000/projects.json";
pub const DEFAULT_PAGE_SIZE: usize = 9;
pub const DEFAULT_ROUTE: &str = "/explore";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Everything one header mount needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderConfig {
    pub titles: TitleConfig,
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub header: HeaderConfig,
    pub source: SourceKind,
    pub projects_file: PathBuf,
    pub projects_url: String,
    pub page_size: usize,
    pub initial_route: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    /// Values that parse but cannot drive the header (e.g. no prompt words).
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.dashhead/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".dashhead").join("config.toml"))
}

/// Load config from `~/.dashhead/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DashConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DashConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DashConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(DashConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: DashConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Dashhead Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [header]
# prefix = "Search by "
# words = ["location", "user", "project", "contractor"]
# typing_speed_ms = 100
# deleting_speed_ms = 50
# dwell_ms = 1000
# default_title = "Dashboard"
# detail_fallback = "Project Details"
# detail_parent = "/projects"

# [routes]                            # Replaces the built-in route titles
# "/explore" = "Explore"
# "/contractors" = "Contractors"
# "/projects" = "Projects"
# "/users" = "Users"

# [catalog]
# source = "file"                     # "file" or "http", or set DASHHEAD_SOURCE
# file = "projects.json"              # Or set DASHHEAD_PROJECTS_FILE
# url = "http://localhost:3000/projects.json"   # Or set DASHHEAD_PROJECTS_URL

# [table]
# page_size = 9
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_source` and `cli_route` are from CLI flags (None = not specified).
pub fn resolve(
    config: &DashConfig,
    cli_source: Option<SourceKind>,
    cli_route: Option<&str>,
) -> ResolvedConfig {
    // Source: CLI → env → config → default
    let source = cli_source
        .or_else(|| {
            std::env::var("DASHHEAD_SOURCE")
                .ok()
                .and_then(|s| SourceKind::from_name(&s))
        })
        .or_else(|| {
            config
                .catalog
                .source
                .as_deref()
                .and_then(SourceKind::from_name)
        })
        .unwrap_or_default();

    // Projects file: env → config → default
    let projects_file = std::env::var("DASHHEAD_PROJECTS_FILE")
        .ok()
        .or_else(|| config.catalog.file.clone())
        .unwrap_or_else(|| DEFAULT_PROJECTS_FILE.to_string());

    // Projects URL: env → config → default
    let projects_url = std::env::var("DASHHEAD_PROJECTS_URL")
        .ok()
        .or_else(|| config.catalog.url.clone())
        .unwrap_or_else(|| DEFAULT_PROJECTS_URL.to_string());

    ResolvedConfig {
        header: resolve_header(config),
        source,
        projects_file: PathBuf::from(projects_file),
        projects_url,
        page_size: config
            .table
            .page_size
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE),
        initial_route: cli_route.unwrap_or(DEFAULT_ROUTE).to_string(),
    }
}

/// Resolves header settings. A `[routes]` table replaces the defaults wholesale.
fn resolve_header(config: &DashConfig) -> HeaderConfig {
    let h = &config.header;
    let titles_default = TitleConfig::default();
    let prompt_default = PromptConfig::default();

    let titles = TitleConfig {
        routes: if config.routes.is_empty() {
            titles_default.routes
        } else {
            config.routes.clone()
        },
        default_title: h
            .default_title
            .clone()
            .unwrap_or(titles_default.default_title),
        detail_fallback: h
            .detail_fallback
            .clone()
            .unwrap_or(titles_default.detail_fallback),
        detail_parent: h
            .detail_parent
            .clone()
            .unwrap_or(titles_default.detail_parent),
    };

    let prompt = PromptConfig {
        prefix: h.prefix.clone().unwrap_or(prompt_default.prefix),
        words: h.words.clone().unwrap_or(prompt_default.words),
        typing_speed: h
            .typing_speed_ms
            .map(Duration::from_millis)
            .unwrap_or(prompt_default.typing_speed),
        deleting_speed: h
            .deleting_speed_ms
            .map(Duration::from_millis)
            .unwrap_or(prompt_default.deleting_speed),
        dwell: h
            .dwell_ms
            .map(Duration::from_millis)
            .unwrap_or(prompt_default.dwell),
    };

    HeaderConfig { titles, prompt }
}
