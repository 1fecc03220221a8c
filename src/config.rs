//! Configuration for showcase.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (SHOWCASE_DATA, SHOWCASE_DEBOUNCE_MS)
//! 2. Config file (.showcase/config.yaml, then ~/.showcase/config.yaml)
//! 3. Defaults (data/contents.json, 300ms)
//!
//! Config file discovery:
//! - Searches current directory and parents for .showcase/config.yaml
//! - A relative data path is resolved against the directory holding .showcase/

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::DEFAULT_DEBOUNCE;

/// Default location of the content collection
pub const DEFAULT_DATA_SOURCE: &str = "data/contents.json";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// URL or path of the JSON collection
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    pub debounce_ms: Option<u64>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// URL or absolute/relative path of the collection
    pub data_source: String,
    /// Search debounce window
    pub debounce: Duration,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            debounce: DEFAULT_DEBOUNCE,
            config_file: None,
        }
    }
}

/// Find config file by searching current directory and parents, then home
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".showcase").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let home_config = dirs::home_dir()?.join(".showcase").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a data source that may be a path relative to the project root.
/// URLs and absolute paths pass through untouched.
fn resolve_source(base: &Path, source: &str) -> String {
    if source.starts_with("http://") || source.starts_with("https://") {
        return source.to_string();
    }

    let path = PathBuf::from(source);
    if path.is_absolute() {
        source.to_string()
    } else {
        base.join(path).display().to_string()
    }
}

/// Parse the debounce override from the environment
fn env_debounce() -> Result<Option<Duration>> {
    match std::env::var("SHOWCASE_DEBOUNCE_MS") {
        Ok(value) => {
            let ms: u64 = value
                .trim()
                .parse()
                .with_context(|| format!("Invalid SHOWCASE_DEBOUNCE_MS: {}", value))?;
            Ok(Some(Duration::from_millis(ms)))
        }
        Err(_) => Ok(None),
    }
}

/// Merge a parsed config file over the defaults
fn apply_file(config: ConfigFile, config_path: &Path) -> ResolvedConfig {
    // Base directory is the parent of .showcase/
    let base_dir = config_path
        .parent()
        .and_then(|p| p.parent())
        .unwrap_or(Path::new("."));

    let data_source = config
        .data
        .source
        .as_deref()
        .map(|s| resolve_source(base_dir, s))
        .unwrap_or_else(|| DEFAULT_DATA_SOURCE.to_string());

    let debounce = config
        .search
        .debounce_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_DEBOUNCE);

    ResolvedConfig {
        data_source,
        debounce,
        config_file: Some(config_path.to_path_buf()),
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let mut resolved = match find_config_file() {
        Some(path) => apply_file(load_config_file(&path)?, &path),
        None => ResolvedConfig::default(),
    };

    if let Ok(source) = std::env::var("SHOWCASE_DATA") {
        resolved.data_source = source;
    }
    if let Some(debounce) = env_debounce()? {
        resolved.debounce = debounce;
    }

    Ok(resolved)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
