//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.postboard/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PostboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub fetch_post_id: Option<u64>,
    pub xhr_post_id: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_FETCH_POST_ID: u64 = 1;
pub const DEFAULT_XHR_POST_ID: u64 = 2;
pub const DEFAULT_LOG_FILE: &str = "postboard.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: Url,
    pub fetch_post_id: u64,
    pub xhr_post_id: u64,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    /// Base URL that is not an absolute http(s) URL.
    InvalidBaseUrl(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::InvalidBaseUrl(url) => {
                write!(f, "invalid base URL {url:?}: expected an absolute http(s) URL")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.postboard/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".postboard").join("config.toml"))
}

/// Load config from `~/.postboard/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PostboardConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PostboardConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PostboardConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PostboardConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: PostboardConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Postboard Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "https://jsonplaceholder.typicode.com"   # Or set POSTBOARD_BASE_URL
# fetch_post_id = 1     # Post loaded by the "Fetch post" button
# xhr_post_id = 2       # Post loaded by the "XHR post" button

# [logging]
# level = "info"        # "off", "error", "warn", "info", "debug", "trace"
# file = "postboard.log"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
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
/// `cli_base_url` is from the `--base-url` flag (None = not specified).
pub fn resolve(
    config: &PostboardConfig,
    cli_base_url: Option<&str>,
) -> Result<ResolvedConfig, ConfigError> {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("POSTBOARD_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Log level: env → config → default
    let log_level = std::env::var("POSTBOARD_LOG_LEVEL")
        .ok()
        .or_else(|| config.logging.level.clone())
        .map(|level| parse_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    Ok(ResolvedConfig {
        base_url: parse_base_url(&base_url)?,
        fetch_post_id: config.api.fetch_post_id.unwrap_or(DEFAULT_FETCH_POST_ID),
        xhr_post_id: config.api.xhr_post_id.unwrap_or(DEFAULT_XHR_POST_ID),
        log_level,
        log_file: config
            .logging
            .file
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
    })
}

/// Parses and validates a base URL. Handlers append path segments to it,
/// so it must be an absolute http(s) URL.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    match Url::parse(raw.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base() => Ok(url),
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_string())),
    }
}

fn parse_level(raw: &str) -> LevelFilter {
    LevelFilter::from_str(raw.trim()).unwrap_or_else(|_| {
        warn!("Unknown log level {:?}, using {}", raw, DEFAULT_LOG_LEVEL);
        DEFAULT_LOG_LEVEL
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = PostboardConfig::default();
        assert!(config.api.base_url.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = PostboardConfig::default();
        let resolved = resolve(&config, Some(DEFAULT_BASE_URL)).unwrap();
        assert_eq!(resolved.fetch_post_id, DEFAULT_FETCH_POST_ID);
        assert_eq!(resolved.xhr_post_id, DEFAULT_XHR_POST_ID);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved.base_url.as_str(), "https://jsonplaceholder.typicode.com/");
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PostboardConfig {
            api: ApiConfig {
                base_url: None,
                fetch_post_id: Some(7),
                xhr_post_id: Some(8),
            },
            logging: LoggingConfig {
                level: None,
                file: Some("/tmp/pb.log".to_string()),
            },
        };
        let resolved = resolve(&config, Some("http://localhost:3000")).unwrap();
        assert_eq!(resolved.fetch_post_id, 7);
        assert_eq!(resolved.xhr_post_id, 8);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/pb.log"));
    }

    #[test]
    fn test_resolve_cli_base_url_wins() {
        let config = PostboardConfig {
            api: ApiConfig {
                base_url: Some("http://from-config.test".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("http://from-cli.test/api")).unwrap();
        assert_eq!(resolved.base_url.as_str(), "http://from-cli.test/api");
    }

    #[test]
    fn test_resolve_rejects_non_http_base_url() {
        let config = PostboardConfig::default();
        for bad in ["ftp://example.com", "mailto:someone@example.com", "not a url"] {
            assert!(
                matches!(resolve(&config, Some(bad)), Err(ConfigError::InvalidBaseUrl(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("loud"), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[api]
base_url = "http://localhost:8080"
fetch_post_id = 10
xhr_post_id = 11

[logging]
level = "debug"
file = "custom.log"
"#;
        let config: PostboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.api.fetch_post_id, Some(10));
        assert_eq!(config.api.xhr_post_id, Some(11));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.file.as_deref(), Some("custom.log"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[api]
xhr_post_id = 5
"#;
        let config: PostboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.xhr_post_id, Some(5));
        assert!(config.api.base_url.is_none());
        assert!(config.logging.file.is_none());
    }
}
