//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.champdex/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::catalog::CatalogEndpoint;
use crate::catalog::client::{DEFAULT_BASE_URL, DEFAULT_LOCALE};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChampdexConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub base_url: Option<String>,
    pub locale: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

/// Values given on the command line (None = flag not passed).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides<'a> {
    pub base_url: Option<&'a str>,
    pub locale: Option<&'a str>,
    pub log_level: Option<&'a str>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub locale: String,
    pub request_timeout: Duration,
    pub log_level: LevelFilter,
}

impl ResolvedConfig {
    pub fn endpoint(&self) -> CatalogEndpoint {
        CatalogEndpoint::new(&self.base_url, &self.locale)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.champdex/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".champdex").join("config.toml"))
}

/// Load config from `~/.champdex/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ChampdexConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ChampdexConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ChampdexConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<ChampdexConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ChampdexConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ChampdexConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# champdex configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"

# [catalog]
# base_url = "https://ddragon.leagueoflegends.com"   # Or set CHAMPDEX_BASE_URL
# locale = "en_US"                   # Or set CHAMPDEX_LOCALE
# request_timeout_secs = 30
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
pub fn resolve(config: &ChampdexConfig, cli: CliOverrides<'_>) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("CHAMPDEX_BASE_URL").ok())
        .or_else(|| config.catalog.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Locale: CLI → env → config → default
    let locale = cli
        .locale
        .map(|s| s.to_string())
        .or_else(|| std::env::var("CHAMPDEX_LOCALE").ok())
        .or_else(|| config.catalog.locale.clone())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

    let request_timeout = Duration::from_secs(
        config
            .catalog
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
    );

    // Log level: CLI → config → default. Unparseable values fall back.
    let log_level = cli
        .log_level
        .or(config.general.log_level.as_deref())
        .and_then(|s| LevelFilter::from_str(s).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        base_url,
        locale,
        request_timeout,
        log_level,
    }
}

/// Level for the logger started before the config file is read: the CLI
/// flag if it parses, otherwise the default. `resolve` may lower or raise it.
pub fn bootstrap_log_level(cli: Option<&str>) -> LevelFilter {
    cli.and_then(|s| LevelFilter::from_str(s).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ChampdexConfig::default();
        assert!(config.catalog.base_url.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = ChampdexConfig::default();
        let resolved = resolve(&config, CliOverrides::default());
        assert_eq!(
            resolved.request_timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = ChampdexConfig {
            catalog: CatalogConfig {
                base_url: Some("http://from-config".to_string()),
                locale: Some("ko_KR".to_string()),
                request_timeout_secs: Some(5),
            },
            ..Default::default()
        };
        let resolved = resolve(
            &config,
            CliOverrides {
                base_url: Some("http://from-cli"),
                locale: Some("pt_BR"),
                log_level: Some("warn"),
            },
        );
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.locale, "pt_BR");
        assert_eq!(resolved.request_timeout, Duration::from_secs(5));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ChampdexConfig {
            general: GeneralConfig {
                log_level: Some("info".to_string()),
            },
            catalog: CatalogConfig {
                base_url: Some("http://from-config".to_string()),
                locale: Some("ko_KR".to_string()),
                request_timeout_secs: None,
            },
        };
        let resolved = resolve(&config, CliOverrides::default());
        assert_eq!(resolved.base_url, "http://from-config");
        assert_eq!(resolved.locale, "ko_KR");
        assert_eq!(
            resolved.request_timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
        assert_eq!(resolved.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_bootstrap_log_level() {
        assert_eq!(bootstrap_log_level(None), DEFAULT_LOG_LEVEL);
        assert_eq!(bootstrap_log_level(Some("trace")), LevelFilter::Trace);
        assert_eq!(bootstrap_log_level(Some("chatty")), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_invalid_log_level_falls_back() {
        let config = ChampdexConfig {
            general: GeneralConfig {
                log_level: Some("chatty".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, CliOverrides::default());
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_endpoint_from_resolved_config() {
        let resolved = ResolvedConfig {
            base_url: "http://localhost:1234/".to_string(),
            locale: "en_US".to_string(),
            request_timeout: Duration::from_secs(1),
            log_level: LevelFilter::Off,
        };
        assert_eq!(
            resolved.endpoint().champion_data_url(),
            "http://localhost:1234/cdn/14.2.1/data/en_US/champion.json"
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
log_level = "info"

[catalog]
base_url = "http://127.0.0.1:8080"
locale = "pt_BR"
request_timeout_secs = 10
"#;
        let config: ChampdexConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert_eq!(
            config.catalog.base_url.as_deref(),
            Some("http://127.0.0.1:8080")
        );
        assert_eq!(config.catalog.locale.as_deref(), Some("pt_BR"));
        assert_eq!(config.catalog.request_timeout_secs, Some(10));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[catalog]
locale = "de_DE"
"#;
        let config: ChampdexConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog.locale.as_deref(), Some("de_DE"));
        assert!(config.catalog.base_url.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("champdex-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.catalog.base_url.is_none());
        assert!(path.exists());

        // The generated file is all comments, so it parses back to defaults.
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.catalog.locale.is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("champdex-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[catalog\nbase_url = ").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
