//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.storefront/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::http::DEFAULT_CATALOG_BASE_URL;
use crate::location::providers::ip::DEFAULT_IP_LOCATION_BASE_URL;
use crate::location::{Coordinate, PermissionPolicy};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub location: LocationConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LocationConfig {
    pub provider: Option<String>,
    pub base_url: Option<String>,
    pub permission: Option<PermissionPolicy>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: &str = "debug";
pub const DEFAULT_LATITUDE: f64 = -23.5505;
pub const DEFAULT_LONGITUDE: f64 = -46.6333;

/// Where positions come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocationSource {
    #[default]
    Ip,
    Fixed,
}

impl LocationSource {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ip" => Some(LocationSource::Ip),
            "fixed" => Some(LocationSource::Fixed),
            _ => None,
        }
    }
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub catalog_base_url: String,
    pub location_source: LocationSource,
    pub location_base_url: String,
    pub permission: PermissionPolicy,
    pub fixed_coordinate: Coordinate,
    pub log_level: String,
}

impl ResolvedConfig {
    /// The configured log level. Unknown names fall back to Debug.
    pub fn log_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            warn!("Unknown log level {:?}, using debug", self.log_level);
            LevelFilter::Debug
        })
    }
}

/// Values given on the command line. `None`/`false` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub catalog_url: Option<String>,
    pub location: Option<String>,
    pub deny_location: bool,
    pub log_level: Option<String>,
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

/// Returns the path to `~/.storefront/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".storefront").join("config.toml"))
}

/// Load config from `~/.storefront/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StorefrontConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<StorefrontConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(StorefrontConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<StorefrontConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(StorefrontConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: StorefrontConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Storefront Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                  # "error", "warn", "info", "debug", "trace"

# [catalog]
# base_url = "https://fakestoreapi.com" # Or set STOREFRONT_CATALOG_URL

# [location]
# provider = "ip"                      # "ip" or "fixed"; or STOREFRONT_LOCATION_PROVIDER
# base_url = "http://ip-api.com"       # Or set STOREFRONT_LOCATION_URL
# permission = "allow"                 # "allow" or "deny"; or STOREFRONT_LOCATION_PERMISSION
# latitude = -23.5505                  # Used by the "fixed" provider
# longitude = -46.6333
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &StorefrontConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment lookup injected.
pub fn resolve_with_env<F>(config: &StorefrontConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Catalog URL: CLI → env → config → default
    let catalog_base_url = cli
        .catalog_url
        .clone()
        .or_else(|| env("STOREFRONT_CATALOG_URL"))
        .or_else(|| config.catalog.base_url.clone())
        .unwrap_or_else(|| DEFAULT_CATALOG_BASE_URL.to_string());

    // Location provider: CLI → env → config → default
    let location_source = cli
        .location
        .clone()
        .or_else(|| env("STOREFRONT_LOCATION_PROVIDER"))
        .or_else(|| config.location.provider.clone())
        .map(|name| {
            LocationSource::parse(&name).unwrap_or_else(|| {
                warn!("Unknown location provider '{}', falling back to ip", name);
                LocationSource::default()
            })
        })
        .unwrap_or_default();

    // Location URL: env → config → default
    let location_base_url = env("STOREFRONT_LOCATION_URL")
        .or_else(|| config.location.base_url.clone())
        .unwrap_or_else(|| DEFAULT_IP_LOCATION_BASE_URL.to_string());

    // Permission: --deny-location → env → config → allow
    let permission = if cli.deny_location {
        PermissionPolicy::Deny
    } else {
        env("STOREFRONT_LOCATION_PERMISSION")
            .and_then(|s| {
                let parsed = PermissionPolicy::parse(&s);
                if parsed.is_none() {
                    warn!("Ignoring invalid STOREFRONT_LOCATION_PERMISSION '{}'", s);
                }
                parsed
            })
            .or(config.location.permission)
            .unwrap_or_default()
    };

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    ResolvedConfig {
        catalog_base_url,
        location_source,
        location_base_url,
        permission,
        fixed_coordinate: Coordinate {
            latitude: config.location.latitude.unwrap_or(DEFAULT_LATITUDE),
            longitude: config.location.longitude.unwrap_or(DEFAULT_LONGITUDE),
        },
        log_level,
    }
}
