//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/roadside/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Sampling origin
    #[serde(default)]
    pub origin: OriginConfig,

    /// Collection loop settings
    #[serde(default)]
    pub collection: CollectionConfig,

    /// External service settings
    #[serde(default)]
    pub services: ServicesConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

/// Sampling origin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginConfig {
    /// Origin latitude
    #[serde(default = "default_origin_lat")]
    pub lat: f64,

    /// Origin longitude
    #[serde(default = "default_origin_lng")]
    pub lng: f64,

    /// Sampling radius in kilometers
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
}

/// Collection loop settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Number of records to collect
    #[serde(default = "default_target_count")]
    pub target_count: usize,

    /// Road search radius in meters
    #[serde(default = "default_road_search_radius_m")]
    pub road_search_radius_m: f64,

    /// Look up postal addresses for snapped points
    #[serde(default = "default_resolve_addresses")]
    pub resolve_addresses: bool,

    /// Give up after this many attempts (0 = never)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u64,
}

/// External service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Overpass interpreter endpoint
    #[serde(default = "default_overpass_url")]
    pub overpass_url: String,

    /// Nominatim API root
    #[serde(default = "default_nominatim_url")]
    pub nominatim_url: String,

    /// User-Agent sent to both services
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Overpass request timeout in seconds
    #[serde(default = "default_overpass_timeout_secs")]
    pub overpass_timeout_secs: u64,

    /// Nominatim request timeout in seconds
    #[serde(default = "default_nominatim_timeout_secs")]
    pub nominatim_timeout_secs: u64,

    /// Pause after each address lookup, in milliseconds
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// File base name used when the prompt is left blank
    #[serde(default = "default_file_name")]
    pub default_file_name: String,

    /// Output format
    #[serde(default = "default_format")]
    pub format: String,
}

// Default value functions for serde
fn default_origin_lat() -> f64 {
    DEFAULT_ORIGIN_LAT
}
fn default_origin_lng() -> f64 {
    DEFAULT_ORIGIN_LNG
}
fn default_radius_km() -> f64 {
    DEFAULT_RADIUS_KM
}
fn default_target_count() -> usize {
    DEFAULT_TARGET_COUNT
}
fn default_road_search_radius_m() -> f64 {
    DEFAULT_ROAD_SEARCH_RADIUS_M
}
fn default_resolve_addresses() -> bool {
    DEFAULT_RESOLVE_ADDRESSES
}
fn default_max_attempts() -> u64 {
    DEFAULT_MAX_ATTEMPTS
}
fn default_overpass_url() -> String {
    DEFAULT_OVERPASS_URL.to_string()
}
fn default_nominatim_url() -> String {
    DEFAULT_NOMINATIM_URL.to_string()
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
fn default_overpass_timeout_secs() -> u64 {
    DEFAULT_OVERPASS_TIMEOUT_SECS
}
fn default_nominatim_timeout_secs() -> u64 {
    DEFAULT_NOMINATIM_TIMEOUT_SECS
}
fn default_pause_ms() -> u64 {
    DEFAULT_PAUSE_MS
}
fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            lat: default_origin_lat(),
            lng: default_origin_lng(),
            radius_km: default_radius_km(),
        }
    }
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            target_count: default_target_count(),
            road_search_radius_m: default_road_search_radius_m(),
            resolve_addresses: default_resolve_addresses(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            overpass_url: default_overpass_url(),
            nominatim_url: default_nominatim_url(),
            user_agent: default_user_agent(),
            overpass_timeout_secs: default_overpass_timeout_secs(),
            nominatim_timeout_secs: default_nominatim_timeout_secs(),
            pause_ms: default_pause_ms(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_file_name: default_file_name(),
            format: default_format(),
        }
    }
}

/// Parse a config value, naming the key in the error
fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("Invalid value for {}: {}", key, value)))
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific path, creating it if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["origin", "lat"] => Some(self.origin.lat.to_string()),
            ["origin", "lng"] => Some(self.origin.lng.to_string()),
            ["origin", "radius_km"] => Some(self.origin.radius_km.to_string()),

            ["collection", "target_count"] => Some(self.collection.target_count.to_string()),
            ["collection", "road_search_radius_m"] => {
                Some(self.collection.road_search_radius_m.to_string())
            }
            ["collection", "resolve_addresses"] => {
                Some(self.collection.resolve_addresses.to_string())
            }
            ["collection", "max_attempts"] => Some(self.collection.max_attempts.to_string()),

            ["services", "overpass_url"] => Some(self.services.overpass_url.clone()),
            ["services", "nominatim_url"] => Some(self.services.nominatim_url.clone()),
            ["services", "user_agent"] => Some(self.services.user_agent.clone()),
            ["services", "overpass_timeout_secs"] => {
                Some(self.services.overpass_timeout_secs.to_string())
            }
            ["services", "nominatim_timeout_secs"] => {
                Some(self.services.nominatim_timeout_secs.to_string())
            }
            ["services", "pause_ms"] => Some(self.services.pause_ms.to_string()),

            ["export", "default_file_name"] => Some(self.export.default_file_name.clone()),
            ["export", "format"] => Some(self.export.format.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["origin", "lat"] => self.origin.lat = parse_value(key, value)?,
            ["origin", "lng"] => self.origin.lng = parse_value(key, value)?,
            ["origin", "radius_km"] => self.origin.radius_km = parse_value(key, value)?,

            ["collection", "target_count"] => {
                self.collection.target_count = parse_value(key, value)?;
            }
            ["collection", "road_search_radius_m"] => {
                self.collection.road_search_radius_m = parse_value(key, value)?;
            }
            ["collection", "resolve_addresses"] => {
                self.collection.resolve_addresses = parse_value(key, value)?;
            }
            ["collection", "max_attempts"] => {
                self.collection.max_attempts = parse_value(key, value)?;
            }

            ["services", "overpass_url"] => self.services.overpass_url = value.to_string(),
            ["services", "nominatim_url"] => self.services.nominatim_url = value.to_string(),
            ["services", "user_agent"] => self.services.user_agent = value.to_string(),
            ["services", "overpass_timeout_secs"] => {
                self.services.overpass_timeout_secs = parse_value(key, value)?;
            }
            ["services", "nominatim_timeout_secs"] => {
                self.services.nominatim_timeout_secs = parse_value(key, value)?;
            }
            ["services", "pause_ms"] => self.services.pause_ms = parse_value(key, value)?,

            ["export", "default_file_name"] => {
                self.export.default_file_name = value.to_string();
            }
            ["export", "format"] => self.export.format = value.to_string(),

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "origin.lat",
            "origin.lng",
            "origin.radius_km",
            "collection.target_count",
            "collection.road_search_radius_m",
            "collection.resolve_addresses",
            "collection.max_attempts",
            "services.overpass_url",
            "services.nominatim_url",
            "services.user_agent",
            "services.overpass_timeout_secs",
            "services.nominatim_timeout_secs",
            "services.pause_ms",
            "export.default_file_name",
            "export.format",
        ]
    }
}
