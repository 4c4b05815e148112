//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::api;

/// Default origin latitude (Serra, ES)
pub const DEFAULT_ORIGIN_LAT: f64 = -20.2235779;

/// Default origin longitude
pub const DEFAULT_ORIGIN_LNG: f64 = -40.2640909;

/// Default sampling radius in kilometers
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// Default number of records to collect
pub const DEFAULT_TARGET_COUNT: usize = 100;

/// Default road search radius in meters
pub const DEFAULT_ROAD_SEARCH_RADIUS_M: f64 = 200.0;

/// Resolve postal addresses by default
pub const DEFAULT_RESOLVE_ADDRESSES: bool = true;

/// Default attempt cap (0 = unbounded)
pub const DEFAULT_MAX_ATTEMPTS: u64 = 0;

/// Default Overpass request timeout in seconds
pub const DEFAULT_OVERPASS_TIMEOUT_SECS: u64 = 25;

/// Default Nominatim request timeout in seconds
pub const DEFAULT_NOMINATIM_TIMEOUT_SECS: u64 = 10;

/// Default pause after each address lookup, in milliseconds
pub const DEFAULT_PAUSE_MS: u64 = 1000;

/// Default export file base name
pub const DEFAULT_FILE_NAME: &str = "enderecos_formatados";

/// Default export format
pub const DEFAULT_FORMAT: &str = "xlsx";

/// Default Overpass endpoint
pub const DEFAULT_OVERPASS_URL: &str = api::OVERPASS_URL;

/// Default Nominatim endpoint
pub const DEFAULT_NOMINATIM_URL: &str = api::NOMINATIM_URL;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = api::USER_AGENT;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "roadside";
