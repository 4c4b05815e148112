//! Centralized constants for the roadside crate
//!
//! Values shared by several modules live here so the sampler, the service
//! clients and the exporters agree on them.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in meters (WGS84 approximation)
    pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

    /// Kilometers per degree of latitude, as used by the point sampler
    pub const KM_PER_DEGREE: f64 = 111.0;
}

/// External API endpoints
pub mod api {
    /// Overpass API interpreter endpoint (OpenStreetMap map data)
    pub const OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// User-Agent sent to both services (Nominatim rejects anonymous clients)
    pub const USER_AGENT: &str = concat!("roadside/", env!("CARGO_PKG_VERSION"));
}

/// Record and export settings
pub mod record {
    /// Address stored when no address could be resolved
    pub const ADDRESS_PLACEHOLDER: &str = "—";

    /// Spreadsheet column headers, in export order
    pub const COLUMNS: [&str; 5] = ["Número", "Nome", "Latitude", "Longitude", "Endereço"];
}
