//! Collection settings
//!
//! The validated, immutable parameters of one collection run, built from the
//! loaded `Config` (plus any CLI overrides applied to it).

use crate::config::Config;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use std::time::Duration;

/// Parameters for a collection run
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSettings {
    /// Centre of the sampling disk
    pub origin: Coordinates,
    /// Sampling radius in kilometers
    pub radius_km: f64,
    /// Number of records to collect
    pub target_count: usize,
    /// Road search radius in meters
    pub road_search_radius_m: f64,
    /// Look up postal addresses for snapped points
    pub resolve_addresses: bool,
    /// Stop after this many attempts; None retries forever
    pub max_attempts: Option<u64>,
    /// Pause after each address lookup
    pub pause: Duration,
}

impl CollectionSettings {
    /// Build settings from configuration, validating origin and radii
    pub fn from_config(config: &Config) -> Result<Self> {
        let origin = Coordinates::new(config.origin.lat, config.origin.lng);
        origin.validate()?;

        let radius_km = config.origin.radius_km;
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(Error::InvalidRadius(format!(
                "Sampling radius must be positive, got {} km",
                radius_km
            )));
        }

        let road_search_radius_m = config.collection.road_search_radius_m;
        if !road_search_radius_m.is_finite() || road_search_radius_m <= 0.0 {
            return Err(Error::InvalidRadius(format!(
                "Road search radius must be positive, got {} m",
                road_search_radius_m
            )));
        }

        Ok(Self {
            origin,
            radius_km,
            target_count: config.collection.target_count,
            road_search_radius_m,
            resolve_addresses: config.collection.resolve_addresses,
            max_attempts: match config.collection.max_attempts {
                0 => None,
                n => Some(n),
            },
            pause: Duration::from_millis(config.services.pause_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_config() {
        let settings = CollectionSettings::from_config(&Config::default()).unwrap();

        assert_eq!(settings.origin, Coordinates::new(-20.2235779, -40.2640909));
        assert_eq!(settings.radius_km, 5.0);
        assert_eq!(settings.target_count, 100);
        assert_eq!(settings.road_search_radius_m, 200.0);
        assert!(settings.resolve_addresses);
        assert_eq!(settings.max_attempts, None);
        assert_eq!(settings.pause, Duration::from_secs(1));
    }

    #[test]
    fn test_max_attempts() {
        let mut config = Config::default();
        config.collection.max_attempts = 25;
        let settings = CollectionSettings::from_config(&config).unwrap();
        assert_eq!(settings.max_attempts, Some(25));
    }

    #[test]
    fn test_invalid_origin() {
        let mut config = Config::default();
        config.origin.lat = 120.0;
        assert!(matches!(
            CollectionSettings::from_config(&config),
            Err(Error::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn test_invalid_radii() {
        let mut config = Config::default();
        config.origin.radius_km = 0.0;
        assert!(matches!(
            CollectionSettings::from_config(&config),
            Err(Error::InvalidRadius(_))
        ));

        let mut config = Config::default();
        config.collection.road_search_radius_m = f64::NAN;
        assert!(matches!(
            CollectionSettings::from_config(&config),
            Err(Error::InvalidRadius(_))
        ));
    }
}
