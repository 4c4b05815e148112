//! Map-data and geocoding services
//!
//! Provides road snapping (Overpass) and reverse geocoding (Nominatim). Both
//! are exposed as traits so the collection loop can run against mocks.

pub mod nominatim;
pub mod overpass;
pub mod states;

use crate::coord::Coordinates;
use crate::error::Result;

/// Outcome of a reverse-geocoding lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A formatted postal address
    Found(String),
    /// The service answered but had no usable address
    NotFound,
    /// The service did not answer in time
    Timeout,
}

impl Resolution {
    /// The address, if one was found
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Found(address) => Some(address),
            Self::NotFound | Self::Timeout => None,
        }
    }
}

/// Trait for road snapping backends
pub trait RoadSnapper: Send + Sync {
    /// Find a coordinate on a road within `search_radius_m` meters of `point`
    ///
    /// Returns None when no road is found. Service failures are logged and
    /// also reported as None.
    fn snap(
        &self,
        point: Coordinates,
        search_radius_m: f64,
    ) -> impl std::future::Future<Output = Option<Coordinates>> + Send;
}

/// Trait for reverse geocoding backends
pub trait AddressResolver: Send + Sync {
    /// Resolve coordinates to a formatted postal address
    ///
    /// Timeouts are reported as `Resolution::Timeout`; any other service
    /// failure is an error.
    fn resolve(
        &self,
        coords: Coordinates,
    ) -> impl std::future::Future<Output = Result<Resolution>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_address() {
        let found = Resolution::Found("Rua X, 10".to_string());
        assert_eq!(found.address(), Some("Rua X, 10"));
        assert_eq!(Resolution::NotFound.address(), None);
        assert_eq!(Resolution::Timeout.address(), None);
    }
}
