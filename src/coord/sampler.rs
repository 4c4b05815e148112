//! Candidate point sampling
//!
//! Draws random points inside a disk around the origin. The distance from the
//! origin is drawn uniformly in [0, radius], without the sqrt() area
//! correction, so points are denser near the centre than near the edge.

use crate::constants::geo::{EARTH_RADIUS_METERS, KM_PER_DEGREE};
use crate::coord::Coordinates;
use crate::rng::RandomSource;
use std::f64::consts::PI;

/// Sample a random point within `radius_km` of `origin`
///
/// # Algorithm
/// - radius_deg = radius_km / 111
/// - theta = uniform [0, 2*PI), d = uniform [0, radius_deg]
/// - dlat = d * cos(theta)
/// - dlng = d * sin(theta) / cos(origin latitude), correcting for meridian
///   convergence
///
/// Never fails. At exactly +-90 degrees latitude the longitude offset is not
/// meaningful.
pub fn sample(origin: Coordinates, radius_km: f64, rng: &dyn RandomSource) -> Coordinates {
    let radius_deg = radius_km / KM_PER_DEGREE;
    let theta = rng.uniform(0.0, 2.0 * PI);
    let distance = rng.uniform(0.0, radius_deg);

    let delta_lat = distance * theta.cos();
    let delta_lng = distance * theta.sin() / origin.lat.to_radians().cos();

    Coordinates::new(origin.lat + delta_lat, origin.lng + delta_lng)
}

/// Distance between two points in the sampler's degree approximation
///
/// Longitude differences are scaled back by cos(origin latitude), so for any
/// sampled point this is at most radius_km / 111.
pub fn degree_distance(origin: Coordinates, point: Coordinates) -> f64 {
    let dlat = point.lat - origin.lat;
    let dlng = (point.lng - origin.lng) * origin.lat.to_radians().cos();
    (dlat * dlat + dlng * dlng).sqrt()
}

/// Calculate the distance between two points in meters (Haversine formula)
pub fn haversine_distance(p1: Coordinates, p2: Coordinates) -> f64 {
    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();
    let delta_lat = (p2.lat - p1.lat).to_radians();
    let delta_lng = (p2.lng - p1.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}
