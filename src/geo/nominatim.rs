//! Nominatim reverse geocoding backend (OpenStreetMap)
//!
//! Uses the free Nominatim API to turn a coordinate into a postal address.
//! Rate limit: 1 request per second, and a descriptive User-Agent is required.

use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::geo::{states, AddressResolver, Resolution};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Nominatim reverse geocoding backend
#[derive(Debug, Clone)]
pub struct NominatimResolver {
    client: reqwest::Client,
    base_url: String,
}

/// Reverse lookup response
///
/// Points with nothing nearby come back as `{"error": "Unable to geocode"}`.
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: Option<NominatimAddress>,
    #[serde(default)]
    error: Option<String>,
}

/// Structured address as returned with `addressdetails=1`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NominatimAddress {
    pub road: Option<String>,
    pub house_number: Option<String>,
    pub suburb: Option<String>,
    pub neighbourhood: Option<String>,
    pub residential: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
}

/// First field that is present and non-empty
fn first_of<'a>(fields: &[&'a Option<String>]) -> &'a str {
    fields
        .iter()
        .copied()
        .filter_map(Option::as_deref)
        .find(|s| !s.is_empty())
        .unwrap_or("")
}

/// Format an address as
/// `road, number, district, city, UF, postcode, country`
///
/// Missing fields become empty strings but keep their comma, so a missing
/// district yields `"..., 10, , Vitória, ..."`. Separators at either end are
/// trimmed. Returns None when every field is empty.
pub fn format_address(address: &NominatimAddress) -> Option<String> {
    let state = first_of(&[&address.state]);
    let uf = states::abbreviate(state).unwrap_or(state);

    let parts = [
        first_of(&[&address.road]),
        first_of(&[&address.house_number]),
        first_of(&[&address.suburb, &address.neighbourhood, &address.residential]),
        first_of(&[&address.city, &address.town, &address.village]),
        uf,
        first_of(&[&address.postcode]),
        first_of(&[&address.country]),
    ];

    if parts.iter().all(|p| p.is_empty()) {
        return None;
    }

    let joined = parts.join(", ");
    Some(
        joined
            .trim_matches(|c: char| c == ',' || c.is_whitespace())
            .to_string(),
    )
}

impl NominatimResolver {
    /// Create a new Nominatim backend
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g. `https://nominatim.openstreetmap.org`)
    /// * `timeout` - Budget for each request
    /// * `user_agent` - User-Agent header value
    pub fn new(base_url: impl Into<String>, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn reverse_url(&self, coords: Coordinates) -> String {
        format!(
            "{}/reverse?lat={}&lon={}&format=jsonv2&addressdetails=1",
            self.base_url.trim_end_matches('/'),
            coords.lat,
            coords.lng
        )
    }
}

impl AddressResolver for NominatimResolver {
    async fn resolve(&self, coords: Coordinates) -> Result<Resolution> {
        let url = self.reverse_url(coords);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return Ok(Resolution::Timeout),
            Err(e) => {
                return Err(Error::Geocoding(format!("Nominatim request failed: {}", e)));
            }
        };

        if !response.status().is_success() {
            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Ok(Resolution::NotFound);
            }
            return Err(Error::Geocoding(format!(
                "Nominatim returned status: {}",
                response.status()
            )));
        }

        let result: ReverseResponse = match response.json().await {
            Ok(result) => result,
            Err(e) if e.is_timeout() => return Ok(Resolution::Timeout),
            Err(e) => {
                return Err(Error::Geocoding(format!(
                    "Failed to parse Nominatim response: {}",
                    e
                )));
            }
        };

        if let Some(error) = &result.error {
            debug!(%coords, error = %error, "Nominatim has no address");
        }

        Ok(result
            .address
            .as_ref()
            .and_then(format_address)
            .map_or(Resolution::NotFound, Resolution::Found))
    }
}
