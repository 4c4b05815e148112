//! Overpass road snapping backend (OpenStreetMap map data)
//!
//! Asks the Overpass interpreter for `highway` ways around a point and uses
//! the centre of the first matching way as the snapped coordinate.

use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::geo::RoadSnapper;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Overpass road snapping backend
#[derive(Debug, Clone)]
pub struct OverpassSnapper {
    client: reqwest::Client,
    url: String,
}

/// Overpass interpreter response
#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

/// A single way; `center` is present because the query asks for `out center`
#[derive(Debug, Deserialize)]
struct OverpassElement {
    center: Option<OverpassCenter>,
}

#[derive(Debug, Deserialize)]
struct OverpassCenter {
    lat: f64,
    lon: f64,
}

impl OverpassSnapper {
    /// Create a new Overpass backend
    ///
    /// # Arguments
    /// * `url` - Interpreter endpoint (e.g. `https://overpass-api.de/api/interpreter`)
    /// * `timeout` - Budget for each request
    /// * `user_agent` - User-Agent header value
    pub fn new(url: impl Into<String>, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Build the Overpass QL query for roads around a point
    pub fn build_query(point: Coordinates, search_radius_m: f64) -> String {
        format!(
            "[out:json];\nway[\"highway\"](around:{},{},{});\nout center;",
            search_radius_m, point.lat, point.lng
        )
    }

    async fn query(&self, point: Coordinates, search_radius_m: f64) -> Result<OverpassResponse> {
        let query = Self::build_query(point, search_radius_m);

        let response = self
            .client
            .post(&self.url)
            .form(&[("data", query.as_str())])
            .send()
            .await
            .map_err(|e| Error::MapData(format!("Overpass request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::MapData(format!(
                "Overpass returned status: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::MapData(format!("Failed to parse Overpass response: {}", e)))
    }
}

impl RoadSnapper for OverpassSnapper {
    async fn snap(&self, point: Coordinates, search_radius_m: f64) -> Option<Coordinates> {
        match self.query(point, search_radius_m).await {
            Ok(response) => {
                let snapped = response
                    .elements
                    .into_iter()
                    .find_map(|element| element.center)
                    .map(|center| Coordinates::new(center.lat, center.lon));

                if snapped.is_none() {
                    debug!(%point, search_radius_m, "No road near candidate");
                }
                snapped
            }
            Err(e) => {
                warn!(%point, error = %e, "Road lookup failed");
                None
            }
        }
    }
}
