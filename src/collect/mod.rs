//! Record collection loop
//!
//! Samples candidate points around the origin, snaps each to a road, optionally
//! resolves a postal address, and appends a named record until the target
//! count is reached:
//!
//! ```text
//! Sampling -> Snapping --none--> Sampling
//!                |
//!                +--road--> Resolving (if enabled) -> Recording -> Sampling | Done
//! ```
//!
//! Every step is awaited before the next, so service calls are strictly
//! sequential.

pub mod progress;
pub mod settings;

pub use progress::{ConsoleProgress, Progress};
pub use settings::CollectionSettings;

use crate::constants::record::ADDRESS_PLACEHOLDER;
use crate::coord::sampler::{haversine_distance, sample};
use crate::coord::Coordinates;
use crate::error::Result;
use crate::geo::{AddressResolver, Resolution, RoadSnapper};
use crate::names::NameGenerator;
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// A collected record
///
/// Serialized field names match the spreadsheet headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// 1-based sequence number, in insertion order
    #[serde(rename = "Número")]
    pub number: usize,
    #[serde(rename = "Nome")]
    pub name: String,
    /// Snapped latitude
    #[serde(rename = "Latitude")]
    pub lat: f64,
    /// Snapped longitude
    #[serde(rename = "Longitude")]
    pub lng: f64,
    /// Formatted address, or the placeholder when none was resolved
    #[serde(rename = "Endereço")]
    pub address: String,
}

impl Record {
    /// The snapped coordinate of this record
    pub fn coords(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The target count was reached
    Complete,
    /// The attempt cap was reached first
    Exhausted,
}

/// Result of a collection run
#[derive(Debug, Clone)]
pub struct CollectionOutcome {
    pub records: Vec<Record>,
    /// Number of candidate points sampled
    pub attempts: u64,
    pub termination: Termination,
}

/// Drives the sample/snap/resolve/record loop
pub struct Collector<'a, S, A> {
    settings: &'a CollectionSettings,
    snapper: &'a S,
    resolver: &'a A,
    names: &'a dyn NameGenerator,
    rng: &'a dyn RandomSource,
}

impl<'a, S: RoadSnapper, A: AddressResolver> Collector<'a, S, A> {
    pub fn new(
        settings: &'a CollectionSettings,
        snapper: &'a S,
        resolver: &'a A,
        names: &'a dyn NameGenerator,
        rng: &'a dyn RandomSource,
    ) -> Self {
        Self {
            settings,
            snapper,
            resolver,
            names,
            rng,
        }
    }

    /// Run until `target_count` records exist or the attempt cap is hit
    ///
    /// Snap failures are retried with a fresh candidate. A resolver error
    /// other than a timeout aborts the run.
    pub async fn run(&self, progress: &dyn Progress) -> Result<CollectionOutcome> {
        let settings = self.settings;
        let mut records: Vec<Record> = Vec::with_capacity(settings.target_count);
        let mut attempts: u64 = 0;

        info!(
            origin = %settings.origin,
            radius_km = settings.radius_km,
            target = settings.target_count,
            "Collecting road-snapped addresses"
        );

        while records.len() < settings.target_count {
            if settings.max_attempts.is_some_and(|max| attempts >= max) {
                warn!(
                    attempts,
                    collected = records.len(),
                    "Attempt limit reached before target count"
                );
                return Ok(CollectionOutcome {
                    records,
                    attempts,
                    termination: Termination::Exhausted,
                });
            }

            let candidate = sample(settings.origin, settings.radius_km, self.rng);
            attempts += 1;

            let Some(snapped) = self
                .snapper
                .snap(candidate, settings.road_search_radius_m)
                .await
            else {
                progress.on_discard(attempts, candidate);
                continue;
            };

            debug!(
                %candidate,
                %snapped,
                offset_m = haversine_distance(candidate, snapped),
                "Snapped to road"
            );

            let address = if settings.resolve_addresses {
                self.resolve_address(snapped).await?
            } else {
                None
            };

            let record = Record {
                number: records.len() + 1,
                name: self.names.full_name(self.rng),
                lat: snapped.lat,
                lng: snapped.lng,
                address: address.unwrap_or_else(|| ADDRESS_PLACEHOLDER.to_string()),
            };
            progress.on_record(attempts, &record);
            records.push(record);
        }

        info!(attempts, collected = records.len(), "Collection complete");

        Ok(CollectionOutcome {
            records,
            attempts,
            termination: Termination::Complete,
        })
    }

    /// Look up an address, pausing afterwards to respect the service's rate limit
    async fn resolve_address(&self, coords: Coordinates) -> Result<Option<String>> {
        let resolution = self.resolver.resolve(coords).await?;

        if resolution == Resolution::Timeout {
            warn!(%coords, "Address lookup timed out");
            tokio::time::sleep(self.settings.pause).await;
        }
        tokio::time::sleep(self.settings.pause).await;

        Ok(match resolution {
            Resolution::Found(address) => Some(address),
            Resolution::NotFound | Resolution::Timeout => None,
        })
    }
}
