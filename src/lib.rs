//! roadside: Synthetic Road-Snapped Address Generator
//!
//! A library and CLI tool that produces plausible fake address records: random
//! points around an origin are snapped to real roads (Overpass), optionally
//! reverse geocoded (Nominatim), paired with a generated name and exported to a
//! spreadsheet.
//!
//! ## Features
//!
//! - Random point sampling in a disk around the origin
//! - Road snapping via the Overpass API
//! - Brazilian postal address formatting via Nominatim
//! - XLSX and JSON export
//! - TOML configuration + CLI overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use roadside::coord::{sampler, Coordinates};
//! use roadside::rng::pseudo::SeededPseudoSource;
//!
//! let rng = SeededPseudoSource::new(42);
//! let origin = Coordinates::new(-20.2235779, -40.2640909);
//!
//! // A candidate point at most 5 km from the origin
//! let candidate = sampler::sample(origin, 5.0, &rng);
//! println!("Candidate: {}", candidate);
//! ```

pub mod cli;
pub mod collect;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod export;
pub mod geo;
pub mod names;
pub mod rng;

// Re-export commonly used types
pub use collect::{CollectionOutcome, CollectionSettings, Collector, Record, Termination};
pub use config::Config;
pub use coord::Coordinates;
pub use error::{Error, Result};
pub use geo::{AddressResolver, Resolution, RoadSnapper};
