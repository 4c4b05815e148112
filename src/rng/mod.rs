//! Random number sources
//!
//! The `RandomSource` trait feeds the point sampler and the name generator.
//! Each source is a single file implementing the trait.

pub mod pseudo;

use rand::RngCore;

/// Trait for uniform random number sources
///
/// Implementations must be thread-safe (Send + Sync) so a single source can be
/// shared between the sampler and the name generator.
pub trait RandomSource: Send + Sync {
    /// Returns the source name (e.g., "pseudo", "pseudo-seeded")
    fn name(&self) -> &'static str;

    /// Generate a single random float uniformly distributed in [0.0, 1.0)
    fn next_f64(&self) -> f64;

    /// Generate a random float uniformly distributed in [low, high)
    fn uniform(&self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    /// Lend the underlying generator to `f`
    ///
    /// Lets crates that take an `Rng` (such as `fake`) draw from the same
    /// stream as the sampler.
    fn with_rng(&self, f: &mut dyn FnMut(&mut dyn RngCore));
}

/// Get a random source, seeded when a seed is given
pub fn get_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(pseudo::SeededPseudoSource::new(seed)),
        None => Box::new(pseudo::PseudoSource::new()),
    }
}
