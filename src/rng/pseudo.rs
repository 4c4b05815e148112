//! Pseudo-random sources
//!
//! `PseudoSource` uses the `rand` crate's thread-local RNG for normal runs.
//! `SeededPseudoSource` is deterministic and used for reproducible runs
//! (`--seed`) and tests.

use crate::rng::RandomSource;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::Mutex;

/// Pseudo-random source backed by rand's ThreadRng
#[derive(Debug, Default)]
pub struct PseudoSource;

impl PseudoSource {
    /// Create a new pseudo-random source
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for PseudoSource {
    fn name(&self) -> &'static str {
        "pseudo"
    }

    fn next_f64(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn with_rng(&self, f: &mut dyn FnMut(&mut dyn RngCore)) {
        f(&mut rand::thread_rng())
    }
}

/// Seeded pseudo-random source for deterministic output
pub struct SeededPseudoSource {
    rng: Mutex<rand::rngs::StdRng>,
}

impl SeededPseudoSource {
    /// Create a new seeded source
    ///
    /// Using the same seed will produce the same sequence of random values.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(rand::rngs::StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededPseudoSource {
    fn name(&self) -> &'static str {
        "pseudo-seeded"
    }

    fn next_f64(&self) -> f64 {
        // Poisoning leaves the generator state intact
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen::<f64>()
    }

    fn with_rng(&self, f: &mut dyn FnMut(&mut dyn RngCore)) {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut *rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pseudo_source_in_range() {
        let source = PseudoSource::new();
        for _ in 0..100 {
            let f = source.next_f64();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn test_seeded_source_reproducible() {
        let a = SeededPseudoSource::new(42);
        let b = SeededPseudoSource::new(42);

        let xs: Vec<f64> = (0..50).map(|_| a.next_f64()).collect();
        let ys: Vec<f64> = (0..50).map(|_| b.next_f64()).collect();

        assert_eq!(xs, ys);
    }

    #[test]
    fn test_seeded_sources_differ_by_seed() {
        let a = SeededPseudoSource::new(1);
        let b = SeededPseudoSource::new(2);
        assert_ne!(a.next_f64(), b.next_f64());
    }
}
