//! Synthetic person names
//!
//! Names come from the `fake` crate's pt-BR locale, drawn through the run's
//! random source so seeded runs produce the same names.

use crate::rng::RandomSource;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::PT_BR;
use fake::Fake;
use rand::RngCore;

/// Trait for synthetic name sources
pub trait NameGenerator: Send + Sync {
    /// Produce a full name ("First Last")
    fn full_name(&self, rng: &dyn RandomSource) -> String;
}

/// Brazilian Portuguese names
#[derive(Debug, Default, Clone, Copy)]
pub struct BrazilianNames;

impl NameGenerator for BrazilianNames {
    fn full_name(&self, rng: &dyn RandomSource) -> String {
        let mut name = String::new();
        rng.with_rng(&mut |mut r: &mut dyn RngCore| {
            let first: String = FirstName(PT_BR).fake_with_rng(&mut r);
            let last: String = LastName(PT_BR).fake_with_rng(&mut r);
            name = format!("{} {}", first, last);
        });
        name
    }
}
