//! Encounter generation by floor tier.

mod generator;

pub use generator::{EncounterGenerator, EncounterTier};
