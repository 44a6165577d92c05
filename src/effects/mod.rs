//! Card effects.
//!
//! - `CardResolver`: applies a played card's damage, block, energy, draw,
//!   and status grants, in that order
//! - `AppliedEffect`: report of one effect with the numbers that landed
//! - `PlayOutcome`: everything a single card play did
//!
//! Reports are plain data. The combat log and host bindings render them.

mod effect;
mod resolver;

pub use effect::{AppliedEffect, EffectList, PlayOutcome};
pub use resolver::CardResolver;
