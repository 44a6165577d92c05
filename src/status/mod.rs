//! Status effects: named, stacking modifiers on a combatant.
//!
//! Statuses are keyed by an open string name so content can introduce new
//! ones without touching the engine. The names the combat rules themselves
//! read live in [`names`].
//!
//! ## Key Types
//!
//! - `StatusEffect`: one named modifier with an amount and a duration
//! - `StatusCategory`: informational buff/debuff/neutral tag
//! - `StatusManager`: per-combatant map with stack/tick/expire semantics

pub mod effect;
pub mod manager;

pub use effect::{names, StatusCategory, StatusEffect, INDEFINITE};
pub use manager::StatusManager;
