//! Combatants: the player and enemies.
//!
//! Every combatant owns a `Vitals` block and gets the shared damage, block,
//! and turn-hook behavior through the `Combatant` trait's default methods.
//! Types override the turn hooks to add their own steps around the shared
//! ones (the player refills energy and draws, for instance).
//!
//! ## Key Types
//!
//! - `Vitals`: HP, block, energy, statuses
//! - `Combatant`: shared behavior over `Vitals`
//! - `Player`: owns a deck and plays cards
//! - `Enemy`: declares and executes an `Intent`

pub mod enemy;
pub mod player;
pub mod vitals;

pub use enemy::{Enemy, Intent};
pub use player::Player;
pub use vitals::{Vitals, DEFAULT_MAX_ENERGY, DEMON_FORM_STRENGTH};

use crate::status::StatusManager;

/// Shared combatant behavior.
///
/// Implementors only provide access to their `Vitals`.
pub trait Combatant {
    fn vitals(&self) -> &Vitals;

    fn vitals_mut(&mut self) -> &mut Vitals;

    fn name(&self) -> &str {
        &self.vitals().name
    }

    fn statuses(&self) -> &StatusManager {
        &self.vitals().statuses
    }

    fn statuses_mut(&mut self) -> &mut StatusManager {
        &mut self.vitals_mut().statuses
    }

    /// Apply incoming damage. Returns the damage that got through block.
    fn take_damage(&mut self, amount: i32, ignore_block: bool) -> i32 {
        self.vitals_mut().take_damage(amount, ignore_block)
    }

    /// Gain block after Frail and Dexterity.
    fn gain_block(&mut self, amount: i32) -> i32 {
        self.vitals_mut().gain_block(amount)
    }

    /// Outgoing damage after Strength and Weak.
    fn apply_damage_modifier(&self, base_damage: i32) -> i32 {
        self.vitals().apply_damage_modifier(base_damage)
    }

    fn heal(&mut self, amount: i32) {
        self.vitals_mut().heal(amount);
    }

    fn is_alive(&self) -> bool {
        self.vitals().is_alive()
    }

    fn hp_fraction(&self) -> f64 {
        self.vitals().hp_fraction()
    }

    fn start_turn(&mut self) {
        self.vitals_mut().begin_turn();
    }

    fn end_turn(&mut self) {
        self.vitals_mut().finish_turn();
    }
}
