//! Health, block, energy, and statuses shared by every combatant.
//!
//! ## Damage pipeline (`take_damage`)
//!
//! 1. Block-ignoring damage (poison, burn) goes straight to HP.
//! 2. Otherwise Vulnerable multiplies the amount by 1.5, then block absorbs
//!    what it can.
//! 3. HP drops by the rest, floored at 0.
//!
//! ## Block pipeline (`gain_block`)
//!
//! Frail multiplies the base gain by 0.75 first, then Dexterity is added.
//!
//! All multipliers truncate toward zero. Results saturate at the `i32`
//! bounds instead of wrapping.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::status::{names, StatusManager};

/// Default energy cap for a fresh combatant.
pub const DEFAULT_MAX_ENERGY: i32 = 3;

/// Strength gained per end of turn while Demon Form is held.
pub const DEMON_FORM_STRENGTH: i32 = 2;

/// `amount * num / den`, truncated toward zero and clamped to `i32`.
fn scale(amount: i32, num: i64, den: i64) -> i32 {
    let scaled = i64::from(amount) * num / den;
    scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Shared combat state of a player or enemy.
///
/// Invariants: `0 <= current_hp <= max_hp` and `block >= 0`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    /// Display name.
    pub name: String,

    max_hp: i32,
    current_hp: i32,
    block: i32,

    /// Energy available to spend.
    pub energy: i32,

    /// Energy restored at the start of each player turn.
    pub max_energy: i32,

    /// Active status effects.
    pub statuses: StatusManager,

    /// Modified damage this combatant dealt during the current turn.
    pub damage_dealt_this_turn: i32,
}

impl Vitals {
    /// Full health, no block, no energy.
    #[must_use]
    pub fn new(name: impl Into<String>, max_hp: i32) -> Self {
        let max_hp = max_hp.max(0);
        Self {
            name: name.into(),
            max_hp,
            current_hp: max_hp,
            block: 0,
            energy: 0,
            max_energy: DEFAULT_MAX_ENERGY,
            statuses: StatusManager::new(),
            damage_dealt_this_turn: 0,
        }
    }

    #[must_use]
    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    #[must_use]
    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    #[must_use]
    pub fn block(&self) -> i32 {
        self.block
    }

    /// Set current HP, clamped to `0..=max_hp`.
    pub fn set_current_hp(&mut self, hp: i32) {
        self.current_hp = hp.clamp(0, self.max_hp);
    }

    /// Set block, floored at 0.
    pub fn set_block(&mut self, block: i32) {
        self.block = block.max(0);
    }

    /// Apply incoming damage. Returns the damage that got through.
    ///
    /// Negative amounts are treated as zero.
    pub fn take_damage(&mut self, amount: i32, ignore_block: bool) -> i32 {
        let mut amount = amount.max(0);

        let actual = if ignore_block {
            amount
        } else {
            if self.statuses.amount_of(names::VULNERABLE) > 0 {
                amount = scale(amount, 3, 2);
            }
            if self.block >= amount {
                self.block -= amount;
                0
            } else {
                let through = amount - self.block;
                self.block = 0;
                through
            }
        };

        self.current_hp = (self.current_hp - actual).max(0);
        trace!(name = %self.name, actual, hp = self.current_hp, "damage taken");
        actual
    }

    /// Gain block after Frail and Dexterity. Returns the block actually added.
    pub fn gain_block(&mut self, amount: i32) -> i32 {
        let mut amount = amount;
        if self.statuses.amount_of(names::FRAIL) > 0 {
            amount = scale(amount, 3, 4);
        }
        amount = amount.saturating_add(self.statuses.amount_of(names::DEXTERITY));

        let before = self.block;
        self.block = self.block.saturating_add(amount).max(0);
        self.block - before
    }

    /// Outgoing damage after Strength and Weak, floored at 0.
    #[must_use]
    pub fn apply_damage_modifier(&self, base_damage: i32) -> i32 {
        let mut damage = base_damage.saturating_add(self.statuses.amount_of(names::STRENGTH));
        if self.statuses.amount_of(names::WEAK) > 0 {
            damage = scale(damage, 3, 4);
        }
        damage.max(0)
    }

    /// Restore HP up to the maximum.
    pub fn heal(&mut self, amount: i32) {
        self.current_hp = self.current_hp.saturating_add(amount.max(0)).min(self.max_hp);
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Current HP as a fraction of max HP; 0 when max HP is 0.
    #[must_use]
    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp > 0 {
            f64::from(self.current_hp) / f64::from(self.max_hp)
        } else {
            0.0
        }
    }

    /// Start-of-turn hook: reset the damage counter and tick poison.
    pub fn begin_turn(&mut self) {
        self.damage_dealt_this_turn = 0;

        let poison = self.statuses.amount_of(names::POISON);
        if poison > 0 {
            self.take_damage(poison, true);
            self.statuses.add(names::POISON, -1);
        }
    }

    /// End-of-turn hook.
    ///
    /// Burn, Metallicize, and Demon Form resolve in that order, then timed
    /// statuses tick, then block is cleared unless Barricade is held.
    pub fn finish_turn(&mut self) {
        let burn = self.statuses.amount_of(names::BURN);
        if burn > 0 {
            self.take_damage(burn, true);
            self.statuses.add(names::BURN, -1);
        }

        let metallicize = self.statuses.amount_of(names::METALLICIZE);
        if metallicize > 0 {
            self.gain_block(metallicize);
        }

        // Fixed gain; stacks of Demon Form do not scale it.
        if self.statuses.amount_of(names::DEMON_FORM) > 0 {
            self.statuses.add(names::STRENGTH, DEMON_FORM_STRENGTH);
        }

        self.statuses.tick_all();

        if !self.statuses.has(names::BARRICADE) {
            self.block = 0;
        }
    }
}
