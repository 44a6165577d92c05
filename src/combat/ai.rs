//! Enemy intent selection.
//!
//! Combat asks its `IntentPolicy` for each living enemy's intent at the
//! start of that enemy's turn.

use crate::combatant::{Combatant, Enemy, Intent};

/// Chooses what an enemy does on a given turn.
pub trait IntentPolicy {
    fn choose_intent(&self, enemy: &Enemy, turn_number: u32) -> Intent;
}

/// The default turn-driven pattern.
///
/// - Defend for `8 + turn / 3` on turns divisible by 3 while under half HP
/// - Buff 2 Strength on turns divisible by 4
/// - Otherwise attack for `6 + turn / 2`
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptedAi;

impl IntentPolicy for ScriptedAi {
    fn choose_intent(&self, enemy: &Enemy, turn_number: u32) -> Intent {
        let turn = i32::try_from(turn_number).unwrap_or(i32::MAX);

        if turn_number % 3 == 0 && enemy.hp_fraction() < 0.5 {
            Intent::Defend { block: 8 + turn / 3 }
        } else if turn_number % 4 == 0 {
            Intent::Buff { strength: 2 }
        } else {
            Intent::Attack { damage: 6 + turn / 2 }
        }
    }
}

/// Cycles through a fixed list of intents, one per turn.
///
/// An empty pattern falls back to `ScriptedAi`.
#[derive(Clone, Debug, Default)]
pub struct PatternAi {
    pattern: Vec<Intent>,
}

impl PatternAi {
    #[must_use]
    pub fn new(pattern: Vec<Intent>) -> Self {
        Self { pattern }
    }
}

impl IntentPolicy for PatternAi {
    fn choose_intent(&self, enemy: &Enemy, turn_number: u32) -> Intent {
        if self.pattern.is_empty() {
            return ScriptedAi.choose_intent(enemy, turn_number);
        }
        let index = (turn_number.saturating_sub(1) as usize) % self.pattern.len();
        self.pattern[index].clone()
    }
}
