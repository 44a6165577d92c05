//! Reports of effects that actually happened.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::core::entity::CardInstanceId;

/// One applied effect, with the numbers that actually landed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppliedEffect {
    /// Damage that got through block.
    Damage { target: String, amount: i32 },
    /// Block gained, and the resulting total.
    Block { target: String, amount: i32, total: i32 },
    Energy { target: String, amount: i32 },
    /// Names of the cards drawn.
    Draw { target: String, cards: Vec<String> },
    /// Status stacks added.
    Status { target: String, status: String, amount: i32 },
}

impl AppliedEffect {
    /// Name of the combatant the effect landed on.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            AppliedEffect::Damage { target, .. }
            | AppliedEffect::Block { target, .. }
            | AppliedEffect::Energy { target, .. }
            | AppliedEffect::Draw { target, .. }
            | AppliedEffect::Status { target, .. } => target,
        }
    }
}

impl fmt::Display for AppliedEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppliedEffect::Damage { target, amount } => {
                write!(f, "{target} takes {amount} damage")
            }
            AppliedEffect::Block { target, amount, total } => {
                write!(f, "{target} gains {amount} block (total: {total})")
            }
            AppliedEffect::Energy { target, amount } => {
                write!(f, "{target} gains {amount} energy")
            }
            AppliedEffect::Draw { target, cards } => {
                write!(f, "{target} draws {} card(s)", cards.len())
            }
            AppliedEffect::Status { target, status, amount } => {
                write!(f, "{target} gains {amount} {status}")
            }
        }
    }
}

/// Effects from a single action. Most actions produce one or two.
pub type EffectList = SmallVec<[AppliedEffect; 4]>;

/// Result of a successful card play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// Name of the card played.
    pub card: String,

    /// Instance that moved to the discard pile.
    pub instance: CardInstanceId,

    /// Energy spent.
    pub cost: i32,

    pub effects: EffectList,
}

impl PlayOutcome {
    /// Total damage that got through to targets.
    #[must_use]
    pub fn damage_dealt(&self) -> i32 {
        self.effects
            .iter()
            .map(|effect| match effect {
                AppliedEffect::Damage { amount, .. } => *amount,
                _ => 0,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_display() {
        let effect = AppliedEffect::Block { target: "Player".into(), amount: 5, total: 8 };
        assert_eq!(effect.to_string(), "Player gains 5 block (total: 8)");

        let effect = AppliedEffect::Draw { target: "Player".into(), cards: vec!["Strike".into()] };
        assert_eq!(effect.to_string(), "Player draws 1 card(s)");
        assert_eq!(effect.target(), "Player");
    }

    #[test]
    fn test_damage_dealt_sums_damage_only() {
        let outcome = PlayOutcome {
            card: "Bash".into(),
            instance: CardInstanceId::new(1),
            cost: 2,
            effects: smallvec![
                AppliedEffect::Damage { target: "Cultist".into(), amount: 8 },
                AppliedEffect::Status { target: "Cultist".into(), status: "vulnerable".into(), amount: 2 },
            ],
        };
        assert_eq!(outcome.damage_dealt(), 8);
    }
}
