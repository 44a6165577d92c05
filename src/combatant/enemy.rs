//! Enemies and their intents.
//!
//! An enemy declares an `Intent` at the start of its turn and executes it
//! against the player. Choosing the intent is the job of an
//! `IntentPolicy` in the combat module.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Combatant, Vitals};
use crate::effects::{AppliedEffect, EffectList};
use crate::status::names;

/// What an enemy plans to do this turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Deal damage to the player, after the enemy's own modifiers.
    Attack { damage: i32 },
    /// Gain block.
    Defend { block: i32 },
    /// Gain Strength.
    Buff { strength: i32 },
    /// Apply Vulnerable to the player.
    Debuff { vulnerable: i32 },
}

impl Intent {
    /// Short kind name.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Intent::Attack { .. } => "attack",
            Intent::Defend { .. } => "defend",
            Intent::Buff { .. } => "buff",
            Intent::Debuff { .. } => "debuff",
        }
    }

    /// Human-readable description shown to the player.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Intent::Attack { damage } => format!("Attacking (will deal {damage} damage)"),
            Intent::Defend { block } => format!("Preparing to defend (will gain {block} block)"),
            Intent::Buff { strength } => {
                format!("Gathering strength (will gain {strength} Strength)")
            }
            Intent::Debuff { vulnerable } => {
                format!("Hexing (will apply {vulnerable} Vulnerable)")
            }
        }
    }
}

impl Default for Intent {
    fn default() -> Self {
        Intent::Attack { damage: 0 }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// An enemy combatant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    vitals: Vitals,
    intent: Intent,
    intent_description: String,
}

impl Enemy {
    /// Create an enemy with an initial intent and no description.
    #[must_use]
    pub fn new(name: impl Into<String>, max_hp: i32, intent: Intent) -> Self {
        Self {
            vitals: Vitals::new(name, max_hp),
            intent,
            intent_description: String::new(),
        }
    }

    #[must_use]
    pub fn intent(&self) -> &Intent {
        &self.intent
    }

    /// Description of the declared intent. Empty until one is declared.
    #[must_use]
    pub fn intent_description(&self) -> &str {
        &self.intent_description
    }

    /// Set the intent with an explicit description.
    pub fn set_intent(&mut self, intent: Intent, description: impl Into<String>) {
        self.intent = intent;
        self.intent_description = description.into();
    }

    /// Set the intent with its standard description.
    pub fn declare(&mut self, intent: Intent) {
        let description = intent.describe();
        self.set_intent(intent, description);
    }

    /// Carry out the current intent against `target`.
    pub fn execute_intent(&mut self, target: &mut dyn Combatant) -> EffectList {
        let mut effects = EffectList::new();

        match self.intent {
            Intent::Attack { damage } => {
                let outgoing = self.apply_damage_modifier(damage);
                let amount = target.take_damage(outgoing, false);
                self.vitals.damage_dealt_this_turn = self.vitals.damage_dealt_this_turn.saturating_add(outgoing);
                effects.push(AppliedEffect::Damage { target: target.name().to_string(), amount });
            }
            Intent::Defend { block } => {
                self.gain_block(block);
                effects.push(AppliedEffect::Block {
                    target: self.vitals.name.clone(),
                    amount: block,
                    total: self.vitals.block(),
                });
            }
            Intent::Buff { strength } => {
                self.vitals.statuses.add(names::STRENGTH, strength);
                effects.push(AppliedEffect::Status {
                    target: self.vitals.name.clone(),
                    status: names::STRENGTH.to_string(),
                    amount: strength,
                });
            }
            Intent::Debuff { vulnerable } => {
                target.statuses_mut().add(names::VULNERABLE, vulnerable);
                effects.push(AppliedEffect::Status {
                    target: target.name().to_string(),
                    status: names::VULNERABLE.to_string(),
                    amount: vulnerable,
                });
            }
        }

        effects
    }
}

impl Combatant for Enemy {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Enemy {
        Enemy::new("Target", 50, Intent::default())
    }

    #[test]
    fn test_new_has_empty_description() {
        let enemy = Enemy::new("Cultist", 48, Intent::Attack { damage: 6 });
        assert_eq!(enemy.intent_description(), "");
        assert_eq!(enemy.intent().kind(), "attack");
        assert_eq!(enemy.vitals().current_hp(), 48);
    }

    #[test]
    fn test_declare_uses_standard_description() {
        let mut enemy = target();
        enemy.declare(Intent::Defend { block: 8 });
        assert_eq!(enemy.intent_description(), "Preparing to defend (will gain 8 block)");
    }

    #[test]
    fn test_attack_uses_strength_and_target_block() {
        let mut enemy = Enemy::new("Cultist", 48, Intent::Attack { damage: 6 });
        enemy.statuses_mut().add(names::STRENGTH, 3);
        let mut victim = target();
        victim.vitals_mut().set_block(4);

        let effects = enemy.execute_intent(&mut victim);

        assert_eq!(victim.vitals().current_hp(), 45);
        assert_eq!(effects[0], AppliedEffect::Damage { target: "Target".into(), amount: 5 });
        assert_eq!(enemy.vitals().damage_dealt_this_turn, 9);
    }

    #[test]
    fn test_defend_gains_block() {
        let mut enemy = Enemy::new("Jaw Worm", 40, Intent::Defend { block: 8 });
        let mut victim = target();

        enemy.execute_intent(&mut victim);

        assert_eq!(enemy.vitals().block(), 8);
        assert_eq!(victim.vitals().current_hp(), 50);
    }

    #[test]
    fn test_buff_and_debuff() {
        let mut enemy = Enemy::new("Cultist", 48, Intent::Buff { strength: 2 });
        let mut victim = target();

        enemy.execute_intent(&mut victim);
        assert_eq!(enemy.statuses().amount_of(names::STRENGTH), 2);

        enemy.declare(Intent::Debuff { vulnerable: 1 });
        let effects = enemy.execute_intent(&mut victim);
        assert_eq!(victim.statuses().amount_of(names::VULNERABLE), 1);
        assert_eq!(effects[0].target(), "Target");
    }

    #[test]
    fn test_intent_serde_shape() {
        let json = serde_json::to_string(&Intent::Attack { damage: 7 }).unwrap();
        assert_eq!(json, r#"{"Attack":{"damage":7}}"#);
    }
}
