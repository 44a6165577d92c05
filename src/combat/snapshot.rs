//! Read-only combat snapshots for hosts.
//!
//! A `CombatSnapshot` is the field contract presentation layers rely on.
//! It encodes to JSON for UIs and to bincode for compact state dumps.
//!
//! ## Usage
//!
//! ```
//! use rust_spire::combat::{Combat, CombatSnapshot};
//! use rust_spire::combatant::{Enemy, Intent, Player};
//!
//! let combat = Combat::new(Player::default(), vec![Enemy::new("Cultist", 48, Intent::default())]);
//! let json = combat.snapshot().to_json().unwrap();
//!
//! let back = CombatSnapshot::from_json(&json).unwrap();
//! assert_eq!(back.enemies[0].name, "Cultist");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::state::CombatState;
use crate::cards::CardRecord;
use crate::combatant::{Combatant, Enemy, Intent, Player, Vitals};
use crate::core::RecordError;
use crate::status::{StatusCategory, StatusEffect};

/// One status as seen from outside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub amount: i32,
    /// -1 for indefinite.
    pub duration: i32,
    pub category: StatusCategory,
}

impl From<&StatusEffect> for StatusRecord {
    fn from(effect: &StatusEffect) -> Self {
        Self {
            amount: effect.amount,
            duration: effect.duration,
            category: effect.category,
        }
    }
}

/// A player or enemy as seen from outside.
///
/// Enemy records also carry the declared intent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub max_hp: i32,
    pub current_hp: i32,
    pub block: i32,
    pub energy: i32,
    pub max_energy: i32,
    pub alive: bool,
    pub statuses: BTreeMap<String, StatusRecord>,
    #[serde(default)]
    pub intent: Option<Intent>,
    #[serde(default)]
    pub intent_description: Option<String>,
}

impl From<&Vitals> for CharacterRecord {
    fn from(vitals: &Vitals) -> Self {
        Self {
            name: vitals.name.clone(),
            max_hp: vitals.max_hp(),
            current_hp: vitals.current_hp(),
            block: vitals.block(),
            energy: vitals.energy,
            max_energy: vitals.max_energy,
            alive: vitals.is_alive(),
            statuses: vitals
                .statuses
                .iter()
                .map(|effect| (effect.name.clone(), StatusRecord::from(effect)))
                .collect(),
            intent: None,
            intent_description: None,
        }
    }
}

impl From<&Player> for CharacterRecord {
    fn from(player: &Player) -> Self {
        Self::from(player.vitals())
    }
}

impl From<&Enemy> for CharacterRecord {
    fn from(enemy: &Enemy) -> Self {
        Self {
            intent: Some(enemy.intent().clone()),
            intent_description: Some(enemy.intent_description().to_string()),
            ..Self::from(enemy.vitals())
        }
    }
}

/// Everything a host needs to render a combat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatSnapshot {
    pub state: CombatState,
    pub turn_number: u32,
    pub player: CharacterRecord,
    pub enemies: Vec<CharacterRecord>,
    pub hand: Vec<CardRecord>,
    /// Most recent log lines, oldest first.
    pub log: Vec<String>,
}

impl CombatSnapshot {
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compact binary dump.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
