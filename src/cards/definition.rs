//! Card data.
//!
//! A `Card` is a plain value: base numbers, status grants, and upgrade
//! deltas. The only thing that ever changes after construction is the
//! one-way `upgraded` flag; effective numbers are computed on read.
//!
//! `CardRecord` is the flat display/wire form. It carries effective numbers
//! only, so a card rebuilt from a record keeps its numbers but loses the
//! split between base value and upgrade delta.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::core::RecordError;

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum CardType {
    Attack,
    Skill,
    Power,
}

impl CardType {
    /// Wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CardType::Attack => "attack",
            CardType::Skill => "skill",
            CardType::Power => "power",
        }
    }

    /// Whether playing this card aims its effects at an enemy.
    ///
    /// Powers resolve against the player, so their status grants land on
    /// the player even when the play names an enemy.
    #[must_use]
    pub fn targets_enemy(self) -> bool {
        !matches!(self, CardType::Power)
    }
}

impl FromStr for CardType {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "attack" => Ok(CardType::Attack),
            "skill" => Ok(CardType::Skill),
            "power" => Ok(CardType::Power),
            _ => Err(RecordError::UnknownCardType(s.to_string())),
        }
    }
}

impl TryFrom<String> for CardType {
    type Error = RecordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CardType> for &'static str {
    fn from(value: CardType) -> Self {
        value.as_str()
    }
}

/// How rare a card is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
}

impl Rarity {
    /// Wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
        }
    }
}

impl FromStr for Rarity {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "common" => Ok(Rarity::Common),
            "uncommon" => Ok(Rarity::Uncommon),
            "rare" => Ok(Rarity::Rare),
            _ => Err(RecordError::UnknownRarity(s.to_string())),
        }
    }
}

impl TryFrom<String> for Rarity {
    type Error = RecordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rarity> for &'static str {
    fn from(value: Rarity) -> Self {
        value.as_str()
    }
}

/// Numbers added (or, for cost, subtracted) once a card is upgraded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpgradeDeltas {
    pub cost_reduction: i32,
    pub damage: i32,
    pub block: i32,
}

/// Immutable card data plus the upgrade flag.
///
/// ## Example
///
/// ```
/// use rust_spire::cards::{Card, CardType};
///
/// let mut strike = Card::new("Strike", CardType::Attack, 1)
///     .with_damage(6)
///     .with_upgrade_damage(3);
///
/// assert_eq!(strike.effective_damage(), 6);
/// strike.upgrade();
/// assert_eq!(strike.effective_damage(), 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    name: String,
    card_type: CardType,
    cost: i32,
    description: String,
    rarity: Rarity,
    damage: i32,
    block: i32,
    energy_gain: i32,
    card_draw: i32,
    status_grants: BTreeMap<String, i32>,
    reactive_damage: i32,
    upgrade: UpgradeDeltas,
    upgraded: bool,
}

impl Card {
    /// Create a card with a name, type, and base cost. Everything else zero.
    #[must_use]
    pub fn new(name: impl Into<String>, card_type: CardType, cost: i32) -> Self {
        Self {
            name: name.into(),
            card_type,
            cost,
            description: String::new(),
            rarity: Rarity::Common,
            damage: 0,
            block: 0,
            energy_gain: 0,
            card_draw: 0,
            status_grants: BTreeMap::new(),
            reactive_damage: 0,
            upgrade: UpgradeDeltas::default(),
            upgraded: false,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = damage;
        self
    }

    #[must_use]
    pub fn with_block(mut self, block: i32) -> Self {
        self.block = block;
        self
    }

    #[must_use]
    pub fn with_energy_gain(mut self, energy: i32) -> Self {
        self.energy_gain = energy;
        self
    }

    #[must_use]
    pub fn with_card_draw(mut self, count: i32) -> Self {
        self.card_draw = count;
        self
    }

    /// Grant `amount` of a status when played.
    #[must_use]
    pub fn with_status(mut self, name: impl Into<String>, amount: i32) -> Self {
        self.status_grants.insert(name.into(), amount);
        self
    }

    /// Damage dealt back when the holder is attacked.
    ///
    /// Carried as data only; no part of the damage pipeline reads it.
    #[must_use]
    pub fn with_reactive_damage(mut self, amount: i32) -> Self {
        self.reactive_damage = amount;
        self
    }

    #[must_use]
    pub fn with_upgrade_damage(mut self, bonus: i32) -> Self {
        self.upgrade.damage = bonus;
        self
    }

    #[must_use]
    pub fn with_upgrade_block(mut self, bonus: i32) -> Self {
        self.upgrade.block = bonus;
        self
    }

    #[must_use]
    pub fn with_upgrade_cost_reduction(mut self, reduction: i32) -> Self {
        self.upgrade.cost_reduction = reduction;
        self
    }

    // === Read-time numbers ===

    /// Cost after upgrade, never below zero.
    #[must_use]
    pub fn effective_cost(&self) -> i32 {
        let reduction = if self.upgraded { self.upgrade.cost_reduction } else { 0 };
        (self.cost - reduction).max(0)
    }

    #[must_use]
    pub fn effective_damage(&self) -> i32 {
        self.damage + if self.upgraded { self.upgrade.damage } else { 0 }
    }

    #[must_use]
    pub fn effective_block(&self) -> i32 {
        self.block + if self.upgraded { self.upgrade.block } else { 0 }
    }

    /// Flip to upgraded. Idempotent.
    pub fn upgrade(&mut self) {
        self.upgraded = true;
    }

    // === Accessors ===

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    #[must_use]
    pub fn base_cost(&self) -> i32 {
        self.cost
    }

    #[must_use]
    pub fn base_damage(&self) -> i32 {
        self.damage
    }

    #[must_use]
    pub fn base_block(&self) -> i32 {
        self.block
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    #[must_use]
    pub fn energy_gain(&self) -> i32 {
        self.energy_gain
    }

    #[must_use]
    pub fn card_draw(&self) -> i32 {
        self.card_draw
    }

    #[must_use]
    pub fn status_grants(&self) -> &BTreeMap<String, i32> {
        &self.status_grants
    }

    #[must_use]
    pub fn reactive_damage(&self) -> i32 {
        self.reactive_damage
    }

    #[must_use]
    pub fn upgrade_deltas(&self) -> UpgradeDeltas {
        self.upgrade
    }

    #[must_use]
    pub fn is_upgraded(&self) -> bool {
        self.upgraded
    }

    // === Records ===

    /// Flatten to the display/wire record.
    #[must_use]
    pub fn to_record(&self) -> CardRecord {
        CardRecord {
            name: self.name.clone(),
            card_type: self.card_type,
            cost: self.effective_cost(),
            description: self.description.clone(),
            rarity: self.rarity,
            damage: self.effective_damage(),
            block: self.effective_block(),
            energy_gain: self.energy_gain,
            card_draw: self.card_draw,
            status_effects: self.status_grants.clone(),
            upgraded: self.upgraded,
        }
    }

    /// Rebuild from a record. Effective numbers become the base numbers.
    #[must_use]
    pub fn from_record(record: CardRecord) -> Self {
        Self {
            name: record.name,
            card_type: record.card_type,
            cost: record.cost,
            description: record.description,
            rarity: record.rarity,
            damage: record.damage,
            block: record.block,
            energy_gain: record.energy_gain,
            card_draw: record.card_draw,
            status_grants: record.status_effects,
            reactive_damage: 0,
            upgrade: UpgradeDeltas::default(),
            upgraded: record.upgraded,
        }
    }
}

/// Flat card snapshot for presentation layers.
///
/// `name` and `card_type` are required when decoding; every gameplay field
/// defaults when missing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    pub card_type: CardType,
    #[serde(default)]
    pub cost: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub damage: i32,
    #[serde(default)]
    pub block: i32,
    #[serde(default)]
    pub energy_gain: i32,
    #[serde(default)]
    pub card_draw: i32,
    #[serde(default)]
    pub status_effects: BTreeMap<String, i32>,
    #[serde(default)]
    pub upgraded: bool,
}

impl CardRecord {
    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode to JSON.
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bash() -> Card {
        Card::new("Bash", CardType::Attack, 2)
            .with_damage(8)
            .with_status("vulnerable", 2)
            .with_upgrade_damage(2)
            .with_description("Deal 8 damage. Apply 2 Vulnerable.")
    }

    #[test]
    fn test_effective_values_not_upgraded() {
        let card = Card::new("Test", CardType::Skill, 2)
            .with_block(5)
            .with_upgrade_block(3)
            .with_upgrade_cost_reduction(1);

        assert_eq!(card.effective_cost(), 2);
        assert_eq!(card.effective_block(), 5);
        assert_eq!(card.effective_damage(), 0);
    }

    #[test]
    fn test_effective_values_upgraded() {
        let mut card = Card::new("Test", CardType::Skill, 2)
            .with_block(5)
            .with_upgrade_block(3)
            .with_upgrade_cost_reduction(1);
        card.upgrade();

        assert_eq!(card.effective_cost(), 1);
        assert_eq!(card.effective_block(), 8);
    }

    #[test]
    fn test_cost_floored_at_zero() {
        let mut card = Card::new("Cheap", CardType::Skill, 1).with_upgrade_cost_reduction(3);
        card.upgrade();
        assert_eq!(card.effective_cost(), 0);
    }

    #[test]
    fn test_upgrade_idempotent() {
        let mut card = bash();
        card.upgrade();
        card.upgrade();
        assert!(card.is_upgraded());
        assert_eq!(card.effective_damage(), 10);
    }

    #[test]
    fn test_targets_enemy() {
        assert!(CardType::Attack.targets_enemy());
        assert!(CardType::Skill.targets_enemy());
        assert!(!CardType::Power.targets_enemy());
    }

    #[test]
    fn test_record_uses_effective_values() {
        let mut card = bash();
        card.upgrade();
        let record = card.to_record();

        assert_eq!(record.damage, 10);
        assert_eq!(record.cost, 2);
        assert!(record.upgraded);
        assert_eq!(record.status_effects.get("vulnerable"), Some(&2));
    }

    #[test]
    fn test_from_record_folds_deltas_into_base() {
        let mut card = bash();
        card.upgrade();
        let rebuilt = Card::from_record(card.to_record());

        assert_eq!(rebuilt.base_damage(), 10);
        assert_eq!(rebuilt.upgrade_deltas(), UpgradeDeltas::default());
        assert!(rebuilt.is_upgraded());
        assert_eq!(rebuilt.effective_damage(), 10);
    }

    #[test]
    fn test_record_json_wire_names() {
        let json = bash().to_record().to_json().unwrap();
        assert!(json.contains("\"card_type\":\"attack\""));
        assert!(json.contains("\"rarity\":\"common\""));
    }

    #[test]
    fn test_record_defaults_optional_fields() {
        let record = CardRecord::from_json(r#"{"name":"Strike","card_type":"attack","damage":6}"#)
            .unwrap();
        assert_eq!(record.description, "");
        assert_eq!(record.rarity, Rarity::Common);
        assert_eq!(record.cost, 0);
        assert_eq!(record.damage, 6);
    }

    #[test]
    fn test_record_requires_identity_fields() {
        assert!(CardRecord::from_json(r#"{"card_type":"attack"}"#).is_err());
        assert!(CardRecord::from_json(r#"{"name":"Strike"}"#).is_err());
    }

    #[test]
    fn test_record_rejects_unknown_enum() {
        let err = CardRecord::from_json(r#"{"name":"Doubt","card_type":"curse"}"#).unwrap_err();
        assert!(matches!(err, RecordError::Json(_)));
        assert!(err.to_string().contains("unknown card type \"curse\""));

        let err = CardRecord::from_json(r#"{"name":"Doubt","card_type":"skill","rarity":"mythic"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("unknown rarity \"mythic\""));
    }

    #[test]
    fn test_record_accepts_any_case() {
        let record = CardRecord::from_json(r#"{"name":"Zap","card_type":"Skill","rarity":"RARE"}"#)
            .unwrap();
        assert_eq!(record.card_type, CardType::Skill);
        assert_eq!(record.rarity, Rarity::Rare);
        assert!(record.to_json().unwrap().contains("\"rarity\":\"rare\""));
    }

    #[test]
    fn test_enum_parse() {
        assert_eq!("Attack".parse::<CardType>().unwrap(), CardType::Attack);
        assert_eq!("rare".parse::<Rarity>().unwrap(), Rarity::Rare);
        assert!(matches!("curse".parse::<CardType>(), Err(RecordError::UnknownCardType(_))));
        assert!(matches!("mythic".parse::<Rarity>(), Err(RecordError::UnknownRarity(_))));
    }
}
