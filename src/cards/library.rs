//! The built-in card library.
//!
//! Every lookup builds a brand-new `Card`, so nothing a deck does to its
//! copy (upgrading, for instance) can leak back into the library.

use super::definition::{Card, CardType, Rarity};
use crate::status::names;

/// Built-in card content.
///
/// ## Example
///
/// ```
/// use rust_spire::cards::CardLibrary;
///
/// let mut bash = CardLibrary::card("bash").unwrap();
/// bash.upgrade();
///
/// assert!(!CardLibrary::card("Bash").unwrap().is_upgraded());
/// ```
pub struct CardLibrary;

impl CardLibrary {
    /// Every card, freshly built.
    #[must_use]
    pub fn all() -> Vec<Card> {
        vec![
            Card::new("Strike", CardType::Attack, 1)
                .with_damage(6)
                .with_description("Deal 6 damage.")
                .with_upgrade_damage(3),
            Card::new("Bash", CardType::Attack, 2)
                .with_damage(8)
                .with_description("Deal 8 damage. Apply 2 Vulnerable.")
                .with_status(names::VULNERABLE, 2)
                .with_upgrade_damage(2),
            Card::new("Cleave", CardType::Attack, 1)
                .with_damage(8)
                .with_description("Deal 8 damage to ALL enemies.")
                .with_upgrade_damage(3),
            Card::new("Heavy Blade", CardType::Attack, 2)
                .with_damage(14)
                .with_description("Deal 14 damage.")
                .with_rarity(Rarity::Uncommon)
                .with_upgrade_damage(4),
            Card::new("Whirlwind", CardType::Attack, 3)
                .with_damage(5)
                .with_description("Deal 5 damage to ALL enemies X times.")
                .with_rarity(Rarity::Uncommon)
                .with_upgrade_damage(2),
            Card::new("Defend", CardType::Skill, 1)
                .with_block(5)
                .with_description("Gain 5 Block.")
                .with_upgrade_block(3),
            Card::new("Shrug It Off", CardType::Skill, 1)
                .with_block(8)
                .with_card_draw(1)
                .with_description("Gain 8 Block. Draw 1 card.")
                .with_upgrade_block(3),
            Card::new("Armaments", CardType::Skill, 1)
                .with_block(5)
                .with_description("Gain 5 Block. Upgrade a card in your hand.")
                .with_rarity(Rarity::Uncommon)
                .with_upgrade_block(2),
            Card::new("Flame Barrier", CardType::Skill, 2)
                .with_block(12)
                .with_reactive_damage(4)
                .with_description("Gain 12 Block. When attacked, deal 4 damage back.")
                .with_rarity(Rarity::Uncommon)
                .with_upgrade_block(4),
            Card::new("Impervious", CardType::Skill, 2)
                .with_block(30)
                .with_description("Gain 30 Block.")
                .with_rarity(Rarity::Rare)
                .with_upgrade_block(10),
            Card::new("Metallicize", CardType::Power, 1)
                .with_status(names::METALLICIZE, 3)
                .with_description("At the end of your turn, gain 3 Block.")
                .with_rarity(Rarity::Uncommon),
            Card::new("Barricade", CardType::Power, 3)
                .with_status(names::BARRICADE, 1)
                .with_description("Block is not removed at the start of your turn.")
                .with_rarity(Rarity::Rare),
            Card::new("Demon Form", CardType::Power, 3)
                .with_status(names::DEMON_FORM, 1)
                .with_description("At the start of your turn, gain 2 Strength.")
                .with_rarity(Rarity::Rare),
        ]
    }

    /// Look a card up by name, case-insensitively.
    #[must_use]
    pub fn card(name: &str) -> Option<Card> {
        Self::all()
            .into_iter()
            .find(|card| card.name().eq_ignore_ascii_case(name))
    }

    /// Every card of one type.
    #[must_use]
    pub fn by_type(card_type: CardType) -> Vec<Card> {
        Self::all()
            .into_iter()
            .filter(|card| card.card_type() == card_type)
            .collect()
    }

    /// Five Strikes and four Defends.
    #[must_use]
    pub fn starter_deck() -> Vec<Card> {
        let strikes = std::iter::repeat_with(|| Self::card("Strike")).take(5);
        let defends = std::iter::repeat_with(|| Self::card("Defend")).take(4);
        strikes.chain(defends).flatten().collect()
    }
}
