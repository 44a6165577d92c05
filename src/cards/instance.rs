//! Card instances - a card as it lives in a deck.
//!
//! `CardInstance` pairs card data with the identity the owning deck gave
//! it. Copies of the same library card are distinct instances.

use serde::{Deserialize, Serialize};

use super::definition::{Card, CardRecord};
use crate::core::entity::CardInstanceId;

/// A card in a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Identity within the owning deck.
    pub id: CardInstanceId,

    /// Card data. Owned; never shared with a library template.
    pub card: Card,
}

impl CardInstance {
    /// Wrap card data with an identity.
    #[must_use]
    pub fn new(id: CardInstanceId, card: Card) -> Self {
        Self { id, card }
    }

    /// Card name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.card.name()
    }

    /// Display/wire record of the card data.
    #[must_use]
    pub fn to_record(&self) -> CardRecord {
        self.card.to_record()
    }
}

impl std::ops::Deref for CardInstance {
    type Target = Card;

    fn deref(&self) -> &Card {
        &self.card
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    #[test]
    fn test_instances_are_independent() {
        let template = Card::new("Strike", CardType::Attack, 1).with_damage(6).with_upgrade_damage(3);

        let mut a = CardInstance::new(CardInstanceId::new(1), template.clone());
        let b = CardInstance::new(CardInstanceId::new(2), template.clone());

        a.card.upgrade();

        assert!(a.is_upgraded());
        assert!(!b.is_upgraded());
        assert!(!template.is_upgraded());
        assert_ne!(a, b);
    }

    #[test]
    fn test_deref_reads_card() {
        let instance = CardInstance::new(
            CardInstanceId::new(3),
            Card::new("Defend", CardType::Skill, 1).with_block(5),
        );

        assert_eq!(instance.name(), "Defend");
        assert_eq!(instance.effective_block(), 5);
        assert_eq!(instance.to_record().block, 5);
    }
}
