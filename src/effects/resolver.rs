//! Card resolution - applying a played card's numbers.
//!
//! Resolution order is fixed: damage, block, energy, draw, statuses.
//! Payment and hand bookkeeping happen in `Player::play_card`; this module
//! only applies effects.

use tracing::debug;

use super::effect::{AppliedEffect, EffectList};
use crate::cards::Card;
use crate::combatant::{Combatant, Player};

/// Applies a card's effects for its owner.
pub struct CardResolver;

impl CardResolver {
    /// Resolve `card` played by `player`.
    ///
    /// Damage is skipped without a target. Status grants go to the target
    /// when there is one, otherwise to the player.
    pub fn resolve(
        player: &mut Player,
        card: &Card,
        mut target: Option<&mut dyn Combatant>,
    ) -> EffectList {
        let mut effects = EffectList::new();
        let actor = player.name().to_string();

        let damage = card.effective_damage();
        if damage > 0 {
            if let Some(target) = target.as_deref_mut() {
                let outgoing = player.apply_damage_modifier(damage);
                let amount = target.take_damage(outgoing, false);
                let dealt = &mut player.vitals_mut().damage_dealt_this_turn;
                *dealt = dealt.saturating_add(outgoing);
                effects.push(AppliedEffect::Damage { target: target.name().to_string(), amount });
            }
        }

        let block = card.effective_block();
        if block > 0 {
            let amount = player.gain_block(block);
            let total = player.vitals().block();
            effects.push(AppliedEffect::Block { target: actor.clone(), amount, total });
        }

        if card.energy_gain() > 0 {
            let energy = &mut player.vitals_mut().energy;
            *energy = energy.saturating_add(card.energy_gain());
            effects.push(AppliedEffect::Energy { target: actor.clone(), amount: card.energy_gain() });
        }

        if card.card_draw() > 0 {
            let count = usize::try_from(card.card_draw()).unwrap_or_default();
            let cards = player
                .deck_mut()
                .draw(count)
                .iter()
                .map(|drawn| drawn.name().to_string())
                .collect();
            effects.push(AppliedEffect::Draw { target: actor.clone(), cards });
        }

        for (status, &amount) in card.status_grants() {
            let recipient = match target.as_deref_mut() {
                Some(target) => {
                    target.statuses_mut().add(status, amount);
                    target.name().to_string()
                }
                None => {
                    player.statuses_mut().add(status, amount);
                    actor.clone()
                }
            };
            effects.push(AppliedEffect::Status { target: recipient, status: status.clone(), amount });
        }

        debug!(card = card.name(), effects = effects.len(), "card resolved");
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;
    use crate::combatant::{Enemy, Intent};
    use crate::core::{GameRng, PlayerConfig};
    use crate::deck::Deck;
    use crate::status::names;

    fn player_with(cards: Vec<Card>) -> Player {
        Player::new(&PlayerConfig::default(), Deck::new(cards, GameRng::new(3)))
    }

    fn cultist() -> Enemy {
        Enemy::new("Cultist", 48, Intent::Attack { damage: 6 })
    }

    #[test]
    fn test_damage_uses_strength_and_tracks_dealt() {
        let mut player = player_with(vec![]);
        player.statuses_mut().add(names::STRENGTH, 2);
        let mut enemy = cultist();
        let strike = Card::new("Strike", CardType::Attack, 1).with_damage(6);

        let effects = CardResolver::resolve(&mut player, &strike, Some(&mut enemy));

        assert_eq!(enemy.vitals().current_hp(), 40);
        assert_eq!(player.vitals().damage_dealt_this_turn, 8);
        assert_eq!(effects[0], AppliedEffect::Damage { target: "Cultist".into(), amount: 8 });
    }

    #[test]
    fn test_damage_skipped_without_target() {
        let mut player = player_with(vec![]);
        let strike = Card::new("Strike", CardType::Attack, 1).with_damage(6);

        let effects = CardResolver::resolve(&mut player, &strike, None);
        assert!(effects.is_empty());
        assert_eq!(player.vitals().damage_dealt_this_turn, 0);
    }

    #[test]
    fn test_block_energy_draw() {
        let filler = Card::new("Strike", CardType::Attack, 1).with_damage(6);
        let mut player = player_with(vec![filler.clone(), filler]);
        let card = Card::new("Rush", CardType::Skill, 0)
            .with_block(4)
            .with_energy_gain(1)
            .with_card_draw(2);

        let effects = CardResolver::resolve(&mut player, &card, None);

        assert_eq!(player.vitals().block(), 4);
        assert_eq!(player.vitals().energy, 1);
        assert_eq!(player.deck().hand_size(), 2);
        assert_eq!(effects.len(), 3);
        assert!(matches!(&effects[2], AppliedEffect::Draw { cards, .. } if cards.len() == 2));
    }

    #[test]
    fn test_status_goes_to_target_or_self() {
        let mut player = player_with(vec![]);
        let mut enemy = cultist();
        let bash = Card::new("Bash", CardType::Attack, 2)
            .with_damage(8)
            .with_status(names::VULNERABLE, 2);

        CardResolver::resolve(&mut player, &bash, Some(&mut enemy));
        assert_eq!(enemy.statuses().amount_of(names::VULNERABLE), 2);
        assert!(!player.statuses().has(names::VULNERABLE));

        let power = Card::new("Metallicize", CardType::Power, 1).with_status(names::METALLICIZE, 3);
        let effects = CardResolver::resolve(&mut player, &power, None);
        assert_eq!(player.statuses().amount_of(names::METALLICIZE), 3);
        assert_eq!(effects[0].target(), "Player");
    }
}
