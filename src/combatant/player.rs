//! The player character.

use tracing::debug;

use super::{Combatant, Vitals};
use crate::core::entity::CardInstanceId;
use crate::core::{CombatError, GameRng, PlayerConfig};
use crate::deck::Deck;
use crate::effects::{CardResolver, PlayOutcome};

/// The player: vitals plus a deck, relics, and draw cadence.
#[derive(Clone, Debug)]
pub struct Player {
    vitals: Vitals,
    deck: Deck,

    /// Relic names. Carried for display; relics have no effects.
    pub relics: Vec<String>,

    /// Cards drawn by `start_combat`.
    pub starting_hand_size: usize,

    /// Cards drawn at the start of every turn.
    pub turn_draw: usize,
}

impl Player {
    /// Create a player from config with the given deck.
    #[must_use]
    pub fn new(config: &PlayerConfig, deck: Deck) -> Self {
        let mut vitals = Vitals::new(config.name.clone(), config.max_hp);
        vitals.max_energy = config.max_energy;
        vitals.energy = config.max_energy;

        Self {
            vitals,
            deck,
            relics: Vec::new(),
            starting_hand_size: config.starting_hand_size,
            turn_draw: config.turn_draw,
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Replace the deck.
    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Prepare for a new encounter.
    ///
    /// Collects every card back into a shuffled draw pile, draws the opening
    /// hand, refills energy, and clears block.
    pub fn start_combat(&mut self) {
        self.deck.reset_for_combat();
        self.deck.draw(self.starting_hand_size);
        self.vitals.energy = self.vitals.max_energy;
        self.vitals.set_block(0);
        debug!(hand = self.deck.hand_size(), "player ready for combat");
    }

    /// Play a card from hand.
    ///
    /// Fails without touching anything when the card is not in hand or the
    /// player cannot pay for it. On success the card's effects resolve and
    /// the card moves to the discard pile.
    pub fn play_card(
        &mut self,
        id: CardInstanceId,
        target: Option<&mut dyn Combatant>,
    ) -> Result<PlayOutcome, CombatError> {
        let card = self
            .deck
            .hand_card(id)
            .ok_or(CombatError::CardNotInHand)?
            .card
            .clone();

        let cost = card.effective_cost();
        if self.vitals.energy < cost {
            return Err(CombatError::NotEnoughEnergy {
                required: cost,
                available: self.vitals.energy,
            });
        }
        self.vitals.energy -= cost;

        let effects = CardResolver::resolve(self, &card, target);
        self.deck.discard_card(id);

        Ok(PlayOutcome {
            card: card.name().to_string(),
            instance: id,
            cost,
            effects,
        })
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(&PlayerConfig::default(), Deck::empty(GameRng::new(0)))
    }
}

impl Combatant for Player {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    /// Shared start-of-turn hooks, then refill energy and draw.
    fn start_turn(&mut self) {
        self.vitals.begin_turn();
        self.vitals.energy = self.vitals.max_energy;
        self.deck.draw(self.turn_draw);
    }

    /// Shared end-of-turn hooks, then discard the hand.
    fn end_turn(&mut self) {
        self.vitals.finish_turn();
        self.deck.discard_hand();
    }
}
