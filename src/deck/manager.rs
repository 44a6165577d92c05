//! Deck piles and card movement.
//!
//! The `Deck` tracks which pile every card instance is in and moves cards
//! between piles:
//! - Drawing takes from the front of the draw pile into the hand
//! - An empty draw pile is refilled from the shuffled discard pile
//! - Exhausted cards never come back through a reshuffle or a combat reset
//!
//! Cards are addressed by `CardInstanceId`, which the deck assigns as cards
//! are added.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardInstance};
use crate::core::entity::CardInstanceId;
use crate::core::rng::GameRng;

/// Where a card instance currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pile {
    Draw,
    Hand,
    Discard,
    Exhaust,
}

/// A player's deck.
///
/// ## Usage
///
/// ```
/// use rust_spire::cards::CardLibrary;
/// use rust_spire::core::GameRng;
/// use rust_spire::deck::Deck;
///
/// let mut deck = Deck::new(CardLibrary::starter_deck(), GameRng::new(1));
/// let drawn = deck.draw(5).len();
///
/// assert_eq!(drawn, 5);
/// assert_eq!(deck.hand_size(), 5);
/// assert_eq!(deck.total_cards(), 9);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    draw_pile: VecDeque<CardInstance>,
    hand: Vec<CardInstance>,
    discard_pile: Vec<CardInstance>,
    exhaust_pile: Vec<CardInstance>,
    rng: GameRng,
    next_id: u32,
}

impl Deck {
    /// Build a deck from card data and shuffle it.
    #[must_use]
    pub fn new(cards: Vec<Card>, rng: GameRng) -> Self {
        let mut deck = Self::empty(rng);
        for card in cards {
            deck.add_card(card, true);
        }
        deck.shuffle();
        deck
    }

    /// A deck with no cards.
    #[must_use]
    pub fn empty(rng: GameRng) -> Self {
        Self {
            draw_pile: VecDeque::new(),
            hand: Vec::new(),
            discard_pile: Vec::new(),
            exhaust_pile: Vec::new(),
            rng,
            next_id: 0,
        }
    }

    /// Shuffle the draw pile.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(self.draw_pile.make_contiguous());
    }

    /// Draw up to `count` cards into the hand.
    ///
    /// When the draw pile runs dry the discard pile is shuffled into it.
    /// When both are empty drawing stops early. Returns the cards drawn.
    pub fn draw(&mut self, count: usize) -> &[CardInstance] {
        let start = self.hand.len();

        for _ in 0..count {
            if self.draw_pile.is_empty() {
                if self.discard_pile.is_empty() {
                    break;
                }
                self.draw_pile.extend(self.discard_pile.drain(..));
                self.shuffle();
            }

            match self.draw_pile.pop_front() {
                Some(card) => self.hand.push(card),
                None => break,
            }
        }

        &self.hand[start..]
    }

    /// Move the whole hand to the discard pile.
    pub fn discard_hand(&mut self) {
        self.discard_pile.append(&mut self.hand);
    }

    /// Move one card from hand to the discard pile.
    ///
    /// Returns false (and does nothing) if the card is not in hand.
    pub fn discard_card(&mut self, id: CardInstanceId) -> bool {
        match self.take_from_hand(id) {
            Some(card) => {
                self.discard_pile.push(card);
                true
            }
            None => false,
        }
    }

    /// Move one card from hand to the exhaust pile.
    ///
    /// Returns false (and does nothing) if the card is not in hand.
    pub fn exhaust_card(&mut self, id: CardInstanceId) -> bool {
        match self.take_from_hand(id) {
            Some(card) => {
                self.exhaust_pile.push(card);
                true
            }
            None => false,
        }
    }

    /// Add a card to the draw pile (or the discard pile).
    ///
    /// Returns the identity the deck assigned to it.
    pub fn add_card(&mut self, card: Card, to_draw_pile: bool) -> CardInstanceId {
        let id = CardInstanceId::new(self.next_id);
        self.next_id += 1;

        let instance = CardInstance::new(id, card);
        if to_draw_pile {
            self.draw_pile.push_back(instance);
        } else {
            self.discard_pile.push(instance);
        }
        id
    }

    /// Remove a card from the draw pile, discard pile, or hand.
    ///
    /// The exhaust pile is never searched.
    pub fn remove_card(&mut self, id: CardInstanceId) -> Option<CardInstance> {
        if let Some(pos) = self.draw_pile.iter().position(|c| c.id == id) {
            return self.draw_pile.remove(pos);
        }
        if let Some(pos) = self.discard_pile.iter().position(|c| c.id == id) {
            return Some(self.discard_pile.remove(pos));
        }
        self.take_from_hand(id)
    }

    /// Gather hand and discard back into a shuffled draw pile.
    ///
    /// Exhausted cards stay exhausted.
    pub fn reset_for_combat(&mut self) {
        self.draw_pile.extend(self.discard_pile.drain(..));
        self.draw_pile.extend(self.hand.drain(..));
        self.shuffle();
    }

    // === Queries ===

    /// Which pile a card is in.
    #[must_use]
    pub fn locate(&self, id: CardInstanceId) -> Option<Pile> {
        if self.hand.iter().any(|c| c.id == id) {
            Some(Pile::Hand)
        } else if self.draw_pile.iter().any(|c| c.id == id) {
            Some(Pile::Draw)
        } else if self.discard_pile.iter().any(|c| c.id == id) {
            Some(Pile::Discard)
        } else if self.exhaust_pile.iter().any(|c| c.id == id) {
            Some(Pile::Exhaust)
        } else {
            None
        }
    }

    /// Whether a card is in hand.
    #[must_use]
    pub fn in_hand(&self, id: CardInstanceId) -> bool {
        self.hand.iter().any(|c| c.id == id)
    }

    /// A card in hand.
    #[must_use]
    pub fn hand_card(&self, id: CardInstanceId) -> Option<&CardInstance> {
        self.hand.iter().find(|c| c.id == id)
    }

    /// First card in hand with this name, case-insensitively.
    #[must_use]
    pub fn find_in_hand_by_name(&self, name: &str) -> Option<CardInstanceId> {
        self.hand
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .map(|c| c.id)
    }

    #[must_use]
    pub fn hand(&self) -> &[CardInstance] {
        &self.hand
    }

    #[must_use]
    pub fn draw_pile(&self) -> &VecDeque<CardInstance> {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[CardInstance] {
        &self.discard_pile
    }

    #[must_use]
    pub fn exhaust_pile(&self) -> &[CardInstance] {
        &self.exhaust_pile
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn draw_pile_size(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn discard_pile_size(&self) -> usize {
        self.discard_pile.len()
    }

    #[must_use]
    pub fn exhaust_pile_size(&self) -> usize {
        self.exhaust_pile.len()
    }

    /// Cards in draw pile, discard pile, and hand.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len() + self.hand.len()
    }

    fn take_from_hand(&mut self, id: CardInstanceId) -> Option<CardInstance> {
        let pos = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(pos))
    }
}
