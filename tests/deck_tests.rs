//! Deck pile management tests.

use proptest::prelude::*;

use rust_spire::cards::{Card, CardLibrary, CardType};
use rust_spire::core::GameRng;
use rust_spire::deck::{Deck, Pile};

fn numbered(count: usize) -> Vec<Card> {
    (0..count)
        .map(|i| Card::new(format!("Card {i}"), CardType::Skill, 1))
        .collect()
}

fn in_play(deck: &Deck) -> usize {
    deck.draw_pile_size() + deck.discard_pile_size() + deck.hand_size()
}

/// Test drawing from a deck with no cards.
#[test]
fn test_draw_from_empty_deck() {
    let mut deck = Deck::empty(GameRng::new(0));
    assert!(deck.draw(5).is_empty());
    assert_eq!(deck.hand_size(), 0);
}

/// Test that an empty draw pile reshuffles the discard pile.
#[test]
fn test_draw_reshuffles_discard() {
    let mut deck = Deck::new(numbered(6), GameRng::new(4));
    deck.draw(6);
    deck.discard_hand();
    assert_eq!(deck.draw_pile_size(), 0);

    let drawn = deck.draw(4).len();

    assert_eq!(drawn, 4);
    assert_eq!(deck.draw_pile_size(), 2);
    assert_eq!(deck.discard_pile_size(), 0);
}

/// Test that drawing stops once every card is in hand.
#[test]
fn test_draw_stops_when_everything_is_in_hand() {
    let mut deck = Deck::new(numbered(3), GameRng::new(4));
    assert_eq!(deck.draw(10).len(), 3);
    assert!(deck.draw(1).is_empty());
}

/// Test that exhausted cards stay out of the reshuffle.
#[test]
fn test_exhausted_cards_skip_reshuffle() {
    let mut deck = Deck::new(numbered(4), GameRng::new(9));
    deck.draw(4);
    let burned = deck.hand()[0].id;

    assert!(deck.exhaust_card(burned));
    deck.discard_hand();
    deck.reset_for_combat();

    assert_eq!(deck.locate(burned), Some(Pile::Exhaust));
    assert_eq!(deck.draw_pile_size(), 3);
    assert_eq!(deck.total_cards(), 3);
}

/// Test that two copies of a card have distinct instance ids.
#[test]
fn test_copies_are_distinct_instances() {
    let strikes = std::iter::repeat_with(|| CardLibrary::card("Strike").unwrap()).take(2).collect();
    let mut deck = Deck::new(strikes, GameRng::new(1));
    deck.draw(2);

    let first = deck.hand()[0].id;
    let second = deck.hand()[1].id;
    assert_ne!(first, second);

    assert!(deck.discard_card(first));
    assert!(deck.in_hand(second));
    assert_eq!(deck.locate(first), Some(Pile::Discard));
}

/// Test adding a card to the discard pile and removing it again.
#[test]
fn test_add_and_remove() {
    let mut deck = Deck::new(numbered(2), GameRng::new(2));
    let added = deck.add_card(CardLibrary::card("Bash").unwrap(), false);
    assert_eq!(deck.locate(added), Some(Pile::Discard));
    assert_eq!(deck.total_cards(), 3);

    let removed = deck.remove_card(added).unwrap();
    assert_eq!(removed.name(), "Bash");
    assert_eq!(deck.locate(added), None);
    assert!(deck.remove_card(added).is_none());
}

/// Test case-insensitive lookup of cards in hand.
#[test]
fn test_find_in_hand_by_name_ignores_case() {
    let mut deck = Deck::new(vec![CardLibrary::card("Shrug It Off").unwrap()], GameRng::new(0));
    deck.draw(1);
    assert!(deck.find_in_hand_by_name("shrug it off").is_some());
    assert!(deck.find_in_hand_by_name("Strike").is_none());
}

/// Test that equal seeds shuffle into the same order.
#[test]
fn test_same_seed_same_order() {
    let mut a = Deck::new(numbered(10), GameRng::new(33));
    let mut b = Deck::new(numbered(10), GameRng::new(33));
    let a_names: Vec<_> = a.draw(10).iter().map(|c| c.name().to_string()).collect();
    let b_names: Vec<_> = b.draw(10).iter().map(|c| c.name().to_string()).collect();
    assert_eq!(a_names, b_names);
}

#[derive(Clone, Debug)]
enum Op {
    Draw(usize),
    DiscardHand,
    DiscardCard(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..8).prop_map(Op::Draw),
        Just(Op::DiscardHand),
        (0usize..10).prop_map(Op::DiscardCard),
    ]
}

proptest! {
    /// Draws and discards only move cards between piles.
    #[test]
    fn deck_conserves_cards(size in 0usize..20, seed in any::<u64>(), ops in prop::collection::vec(op(), 0..50)) {
        let mut deck = Deck::new(numbered(size), GameRng::new(seed));
        prop_assert_eq!(in_play(&deck), size);

        for op in ops {
            match op {
                Op::Draw(count) => { deck.draw(count); }
                Op::DiscardHand => deck.discard_hand(),
                Op::DiscardCard(index) => {
                    if let Some(card) = deck.hand().get(index) {
                        let id = card.id;
                        prop_assert!(deck.discard_card(id));
                    }
                }
            }
            prop_assert_eq!(in_play(&deck), size);
            prop_assert_eq!(deck.total_cards(), size);
        }
    }

    /// Every card sits in exactly one pile.
    #[test]
    fn cards_live_in_one_pile(size in 1usize..15, draws in 0usize..20) {
        let mut deck = Deck::new(numbered(size), GameRng::new(5));
        deck.draw(draws);
        let ids: Vec<_> = deck
            .hand()
            .iter()
            .chain(deck.draw_pile().iter())
            .chain(deck.discard_pile().iter())
            .map(|c| c.id)
            .collect();

        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), size);
        prop_assert_eq!(ids.len(), size);
    }
}
