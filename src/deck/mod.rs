//! The player's deck: four disjoint piles of card instances.
//!
//! A card instance lives in exactly one of draw pile, hand, discard pile,
//! or exhaust pile (or nowhere, once removed from the deck).

pub mod manager;

pub use manager::{Deck, Pile};
