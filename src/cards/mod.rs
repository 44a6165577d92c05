//! Card system: data, instances, and the built-in library.
//!
//! ## Key Types
//!
//! - `Card`: immutable card data with read-time upgrade deltas
//! - `CardRecord`: flat display/wire form using effective numbers
//! - `CardInstance`: a card as it lives in a deck, with its own identity
//! - `CardLibrary`: built-in content; every lookup is a fresh copy

pub mod definition;
pub mod instance;
pub mod library;

pub use definition::{Card, CardRecord, CardType, Rarity, UpgradeDeltas};
pub use instance::CardInstance;
pub use library::CardLibrary;
