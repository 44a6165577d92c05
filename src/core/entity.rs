//! Card instance identification.
//!
//! Two "Strike" cards in a deck carry equal data but are different cards:
//! playing one must not touch the other. Every card that enters a deck is
//! therefore tagged with a `CardInstanceId`, allocated by the owning deck.

use serde::{Deserialize, Serialize};

/// Unique identifier of a card instance within one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardInstanceId(pub u32);

impl CardInstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardInstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}
