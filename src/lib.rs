//! # rust-spire
//!
//! A turn-based deck-building combat engine.
//!
//! One player with a deck of cards fights a group of enemies. Each turn the
//! player spends energy to play cards (damage, block, energy, draw, status
//! effects), then every living enemy executes its declared intent.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: a rejected command returns a `CombatError`
//!    and leaves every piece of state as it was.
//!
//! 2. **Deterministic**: all randomness comes from seeded `GameRng` streams,
//!    so a seed replays a run exactly.
//!
//! 3. **Host-agnostic**: the engine never prints. The combat log is typed
//!    data, mirrored to `tracing` events; snapshots encode to JSON or
//!    bincode for whatever presentation layer drives the engine.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors, card instance ids
//! - `status`: stacking status effects
//! - `cards`: card data, instances, the built-in library
//! - `deck`: draw/hand/discard/exhaust piles
//! - `combatant`: shared vitals, the player, enemies and intents
//! - `effects`: card resolution and applied-effect reports
//! - `combat`: the turn state machine, log, AI, snapshots
//! - `encounter`: enemy groups by floor tier
//! - `game`: the session surface hosts drive

pub mod cards;
pub mod combat;
pub mod combatant;
pub mod core;
pub mod deck;
pub mod effects;
pub mod encounter;
pub mod game;
pub mod status;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    CardInstanceId, CombatConfig, CombatError, ConfigError, GameConfig, GameRng, PlayerConfig,
    RecordError,
};

pub use crate::status::{names, StatusCategory, StatusEffect, StatusManager};

pub use crate::cards::{Card, CardInstance, CardLibrary, CardRecord, CardType, Rarity};

pub use crate::deck::{Deck, Pile};

pub use crate::combatant::{Combatant, Enemy, Intent, Player, Vitals};

pub use crate::effects::{AppliedEffect, CardResolver, PlayOutcome};

pub use crate::combat::{
    CharacterRecord, Combat, CombatLog, CombatSnapshot, CombatState, IntentPolicy, LogEntry,
    PatternAi, ScriptedAi, StatusRecord,
};

pub use crate::encounter::{EncounterGenerator, EncounterTier};

pub use crate::game::{Game, GameSnapshot};
