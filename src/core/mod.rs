//! Core engine types: instance IDs, RNG, configuration, errors.
//!
//! Everything here is content-agnostic; the combat rules build on top.

pub mod config;
pub mod entity;
pub mod error;
pub mod rng;

pub use config::{CombatConfig, GameConfig, PlayerConfig};
pub use entity::CardInstanceId;
pub use error::{CombatError, ConfigError, RecordError};
pub use rng::GameRng;
