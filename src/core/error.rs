//! Engine error types.
//!
//! - `CombatError`: a command was illegal in the current state. The engine
//!   is untouched when one of these is returned.
//! - `RecordError`: data fed back across the boundary could not be decoded.
//! - `ConfigError`: a configuration the engine refuses to run with.

use thiserror::Error;

/// Validation failure for a combat command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CombatError {
    #[error("not the player's turn (combat is {state})")]
    NotPlayerTurn { state: String },

    #[error("invalid target index {index} ({enemy_count} enemies)")]
    InvalidTarget { index: usize, enemy_count: usize },

    #[error("target {index} is already defeated")]
    TargetDefeated { index: usize },

    #[error("card not in hand")]
    CardNotInHand,

    #[error("card \"{name}\" not in hand")]
    CardNameNotInHand { name: String },

    #[error("not enough energy: need {required}, have {available}")]
    NotEnoughEnergy { required: i32, available: i32 },

    #[error("no active combat")]
    NoActiveCombat,
}

impl CombatError {
    /// Stable, machine-checkable reason code.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            CombatError::NotPlayerTurn { .. } => "not_player_turn",
            CombatError::InvalidTarget { .. } => "invalid_target",
            CombatError::TargetDefeated { .. } => "target_defeated",
            CombatError::CardNotInHand | CombatError::CardNameNotInHand { .. } => {
                "card_not_in_hand"
            }
            CombatError::NotEnoughEnergy { .. } => "not_enough_energy",
            CombatError::NoActiveCombat => "no_active_combat",
        }
    }
}

/// Failure decoding a record at the engine boundary.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed JSON record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed binary record: {0}")]
    Binary(#[from] bincode::Error),

    #[error("unknown card type \"{0}\"")]
    UnknownCardType(String),

    #[error("unknown rarity \"{0}\"")]
    UnknownRarity(String),

    #[error("unknown combat state \"{0}\"")]
    UnknownCombatState(String),

    #[error("unknown status category \"{0}\"")]
    UnknownStatusCategory(String),
}

/// Invalid engine configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_hp must be positive, got {0}")]
    NonPositiveMaxHp(i32),

    #[error("max_energy must not be negative, got {0}")]
    NegativeEnergy(i32),

    #[error("log_view_len must be at least 1")]
    EmptyLogView,
}
