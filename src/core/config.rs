//! Engine configuration types.
//!
//! Hosts configure the engine once at startup:
//! - `PlayerConfig`: the player's stats and draw cadence
//! - `CombatConfig`: combat-wide presentation limits
//! - `GameConfig`: combines both with the run seed
//!
//! All configs deserialize from JSON with defaults for missing fields, so a
//! host only needs to spell out what it overrides.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, RecordError};

/// Player stats for a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Display name.
    pub name: String,

    /// Maximum (and starting) hit points.
    pub max_hp: i32,

    /// Energy refilled at the start of each player turn.
    pub max_energy: i32,

    /// Cards drawn when a combat starts.
    pub starting_hand_size: usize,

    /// Cards drawn at the start of every player turn.
    pub turn_draw: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: "Player".to_string(),
            max_hp: 80,
            max_energy: 3,
            starting_hand_size: 5,
            turn_draw: 5,
        }
    }
}

impl PlayerConfig {
    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set maximum hit points.
    #[must_use]
    pub fn with_max_hp(mut self, max_hp: i32) -> Self {
        self.max_hp = max_hp;
        self
    }

    /// Set maximum energy.
    #[must_use]
    pub fn with_max_energy(mut self, max_energy: i32) -> Self {
        self.max_energy = max_energy;
        self
    }

    /// Set the combat-start draw.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the per-turn draw.
    #[must_use]
    pub fn with_turn_draw(mut self, count: usize) -> Self {
        self.turn_draw = count;
        self
    }
}

/// Combat-wide settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Number of most recent log lines exposed in snapshots.
    pub log_view_len: usize,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self { log_view_len: 10 }
    }
}

/// Top-level configuration for a run.
///
/// ```
/// use rust_spire::core::GameConfig;
///
/// let config = GameConfig::from_json(r#"{ "seed": 7, "player": { "max_hp": 50 } }"#).unwrap();
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.player.max_hp, 50);
/// assert_eq!(config.player.max_energy, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for every random stream in the run.
    pub seed: u64,

    /// Player stats.
    pub player: PlayerConfig,

    /// Combat settings.
    pub combat: CombatConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            player: PlayerConfig::default(),
            combat: CombatConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create a default configuration with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Replace the player config.
    #[must_use]
    pub fn with_player(mut self, player: PlayerConfig) -> Self {
        self.player = player;
        self
    }

    /// Replace the combat config.
    #[must_use]
    pub fn with_combat(mut self, combat: CombatConfig) -> Self {
        self.combat = combat;
        self
    }

    /// Parse from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player.max_hp <= 0 {
            return Err(ConfigError::NonPositiveMaxHp(self.player.max_hp));
        }
        if self.player.max_energy < 0 {
            return Err(ConfigError::NegativeEnergy(self.player.max_energy));
        }
        if self.combat.log_view_len == 0 {
            return Err(ConfigError::EmptyLogView);
        }
        Ok(())
    }
}
