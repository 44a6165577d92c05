//! Combat state machine states and the combat log.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

use crate::core::RecordError;
use crate::effects::AppliedEffect;

/// Where a combat is in its turn cycle.
///
/// A new combat waits for input until the first player turn starts.
/// `Victory`, `Defeat`, and `Ended` are terminal; normal play only reaches
/// the first two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum CombatState {
    #[default]
    WaitingForInput,
    PlayerTurn,
    EnemyTurn,
    Victory,
    Defeat,
    Ended,
}

impl CombatState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CombatState::WaitingForInput => "waiting_for_input",
            CombatState::PlayerTurn => "player_turn",
            CombatState::EnemyTurn => "enemy_turn",
            CombatState::Victory => "victory",
            CombatState::Defeat => "defeat",
            CombatState::Ended => "ended",
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, CombatState::Victory | CombatState::Defeat | CombatState::Ended)
    }
}

impl fmt::Display for CombatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CombatState {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waiting_for_input" => Ok(CombatState::WaitingForInput),
            "player_turn" => Ok(CombatState::PlayerTurn),
            "enemy_turn" => Ok(CombatState::EnemyTurn),
            "victory" => Ok(CombatState::Victory),
            "defeat" => Ok(CombatState::Defeat),
            "ended" => Ok(CombatState::Ended),
            other => Err(RecordError::UnknownCombatState(other.to_string())),
        }
    }
}

impl TryFrom<String> for CombatState {
    type Error = RecordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CombatState> for &'static str {
    fn from(value: CombatState) -> Self {
        value.as_str()
    }
}

/// One event in the combat log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogEntry {
    CombatStarted { enemy_count: usize },
    TurnStarted { turn: u32 },
    PlayerTurnBegins,
    PlayerStatus { hp: i32, max_hp: i32, block: i32, energy: i32, max_energy: i32 },
    HandSize { size: usize },
    EnemyStatus { name: String, hp: i32, max_hp: i32, block: i32 },
    EnemyIntent { name: String, description: String },
    CardPlayed { card: String },
    Effect(AppliedEffect),
    Defeated { name: String },
    PlayerTurnEnds,
    EnemyActs { name: String, description: String },
    Victory,
    Defeat,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntry::CombatStarted { enemy_count } => {
                write!(f, "Combat started! Facing {enemy_count} enemy(ies).")
            }
            LogEntry::TurnStarted { turn } => write!(f, "=== Turn {turn} ==="),
            LogEntry::PlayerTurnBegins => f.write_str("Player's turn begins."),
            LogEntry::PlayerStatus { hp, max_hp, block, energy, max_energy } => write!(
                f,
                "Player HP: {hp}/{max_hp}, Block: {block}, Energy: {energy}/{max_energy}"
            ),
            LogEntry::HandSize { size } => write!(f, "Hand size: {size}"),
            LogEntry::EnemyStatus { name, hp, max_hp, block } => {
                write!(f, "{name} HP: {hp}/{max_hp}, Block: {block}")
            }
            LogEntry::EnemyIntent { name, description } => {
                write!(f, "{name} intent: {description}")
            }
            LogEntry::CardPlayed { card } => write!(f, "Player plays {card}"),
            LogEntry::Effect(effect) => write!(f, "  -> {effect}"),
            LogEntry::Defeated { name } => write!(f, "{name} is defeated!"),
            LogEntry::PlayerTurnEnds => f.write_str("Player's turn ends."),
            LogEntry::EnemyActs { name, description } => {
                write!(f, "{name}'s turn: {description}")
            }
            LogEntry::Victory => f.write_str("=== VICTORY! ==="),
            LogEntry::Defeat => f.write_str("=== DEFEAT! ==="),
        }
    }
}

/// Append-only combat log.
///
/// Backed by a persistent vector so snapshots clone it cheaply. Every entry
/// is also emitted as a `tracing` event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatLog {
    entries: Vector<LogEntry>,
}

impl CombatLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        match &entry {
            LogEntry::TurnStarted { turn } => info!(turn, "turn started"),
            LogEntry::Victory => info!("combat won"),
            LogEntry::Defeat => info!("combat lost"),
            LogEntry::CombatStarted { enemy_count } => info!(enemy_count, "combat started"),
            other => debug!("{other}"),
        }
        self.entries.push_back(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The last `count` entries, oldest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().skip(self.entries.len().saturating_sub(count))
    }

    /// The last `count` entries rendered as text.
    #[must_use]
    pub fn recent_lines(&self, count: usize) -> Vec<String> {
        self.recent(count).map(ToString::to_string).collect()
    }
}
