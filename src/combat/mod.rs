//! Combat: the turn state machine and everything it reports.
//!
//! ## Key Types
//!
//! - `Combat`: one encounter, generic over its `IntentPolicy`
//! - `CombatState`: where the encounter is in its turn cycle
//! - `CombatLog` / `LogEntry`: typed, append-only event log
//! - `ScriptedAi` / `PatternAi`: enemy intent policies
//! - `CombatSnapshot`: read-only view for presentation layers
//!
//! ## Usage
//!
//! ```
//! use rust_spire::cards::CardLibrary;
//! use rust_spire::combat::Combat;
//! use rust_spire::combatant::{Combatant, Enemy, Intent, Player};
//! use rust_spire::core::{GameRng, PlayerConfig};
//! use rust_spire::deck::Deck;
//!
//! let deck = Deck::new(CardLibrary::starter_deck(), GameRng::new(1));
//! let player = Player::new(&PlayerConfig::default(), deck);
//! let mut combat = Combat::new(player, vec![Enemy::new("Slime", 12, Intent::default())]);
//!
//! combat.start_player_turn();
//! while combat.is_combat_active() {
//!     let playable = combat
//!         .available_cards()
//!         .iter()
//!         .find(|card| card.effective_cost() <= combat.player().vitals().energy)
//!         .map(|card| card.id);
//!     match playable {
//!         Some(id) if combat.living_enemies().count() > 0 => {
//!             combat.play_card(id, 0).unwrap();
//!         }
//!         _ => combat.end_player_turn().unwrap(),
//!     }
//! }
//! assert!(combat.is_victory() || combat.is_defeat());
//! ```

mod ai;
mod engine;
mod snapshot;
mod state;

pub use ai::{IntentPolicy, PatternAi, ScriptedAi};
pub use engine::Combat;
pub use snapshot::{CharacterRecord, CombatSnapshot, StatusRecord};
pub use state::{CombatLog, CombatState, LogEntry};
