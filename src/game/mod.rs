//! Game session - the surface presentation layers drive.
//!
//! `Game` owns the player for a whole run, starts encounters by floor, and
//! answers the queries UIs need. Commands return `CombatError` on invalid
//! input; nothing changes when they do.
//!
//! ## Usage
//!
//! ```
//! use rust_spire::core::GameConfig;
//! use rust_spire::game::Game;
//!
//! let mut game = Game::new(GameConfig::new(12)).unwrap();
//! game.start_new_combat(None);
//!
//! if game.play_card("Strike", 0).is_err() {
//!     game.play_card("Defend", 0).unwrap();
//! }
//! game.end_turn().unwrap();
//!
//! let snapshot = game.combat_state().unwrap();
//! assert_eq!(snapshot.turn_number, 2);
//! ```

mod session;

pub use session::{Game, GameSnapshot};
