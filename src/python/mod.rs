//! Python bindings for the rust-spire combat engine.
//!
//! The bindings are a thin host layer over `game::Game`: every query comes
//! back as a JSON string and every rejected command raises `ValueError`.
//!
//! # Quick Start
//!
//! ```python
//! import json
//! import rust_spire as spire
//!
//! game = spire.Game(seed=7)
//! game.start_new_combat()
//!
//! while game.is_combat_active():
//!     hand = json.loads(game.available_cards())
//!     try:
//!         game.play_card(hand[0]["name"], 0)
//!     except ValueError:
//!         game.end_turn()
//!
//! print(json.loads(game.game_state())["player"]["current_hp"])
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// rust_spire: a turn-based deck-building combat engine.
#[pymodule]
fn rust_spire(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyGame>()?;
    Ok(())
}
