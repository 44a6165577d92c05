//! Game session bindings for Python.

use pyo3::prelude::*;

use crate::core::{CombatError, GameConfig, RecordError};
use crate::game::Game;

fn combat_err(err: CombatError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}: {err}", err.reason()))
}

fn record_err(err: RecordError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Python wrapper for a game session.
///
/// Queries return JSON strings; invalid commands raise `ValueError` whose
/// message starts with the reason code (`not_enough_energy: ...`).
#[pyclass(name = "Game")]
pub struct PyGame {
    game: Game,
}

#[pymethods]
impl PyGame {
    /// Create a session.
    ///
    /// # Arguments
    /// - seed: RNG seed for shuffles and encounters
    /// - config_json: optional `GameConfig` JSON; its seed wins over `seed`
    #[new]
    #[pyo3(signature = (seed = 42, config_json = None))]
    fn new(seed: u64, config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(json).map_err(record_err)?,
            None => GameConfig::new(seed),
        };
        let game = Game::new(config)
            .map_err(|err| PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string()))?;
        Ok(Self { game })
    }

    /// Start an encounter, optionally jumping to `floor` first.
    ///
    /// Returns the combat snapshot as JSON.
    #[pyo3(signature = (floor = None))]
    fn start_new_combat(&mut self, floor: Option<u32>) -> PyResult<String> {
        if let Some(floor) = floor {
            self.game.floor = floor;
        }
        self.game.start_new_combat(None).snapshot().to_json().map_err(record_err)
    }

    /// Play a card by name. Returns the play outcome as JSON.
    #[pyo3(signature = (name, target_index = 0))]
    fn play_card(&mut self, name: &str, target_index: usize) -> PyResult<String> {
        let outcome = self.game.play_card(name, target_index).map_err(combat_err)?;
        serde_json::to_string(&outcome).map_err(|err| record_err(err.into()))
    }

    fn end_turn(&mut self) -> PyResult<()> {
        self.game.end_turn().map_err(combat_err)
    }

    fn advance_floor(&mut self) {
        self.game.advance_floor();
    }

    /// Combat snapshot JSON, or None outside combat.
    fn combat_state(&self) -> PyResult<Option<String>> {
        self.game
            .combat_state()
            .map(|snapshot| snapshot.to_json())
            .transpose()
            .map_err(record_err)
    }

    fn game_state(&self) -> PyResult<String> {
        self.game.game_state().to_json().map_err(record_err)
    }

    /// Hand as a JSON list of card records.
    fn available_cards(&self) -> PyResult<String> {
        let records: Vec<_> = self
            .game
            .available_cards()
            .iter()
            .map(|card| card.to_record())
            .collect();
        serde_json::to_string(&records).map_err(|err| record_err(err.into()))
    }

    fn is_combat_active(&self) -> bool {
        self.game.is_combat_active()
    }

    fn is_victory(&self) -> bool {
        self.game.is_victory()
    }

    fn is_defeat(&self) -> bool {
        self.game.is_defeat()
    }

    #[getter]
    fn floor(&self) -> u32 {
        self.game.floor
    }

    #[getter]
    fn gold(&self) -> u32 {
        self.game.gold
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(floor={}, in_combat={})",
            self.game.floor,
            self.game.is_combat_active()
        )
    }
}
