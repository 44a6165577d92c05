//! Card bindings for Python.

use pyo3::prelude::*;

use crate::cards::{Card, CardLibrary, CardRecord};

/// Python wrapper for a library card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Look a card up in the built-in library (case-insensitive).
    #[new]
    fn new(name: &str) -> PyResult<Self> {
        CardLibrary::card(name).map(Self).ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyKeyError, _>(format!("unknown card: {name}"))
        })
    }

    /// Rebuild a card from its JSON record.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        CardRecord::from_json(json)
            .map(|record| Self(Card::from_record(record)))
            .map_err(|err| PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string()))
    }

    /// Names of every library card.
    #[staticmethod]
    fn library() -> Vec<String> {
        CardLibrary::all().iter().map(|card| card.name().to_string()).collect()
    }

    #[getter]
    fn name(&self) -> &str {
        self.0.name()
    }

    #[getter]
    fn card_type(&self) -> &'static str {
        self.0.card_type().as_str()
    }

    #[getter]
    fn cost(&self) -> i32 {
        self.0.effective_cost()
    }

    #[getter]
    fn damage(&self) -> i32 {
        self.0.effective_damage()
    }

    #[getter]
    fn block(&self) -> i32 {
        self.0.effective_block()
    }

    #[getter]
    fn upgraded(&self) -> bool {
        self.0.is_upgraded()
    }

    fn upgrade(&mut self) {
        self.0.upgrade();
    }

    fn to_json(&self) -> PyResult<String> {
        self.0
            .to_record()
            .to_json()
            .map_err(|err| PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string()))
    }

    fn __repr__(&self) -> String {
        let plus = if self.0.is_upgraded() { "+" } else { "" };
        format!("Card({}{plus}, cost={})", self.0.name(), self.0.effective_cost())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
