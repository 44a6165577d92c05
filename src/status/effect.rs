//! A single status effect entry.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::RecordError;

/// Duration sentinel for statuses that never expire on their own.
pub const INDEFINITE: i32 = -1;

/// Status names the combat rules read.
///
/// Content may use any other name; these are the ones with built-in meaning.
pub mod names {
    /// Flat bonus to outgoing damage.
    pub const STRENGTH: &str = "strength";
    /// Flat bonus to block gained.
    pub const DEXTERITY: &str = "dexterity";
    /// Gain this much block at end of turn.
    pub const METALLICIZE: &str = "metallicize";
    /// Block is kept across the end of turn.
    pub const BARRICADE: &str = "barricade";
    /// Gain 2 Strength at end of turn.
    pub const DEMON_FORM: &str = "demon_form";
    /// Incoming damage x1.5.
    pub const VULNERABLE: &str = "vulnerable";
    /// Outgoing damage x0.75.
    pub const WEAK: &str = "weak";
    /// Block gained x0.75.
    pub const FRAIL: &str = "frail";
    /// Block-ignoring damage at start of turn, then decays by one.
    pub const POISON: &str = "poison";
    /// Block-ignoring damage at end of turn, then decays by one.
    pub const BURN: &str = "burn";

    /// Every name above.
    pub const ALL: [&str; 10] = [
        STRENGTH,
        DEXTERITY,
        METALLICIZE,
        BARRICADE,
        DEMON_FORM,
        VULNERABLE,
        WEAK,
        FRAIL,
        POISON,
        BURN,
    ];
}

/// Informational category. Never used in damage math.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum StatusCategory {
    Buff,
    Debuff,
    #[default]
    Neutral,
}

impl StatusCategory {
    /// Wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StatusCategory::Buff => "buff",
            StatusCategory::Debuff => "debuff",
            StatusCategory::Neutral => "neutral",
        }
    }
}

impl FromStr for StatusCategory {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buff" => Ok(StatusCategory::Buff),
            "debuff" => Ok(StatusCategory::Debuff),
            "neutral" => Ok(StatusCategory::Neutral),
            other => Err(RecordError::UnknownStatusCategory(other.to_string())),
        }
    }
}

impl TryFrom<String> for StatusCategory {
    type Error = RecordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<StatusCategory> for &'static str {
    fn from(value: StatusCategory) -> Self {
        value.as_str()
    }
}

/// One named modifier on a combatant.
///
/// `amount` may be zero or negative: poison and burn count down through the
/// same stacking path, and an entry is only removed explicitly or when its
/// duration runs out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    /// Key in the owning manager.
    pub name: String,

    /// Stacked intensity.
    pub amount: i32,

    /// Turns remaining, or [`INDEFINITE`].
    pub duration: i32,

    /// Buff/debuff/neutral tag.
    pub category: StatusCategory,
}

impl StatusEffect {
    /// Create an entry.
    #[must_use]
    pub fn new(name: impl Into<String>, amount: i32, duration: i32, category: StatusCategory) -> Self {
        Self {
            name: name.into(),
            amount,
            duration,
            category,
        }
    }

    /// Whether this entry never expires on its own.
    #[must_use]
    pub fn is_indefinite(&self) -> bool {
        self.duration == INDEFINITE
    }

    /// Count one turn down. Returns true when the entry has expired.
    pub fn tick(&mut self) -> bool {
        if self.duration > 0 {
            self.duration -= 1;
            return self.duration <= 0;
        }
        false
    }
}
