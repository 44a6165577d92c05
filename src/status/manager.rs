//! Per-combatant status bookkeeping.
//!
//! ## Stacking
//!
//! `add` on an existing name sums the amounts and can only shorten the
//! duration: a positive incoming duration replaces the current one when the
//! current one is indefinite or longer. Nothing is removed because its
//! amount dropped to zero or below.
//!
//! ## Expiry
//!
//! `tick_all` counts every timed entry down by one and drops those that
//! reach zero in the same pass. Indefinite entries are untouched.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::effect::{StatusCategory, StatusEffect, INDEFINITE};

/// Name-keyed set of status effects owned by one combatant.
///
/// ```
/// use rust_spire::status::{names, StatusManager};
///
/// let mut statuses = StatusManager::new();
/// statuses.add(names::STRENGTH, 2);
/// statuses.add(names::STRENGTH, 3);
/// assert_eq!(statuses.amount_of(names::STRENGTH), 5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusManager {
    effects: FxHashMap<String, StatusEffect>,
}

impl StatusManager {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stack an indefinite, neutral amount onto `name`.
    pub fn add(&mut self, name: &str, amount: i32) {
        self.add_with(name, amount, INDEFINITE, StatusCategory::Neutral);
    }

    /// Stack `amount` onto `name` with an explicit duration and category.
    ///
    /// The category only applies when the entry is created.
    pub fn add_with(&mut self, name: &str, amount: i32, duration: i32, category: StatusCategory) {
        match self.effects.get_mut(name) {
            Some(existing) => {
                existing.amount = existing.amount.saturating_add(amount);
                if duration > 0 && (existing.duration < 0 || duration < existing.duration) {
                    existing.duration = duration;
                }
            }
            None => {
                self.effects.insert(
                    name.to_string(),
                    StatusEffect::new(name, amount, duration, category),
                );
            }
        }
    }

    /// Stacked amount, or 0 when absent.
    #[must_use]
    pub fn amount_of(&self, name: &str) -> i32 {
        self.effects.get(name).map_or(0, |e| e.amount)
    }

    /// Whether an entry exists, regardless of its amount.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.effects.contains_key(name)
    }

    /// Look up an entry.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StatusEffect> {
        self.effects.get(name)
    }

    /// Remove an entry. Returns it if it existed.
    pub fn remove(&mut self, name: &str) -> Option<StatusEffect> {
        self.effects.remove(name)
    }

    /// Count every timed entry down and drop the expired ones.
    pub fn tick_all(&mut self) {
        self.effects.retain(|_, effect| !effect.tick());
    }

    /// Drop every entry.
    pub fn clear_all(&mut self) {
        self.effects.clear();
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Iterate entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.values()
    }

    /// Entries sorted by name.
    #[must_use]
    pub fn sorted(&self) -> Vec<&StatusEffect> {
        let mut entries: Vec<_> = self.effects.values().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::names;

    #[test]
    fn test_absent_status() {
        let statuses = StatusManager::new();
        assert_eq!(statuses.amount_of(names::POISON), 0);
        assert!(!statuses.has(names::POISON));
        assert!(statuses.is_empty());
    }

    #[test]
    fn test_stacking_is_additive() {
        let mut statuses = StatusManager::new();
        statuses.add(names::STRENGTH, 2);
        statuses.add(names::STRENGTH, 3);
        assert_eq!(statuses.amount_of(names::STRENGTH), 5);
        assert_eq!(statuses.len(), 1);
    }

    #[test]
    fn test_duration_keeps_minimum() {
        let mut statuses = StatusManager::new();
        statuses.add_with(names::WEAK, 1, 3, StatusCategory::Debuff);
        statuses.add_with(names::WEAK, 1, 5, StatusCategory::Debuff);
        assert_eq!(statuses.get(names::WEAK).unwrap().duration, 3);

        statuses.add_with(names::WEAK, 1, 2, StatusCategory::Debuff);
        assert_eq!(statuses.get(names::WEAK).unwrap().duration, 2);
        assert_eq!(statuses.amount_of(names::WEAK), 3);
    }

    #[test]
    fn test_timed_add_shortens_indefinite() {
        let mut statuses = StatusManager::new();
        statuses.add(names::FRAIL, 1);
        statuses.add_with(names::FRAIL, 1, 2, StatusCategory::Debuff);
        assert_eq!(statuses.get(names::FRAIL).unwrap().duration, 2);
    }

    #[test]
    fn test_indefinite_add_keeps_timed() {
        let mut statuses = StatusManager::new();
        statuses.add_with(names::FRAIL, 1, 2, StatusCategory::Debuff);
        statuses.add(names::FRAIL, 1);
        assert_eq!(statuses.get(names::FRAIL).unwrap().duration, 2);
    }

    #[test]
    fn test_category_set_on_create_only() {
        let mut statuses = StatusManager::new();
        statuses.add_with(names::WEAK, 1, 2, StatusCategory::Debuff);
        statuses.add_with(names::WEAK, 1, 2, StatusCategory::Buff);
        assert_eq!(statuses.get(names::WEAK).unwrap().category, StatusCategory::Debuff);
    }

    #[test]
    fn test_stacking_saturates() {
        let mut statuses = StatusManager::new();
        statuses.add(names::STRENGTH, i32::MAX);
        statuses.add(names::STRENGTH, 10);
        assert_eq!(statuses.amount_of(names::STRENGTH), i32::MAX);

        statuses.add(names::WEAK, i32::MIN);
        statuses.add(names::WEAK, -1);
        assert_eq!(statuses.amount_of(names::WEAK), i32::MIN);
    }

    #[test]
    fn test_non_positive_amount_not_removed() {
        let mut statuses = StatusManager::new();
        statuses.add(names::POISON, 1);
        statuses.add(names::POISON, -1);
        assert!(statuses.has(names::POISON));
        assert_eq!(statuses.amount_of(names::POISON), 0);

        statuses.add(names::POISON, -1);
        assert_eq!(statuses.amount_of(names::POISON), -1);
    }

    #[test]
    fn test_tick_all_expires_in_same_pass() {
        let mut statuses = StatusManager::new();
        statuses.add_with(names::VULNERABLE, 2, 1, StatusCategory::Debuff);
        statuses.add_with(names::WEAK, 1, 2, StatusCategory::Debuff);
        statuses.add(names::STRENGTH, 1);

        statuses.tick_all();
        assert!(!statuses.has(names::VULNERABLE));
        assert_eq!(statuses.get(names::WEAK).unwrap().duration, 1);
        assert!(statuses.has(names::STRENGTH));

        statuses.tick_all();
        assert!(!statuses.has(names::WEAK));
        assert!(statuses.has(names::STRENGTH));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut statuses = StatusManager::new();
        statuses.add(names::STRENGTH, 1);
        statuses.add(names::DEXTERITY, 1);

        assert!(statuses.remove(names::STRENGTH).is_some());
        assert!(statuses.remove(names::STRENGTH).is_none());
        assert_eq!(statuses.len(), 1);

        statuses.clear_all();
        assert!(statuses.is_empty());
    }

    #[test]
    fn test_sorted() {
        let mut statuses = StatusManager::new();
        statuses.add(names::WEAK, 1);
        statuses.add(names::BURN, 1);
        statuses.add("custom_glow", 4);

        let order: Vec<_> = statuses.sorted().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(order, vec!["burn", "custom_glow", "weak"]);
    }
}
