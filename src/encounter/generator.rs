//! Procedural encounter generation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::combatant::{Enemy, Intent};
use crate::core::GameRng;

/// Encounter difficulty, picked from the floor number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncounterTier {
    Easy,
    Medium,
    Boss,
}

impl EncounterTier {
    /// Floors 1-3 are easy, 4-6 medium, everything after is a boss.
    #[must_use]
    pub fn for_floor(floor: u32) -> Self {
        match floor {
            0..=3 => EncounterTier::Easy,
            4..=6 => EncounterTier::Medium,
            _ => EncounterTier::Boss,
        }
    }
}

/// Stat ranges for one kind of enemy. All bounds inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct EnemyKind {
    name: &'static str,
    hp: (i32, i32),
    attack: (i32, i32),
}

const EASY_GOBLIN: EnemyKind = EnemyKind { name: "Goblin", hp: (20, 30), attack: (5, 8) };

const MEDIUM_KINDS: [EnemyKind; 3] = [
    EnemyKind { name: "Goblin", hp: (25, 35), attack: (6, 9) },
    EnemyKind { name: "Orc", hp: (40, 50), attack: (8, 12) },
    EnemyKind { name: "Skeleton", hp: (30, 40), attack: (7, 10) },
];

const BOSS: EnemyKind = EnemyKind { name: "Dragon", hp: (100, 100), attack: (15, 15) };

/// Builds enemy groups from its own random stream.
///
/// ## Example
///
/// ```
/// use rust_spire::core::GameRng;
/// use rust_spire::encounter::{EncounterGenerator, EncounterTier};
///
/// let mut generator = EncounterGenerator::new(GameRng::new(9));
/// let boss = generator.generate(EncounterTier::Boss);
///
/// assert_eq!(boss.len(), 1);
/// assert_eq!(boss[0].intent_description(), "");
/// ```
#[derive(Clone, Debug)]
pub struct EncounterGenerator {
    rng: GameRng,
}

impl EncounterGenerator {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Enemies for the tier matching `floor`.
    pub fn for_floor(&mut self, floor: u32) -> Vec<Enemy> {
        self.generate(EncounterTier::for_floor(floor))
    }

    pub fn generate(&mut self, tier: EncounterTier) -> Vec<Enemy> {
        let enemies = match tier {
            EncounterTier::Easy => self.easy(),
            EncounterTier::Medium => self.medium(),
            EncounterTier::Boss => vec![self.spawn(BOSS, None)],
        };
        debug!(?tier, count = enemies.len(), "encounter generated");
        enemies
    }

    /// One or two goblins.
    pub fn easy(&mut self) -> Vec<Enemy> {
        let count = self.rng.roll(1, 2);
        (1..=count).map(|index| self.spawn(EASY_GOBLIN, Some(index))).collect()
    }

    /// One to three enemies, each a goblin, orc, or skeleton.
    pub fn medium(&mut self) -> Vec<Enemy> {
        let count = self.rng.roll(1, 3);
        (1..=count)
            .map(|index| {
                let kind = self.rng.choose(&MEDIUM_KINDS).copied().unwrap_or(MEDIUM_KINDS[0]);
                self.spawn(kind, Some(index))
            })
            .collect()
    }

    fn spawn(&mut self, kind: EnemyKind, index: Option<i32>) -> Enemy {
        let name = match index {
            Some(index) => format!("{} {index}", kind.name),
            None => kind.name.to_string(),
        };
        let max_hp = self.rng.roll(kind.hp.0, kind.hp.1);
        let damage = self.rng.roll(kind.attack.0, kind.attack.1);
        Enemy::new(name, max_hp, Intent::Attack { damage })
    }
}
