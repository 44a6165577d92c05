//! The game session: one player fighting through floors of encounters.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::{CardInstance, CardLibrary};
use crate::combat::{CharacterRecord, Combat, CombatSnapshot, ScriptedAi};
use crate::combatant::{Combatant, Enemy, Player};
use crate::core::entity::CardInstanceId;
use crate::core::{CombatError, ConfigError, GameConfig, GameRng, RecordError};
use crate::deck::Deck;
use crate::effects::PlayOutcome;
use crate::encounter::EncounterGenerator;

/// Whole-session view for hosts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub floor: u32,
    pub gold: u32,
    pub player: CharacterRecord,
    pub combat: Option<CombatSnapshot>,
}

impl GameSnapshot {
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A play session: the command and query surface hosts drive.
///
/// ## Example
///
/// ```
/// use rust_spire::core::GameConfig;
/// use rust_spire::game::Game;
///
/// let mut game = Game::new(GameConfig::new(3)).unwrap();
/// game.start_new_combat(None);
///
/// assert!(game.is_combat_active());
/// assert_eq!(game.game_state().floor, 1);
/// ```
pub struct Game {
    config: GameConfig,
    /// The player between encounters. While `combat` is set, the combat
    /// owns the real player and this is a placeholder.
    idle_player: Player,
    /// The current or most recent encounter.
    combat: Option<Combat>,
    encounters: EncounterGenerator,

    /// Current floor, starting at 1.
    pub floor: u32,

    pub gold: u32,
}

impl Game {
    /// New session with the starter deck on floor 1.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = GameRng::new(config.seed);
        let deck = Deck::new(CardLibrary::starter_deck(), rng.fork());
        let player = Player::new(&config.player, deck);
        let encounters = EncounterGenerator::new(rng.fork());

        info!(seed = config.seed, "game created");
        Ok(Self {
            config,
            idle_player: player,
            combat: None,
            encounters,
            floor: 1,
            gold: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Commands ===

    /// Start an encounter and its first player turn.
    ///
    /// Without explicit enemies, the floor's tier picks them. Any previous
    /// encounter is discarded.
    pub fn start_new_combat(&mut self, enemies: Option<Vec<Enemy>>) -> &Combat {
        let enemies = enemies.unwrap_or_else(|| self.encounters.for_floor(self.floor));
        let player = match self.combat.take() {
            Some(previous) => previous.into_player(),
            None => std::mem::take(&mut self.idle_player),
        };

        info!(floor = self.floor, enemies = enemies.len(), "starting combat");
        let mut combat = Combat::with_policy(player, enemies, ScriptedAi, self.config.combat.clone());
        combat.start_player_turn();

        self.combat.insert(combat)
    }

    /// Play the first card in hand with this name (case-insensitive).
    pub fn play_card(&mut self, name: &str, target_index: usize) -> Result<PlayOutcome, CombatError> {
        self.combat_mut()?.play_card_named(name, target_index)
    }

    /// Play a specific card instance.
    pub fn play_card_by_id(
        &mut self,
        id: CardInstanceId,
        target_index: usize,
    ) -> Result<PlayOutcome, CombatError> {
        self.combat_mut()?.play_card(id, target_index)
    }

    pub fn end_turn(&mut self) -> Result<(), CombatError> {
        self.combat_mut()?.end_player_turn()
    }

    pub fn advance_floor(&mut self) {
        self.floor += 1;
        info!(floor = self.floor, "advanced floor");
    }

    // === Queries ===

    /// The current or most recent encounter.
    #[must_use]
    pub fn combat(&self) -> Option<&Combat> {
        self.combat.as_ref()
    }

    fn combat_mut(&mut self) -> Result<&mut Combat, CombatError> {
        self.combat.as_mut().ok_or(CombatError::NoActiveCombat)
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        self.combat.as_ref().map_or(&self.idle_player, Combat::player)
    }

    /// Cards in hand; empty outside combat.
    #[must_use]
    pub fn available_cards(&self) -> &[CardInstance] {
        self.combat().map(Combat::available_cards).unwrap_or_default()
    }

    /// Living enemies of the current encounter.
    #[must_use]
    pub fn enemies(&self) -> Vec<&Enemy> {
        self.combat()
            .map(|combat| combat.living_enemies().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_combat_active(&self) -> bool {
        self.combat().is_some_and(Combat::is_combat_active)
    }

    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.combat().is_some_and(Combat::is_victory)
    }

    #[must_use]
    pub fn is_defeat(&self) -> bool {
        self.combat().is_some_and(Combat::is_defeat)
    }

    #[must_use]
    pub fn combat_state(&self) -> Option<CombatSnapshot> {
        self.combat().map(Combat::snapshot)
    }

    #[must_use]
    pub fn game_state(&self) -> GameSnapshot {
        GameSnapshot {
            floor: self.floor,
            gold: self.gold,
            player: CharacterRecord::from(self.player()),
            combat: self.combat_state(),
        }
    }
}
