//! The combat state machine.
//!
//! ```text
//! WaitingForInput -> PlayerTurn -> EnemyTurn -> PlayerTurn -> ...
//!                         |             |
//!                      Victory        Defeat
//! ```
//!
//! Commands validate completely before mutating anything; a failed command
//! returns a `CombatError` and leaves the combat exactly as it was.

use super::ai::{IntentPolicy, ScriptedAi};
use super::snapshot::{CharacterRecord, CombatSnapshot};
use super::state::{CombatLog, CombatState, LogEntry};
use crate::cards::CardInstance;
use crate::combatant::{Combatant, Enemy, Player};
use crate::core::entity::CardInstanceId;
use crate::core::{CombatConfig, CombatError};
use crate::effects::PlayOutcome;

/// A single encounter between the player and a group of enemies.
///
/// The combat owns the player while it runs; `into_player` hands it back.
///
/// ## Example
///
/// ```
/// use rust_spire::cards::CardLibrary;
/// use rust_spire::combat::{Combat, CombatState};
/// use rust_spire::combatant::{Combatant, Enemy, Intent, Player};
/// use rust_spire::core::{GameRng, PlayerConfig};
/// use rust_spire::deck::Deck;
///
/// let deck = Deck::new(CardLibrary::starter_deck(), GameRng::new(7));
/// let player = Player::new(&PlayerConfig::default(), deck);
/// let mut combat = Combat::new(player, vec![Enemy::new("Cultist", 48, Intent::default())]);
///
/// combat.start_player_turn();
/// assert_eq!(combat.state(), CombatState::PlayerTurn);
///
/// let strike = combat.player().deck().find_in_hand_by_name("Strike").unwrap();
/// combat.play_card(strike, 0).unwrap();
/// assert_eq!(combat.enemies()[0].vitals().current_hp(), 42);
/// ```
#[derive(Clone, Debug)]
pub struct Combat<P: IntentPolicy = ScriptedAi> {
    player: Player,
    enemies: Vec<Enemy>,
    state: CombatState,
    turn_number: u32,
    log: CombatLog,
    policy: P,
    config: CombatConfig,
}

impl Combat<ScriptedAi> {
    /// Start an encounter with the scripted AI and default config.
    #[must_use]
    pub fn new(player: Player, enemies: Vec<Enemy>) -> Self {
        Self::with_policy(player, enemies, ScriptedAi, CombatConfig::default())
    }
}

impl<P: IntentPolicy> Combat<P> {
    /// Start an encounter: the player draws an opening hand and the combat
    /// waits for `start_player_turn`.
    pub fn with_policy(mut player: Player, enemies: Vec<Enemy>, policy: P, config: CombatConfig) -> Self {
        player.start_combat();

        let mut log = CombatLog::new();
        log.push(LogEntry::CombatStarted { enemy_count: enemies.len() });

        Self {
            player,
            enemies,
            state: CombatState::WaitingForInput,
            turn_number: 0,
            log,
            policy,
            config,
        }
    }

    // === Commands ===

    /// Begin the next player turn. Does nothing once the combat is over.
    pub fn start_player_turn(&mut self) {
        if self.state.is_terminal() {
            return;
        }

        self.turn_number += 1;
        self.state = CombatState::PlayerTurn;
        self.log.push(LogEntry::TurnStarted { turn: self.turn_number });
        self.log.push(LogEntry::PlayerTurnBegins);

        self.player.start_turn();

        let vitals = self.player.vitals();
        self.log.push(LogEntry::PlayerStatus {
            hp: vitals.current_hp(),
            max_hp: vitals.max_hp(),
            block: vitals.block(),
            energy: vitals.energy,
            max_energy: vitals.max_energy,
        });
        self.log.push(LogEntry::HandSize { size: self.player.deck().hand_size() });

        for enemy in self.enemies.iter().filter(|enemy| enemy.is_alive()) {
            let vitals = enemy.vitals();
            self.log.push(LogEntry::EnemyStatus {
                name: vitals.name.clone(),
                hp: vitals.current_hp(),
                max_hp: vitals.max_hp(),
                block: vitals.block(),
            });
            if !enemy.intent_description().is_empty() {
                self.log.push(LogEntry::EnemyIntent {
                    name: vitals.name.clone(),
                    description: enemy.intent_description().to_string(),
                });
            }
        }
    }

    /// Play a card from hand at the enemy in `target_index`.
    ///
    /// The target must be a living enemy even for cards that do not aim at
    /// one. Powers resolve without a target, so their grants land on the
    /// player.
    pub fn play_card(
        &mut self,
        id: CardInstanceId,
        target_index: usize,
    ) -> Result<PlayOutcome, CombatError> {
        self.check_command(target_index)?;

        let aims = self
            .player
            .deck()
            .hand_card(id)
            .ok_or(CombatError::CardNotInHand)?
            .card_type()
            .targets_enemy();

        let target: Option<&mut dyn Combatant> = if aims {
            Some(&mut self.enemies[target_index])
        } else {
            None
        };
        let outcome = self.player.play_card(id, target)?;

        self.log.push(LogEntry::CardPlayed { card: outcome.card.clone() });
        for effect in &outcome.effects {
            self.log.push(LogEntry::Effect(effect.clone()));
        }

        let target = &self.enemies[target_index];
        if aims && !target.is_alive() {
            self.log.push(LogEntry::Defeated { name: target.name().to_string() });
        }

        Ok(outcome)
    }

    /// Play the first card in hand whose name matches, case-insensitively.
    pub fn play_card_named(
        &mut self,
        name: &str,
        target_index: usize,
    ) -> Result<PlayOutcome, CombatError> {
        self.check_command(target_index)?;
        let id = self
            .player
            .deck()
            .find_in_hand_by_name(name)
            .ok_or_else(|| CombatError::CardNameNotInHand { name: name.to_string() })?;
        self.play_card(id, target_index)
    }

    /// Turn and target checks shared by every card command.
    fn check_command(&self, target_index: usize) -> Result<(), CombatError> {
        if self.state != CombatState::PlayerTurn {
            return Err(CombatError::NotPlayerTurn { state: self.state.to_string() });
        }

        let target = self.enemies.get(target_index).ok_or(CombatError::InvalidTarget {
            index: target_index,
            enemy_count: self.enemies.len(),
        })?;
        if !target.is_alive() {
            return Err(CombatError::TargetDefeated { index: target_index });
        }
        Ok(())
    }

    /// End the player turn and run the enemy turns.
    ///
    /// When every enemy is already dead the combat ends in victory and no
    /// enemy acts. Otherwise each living enemy acts in order; the first one
    /// to drop the player to 0 HP ends the combat in defeat on the spot.
    /// If the player survives, the next player turn begins.
    pub fn end_player_turn(&mut self) -> Result<(), CombatError> {
        if self.state != CombatState::PlayerTurn {
            return Err(CombatError::NotPlayerTurn { state: self.state.to_string() });
        }

        self.player.end_turn();
        self.log.push(LogEntry::PlayerTurnEnds);

        if self.enemies.iter().all(|enemy| !enemy.is_alive()) {
            self.state = CombatState::Victory;
            self.log.push(LogEntry::Victory);
            return Ok(());
        }

        self.run_enemy_turns();
        Ok(())
    }

    fn run_enemy_turns(&mut self) {
        self.state = CombatState::EnemyTurn;

        for enemy in self.enemies.iter_mut().filter(|enemy| enemy.is_alive()) {
            enemy.start_turn();
            let intent = self.policy.choose_intent(enemy, self.turn_number);
            enemy.declare(intent);

            self.log.push(LogEntry::EnemyActs {
                name: enemy.name().to_string(),
                description: enemy.intent_description().to_string(),
            });

            for effect in enemy.execute_intent(&mut self.player) {
                self.log.push(LogEntry::Effect(effect));
            }

            enemy.end_turn();

            if !self.player.is_alive() {
                self.state = CombatState::Defeat;
                self.log.push(LogEntry::Defeat);
                return;
            }
        }

        self.start_player_turn();
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> CombatState {
        self.state
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Every enemy, defeated ones included.
    #[must_use]
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    /// Enemies still standing.
    pub fn living_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|enemy| enemy.is_alive())
    }

    #[must_use]
    pub fn log(&self) -> &CombatLog {
        &self.log
    }

    /// Cards in the player's hand.
    #[must_use]
    pub fn available_cards(&self) -> &[CardInstance] {
        self.player.deck().hand()
    }

    #[must_use]
    pub fn is_combat_active(&self) -> bool {
        !self.state.is_terminal()
    }

    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.state == CombatState::Victory
    }

    #[must_use]
    pub fn is_defeat(&self) -> bool {
        self.state == CombatState::Defeat
    }

    #[must_use]
    pub fn snapshot(&self) -> CombatSnapshot {
        CombatSnapshot {
            state: self.state,
            turn_number: self.turn_number,
            player: CharacterRecord::from(&self.player),
            enemies: self.enemies.iter().map(CharacterRecord::from).collect(),
            hand: self.available_cards().iter().map(CardInstance::to_record).collect(),
            log: self.log.recent_lines(self.config.log_view_len),
        }
    }

    /// End the encounter and take the player back.
    #[must_use]
    pub fn into_player(self) -> Player {
        self.player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardLibrary, CardType};
    use crate::combatant::Intent;
    use crate::core::{GameRng, PlayerConfig};
    use crate::deck::Deck;
    use crate::status::names;

    fn player_with(cards: Vec<Card>) -> Player {
        Player::new(&PlayerConfig::default(), Deck::new(cards, GameRng::new(5)))
    }

    fn strikes(count: usize) -> Vec<Card> {
        std::iter::repeat_with(|| CardLibrary::card("Strike").unwrap()).take(count).collect()
    }

    fn started(player: Player, enemies: Vec<Enemy>) -> Combat {
        let mut combat = Combat::new(player, enemies);
        combat.start_player_turn();
        combat
    }

    #[test]
    fn test_new_waits_for_input() {
        let combat = Combat::new(player_with(strikes(9)), vec![Enemy::new("A", 10, Intent::default())]);
        assert_eq!(combat.state(), CombatState::WaitingForInput);
        assert_eq!(combat.turn_number(), 0);
        assert!(combat.is_combat_active());
        assert_eq!(combat.player().deck().hand_size(), 5);
    }

    #[test]
    fn test_play_before_turn_is_rejected() {
        let mut combat = Combat::new(player_with(strikes(9)), vec![Enemy::new("A", 10, Intent::default())]);
        let err = combat.play_card_named("Strike", 0).unwrap_err();
        assert_eq!(err.reason(), "not_player_turn");
    }

    #[test]
    fn test_invalid_and_defeated_targets() {
        let mut dead = Enemy::new("B", 10, Intent::default());
        dead.take_damage(10, true);
        let mut combat = started(player_with(strikes(9)), vec![Enemy::new("A", 10, Intent::default()), dead]);

        let err = combat.play_card_named("Strike", 5).unwrap_err();
        assert_eq!(err, CombatError::InvalidTarget { index: 5, enemy_count: 2 });

        let err = combat.play_card_named("Strike", 1).unwrap_err();
        assert_eq!(err, CombatError::TargetDefeated { index: 1 });

        assert_eq!(combat.player().vitals().energy, 3);
    }

    #[test]
    fn test_unknown_card_name() {
        let mut combat = started(player_with(strikes(9)), vec![Enemy::new("A", 10, Intent::default())]);
        let err = combat.play_card_named("Bash", 0).unwrap_err();
        assert_eq!(err, CombatError::CardNameNotInHand { name: "Bash".into() });
        assert_eq!(err.reason(), "card_not_in_hand");
    }

    #[test]
    fn test_power_lands_on_player() {
        let mut cards = strikes(4);
        cards.push(CardLibrary::card("Metallicize").unwrap());
        let mut combat = Combat::new(player_with(cards), vec![Enemy::new("A", 30, Intent::default())]);
        combat.start_player_turn();

        combat.play_card_named("Metallicize", 0).unwrap();

        assert_eq!(combat.player().statuses().amount_of(names::METALLICIZE), 3);
        assert!(!combat.enemies()[0].statuses().has(names::METALLICIZE));
    }

    #[test]
    fn test_defeated_enemy_logged_and_kept() {
        let mut combat = started(player_with(strikes(9)), vec![Enemy::new("A", 6, Intent::default())]);
        combat.play_card_named("Strike", 0).unwrap();

        assert_eq!(combat.enemies().len(), 1);
        assert!(!combat.enemies()[0].is_alive());
        assert_eq!(combat.living_enemies().count(), 0);
        assert!(combat.log().iter().any(|e| *e == LogEntry::Defeated { name: "A".into() }));
    }

    #[test]
    fn test_enemy_turn_then_next_player_turn() {
        let mut combat = started(player_with(strikes(9)), vec![Enemy::new("A", 30, Intent::default())]);
        combat.end_player_turn().unwrap();

        assert_eq!(combat.state(), CombatState::PlayerTurn);
        assert_eq!(combat.turn_number(), 2);
        // Turn 1 scripted attack: 6 damage.
        assert_eq!(combat.player().vitals().current_hp(), 74);
        assert_eq!(combat.enemies()[0].intent(), &Intent::Attack { damage: 6 });
    }

    #[test]
    fn test_end_turn_outside_player_turn() {
        let mut combat = Combat::new(player_with(strikes(9)), vec![Enemy::new("A", 30, Intent::default())]);
        assert!(matches!(combat.end_player_turn(), Err(CombatError::NotPlayerTurn { .. })));
        assert_eq!(combat.state(), CombatState::WaitingForInput);
    }

    #[test]
    fn test_start_player_turn_after_end_is_noop() {
        let mut combat = started(player_with(strikes(9)), vec![Enemy::new("A", 6, Intent::default())]);
        combat.play_card_named("Strike", 0).unwrap();
        combat.end_player_turn().unwrap();
        assert!(combat.is_victory());

        combat.start_player_turn();
        assert!(combat.is_victory());
        assert_eq!(combat.turn_number(), 1);
    }

    #[test]
    fn test_snapshot_contents() {
        let mut combat = started(player_with(strikes(9)), vec![Enemy::new("A", 30, Intent::default())]);
        let id = combat.available_cards()[0].id;
        combat.play_card(id, 0).unwrap();

        let snapshot = combat.snapshot();
        assert_eq!(snapshot.state, CombatState::PlayerTurn);
        assert_eq!(snapshot.turn_number, 1);
        assert_eq!(snapshot.enemies[0].current_hp, 24);
        assert_eq!(snapshot.hand.len(), combat.available_cards().len());
        assert!(snapshot.log.len() <= CombatConfig::default().log_view_len);
        assert_eq!(snapshot.log.last().map(String::as_str), Some("  -> A takes 6 damage"));
    }

    #[test]
    fn test_into_player_returns_state() {
        let mut combat = started(player_with(strikes(9)), vec![Enemy::new("A", 30, Intent::default())]);
        combat.play_card_named("Strike", 0).unwrap();
        let player = combat.into_player();
        assert_eq!(player.vitals().energy, 2);
    }

    #[test]
    fn test_skill_ignores_target_for_damage() {
        let cards = vec![Card::new("Defend", CardType::Skill, 1).with_block(5); 5];
        let mut combat = started(player_with(cards), vec![Enemy::new("A", 30, Intent::default())]);
        combat.play_card_named("defend", 0).unwrap();
        assert_eq!(combat.player().vitals().block(), 5);
        assert_eq!(combat.enemies()[0].vitals().current_hp(), 30);
    }
}
