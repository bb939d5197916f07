//! # Player
//!
//! The adventurer: stats, progression, inventory, move budget and the trap
//! riddle that binds them after a trap goes off.

use crate::config::{
    DEFAULT_PLAYER_ATTACK, DEFAULT_PLAYER_DEFENSE, DEFAULT_PLAYER_HEALTH, DEFAULT_PLAYER_NAME,
    DEFAULT_PLAYER_SPEED, EXPERIENCE_PER_LEVEL, LEVEL_UP_ATTACK_BONUS, LEVEL_UP_DEFENSE_BONUS,
    LEVEL_UP_HEALTH_BONUS, STARTING_MOVES,
};
use crate::game::{
    new_entity_id, Artifact, CombatStrategy, Entity, EntityId, EntityStats, KeyId, Notification,
    Position, PuzzleObserver,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A riddle the player must answer to shake off a sprung trap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapRiddle {
    pub question: String,
    pub answer: String,
}

impl TrapRiddle {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The player character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: EntityId,
    pub stats: EntityStats,
    pub level: u32,
    pub experience: u32,
    pub position: Position,
    pub inventory: Vec<Artifact>,
    pub combat_strategy: CombatStrategy,
    remaining_moves: u32,
    trap_riddle: Option<TrapRiddle>,
    trapped: bool,
    notifications: Vec<String>,
}

impl Player {
    /// Creates a level 1 player at the origin.
    pub fn new(name: impl Into<String>, health: i32, attack: i32, defense: i32) -> Self {
        Self {
            id: new_entity_id(),
            stats: EntityStats::new(name, "", health, attack, defense, DEFAULT_PLAYER_SPEED),
            level: 1,
            experience: 0,
            position: Position::origin(),
            inventory: Vec::new(),
            combat_strategy: CombatStrategy::Aggressive,
            remaining_moves: STARTING_MOVES,
            trap_riddle: None,
            trapped: false,
            notifications: Vec::new(),
        }
    }

    /// Sets the position without any validity check.
    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    /// Switches combat strategy and returns a confirmation message.
    pub fn set_combat_strategy(&mut self, strategy: CombatStrategy) -> String {
        debug!("{} switches to {} strategy", self.stats.name, strategy);
        self.combat_strategy = strategy;
        strategy.switch_message()
    }

    /// Adds experience, levelling up at most once when the threshold is met.
    ///
    /// Returns true if the player levelled up.
    pub fn gain_experience(&mut self, amount: u32) -> bool {
        self.experience = self.experience.saturating_add(amount);

        if self.experience >= self.level.saturating_mul(EXPERIENCE_PER_LEVEL) {
            self.level_up();
            true
        } else {
            false
        }
    }

    fn level_up(&mut self) {
        self.level += 1;
        self.stats.max_health += LEVEL_UP_HEALTH_BONUS;
        self.stats.health = self.stats.max_health;
        self.stats.attack += LEVEL_UP_ATTACK_BONUS;
        self.stats.defense += LEVEL_UP_DEFENSE_BONUS;
        info!("{} reached level {}", self.stats.name, self.level);
    }

    /// Puts an artifact in the inventory and applies its bonuses.
    pub fn add_artifact(&mut self, artifact: Artifact) {
        let health = artifact.health_bonus();
        self.stats.max_health = self.stats.max_health.saturating_add(health).max(0);
        self.stats.health = self
            .stats
            .health
            .saturating_add(health)
            .clamp(0, self.stats.max_health);
        self.stats.attack = self.stats.attack.saturating_add(artifact.attack_bonus());
        self.stats.defense = self.stats.defense.saturating_add(artifact.defense_bonus());
        debug!("{} obtained {}", self.stats.name, artifact.name);
        self.inventory.push(artifact);
    }

    /// Case-insensitive lookup by artifact name.
    pub fn has_artifact(&self, name: &str) -> bool {
        self.inventory
            .iter()
            .any(|artifact| artifact.name.eq_ignore_ascii_case(name))
    }

    pub fn has_key(&self, key_id: KeyId) -> bool {
        self.inventory
            .iter()
            .any(|artifact| artifact.key_id() == Some(key_id))
    }

    /// Binds the player with a riddle and marks them trapped.
    pub fn set_trap_riddle(&mut self, riddle: TrapRiddle) {
        self.trap_riddle = Some(riddle);
        self.trapped = true;
    }

    pub fn trap_riddle(&self) -> Option<&TrapRiddle> {
        self.trap_riddle.as_ref()
    }

    /// Answers the pending trap riddle. A correct answer clears it.
    pub fn solve_trap(&mut self, answer: &str) -> bool {
        let solved = self
            .trap_riddle
            .as_ref()
            .is_some_and(|riddle| riddle.answer.eq_ignore_ascii_case(answer.trim()));

        if solved {
            self.trap_riddle = None;
            self.trapped = false;
        }
        solved
    }

    pub fn is_trapped(&self) -> bool {
        self.trapped
    }

    pub fn set_trapped(&mut self, trapped: bool) {
        self.trapped = trapped;
    }

    pub fn remaining_moves(&self) -> u32 {
        self.remaining_moves
    }

    /// Spends one move. Never goes below zero.
    pub fn decrement_moves(&mut self) {
        self.remaining_moves = self.remaining_moves.saturating_sub(1);
    }

    pub fn has_moves_left(&self) -> bool {
        self.remaining_moves > 0
    }

    /// Notifications received since the last [`Player::take_notifications`].
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    pub fn take_notifications(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notifications)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(
            DEFAULT_PLAYER_NAME,
            DEFAULT_PLAYER_HEALTH,
            DEFAULT_PLAYER_ATTACK,
            DEFAULT_PLAYER_DEFENSE,
        )
    }
}

impl Entity for Player {
    fn stats(&self) -> &EntityStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut EntityStats {
        &mut self.stats
    }

    fn defense_divisor(&self) -> i32 {
        2
    }
}

impl PuzzleObserver for Player {
    fn observer_id(&self) -> EntityId {
        self.id
    }

    fn update(&mut self, notification: &Notification) {
        if notification.recipient == self.id {
            self.notifications.push(notification.message.clone());
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Lvl {}) HP: {}/{} ATK: {} DEF: {}",
            self.stats.name,
            self.level,
            self.stats.health,
            self.stats.max_health,
            self.stats.attack,
            self.stats.defense
        )
    }
}
