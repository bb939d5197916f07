//! # Entities
//!
//! The stat block shared by every creature, the [`Entity`] trait that applies
//! damage and healing to it, and the [`Enemy`] type found in monster rooms.

use crate::game::{CombatStrategy, EnemyEvent, EnemyStance, EnemyState, Transition};
use log::debug;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base statistics for players and enemies.
///
/// Invariant: `0 <= health <= max_health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityStats {
    pub name: String,
    pub description: String,
    pub health: i32,
    pub max_health: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

impl EntityStats {
    /// Creates a stat block at full health.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        max_health: i32,
        attack: i32,
        defense: i32,
        speed: i32,
    ) -> Self {
        let max_health = max_health.max(0);
        Self {
            name: name.into(),
            description: description.into(),
            health: max_health,
            max_health,
            attack,
            defense,
            speed,
        }
    }

    /// Subtracts health, clamping at zero. Returns the health actually lost.
    pub fn lose_health(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = self.health.saturating_sub(amount.max(0)).max(0);
        before - self.health
    }

    /// Adds health, clamping at `max_health`. Returns the health actually gained.
    pub fn gain_health(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount.max(0)).min(self.max_health);
        self.health - before
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Common behavior for anything with an [`EntityStats`] block.
pub trait Entity {
    fn stats(&self) -> &EntityStats;

    fn stats_mut(&mut self) -> &mut EntityStats;

    /// Divisor applied to defense when mitigating incoming damage.
    fn defense_divisor(&self) -> i32 {
        3
    }

    /// Applies a raw hit. At least one point always lands, and health never
    /// drops below zero. Returns the mitigated damage.
    fn take_damage(&mut self, raw_damage: i32) -> i32 {
        let divisor = self.defense_divisor().max(1);
        let stats = self.stats_mut();
        let damage = raw_damage.saturating_sub(stats.defense / divisor).max(1);
        stats.lose_health(damage);
        damage
    }

    /// Restores health up to the maximum. Negative amounts are ignored.
    fn heal(&mut self, amount: i32) -> i32 {
        self.stats_mut().gain_health(amount)
    }

    fn is_alive(&self) -> bool {
        self.stats().is_alive()
    }

    fn name(&self) -> &str {
        &self.stats().name
    }

    fn health(&self) -> i32 {
        self.stats().health
    }

    fn max_health(&self) -> i32 {
        self.stats().max_health
    }
}

/// A hostile creature guarding a monster room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub stats: EntityStats,
    pub state: EnemyState,
    pub strategy: CombatStrategy,
    pub experience_value: u32,
}

impl Enemy {
    /// Creates a sleeping enemy fighting with the given stance.
    pub fn new(stats: EntityStats, experience_value: u32, stance: EnemyStance) -> Self {
        Self {
            stats,
            state: EnemyState::Sleeping,
            strategy: CombatStrategy::Enemy(stance),
            experience_value,
        }
    }

    /// Feeds an event to the state machine and applies the result.
    pub fn handle_event(&mut self, event: EnemyEvent, rng: &mut StdRng) -> Transition {
        let transition =
            self.state
                .transition(event, self.stats.health, self.stats.max_health, rng);
        self.state = transition.to;
        transition
    }

    /// The player has been seen. Returns the enemy's visible reaction, if any.
    pub fn player_detected(&mut self, rng: &mut StdRng) -> Option<String> {
        let name = self.stats.name.clone();
        self.handle_event(EnemyEvent::PlayerDetected, rng).narrate(&name)
    }

    /// The player has struck the enemy.
    pub fn player_attacked(&mut self, rng: &mut StdRng) -> Option<String> {
        let name = self.stats.name.clone();
        self.handle_event(EnemyEvent::PlayerAttacked, rng).narrate(&name)
    }

    /// Applies a hit and, if the enemy survives below a third of its health,
    /// gives it the chance to lose its nerve.
    pub fn receive_attack(&mut self, raw_damage: i32, rng: &mut StdRng) -> (i32, Option<String>) {
        let damage = self.take_damage(raw_damage);
        let mut reaction = None;

        if self.is_alive() && self.stats.health < self.stats.max_health / 3 {
            debug!("{} is at low health ({})", self.stats.name, self.stats.health);
            let name = self.stats.name.clone();
            reaction = self.handle_event(EnemyEvent::LowHealth, rng).narrate(&name);
        }

        (damage, reaction)
    }

    /// Attack value for this turn, from the enemy's stance.
    pub fn attack(&self, rng: &mut StdRng) -> i32 {
        self.strategy.calculate_attack(&self.stats, rng)
    }

    pub fn can_avoid(&self) -> bool {
        self.state.can_avoid()
    }

    pub fn state_description(&self) -> &'static str {
        self.state.description()
    }
}

impl Entity for Enemy {
    fn stats(&self) -> &EntityStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut EntityStats {
        &mut self.stats
    }
}

impl fmt::Display for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (HP: {}/{})",
            self.stats.name, self.stats.health, self.stats.max_health
        )
    }
}
