//! # Enemy State Machine
//!
//! Enemies move between sleeping, hunting and fleeing in response to what the
//! player does. The transition table lives in [`EnemyState::transition`];
//! callers own the enemy and apply the returned state.
//!
//! | State    | PlayerDetected   | PlayerAttacked                    | LowHealth      |
//! |----------|------------------|-----------------------------------|----------------|
//! | Sleeping | Hunting (70%)    | Hunting                           | -              |
//! | Hunting  | -                | Fleeing if health < max/4         | Fleeing (60%)  |
//! | Fleeing  | -                | Hunting (30%)                     | -              |

use crate::utils::math::chance;
use log::debug;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Chance that a sleeping enemy wakes when the player walks in.
pub const WAKE_ON_DETECTION_CHANCE: f64 = 0.7;

/// Chance that a hunting enemy flees once its health drops below a third.
pub const FLEE_ON_LOW_HEALTH_CHANCE: f64 = 0.6;

/// Chance that a fleeing enemy turns on an attacker.
pub const DESPERATE_COUNTERATTACK_CHANCE: f64 = 0.3;

/// Behavioral mode of an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EnemyState {
    #[default]
    Sleeping,
    Hunting,
    Fleeing,
}

/// Stimuli an enemy reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyEvent {
    /// The player entered the room or was spotted sneaking
    PlayerDetected,
    /// The player landed a blow
    PlayerAttacked,
    /// Health fell below a third of the maximum after taking damage
    LowHealth,
}

/// Result of feeding one event to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: EnemyState,
    pub to: EnemyState,
    pub event: EnemyEvent,
}

impl EnemyState {
    /// Computes the next state for `event`.
    ///
    /// `health` and `max_health` are the enemy's current values; only the
    /// hunting-while-attacked branch inspects them.
    pub fn transition(
        self,
        event: EnemyEvent,
        health: i32,
        max_health: i32,
        rng: &mut StdRng,
    ) -> Transition {
        let to = match (self, event) {
            (EnemyState::Sleeping, EnemyEvent::PlayerDetected) => {
                if chance(rng, WAKE_ON_DETECTION_CHANCE) {
                    EnemyState::Hunting
                } else {
                    EnemyState::Sleeping
                }
            }
            (EnemyState::Sleeping, EnemyEvent::PlayerAttacked) => EnemyState::Hunting,
            (EnemyState::Sleeping, EnemyEvent::LowHealth) => EnemyState::Sleeping,

            (EnemyState::Hunting, EnemyEvent::PlayerDetected) => EnemyState::Hunting,
            (EnemyState::Hunting, EnemyEvent::PlayerAttacked) => {
                if health < max_health / 4 {
                    EnemyState::Fleeing
                } else {
                    EnemyState::Hunting
                }
            }
            (EnemyState::Hunting, EnemyEvent::LowHealth) => {
                if chance(rng, FLEE_ON_LOW_HEALTH_CHANCE) {
                    EnemyState::Fleeing
                } else {
                    EnemyState::Hunting
                }
            }

            (EnemyState::Fleeing, EnemyEvent::PlayerDetected) => EnemyState::Fleeing,
            (EnemyState::Fleeing, EnemyEvent::PlayerAttacked) => {
                if chance(rng, DESPERATE_COUNTERATTACK_CHANCE) {
                    EnemyState::Hunting
                } else {
                    EnemyState::Fleeing
                }
            }
            (EnemyState::Fleeing, EnemyEvent::LowHealth) => EnemyState::Fleeing,
        };

        if to != self {
            debug!("enemy state {:?} -> {:?} on {:?}", self, to, event);
        }

        Transition {
            from: self,
            to,
            event,
        }
    }

    /// Whether the player can slip past an enemy in this state.
    pub fn can_avoid(self) -> bool {
        match self {
            EnemyState::Sleeping | EnemyState::Fleeing => true,
            EnemyState::Hunting => false,
        }
    }

    /// Human-readable description used in room text.
    pub fn description(self) -> &'static str {
        match self {
            EnemyState::Sleeping => "sleeping soundly, unaware of your presence",
            EnemyState::Hunting => "alert and aggressively hunting you",
            EnemyState::Fleeing => "wounded and trying to escape",
        }
    }
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    /// Narrates the enemy's reaction, if it has a visible one.
    pub fn narrate(&self, enemy_name: &str) -> Option<String> {
        let line = match (self.from, self.event, self.to) {
            (EnemyState::Sleeping, EnemyEvent::PlayerDetected, EnemyState::Hunting) => {
                format!("The {enemy_name} wakes up and sees you!")
            }
            (EnemyState::Sleeping, EnemyEvent::PlayerDetected, _) => {
                format!("The {enemy_name} stirs but remains asleep.")
            }
            (EnemyState::Sleeping, EnemyEvent::PlayerAttacked, _) => {
                format!("The {enemy_name} roars in pain and anger as it wakes!")
            }
            (EnemyState::Hunting, EnemyEvent::PlayerDetected, _) => {
                format!("The {enemy_name} is already hunting you!")
            }
            (EnemyState::Hunting, EnemyEvent::PlayerAttacked, EnemyState::Fleeing) => {
                format!("The {enemy_name} is badly hurt and tries to flee!")
            }
            (EnemyState::Hunting, EnemyEvent::PlayerAttacked, _) => {
                format!("The {enemy_name} growls and fights back!")
            }
            (EnemyState::Hunting, EnemyEvent::LowHealth, EnemyState::Fleeing) => {
                format!("The {enemy_name} realizes it's outmatched and tries to flee!")
            }
            (EnemyState::Fleeing, EnemyEvent::PlayerDetected, _) => {
                format!("The {enemy_name} continues trying to escape!")
            }
            (EnemyState::Fleeing, EnemyEvent::PlayerAttacked, EnemyState::Hunting) => {
                format!("The {enemy_name} turns to fight in desperation!")
            }
            (EnemyState::Fleeing, EnemyEvent::PlayerAttacked, _) => {
                format!("The {enemy_name} desperately tries to avoid your attack!")
            }
            _ => return None,
        };
        Some(line)
    }
}
