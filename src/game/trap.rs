//! # Traps
//!
//! A trap is hidden, active or disabled. Hidden traps still fire when stepped
//! on and become visible once they do.

use crate::utils::math::chance;
use log::debug;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chance that [`Trap::disarm`] disables an active trap.
pub const TRAP_STATE_DISARM_CHANCE: f64 = 0.7;

/// Visibility and readiness of a trap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrapState {
    #[default]
    Hidden,
    Active,
    Disabled,
}

impl TrapState {
    pub fn description(self) -> &'static str {
        match self {
            TrapState::Hidden => "hidden from view",
            TrapState::Active => "visible and ready to trigger",
            TrapState::Disabled => "disabled and harmless",
        }
    }
}

/// A damaging hazard placed in a trap room.
///
/// # Examples
///
/// ```
/// use labyrinth::{Trap, TrapState};
///
/// let mut trap = Trap::new("Spike Pit", "A pit filled with sharp spikes", 20);
/// assert_eq!(trap.state, TrapState::Hidden);
/// assert_eq!(trap.trigger(), 20);
/// assert_eq!(trap.state, TrapState::Active);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trap {
    pub name: String,
    pub description: String,
    pub damage: i32,
    pub state: TrapState,
}

impl Trap {
    /// Creates a hidden trap.
    pub fn new(name: impl Into<String>, description: impl Into<String>, damage: i32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            damage: damage.max(0),
            state: TrapState::Hidden,
        }
    }

    /// Creates a trap that is already visible.
    pub fn active(name: impl Into<String>, description: impl Into<String>, damage: i32) -> Self {
        Self {
            state: TrapState::Active,
            ..Self::new(name, description, damage)
        }
    }

    /// Springs the trap and returns the damage it deals.
    ///
    /// Hidden traps reveal themselves in the process. Disabled traps deal nothing.
    pub fn trigger(&mut self) -> i32 {
        match self.state {
            TrapState::Hidden => {
                debug!("hidden trap {} triggered and revealed", self.name);
                self.state = TrapState::Active;
                self.damage
            }
            TrapState::Active => self.damage,
            TrapState::Disabled => 0,
        }
    }

    /// Attempts to disable the trap. A hidden trap cannot be disarmed until
    /// it has been found.
    pub fn disarm(&mut self, rng: &mut StdRng) -> bool {
        match self.state {
            TrapState::Disabled => true,
            TrapState::Hidden => false,
            TrapState::Active => {
                if chance(rng, TRAP_STATE_DISARM_CHANCE) {
                    self.disable();
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Makes a hidden trap visible. Other states are untouched.
    pub fn reveal(&mut self) {
        if self.state == TrapState::Hidden {
            self.state = TrapState::Active;
        }
    }

    pub fn disable(&mut self) {
        debug!("trap {} disabled", self.name);
        self.state = TrapState::Disabled;
    }

    pub fn is_hidden(&self) -> bool {
        self.state == TrapState::Hidden
    }

    pub fn is_active(&self) -> bool {
        self.state == TrapState::Active
    }

    pub fn is_disabled(&self) -> bool {
        self.state == TrapState::Disabled
    }
}

impl fmt::Display for Trap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.state.description())
    }
}
