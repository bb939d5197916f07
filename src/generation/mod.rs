//! # Generation Module
//!
//! Procedural content generation for labyrinths, room contents and encounters.
//!
//! Mazes are carved by [`MazeGenerator`]; the tables in [`items`] and
//! [`encounters`] stock the special rooms. Every generator draws from an
//! explicitly passed [`StdRng`] so a seed always reproduces the same labyrinth.

pub mod encounters;
pub mod items;
pub mod maze;

pub use encounters::*;
pub use items::*;
pub use maze::*;

use crate::config::{DEFAULT_LABYRINTH_HEIGHT, DEFAULT_LABYRINTH_WIDTH};
use crate::{LabyrinthError, LabyrinthResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Smallest divisor accepted for a special room type. Keeps every type at or
/// below a fifth of all rooms.
pub const MIN_ROOM_DIVISOR: u32 = 5;

/// Configuration for procedural generation.
///
/// Special room counts are `rooms / divisor`, rounded down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Grid width in rooms
    pub width: u32,
    /// Grid height in rooms
    pub height: u32,
    pub puzzle_divisor: u32,
    pub treasure_divisor: u32,
    pub monster_divisor: u32,
    pub trap_divisor: u32,
}

impl GenerationConfig {
    /// Creates a configuration for a default-sized labyrinth.
    ///
    /// # Examples
    ///
    /// ```
    /// use labyrinth::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(12345);
    /// assert_eq!(config.seed, 12345);
    /// assert_eq!((config.width, config.height), (10, 10));
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            width: DEFAULT_LABYRINTH_WIDTH,
            height: DEFAULT_LABYRINTH_HEIGHT,
            puzzle_divisor: 10,
            treasure_divisor: 8,
            monster_divisor: 6,
            trap_divisor: 8,
        }
    }

    /// Creates a configuration for small test labyrinths.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            width: 5,
            height: 5,
            ..Self::new(seed)
        }
    }

    /// Overrides the grid dimensions.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Number of special rooms of each kind for `room_count` carved rooms,
    /// as `(puzzle, treasure, monster, trap)`.
    pub fn special_room_counts(&self, room_count: usize) -> (usize, usize, usize, usize) {
        let share = |divisor: u32| room_count / divisor.max(1) as usize;
        (
            share(self.puzzle_divisor),
            share(self.treasure_divisor),
            share(self.monster_divisor),
            share(self.trap_divisor),
        )
    }

    /// Rejects empty grids and divisors small enough to crowd out regular rooms.
    pub fn validate(&self) -> LabyrinthResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LabyrinthError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let divisors = [
            ("puzzle", self.puzzle_divisor),
            ("treasure", self.treasure_divisor),
            ("monster", self.monster_divisor),
            ("trap", self.trap_divisor),
        ];
        for (name, divisor) in divisors {
            if divisor < MIN_ROOM_DIVISOR {
                return Err(LabyrinthError::GenerationFailed(format!(
                    "{name} divisor {divisor} is below {MIN_ROOM_DIVISOR}"
                )));
            }
        }

        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Trait for procedural generators.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> LabyrinthResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> LabyrinthResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }

    /// Draws a fresh seed from system entropy.
    pub fn random_seed() -> u64 {
        rand::random()
    }
}
