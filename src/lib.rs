//! # Labyrinth
//!
//! Simulation core for a single-player dungeon crawler played on a grid of rooms.
//!
//! ## Architecture Overview
//!
//! The crate is the model half of the game. A controller (REPL, GUI, test
//! harness) owns a [`GameState`] and forwards player intents into it:
//!
//! - **Generation**: randomized depth-first maze carving, then room-type
//!   assignment and exit placement
//! - **Rooms**: one behavior per room type, dispatched through [`RoomKind`]
//! - **Entities**: shared stat blocks for the player and enemies
//! - **Combat**: swappable [`CombatStrategy`] values and a turn-based
//!   resolution loop
//! - **State machines**: [`EnemyState`] and [`TrapState`] transitions
//!
//! Every random decision draws from an explicitly passed [`rand::rngs::StdRng`],
//! so a seed plus a sequence of actions always replays the same game.

pub mod game;
pub mod generation;
pub mod utils;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use utils::*;

// Explicit re-exports for the types a controller touches most
pub use game::{
    // From artifact
    Artifact,
    ArtifactKind,
    KeyId,
    // From combat
    CombatLog,
    CombatStrategy,
    EnemyStance,
    // From enemy_state
    EnemyEvent,
    EnemyState,
    // From entities
    Enemy,
    Entity,
    EntityStats,
    // From game
    Direction,
    EntityId,
    Position,
    // From state
    GameCompletionState,
    GameEvent,
    GameState,
    GameStatistics,
    // From world
    Grid,
    // From rooms
    Interaction,
    Outcome,
    Room,
    RoomKind,
    RoomType,
    // From player
    Player,
    // From trap
    Trap,
    TrapState,
};

pub use generation::{GenerationConfig, Generator, MazeGenerator};

/// Core error type for the labyrinth engine.
#[derive(thiserror::Error, Debug)]
pub enum LabyrinthError {
    /// Grid dimensions must both be positive
    #[error("Invalid labyrinth dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Action cannot be performed
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the labyrinth codebase.
pub type LabyrinthResult<T> = Result<T, LabyrinthError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Gameplay configuration constants.
pub mod config {
    /// Default labyrinth width in rooms
    pub const DEFAULT_LABYRINTH_WIDTH: u32 = 10;

    /// Default labyrinth height in rooms
    pub const DEFAULT_LABYRINTH_HEIGHT: u32 = 10;

    /// Default player name
    pub const DEFAULT_PLAYER_NAME: &str = "Adventurer";

    /// Default player starting health
    pub const DEFAULT_PLAYER_HEALTH: i32 = 100;

    /// Default player base attack
    pub const DEFAULT_PLAYER_ATTACK: i32 = 10;

    /// Default player base defense
    pub const DEFAULT_PLAYER_DEFENSE: i32 = 5;

    /// Default player speed
    pub const DEFAULT_PLAYER_SPEED: i32 = 5;

    /// Moves a fresh player may spend
    pub const STARTING_MOVES: u32 = 30;

    /// Experience needed per level; the threshold is `level * EXPERIENCE_PER_LEVEL`
    pub const EXPERIENCE_PER_LEVEL: u32 = 100;

    /// Max health gained on level-up
    pub const LEVEL_UP_HEALTH_BONUS: i32 = 10;

    /// Attack gained on level-up
    pub const LEVEL_UP_ATTACK_BONUS: i32 = 2;

    /// Defense gained on level-up
    pub const LEVEL_UP_DEFENSE_BONUS: i32 = 1;
}
