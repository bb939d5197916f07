//! # Rooms
//!
//! Every grid cell that is not a wall holds a [`Room`]. The behavior of a room
//! depends on its [`RoomKind`]; each kind lives in its own module and shares
//! the same two entry points, entering and interacting.

pub mod exit_room;
pub mod monster_room;
pub mod puzzle_room;
pub mod regular_room;
pub mod trap_room;
pub mod treasure_room;

pub use exit_room::*;
pub use monster_room::*;
pub use puzzle_room::*;
pub use regular_room::*;
pub use trap_room::*;
pub use treasure_room::*;

use crate::game::{Enemy, GameEvent, Notification, Player, Position};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag identifying what kind of room occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Regular,
    Puzzle,
    Treasure,
    Monster,
    Trap,
    Exit,
}

impl RoomType {
    pub fn all() -> [RoomType; 6] {
        [
            RoomType::Regular,
            RoomType::Puzzle,
            RoomType::Treasure,
            RoomType::Monster,
            RoomType::Trap,
            RoomType::Exit,
        ]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RoomType::Regular => "Regular Room",
            RoomType::Puzzle => "Puzzle Room",
            RoomType::Treasure => "Treasure Room",
            RoomType::Monster => "Monster Room",
            RoomType::Trap => "Trap Room",
            RoomType::Exit => "Exit Room",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How an interaction left the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Continue,
    /// The player walked out of the labyrinth
    Victory,
    /// The player's health reached zero
    PlayerDefeated,
}

/// Result of entering or interacting with a room.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub message: String,
    pub outcome: Outcome,
    /// Notifications addressed to observers other than the acting player
    pub notifications: Vec<Notification>,
    pub events: Vec<GameEvent>,
}

impl Interaction {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn with_event(mut self, event: GameEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn is_victory(&self) -> bool {
        self.outcome == Outcome::Victory
    }

    pub fn is_defeat(&self) -> bool {
        self.outcome == Outcome::PlayerDefeated
    }
}

/// Lowercases and trims a raw player action.
pub fn normalize_action(action: &str) -> String {
    action.trim().to_lowercase()
}

/// Room payload, one variant per room type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoomKind {
    Regular(RegularRoom),
    Puzzle(PuzzleRoom),
    Treasure(TreasureRoom),
    Monster(MonsterRoom),
    Trap(TrapRoom),
    Exit(ExitRoom),
}

impl RoomKind {
    pub fn regular() -> Self {
        RoomKind::Regular(RegularRoom)
    }

    /// Rolls fresh contents for a room of the given type.
    pub fn generate(room_type: RoomType, rng: &mut StdRng) -> Self {
        match room_type {
            RoomType::Regular => RoomKind::regular(),
            RoomType::Puzzle => RoomKind::Puzzle(PuzzleRoom::generate(rng)),
            RoomType::Treasure => RoomKind::Treasure(TreasureRoom::generate(rng)),
            RoomType::Monster => RoomKind::Monster(MonsterRoom::generate(rng)),
            RoomType::Trap => RoomKind::Trap(TrapRoom::generate(rng)),
            RoomType::Exit => RoomKind::Exit(ExitRoom::generate(rng)),
        }
    }

    pub fn room_type(&self) -> RoomType {
        match self {
            RoomKind::Regular(_) => RoomType::Regular,
            RoomKind::Puzzle(_) => RoomType::Puzzle,
            RoomKind::Treasure(_) => RoomType::Treasure,
            RoomKind::Monster(_) => RoomType::Monster,
            RoomKind::Trap(_) => RoomType::Trap,
            RoomKind::Exit(_) => RoomType::Exit,
        }
    }

    /// Description text fixed when the room is built.
    pub fn describe(&self) -> String {
        match self {
            RoomKind::Regular(room) => room.describe(),
            RoomKind::Puzzle(room) => room.describe(),
            RoomKind::Treasure(room) => room.describe(),
            RoomKind::Monster(room) => room.describe(),
            RoomKind::Trap(room) => room.describe(),
            RoomKind::Exit(room) => room.describe(),
        }
    }
}

/// A single cell of the labyrinth.
///
/// # Examples
///
/// ```
/// use labyrinth::{Player, Position, Room, RoomKind, RoomType};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let mut player = Player::default();
/// let mut room = Room::new(Position::new(2, 3), RoomKind::regular());
///
/// assert_eq!(room.room_type(), RoomType::Regular);
/// assert_eq!(room.to_string(), "Regular Room at (2,3)");
/// assert!(room.on_enter(&mut player, &mut rng).starts_with("You enter "));
/// assert!(room.visited);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub position: Position,
    pub description: String,
    pub visited: bool,
    pub kind: RoomKind,
}

impl Room {
    pub fn new(position: Position, kind: RoomKind) -> Self {
        Self {
            position,
            description: kind.describe(),
            visited: false,
            kind,
        }
    }

    /// Builds a room of `room_type` with freshly rolled contents.
    pub fn generate(position: Position, room_type: RoomType, rng: &mut StdRng) -> Self {
        Self::new(position, RoomKind::generate(room_type, rng))
    }

    pub fn room_type(&self) -> RoomType {
        self.kind.room_type()
    }

    pub fn mark_visited(&mut self) {
        self.visited = true;
    }

    /// Runs the room's entry behavior. Marks the room visited.
    pub fn enter(&mut self, player: &mut Player, rng: &mut StdRng) -> Interaction {
        self.mark_visited();
        let description = self.description.as_str();

        match &mut self.kind {
            RoomKind::Regular(room) => room.enter(description),
            RoomKind::Puzzle(room) => room.enter(description, player),
            RoomKind::Treasure(room) => room.enter(description),
            RoomKind::Monster(room) => room.enter(description, rng),
            RoomKind::Trap(room) => room.enter(description, player, rng),
            RoomKind::Exit(room) => room.enter(description),
        }
    }

    /// Entry text only. See [`Room::enter`] for the full result.
    pub fn on_enter(&mut self, player: &mut Player, rng: &mut StdRng) -> String {
        self.enter(player, rng).message
    }

    /// Applies a player action. The action is trimmed and lowercased first.
    pub fn on_interact(&mut self, player: &mut Player, action: &str, rng: &mut StdRng) -> Interaction {
        self.mark_visited();
        let action = normalize_action(action);
        let description = self.description.as_str();

        match &mut self.kind {
            RoomKind::Regular(room) => room.interact(description, &action),
            RoomKind::Puzzle(room) => room.interact(player, &action),
            RoomKind::Treasure(room) => room.interact(player, &action),
            RoomKind::Monster(room) => room.interact(player, &action, rng),
            RoomKind::Trap(room) => room.interact(player, &action, rng),
            RoomKind::Exit(room) => room.interact(player, &action),
        }
    }

    /// The enemy guarding this room, if it is a monster room.
    pub fn enemy(&self) -> Option<&Enemy> {
        match &self.kind {
            RoomKind::Monster(room) => Some(&room.enemy),
            _ => None,
        }
    }

    /// Whether the room's one-off content has been used up.
    pub fn is_resolved(&self) -> bool {
        match &self.kind {
            RoomKind::Regular(_) => true,
            RoomKind::Puzzle(room) => room.solved,
            RoomKind::Treasure(room) => room.looted,
            RoomKind::Monster(room) => room.defeated,
            RoomKind::Trap(room) => room.trap.is_disabled(),
            RoomKind::Exit(room) => !room.is_locked(),
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.room_type(), self.position)
    }
}
