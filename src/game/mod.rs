//! # Game Module
//!
//! Core simulation types: positions, entities, rooms and the game state facade.
//!
//! This module contains the fundamental building blocks of the labyrinth:
//! - Grid coordinates and movement directions
//! - Entity stat blocks shared by the player and enemies
//! - Combat strategies and the combat resolution loop
//! - Enemy and trap state machines
//! - Room behaviors and the grid that owns them

pub mod artifact;
pub mod combat;
pub mod enemy_state;
pub mod entities;
pub mod player;
pub mod puzzle;
pub mod rooms;
pub mod state;
pub mod trap;
pub mod world;

pub use artifact::*;
pub use combat::*;
pub use enemy_state::*;
pub use entities::*;
pub use player::*;
pub use puzzle::*;
pub use rooms::*;
pub use state::*;
pub use trap::*;
pub use world::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Represents a room coordinate in the labyrinth grid.
///
/// `x` grows eastward and `y` grows southward; the entrance is at the origin.
///
/// # Examples
///
/// ```
/// use labyrinth::{Direction, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.adjacent(Direction::North), Position::new(2, 2));
/// assert_eq!(pos.manhattan_distance(Position::origin()), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The entrance cell, `(0,0)`.
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// One step in `direction`. No bounds check.
    pub fn adjacent(self, direction: Direction) -> Position {
        self + direction.to_delta()
    }

    /// Steps between two rooms ignoring walls.
    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Neighbours in N/E/S/W order.
    pub fn cardinal_adjacent_positions(self) -> [Position; 4] {
        Direction::all().map(|direction| self.adjacent(direction))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Position {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Position {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Cardinal directions the player can move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Unit offset for one step; north is negative `y`.
    ///
    /// # Examples
    ///
    /// ```
    /// use labyrinth::{Direction, Position};
    ///
    /// assert_eq!(Direction::North.to_delta(), Position::new(0, -1));
    /// assert_eq!(Direction::East.to_delta(), Position::new(1, 0));
    /// ```
    pub fn to_delta(self) -> Position {
        let (dx, dy) = match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        };
        Position { x: dx, y: dy }
    }

    /// Inverse of [`Direction::to_delta`]; `None` unless `delta` is a single
    /// cardinal step.
    pub fn from_delta(delta: Position) -> Option<Direction> {
        Direction::all()
            .into_iter()
            .find(|direction| direction.to_delta() == delta)
    }

    /// Returns the direction pointing the other way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Returns all 4 directions in N/E/S/W order.
    ///
    /// Maze carving relies on this order when collecting neighbours.
    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

/// Unique identifier for players (used as puzzle observer handles).
pub type EntityId = Uuid;

/// Fresh random id.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_entrance() {
        assert_eq!(Position::origin(), Position { x: 0, y: 0 });
        assert_ne!(Position::new(2, 1), Position::new(1, 2));
    }

    #[test]
    fn test_distance_is_symmetric() {
        let corner = Position::new(4, 3);
        assert_eq!(corner.manhattan_distance(Position::origin()), 7);
        assert_eq!(Position::origin().manhattan_distance(corner), 7);
        assert_eq!(Position::new(-2, 1).manhattan_distance(Position::origin()), 3);
    }

    #[test]
    fn test_adjacent_steps_one_cell() {
        let centre = Position::new(2, 2);
        assert_eq!(centre.adjacent(Direction::North), Position::new(2, 1));
        assert_eq!(centre.adjacent(Direction::South), Position::new(2, 3));
        assert_eq!(centre.adjacent(Direction::East), Position::new(3, 2));
        assert_eq!(centre.adjacent(Direction::West), Position::new(1, 2));
        assert_eq!(Position::origin().adjacent(Direction::West), Position::new(-1, 0));
    }

    #[test]
    fn test_neighbours_follow_direction_order() {
        assert_eq!(
            Position::new(1, 1).cardinal_adjacent_positions(),
            [
                Position::new(1, 0),
                Position::new(2, 1),
                Position::new(1, 2),
                Position::new(0, 1),
            ]
        );
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(Position::new(3, 7).to_string(), "(3,7)");
        assert_eq!(Direction::West.to_string(), "west");
    }

    #[test]
    fn test_offsets_add_and_subtract() {
        let from = Position::new(6, 1);
        let to = Position::new(6, 2);
        assert_eq!(to - from, Direction::South.to_delta());
        assert_eq!(from + Direction::South.to_delta(), to);
    }

    #[test]
    fn test_direction_round_trips_through_delta() {
        for direction in Direction::all() {
            assert_eq!(Direction::from_delta(direction.to_delta()), Some(direction));
            assert_eq!(direction.opposite().opposite(), direction);
        }
        assert_eq!(Direction::from_delta(Position::new(1, 1)), None);
        assert_eq!(Direction::from_delta(Position::origin()), None);
    }

    #[test]
    fn test_entity_ids_are_distinct() {
        assert_ne!(new_entity_id(), new_entity_id());
    }
}
