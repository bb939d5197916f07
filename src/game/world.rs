//! # World Grid
//!
//! The labyrinth is a `width x height` array of cells. A cell holding `None`
//! is a wall; every other cell owns its [`Room`].

use crate::game::{Enemy, Position, Room, RoomType};
use serde::{Deserialize, Serialize};

/// Room storage for a labyrinth, indexed `[y][x]`.
///
/// # Examples
///
/// ```
/// use labyrinth::{Grid, Position, Room, RoomKind};
///
/// let mut grid = Grid::new(3, 3);
/// assert!(!grid.is_valid_move(Position::new(1, 1)));
///
/// grid.set_room(Room::new(Position::new(1, 1), RoomKind::regular()));
/// assert!(grid.is_valid_move(Position::new(1, 1)));
/// assert!(!grid.is_valid_move(Position::new(3, 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
    cells: Vec<Vec<Option<Room>>>,
    exit_position: Option<Position>,
}

impl Grid {
    /// Creates a grid made entirely of walls.
    pub fn new(width: u32, height: u32) -> Self {
        let cells = (0..height)
            .map(|_| (0..width).map(|_| None).collect())
            .collect();

        Self {
            width,
            height,
            cells,
            exit_position: None,
        }
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    pub fn room_at(&self, position: Position) -> Option<&Room> {
        if !self.in_bounds(position) {
            return None;
        }
        self.cells[position.y as usize][position.x as usize].as_ref()
    }

    pub fn room_at_mut(&mut self, position: Position) -> Option<&mut Room> {
        if !self.in_bounds(position) {
            return None;
        }
        self.cells[position.y as usize][position.x as usize].as_mut()
    }

    /// Places a room at its own position, replacing whatever was there.
    ///
    /// Returns false and drops the room if its position is out of bounds.
    pub fn set_room(&mut self, room: Room) -> bool {
        let position = room.position;
        if !self.in_bounds(position) {
            return false;
        }

        if room.room_type() == RoomType::Exit {
            self.exit_position = Some(position);
        } else if self.exit_position == Some(position) {
            self.exit_position = None;
        }

        self.cells[position.y as usize][position.x as usize] = Some(room);
        true
    }

    /// In bounds and not a wall.
    pub fn is_valid_move(&self, position: Position) -> bool {
        self.room_at(position).is_some()
    }

    pub fn exit_position(&self) -> Option<Position> {
        self.exit_position
    }

    pub fn is_at_exit(&self, position: Position) -> bool {
        self.exit_position == Some(position)
    }

    /// All rooms in row-major order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.cells.iter().flatten().filter_map(Option::as_ref)
    }

    pub fn rooms_mut(&mut self) -> impl Iterator<Item = &mut Room> {
        self.cells.iter_mut().flatten().filter_map(Option::as_mut)
    }

    /// Every in-bounds position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Position::new(x, y)))
    }

    pub fn room_count(&self) -> usize {
        self.rooms().count()
    }

    pub fn count_of(&self, room_type: RoomType) -> usize {
        self.rooms()
            .filter(|room| room.room_type() == room_type)
            .count()
    }

    /// Enemies from every monster room, defeated or not.
    pub fn all_enemies(&self) -> Vec<&Enemy> {
        self.rooms().filter_map(Room::enemy).collect()
    }
}
