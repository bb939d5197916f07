//! # Maze Generation
//!
//! Carves the labyrinth with an iterative randomized depth-first search, then
//! turns some regular rooms into special rooms and places the exit as far from
//! the entrance as the carved rooms allow.
//!
//! ## Algorithm Overview
//!
//! 1. **Carving**: start at a random cell, repeatedly step to a random
//!    unvisited neighbour, backtrack when stuck
//! 2. **Room types**: puzzle, treasure, monster and trap rooms replace regular
//!    rooms picked by rejection sampling, never at the entrance
//! 3. **Exit**: the regular room with the greatest Manhattan distance from the
//!    entrance becomes the exit, falling back to the bottom-right cell

use crate::game::{Direction, Grid, MonsterRoom, Position, Room, RoomKind, RoomType, TreasureRoom};
use crate::generation::{monster_reward, EncounterGenerator, ItemGenerator};
use crate::utils::pathfinding::reachable_positions;
use crate::{GenerationConfig, Generator, LabyrinthError, LabyrinthResult};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::Rng;

/// Randomized depth-first maze generator.
#[derive(Debug, Clone, Default)]
pub struct MazeGenerator;

impl MazeGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Carves regular rooms into an all-wall grid.
    fn carve(&self, width: u32, height: u32, rng: &mut StdRng) -> Grid {
        let mut grid = Grid::new(width, height);
        let mut visited = vec![false; width as usize * height as usize];
        let index = |position: Position| position.y as usize * width as usize + position.x as usize;

        let start = Position::new(
            rng.gen_range(0..width) as i32,
            rng.gen_range(0..height) as i32,
        );
        visited[index(start)] = true;
        grid.set_room(Room::new(start, RoomKind::regular()));
        let mut stack = vec![start];

        while let Some(&current) = stack.last() {
            let neighbours: Vec<Position> = Direction::all()
                .into_iter()
                .map(|direction| current.adjacent(direction))
                .filter(|&next| grid.in_bounds(next) && !visited[index(next)])
                .collect();

            if neighbours.is_empty() {
                stack.pop();
                continue;
            }

            let next = neighbours[rng.gen_range(0..neighbours.len())];
            visited[index(next)] = true;
            grid.set_room(Room::new(next, RoomKind::regular()));
            stack.push(next);
        }

        debug!("carved {} rooms from {}", grid.room_count(), start);
        grid
    }

    fn assign_room_types(
        &self,
        grid: &mut Grid,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> LabyrinthResult<()> {
        let (puzzles, treasures, monsters, traps) = config.special_room_counts(grid.room_count());

        self.place_rooms(grid, RoomType::Puzzle, puzzles, config, rng)?;
        self.place_rooms(grid, RoomType::Treasure, treasures, config, rng)?;
        self.place_rooms(grid, RoomType::Monster, monsters, config, rng)?;
        self.place_rooms(grid, RoomType::Trap, traps, config, rng)?;

        debug!(
            "placed {} puzzle, {} treasure, {} monster and {} trap rooms",
            puzzles, treasures, monsters, traps
        );
        Ok(())
    }

    /// Replaces `count` regular rooms, chosen by sampling random cells and
    /// skipping walls, the entrance and rooms that are already special.
    fn place_rooms(
        &self,
        grid: &mut Grid,
        room_type: RoomType,
        count: usize,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> LabyrinthResult<()> {
        for _ in 0..count {
            if !grid.rooms().any(|room| is_replaceable(room)) {
                return Ok(());
            }

            loop {
                let position = Position::new(
                    rng.gen_range(0..grid.width) as i32,
                    rng.gen_range(0..grid.height) as i32,
                );

                if grid.room_at(position).is_some_and(is_replaceable) {
                    let room = self.stock_room(position, room_type, config, rng)?;
                    grid.set_room(room);
                    break;
                }
            }
        }
        Ok(())
    }

    /// Builds a special room. Treasure hoards and monsters come from their
    /// generators and are validated before they are placed.
    fn stock_room(
        &self,
        position: Position,
        room_type: RoomType,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> LabyrinthResult<Room> {
        let kind = match room_type {
            RoomType::Treasure => {
                let items = ItemGenerator;
                let hoard = items.generate(config, rng)?;
                items.validate(&hoard, config)?;
                RoomKind::Treasure(TreasureRoom::new(hoard))
            }
            RoomType::Monster => {
                let encounters = EncounterGenerator;
                let enemy = encounters.generate(config, rng)?;
                encounters.validate(&enemy, config)?;
                RoomKind::Monster(MonsterRoom::new(enemy, monster_reward(rng)))
            }
            other => RoomKind::generate(other, rng),
        };
        Ok(Room::new(position, kind))
    }

    fn place_exit(&self, grid: &mut Grid, rng: &mut StdRng) -> Position {
        let mut best_distance = 0;
        let mut farthest = None;

        for room in grid.rooms() {
            if room.room_type() != RoomType::Regular {
                continue;
            }
            let distance = room.position.manhattan_distance(Position::origin());
            if distance > best_distance {
                best_distance = distance;
                farthest = Some(room.position);
            }
        }

        let exit = farthest.unwrap_or_else(|| {
            Position::new(grid.width as i32 - 1, grid.height as i32 - 1)
        });
        grid.set_room(Room::generate(exit, RoomType::Exit, rng));
        debug!("exit placed at {} (distance {})", exit, best_distance);
        exit
    }

    /// Runs all three stages for already validated dimensions.
    fn build(&self, config: &GenerationConfig, rng: &mut StdRng) -> LabyrinthResult<Grid> {
        let mut grid = self.carve(config.width, config.height, rng);
        self.assign_room_types(&mut grid, config, rng)?;
        self.place_exit(&mut grid, rng);
        Ok(grid)
    }
}

fn is_replaceable(room: &Room) -> bool {
    room.room_type() == RoomType::Regular && room.position != Position::origin()
}

impl Generator<Grid> for MazeGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> LabyrinthResult<Grid> {
        config.validate()?;
        let grid = self.build(config, rng)?;
        self.validate(&grid, config)?;
        Ok(grid)
    }

    fn validate(&self, grid: &Grid, _config: &GenerationConfig) -> LabyrinthResult<()> {
        let exits = grid.count_of(RoomType::Exit);
        if exits != 1 {
            return Err(LabyrinthError::GenerationFailed(format!(
                "expected exactly one exit, found {exits}"
            )));
        }

        let single_cell = grid.width == 1 && grid.height == 1;
        if !single_cell && grid.is_at_exit(Position::origin()) {
            return Err(LabyrinthError::GenerationFailed(
                "exit placed at the entrance".to_string(),
            ));
        }

        let reachable = reachable_positions(grid, Position::origin()).len();
        if reachable != grid.room_count() {
            return Err(LabyrinthError::GenerationFailed(format!(
                "only {reachable} of {} rooms reachable from the entrance",
                grid.room_count()
            )));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "MazeGenerator"
    }
}

/// Generates a labyrinth with the default room mix.
///
/// Zero dimensions yield an empty grid; use [`MazeGenerator`] through
/// [`Generator::generate`] to have them rejected instead.
///
/// # Examples
///
/// ```
/// use labyrinth::{generate_maze, Position, RoomType};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let grid = generate_maze(6, 4, &mut rng);
/// assert_eq!(grid.count_of(RoomType::Exit), 1);
/// assert!(grid.is_valid_move(Position::origin()));
/// ```
pub fn generate_maze(width: u32, height: u32, rng: &mut StdRng) -> Grid {
    if width == 0 || height == 0 {
        return Grid::new(width, height);
    }
    let config = GenerationConfig::default().with_dimensions(width, height);
    MazeGenerator::new().build(&config, rng).unwrap_or_else(|err| {
        warn!("maze generation failed: {}", err);
        Grid::new(width, height)
    })
}
