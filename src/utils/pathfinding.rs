//! # Pathfinding Algorithms
//!
//! Reachability and routing over the room grid. Two rooms are connected when
//! they are cardinal neighbours; walls (absent rooms) block movement.

use crate::game::{Direction, Grid, Position};
use ::pathfinding::prelude::{bfs, bfs_reach};
use std::collections::HashSet;

/// Rooms that are one step away from `position` and exist in the grid.
pub fn walkable_neighbours(grid: &Grid, position: Position) -> Vec<Position> {
    position
        .cardinal_adjacent_positions()
        .into_iter()
        .filter(|&next| grid.is_valid_move(next))
        .collect()
}

/// Collects every room position reachable from `start`.
///
/// Returns an empty set when `start` itself is a wall.
pub fn reachable_positions(grid: &Grid, start: Position) -> HashSet<Position> {
    if !grid.is_valid_move(start) {
        return HashSet::new();
    }

    bfs_reach(start, |&position| walkable_neighbours(grid, position)).collect()
}

/// Finds a shortest room-to-room route from `from` to `to`, both ends included.
pub fn shortest_route(grid: &Grid, from: Position, to: Position) -> Option<Vec<Position>> {
    if !grid.is_valid_move(from) || !grid.is_valid_move(to) {
        return None;
    }

    bfs(
        &from,
        |&position| walkable_neighbours(grid, position),
        |&position| position == to,
    )
}

/// Converts a route into the directions a controller would forward.
pub fn route_directions(route: &[Position]) -> Vec<Direction> {
    route
        .windows(2)
        .filter_map(|step| Direction::from_delta(step[1] - step[0]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Room, RoomKind};

    fn corridor_grid() -> Grid {
        // 3x2 grid with a wall at (1,0):
        //   R # R
        //   R R R
        let mut grid = Grid::new(3, 2);
        for position in [
            Position::new(0, 0),
            Position::new(2, 0),
            Position::new(0, 1),
            Position::new(1, 1),
            Position::new(2, 1),
        ] {
            grid.set_room(Room::new(position, RoomKind::regular()));
        }
        grid
    }

    #[test]
    fn test_reachable_positions_cover_connected_rooms() {
        let grid = corridor_grid();
        let reachable = reachable_positions(&grid, Position::origin());
        assert_eq!(reachable.len(), 5);
        assert!(!reachable.contains(&Position::new(1, 0)));
    }

    #[test]
    fn test_reachable_from_wall_is_empty() {
        let grid = corridor_grid();
        assert!(reachable_positions(&grid, Position::new(1, 0)).is_empty());
        assert!(reachable_positions(&grid, Position::new(-1, 0)).is_empty());
    }

    #[test]
    fn test_shortest_route_walks_around_wall() {
        let grid = corridor_grid();
        let route = shortest_route(&grid, Position::new(0, 0), Position::new(2, 0)).unwrap();
        assert_eq!(route.len(), 5);
        assert_eq!(
            route_directions(&route),
            vec![
                Direction::South,
                Direction::East,
                Direction::East,
                Direction::North
            ]
        );
    }

    #[test]
    fn test_shortest_route_to_wall_is_none() {
        let grid = corridor_grid();
        assert!(shortest_route(&grid, Position::origin(), Position::new(1, 0)).is_none());
    }
}
