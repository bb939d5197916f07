//! Property tests for generated labyrinths.

use labyrinth::utils::pathfinding::reachable_positions;
use labyrinth::{GenerationConfig, Generator, Grid, MazeGenerator, Position, RoomType};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn generate(seed: u64, width: u32, height: u32) -> Grid {
    let config = GenerationConfig::new(seed).with_dimensions(width, height);
    let mut rng = StdRng::seed_from_u64(seed);
    MazeGenerator::new()
        .generate(&config, &mut rng)
        .unwrap_or_else(|err| panic!("seed={seed} {width}x{height}: {err}"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_labyrinths_are_fully_connected(seed in any::<u64>(), width in 1_u32..=12, height in 1_u32..=12) {
        let grid = generate(seed, width, height);
        let reachable = reachable_positions(&grid, Position::origin());
        prop_assert_eq!(
            reachable.len(),
            grid.room_count(),
            "seed={}, {}x{} has rooms unreachable from the entrance",
            seed,
            width,
            height
        );
    }

    #[test]
    fn generated_labyrinths_have_one_exit_away_from_entrance(seed in any::<u64>(), width in 1_u32..=12, height in 1_u32..=12) {
        let grid = generate(seed, width, height);
        prop_assert_eq!(grid.count_of(RoomType::Exit), 1);

        let exit = grid.exit_position();
        prop_assert!(exit.is_some());
        if width * height > 1 {
            prop_assert_ne!(exit, Some(Position::origin()));
        }
    }

    #[test]
    fn special_room_counts_follow_divisors(seed in any::<u64>(), width in 2_u32..=12, height in 2_u32..=12) {
        let config = GenerationConfig::new(seed).with_dimensions(width, height);
        let grid = generate(seed, width, height);
        let (puzzles, treasures, monsters, traps) = config.special_room_counts(grid.room_count());

        // Every cell is carved and the exit only replaces a regular room
        prop_assert_eq!(grid.room_count() as u32, width * height);
        prop_assert_eq!(grid.count_of(RoomType::Puzzle), puzzles);
        prop_assert_eq!(grid.count_of(RoomType::Treasure), treasures);
        prop_assert_eq!(grid.count_of(RoomType::Monster), monsters);
        prop_assert_eq!(grid.count_of(RoomType::Trap), traps);
        prop_assert_eq!(
            grid.count_of(RoomType::Regular),
            grid.room_count() - puzzles - treasures - monsters - traps - 1
        );
        prop_assert_eq!(
            grid.room_at(Position::origin()).map(|room| room.room_type()),
            Some(RoomType::Regular)
        );
    }

    #[test]
    fn same_seed_reproduces_the_labyrinth(seed in any::<u64>(), width in 1_u32..=8, height in 1_u32..=8) {
        prop_assert_eq!(generate(seed, width, height), generate(seed, width, height));
    }
}
