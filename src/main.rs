//! # Labyrinth Entry Point
//!
//! Generates a labyrinth from the command line and prints a JSON summary of
//! its layout, or the whole grid with `--dump`.

use clap::Parser;
use labyrinth::utils::pathfinding::{reachable_positions, shortest_route};
use labyrinth::{GameState, LabyrinthError, LabyrinthResult, Position, RoomType};
use log::info;
use serde::Serialize;
use std::collections::BTreeMap;

/// Command line arguments for the labyrinth generator.
#[derive(Parser, Debug)]
#[command(name = "labyrinth")]
#[command(about = "Generates a magical labyrinth and reports what is inside")]
#[command(version)]
struct Args {
    /// Random seed for labyrinth generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Grid width in rooms
    #[arg(long, default_value_t = labyrinth::config::DEFAULT_LABYRINTH_WIDTH)]
    width: u32,

    /// Grid height in rooms
    #[arg(long, default_value_t = labyrinth::config::DEFAULT_LABYRINTH_HEIGHT)]
    height: u32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print the full grid instead of the summary
    #[arg(long)]
    dump: bool,
}

#[derive(Debug, Serialize)]
struct Summary {
    version: &'static str,
    seed: u64,
    width: u32,
    height: u32,
    rooms: usize,
    room_types: BTreeMap<String, usize>,
    exit: Option<Position>,
    reachable: usize,
    /// Fewest moves from the entrance to the exit
    exit_distance: Option<usize>,
}

fn main() -> LabyrinthResult<()> {
    let args = Args::parse();
    initialize_logging(&args.log_level)?;

    info!("Starting labyrinth v{}", labyrinth::VERSION);

    let game = GameState::new_game(args.width, args.height, args.seed)?;
    let output = if args.dump {
        to_json(&game.grid, args.pretty)?
    } else {
        to_json(&summarize(&game), args.pretty)?
    };

    println!("{output}");
    Ok(())
}

fn initialize_logging(log_level: &str) -> LabyrinthResult<()> {
    let level = log_level
        .parse::<log::LevelFilter>()
        .map_err(|_| LabyrinthError::InvalidAction(format!("unknown log level '{log_level}'")))?;

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .try_init()
        .map_err(|err| LabyrinthError::InvalidState(err.to_string()))
}

fn summarize(game: &GameState) -> Summary {
    let grid = &game.grid;
    let room_types = RoomType::all()
        .into_iter()
        .map(|room_type| (room_type.to_string(), grid.count_of(room_type)))
        .collect();
    let exit_distance = grid
        .exit_position()
        .and_then(|exit| shortest_route(grid, Position::origin(), exit))
        .map(|route| route.len().saturating_sub(1));

    Summary {
        version: labyrinth::VERSION,
        seed: game.seed(),
        width: grid.width,
        height: grid.height,
        rooms: grid.room_count(),
        room_types,
        exit: grid.exit_position(),
        reachable: reachable_positions(grid, Position::origin()).len(),
        exit_distance,
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> LabyrinthResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
