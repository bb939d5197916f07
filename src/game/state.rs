//! # Game State Module
//!
//! Central game state and the operations a controller drives it with.
//!
//! [`GameState`] owns the labyrinth grid, the player and the random number
//! generator. Every operation takes `&mut self` and runs one discrete player
//! action to completion, recording [`GameEvent`]s and keeping
//! [`GameStatistics`] and the [`GameCompletionState`] current.

use crate::game::{
    CombatStrategy, Direction, Entity, EntityId, Grid, Interaction, Outcome, Player, Position,
    Room, RoomType,
};
use crate::generation::utils::{create_rng, random_seed};
use crate::{GenerationConfig, Generator, LabyrinthResult, MazeGenerator};
use log::{debug, info};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Something that happened during play, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerMoved {
        from: Position,
        to: Position,
    },
    RoomEntered {
        position: Position,
        room_type: RoomType,
        first_visit: bool,
    },
    CombatWon {
        enemy: String,
        experience: u32,
        turns: u32,
        damage_taken: i32,
    },
    CombatLost {
        enemy: String,
        damage_taken: i32,
    },
    LevelUp {
        level: u32,
    },
    PuzzleSolved {
        reward: String,
    },
    /// A puzzle announcement delivered to one observer
    Notification {
        recipient: EntityId,
        message: String,
    },
    TrapTriggered {
        trap: String,
        damage: i32,
    },
    ArtifactsCollected {
        names: Vec<String>,
    },
    PlayerDied,
    Escaped,
}

/// Game statistics tracking player progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Distinct rooms entered
    pub rooms_visited: u32,
    pub enemies_defeated: u32,
    pub artifacts_collected: u32,
    pub puzzles_solved: u32,
    pub traps_triggered: u32,
    /// Total damage taken after mitigation
    pub damage_taken: u64,
    pub moves_made: u32,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on a game event.
    pub fn update_from_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PlayerMoved { .. } => {
                self.moves_made += 1;
            }
            GameEvent::RoomEntered { first_visit, .. } => {
                if *first_visit {
                    self.rooms_visited += 1;
                }
            }
            GameEvent::CombatWon { damage_taken, .. } => {
                self.enemies_defeated += 1;
                self.damage_taken += u64::from(damage_taken.unsigned_abs());
            }
            GameEvent::CombatLost { damage_taken, .. } => {
                self.damage_taken += u64::from(damage_taken.unsigned_abs());
            }
            GameEvent::PuzzleSolved { .. } => {
                self.puzzles_solved += 1;
            }
            GameEvent::TrapTriggered { damage, .. } => {
                self.traps_triggered += 1;
                self.damage_taken += u64::from(damage.unsigned_abs());
            }
            GameEvent::ArtifactsCollected { names } => {
                self.artifacts_collected += names.len() as u32;
            }
            _ => {}
        }
    }
}

/// Whether the game is still going and, if not, how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameCompletionState {
    #[default]
    Playing,
    /// Player walked out through the exit
    Escaped,
    PlayerDied,
}

/// Message shown when a move runs into a wall or the edge of the grid.
pub const BLOCKED_MOVE_MESSAGE: &str =
    "You can't go that way. There's a wall or the edge of the labyrinth.";

/// Central game state: the labyrinth, the player and everything they have done.
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    pub player: Player,
    rng: StdRng,
    seed: u64,
    statistics: GameStatistics,
    completion: GameCompletionState,
    /// Grows until drained
    events: Vec<GameEvent>,
}

impl GameState {
    /// Generates a labyrinth and places a default player at the entrance.
    ///
    /// Without a seed one is drawn from system entropy; [`GameState::seed`]
    /// reports it either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use labyrinth::{GameState, Position};
    ///
    /// let game = GameState::new_game(6, 6, Some(42)).unwrap();
    /// assert_eq!(game.player.position, Position::origin());
    /// assert!(game.is_valid_move(Position::origin()));
    /// assert!(GameState::new_game(0, 6, Some(42)).is_err());
    /// ```
    pub fn new_game(width: u32, height: u32, seed: Option<u64>) -> LabyrinthResult<Self> {
        let seed = seed.unwrap_or_else(random_seed);
        let config = GenerationConfig::new(seed).with_dimensions(width, height);
        let mut rng = create_rng(&config);
        let grid = MazeGenerator::new().generate(&config, &mut rng)?;

        info!(
            "new {}x{} labyrinth with {} rooms (seed {})",
            width,
            height,
            grid.room_count(),
            seed
        );

        Ok(Self::from_parts(grid, Player::default(), rng, seed))
    }

    /// Wraps an existing grid and player.
    pub fn from_parts(grid: Grid, player: Player, rng: StdRng, seed: u64) -> Self {
        Self {
            grid,
            player,
            rng,
            seed,
            statistics: GameStatistics::new(),
            completion: GameCompletionState::Playing,
            events: Vec::new(),
        }
    }

    pub fn into_parts(self) -> (Grid, Player) {
        (self.grid, self.player)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn room_at(&self, position: Position) -> Option<&Room> {
        self.grid.room_at(position)
    }

    pub fn is_valid_move(&self, position: Position) -> bool {
        self.grid.is_valid_move(position)
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.grid.room_at(self.player.position)
    }

    /// Steps the player one room in `direction`, spending a move.
    ///
    /// Returns false without changing anything if the target is a wall, out
    /// of bounds, or the game is over.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        if self.completion != GameCompletionState::Playing {
            return false;
        }

        let from = self.player.position;
        let to = from.adjacent(direction);
        if !self.grid.is_valid_move(to) {
            debug!("move {} from {} blocked", direction, from);
            return false;
        }

        self.player.move_to(to);
        self.player.decrement_moves();
        self.record(GameEvent::PlayerMoved { from, to });
        true
    }

    /// Moves and enters the next room, or explains why the move failed.
    pub fn travel(&mut self, direction: Direction) -> String {
        if self.move_player(direction) {
            self.enter_current_room()
        } else {
            BLOCKED_MOVE_MESSAGE.to_string()
        }
    }

    /// Runs the entry behavior of the room the player stands in.
    pub fn enter_current_room(&mut self) -> String {
        let position = self.player.position;
        let Some(room) = self.grid.room_at_mut(position) else {
            return BLOCKED_MOVE_MESSAGE.to_string();
        };

        let first_visit = !room.visited;
        let room_type = room.room_type();
        let interaction = room.enter(&mut self.player, &mut self.rng);

        self.record(GameEvent::RoomEntered {
            position,
            room_type,
            first_visit,
        });
        self.apply(interaction).message
    }

    /// Forwards an action to the current room.
    pub fn interact(&mut self, action: &str) -> Interaction {
        if self.completion != GameCompletionState::Playing {
            return Interaction::message("The game is over.");
        }

        let Some(room) = self.grid.room_at_mut(self.player.position) else {
            return Interaction::message(BLOCKED_MOVE_MESSAGE);
        };

        let interaction = room.on_interact(&mut self.player, action, &mut self.rng);
        self.apply(interaction)
    }

    /// Answers the riddle of a sprung trap.
    pub fn solve_trap(&mut self, answer: &str) -> bool {
        self.player.solve_trap(answer)
    }

    pub fn switch_strategy(&mut self, strategy: CombatStrategy) -> String {
        self.player.set_combat_strategy(strategy)
    }

    pub fn is_at_exit(&self) -> bool {
        self.grid.is_at_exit(self.player.position)
    }

    pub fn is_player_alive(&self) -> bool {
        self.player.is_alive()
    }

    pub fn completion(&self) -> GameCompletionState {
        self.completion
    }

    pub fn is_game_over(&self) -> bool {
        self.completion != GameCompletionState::Playing
    }

    pub fn statistics(&self) -> &GameStatistics {
        &self.statistics
    }

    /// Events recorded since the last drain.
    ///
    /// The log is unbounded; a controller is expected to call
    /// [`GameState::drain_events`] once per turn.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Takes every recorded event in order, leaving the log empty.
    /// [`GameStatistics`] are kept separately and survive the drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn record(&mut self, event: GameEvent) {
        self.statistics.update_from_event(&event);
        self.events.push(event);
    }

    /// Logs the interaction's events and updates the completion state.
    fn apply(&mut self, interaction: Interaction) -> Interaction {
        for event in &interaction.events {
            self.record(event.clone());
        }

        if self.completion == GameCompletionState::Playing {
            if interaction.outcome == Outcome::Victory {
                info!("escaped after {} moves", self.statistics.moves_made);
                self.completion = GameCompletionState::Escaped;
            } else if !self.player.is_alive() {
                info!("player died at {}", self.player.position);
                self.completion = GameCompletionState::PlayerDied;
                self.record(GameEvent::PlayerDied);
            }
        }

        interaction
    }
}

/// Generates a labyrinth and a fresh player without the surrounding state.
pub fn new_game(width: u32, height: u32, seed: Option<u64>) -> LabyrinthResult<(Grid, Player)> {
    GameState::new_game(width, height, seed).map(GameState::into_parts)
}
