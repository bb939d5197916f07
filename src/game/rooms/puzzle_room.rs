//! Riddle rooms. Solving the riddle grants a reward and tells every player
//! who has visited the room.

use crate::game::{
    Artifact, EntityId, GameEvent, Interaction, Notification, ObserverList, Player, Puzzle,
    PuzzleObserver, RiddlePuzzle,
};
use crate::generation::{puzzle_reward, random_riddle};
use log::info;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

pub const PUZZLE_ROOM_DESCRIPTION: &str =
    "A mysterious room with strange markings on the walls and floor.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRoom {
    pub puzzle: RiddlePuzzle,
    pub reward: Artifact,
    pub solved: bool,
    observers: ObserverList,
}

impl PuzzleRoom {
    pub fn new(puzzle: RiddlePuzzle, reward: Artifact) -> Self {
        Self {
            puzzle,
            reward,
            solved: false,
            observers: ObserverList::new(),
        }
    }

    /// A random riddle with a random reward.
    pub fn generate(rng: &mut StdRng) -> Self {
        let puzzle = random_riddle(rng);
        let reward = puzzle_reward(rng);
        Self::new(puzzle, reward)
    }

    pub fn describe(&self) -> String {
        PUZZLE_ROOM_DESCRIPTION.to_string()
    }

    /// Registers an observer. Registering twice has no effect.
    pub fn add_observer(&mut self, id: EntityId) -> bool {
        self.observers.add(id)
    }

    pub fn remove_observer(&mut self, id: EntityId) -> bool {
        self.observers.remove(id)
    }

    pub fn observers(&self) -> &[EntityId] {
        self.observers.ids()
    }

    /// One notification per registered observer, in registration order.
    pub fn notify_observers(&self, message: &str) -> Vec<Notification> {
        self.observers.notify(message)
    }

    pub fn enter(&mut self, description: &str, player: &mut Player) -> Interaction {
        self.add_observer(player.observer_id());

        if self.solved {
            Interaction::message(format!(
                "You enter a puzzle room that you've already solved. {description}"
            ))
        } else {
            Interaction::message(format!(
                "You enter a room with a puzzle. {description}\n{}",
                self.puzzle.description()
            ))
        }
    }

    pub fn interact(&mut self, player: &mut Player, action: &str) -> Interaction {
        if self.solved {
            return Interaction::message("The puzzle in this room has already been solved.");
        }

        if action == "solve" {
            return Interaction::message(
                "What is your answer? Use 'solve <answer>' or 'answer <answer>'.",
            );
        }

        if let Some(answer) = action
            .strip_prefix("solve ")
            .or_else(|| action.strip_prefix("answer "))
        {
            return self.attempt(player, answer);
        }

        match action {
            "hint" => Interaction::message(self.puzzle.hint()),
            "examine" | "look" => Interaction::message(format!(
                "You examine the puzzle more closely. {}",
                self.puzzle.description()
            )),
            _ => Interaction::message(
                "Try 'solve', 'answer [your answer]', or 'hint' to interact with the puzzle.",
            ),
        }
    }

    fn attempt(&mut self, player: &mut Player, answer: &str) -> Interaction {
        if !self.puzzle.attempt_solution(answer) {
            return Interaction::message(format!(
                "That's not right. {}",
                self.puzzle.failure_message()
            ));
        }

        self.solved = true;
        player.add_artifact(self.reward.clone());
        info!("puzzle solved, reward {}", self.reward.name);

        let announcement = format!(
            "The puzzle in the room has been solved! A hidden compartment opens revealing: {}",
            self.reward.name
        );

        let mut interaction = Interaction::message(format!(
            "Correct! {}\nYou found: {}",
            self.puzzle.success_message(),
            self.reward
        ))
        .with_event(GameEvent::PuzzleSolved {
            reward: self.reward.name.clone(),
        })
        .with_event(GameEvent::ArtifactsCollected {
            names: vec![self.reward.name.clone()],
        });

        for notification in self.notify_observers(&announcement) {
            interaction.events.push(GameEvent::Notification {
                recipient: notification.recipient,
                message: notification.message.clone(),
            });

            if notification.recipient == player.observer_id() {
                player.update(&notification);
            } else {
                interaction.notifications.push(notification);
            }
        }

        interaction
    }
}
