//! # Puzzles and Observers
//!
//! Riddles guard puzzle rooms. Players who have entered a puzzle room register
//! as observers and are told when its riddle is solved.

use crate::game::EntityId;
use serde::{Deserialize, Serialize};

/// A challenge that accepts a free-text answer.
pub trait Puzzle {
    fn description(&self) -> String;

    fn success_message(&self) -> String;

    fn failure_message(&self) -> String;

    fn hint(&self) -> String;

    fn attempt_solution(&self, solution: &str) -> bool;
}

/// A question with a single accepted answer.
///
/// # Examples
///
/// ```
/// use labyrinth::{Puzzle, RiddlePuzzle};
///
/// let riddle = RiddlePuzzle::new("What gets wetter as it dries?", "Towel");
/// assert!(riddle.attempt_solution("  TOWEL "));
/// assert!(!riddle.attempt_solution("sponge"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiddlePuzzle {
    pub question: String,
    answer: String,
}

impl RiddlePuzzle {
    /// Creates a riddle. The answer is stored lowercased.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into().trim().to_lowercase(),
        }
    }
}

impl Puzzle for RiddlePuzzle {
    fn description(&self) -> String {
        format!("A mysterious voice poses a riddle: \"{}\"", self.question)
    }

    fn success_message(&self) -> String {
        "The voice speaks: \"You have answered wisely.\"".to_string()
    }

    fn failure_message(&self) -> String {
        "The voice speaks: \"That is not the answer I seek.\"".to_string()
    }

    fn hint(&self) -> String {
        "Think carefully about the properties described in the riddle.".to_string()
    }

    fn attempt_solution(&self, solution: &str) -> bool {
        let solution = solution.trim();
        !solution.is_empty() && solution.to_lowercase() == self.answer
    }
}

/// A message addressed to one observer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub recipient: EntityId,
    pub message: String,
}

/// Something that can be told about puzzle events.
pub trait PuzzleObserver {
    fn observer_id(&self) -> EntityId;

    fn update(&mut self, notification: &Notification);
}

/// Registered observers in registration order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObserverList {
    observers: Vec<EntityId>,
}

impl ObserverList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer. Returns false if it was already registered.
    pub fn add(&mut self, id: EntityId) -> bool {
        if self.observers.contains(&id) {
            return false;
        }
        self.observers.push(id);
        true
    }

    /// Unregisters an observer. Returns false if it was not registered.
    pub fn remove(&mut self, id: EntityId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|&observer| observer != id);
        self.observers.len() != before
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.observers.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn ids(&self) -> &[EntityId] {
        &self.observers
    }

    /// Builds one notification per observer, in registration order.
    pub fn notify(&self, message: &str) -> Vec<Notification> {
        self.observers
            .iter()
            .map(|&recipient| Notification {
                recipient,
                message: message.to_string(),
            })
            .collect()
    }
}
