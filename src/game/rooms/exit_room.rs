//! The exit. Half of all exits are locked and need a specific key.

use crate::game::{GameEvent, Interaction, KeyId, Outcome, Player};
use crate::utils::math::chance;
use log::info;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const EXIT_ROOM_DESCRIPTION: &str =
    "A room with a large, ornate door that appears to lead outside.";

/// Chance that a generated exit is locked.
pub const LOCKED_EXIT_CHANCE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExitRoom {
    /// `Some` while the door is locked
    required_key: Option<KeyId>,
}

impl ExitRoom {
    pub fn unlocked() -> Self {
        Self { required_key: None }
    }

    pub fn locked(key: KeyId) -> Self {
        Self {
            required_key: Some(key),
        }
    }

    pub fn generate(rng: &mut StdRng) -> Self {
        if chance(rng, LOCKED_EXIT_CHANCE) {
            let keys = KeyId::all();
            Self::locked(keys[rng.gen_range(0..keys.len())])
        } else {
            Self::unlocked()
        }
    }

    pub fn describe(&self) -> String {
        EXIT_ROOM_DESCRIPTION.to_string()
    }

    pub fn is_locked(&self) -> bool {
        self.required_key.is_some()
    }

    pub fn required_key(&self) -> Option<KeyId> {
        self.required_key
    }

    pub fn unlock(&mut self) {
        self.required_key = None;
    }

    pub fn enter(&self, description: &str) -> Interaction {
        let detail = if self.is_locked() {
            "However, the door is locked. You'll need a key to open it."
        } else {
            "The door is unlocked. You can escape the labyrinth!"
        };
        Interaction::message(format!("You've found the exit! {description} {detail}"))
    }

    pub fn interact(&mut self, player: &mut Player, action: &str) -> Interaction {
        match action {
            "open" | "exit" | "escape" | "leave" => self.open(player),
            "examine" | "look" => Interaction::message(match self.required_key {
                Some(key) => format!(
                    "You examine the exit door. It has a {} lock. You'll need the matching key to open it.",
                    key.lock_kind()
                ),
                None => "You examine the exit door. It's unlocked and ready to be opened.".to_string(),
            }),
            _ => Interaction::message("Try 'open', 'exit', or 'examine' to interact with the exit."),
        }
    }

    fn open(&mut self, player: &Player) -> Interaction {
        match self.required_key {
            Some(key) if player.has_key(key) => {
                self.unlock();
                Interaction::message(
                    "You use your key to unlock the exit door. You can now escape the labyrinth!",
                )
            }
            Some(key) => Interaction::message(format!(
                "The exit door is locked. You need a {} to unlock it.",
                key.key_name()
            )),
            None => {
                info!("{} escaped the labyrinth", player.stats.name);
                Interaction::message("VICTORY! You escape from the magical labyrinth!")
                    .with_outcome(Outcome::Victory)
                    .with_event(GameEvent::Escaped)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Artifact;

    #[test]
    fn test_unlocked_exit_is_victory() {
        let mut exit = ExitRoom::unlocked();
        let mut player = Player::default();
        let interaction = exit.interact(&mut player, "escape");
        assert!(interaction.is_victory());
        assert!(interaction.message.starts_with("VICTORY!"));
    }

    #[test]
    fn test_locked_exit_needs_matching_key() {
        let mut exit = ExitRoom::locked(KeyId::Crystal);
        let mut player = Player::default();

        let denied = exit.interact(&mut player, "open");
        assert_eq!(
            denied.message,
            "The exit door is locked. You need a Crystal Key to unlock it."
        );
        assert!(!denied.is_victory());

        player.add_artifact(Artifact::key("Golden Key", "", KeyId::Golden));
        assert!(exit.interact(&mut player, "open").message.contains("locked"));
        assert!(exit.is_locked());

        player.add_artifact(Artifact::key("Crystal Key", "", KeyId::Crystal));
        let unlocked = exit.interact(&mut player, "open");
        assert!(!unlocked.is_victory());
        assert!(!exit.is_locked());

        assert!(exit.interact(&mut player, "leave").is_victory());
    }

    #[test]
    fn test_examine_names_lock() {
        let mut exit = ExitRoom::locked(KeyId::Runic);
        let mut player = Player::default();
        assert!(exit
            .interact(&mut player, "examine")
            .message
            .contains("runic lock"));
    }

    #[test]
    fn test_entry_text() {
        let exit = ExitRoom::locked(KeyId::Golden);
        assert!(exit
            .enter(EXIT_ROOM_DESCRIPTION)
            .message
            .ends_with("You'll need a key to open it."));
    }
}
