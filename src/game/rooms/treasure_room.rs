//! Treasure rooms hold a hoard that can be looted once.

use crate::game::{Artifact, GameEvent, Interaction, Player};
use crate::generation::treasure_hoard;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

pub const TREASURE_ROOM_DESCRIPTION: &str =
    "A room filled with glittering treasures and ancient artifacts.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureRoom {
    artifacts: Vec<Artifact>,
    pub looted: bool,
}

impl TreasureRoom {
    pub fn new(artifacts: Vec<Artifact>) -> Self {
        Self {
            artifacts,
            looted: false,
        }
    }

    pub fn generate(rng: &mut StdRng) -> Self {
        Self::new(treasure_hoard(rng))
    }

    pub fn describe(&self) -> String {
        TREASURE_ROOM_DESCRIPTION.to_string()
    }

    /// Items still lying in the room.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn enter(&self, description: &str) -> Interaction {
        if self.looted {
            Interaction::message(format!(
                "You enter a treasure room that has already been looted. {description} But all treasures have been taken."
            ))
        } else {
            Interaction::message(format!(
                "You enter a treasure room! {description} You can see {} valuable items.",
                self.artifacts.len()
            ))
        }
    }

    pub fn interact(&mut self, player: &mut Player, action: &str) -> Interaction {
        if self.looted {
            return Interaction::message("This room has already been looted.");
        }

        match action {
            "loot" | "take treasure" | "collect" | "gather" => self.loot(player),
            "examine" | "look" => Interaction::message(listing(
                "You see the following treasures:",
                &self.artifacts,
            )),
            _ => Interaction::message(
                "Try 'loot', 'take treasure', or 'examine' to interact with the treasure.",
            ),
        }
    }

    fn loot(&mut self, player: &mut Player) -> Interaction {
        let items = std::mem::take(&mut self.artifacts);
        self.looted = true;

        let message = listing("You collect the following items:", &items);
        let names = items.iter().map(|artifact| artifact.name.clone()).collect();

        for artifact in items {
            player.add_artifact(artifact);
        }

        Interaction::message(message).with_event(GameEvent::ArtifactsCollected { names })
    }
}

fn listing(header: &str, items: &[Artifact]) -> String {
    let mut text = header.to_string();
    for artifact in items {
        text.push_str("\n- ");
        text.push_str(&artifact.to_string());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::KeyId;

    fn hoard() -> TreasureRoom {
        TreasureRoom::new(vec![
            Artifact::bonus("Health Potion", "A red potion that restores health", 20, 0, 0),
            Artifact::bonus("Shield Charm", "A charm that enhances defensive capabilities", 0, 0, 3),
            Artifact::key("Golden Key", "A key that seems important", KeyId::Golden),
        ])
    }

    #[test]
    fn test_examine_lists_without_transfer() {
        let mut room = hoard();
        let mut player = Player::default();
        let interaction = room.interact(&mut player, "examine");
        assert!(interaction.message.starts_with("You see the following treasures:"));
        assert!(interaction.message.contains("- Golden Key: A key that seems important (Key)"));
        assert!(player.inventory.is_empty());
        assert_eq!(room.artifacts().len(), 3);
    }

    #[test]
    fn test_loot_transfers_in_order_once() {
        let mut room = hoard();
        let mut player = Player::default();

        let interaction = room.interact(&mut player, "take treasure");
        assert!(interaction.message.starts_with("You collect the following items:"));
        let names: Vec<&str> = player.inventory.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Health Potion", "Shield Charm", "Golden Key"]);
        assert!(player.has_key(KeyId::Golden));
        assert_eq!(player.stats.defense, 8);

        let again = room.interact(&mut player, "loot");
        assert_eq!(again.message, "This room has already been looted.");
        assert_eq!(player.inventory.len(), 3);
        assert!(room.artifacts().is_empty());
        assert!(room
            .enter(&room.describe())
            .message
            .contains("already been looted"));
    }

    #[test]
    fn test_entry_counts_items() {
        let room = hoard();
        assert!(room
            .enter(TREASURE_ROOM_DESCRIPTION)
            .message
            .ends_with("You can see 3 valuable items."));
    }
}
