//! Plain rooms with nothing in them.

use crate::game::Interaction;
use serde::{Deserialize, Serialize};

pub const REGULAR_ROOM_DESCRIPTION: &str =
    "A simple stone room with flickering torches on the walls.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegularRoom;

impl RegularRoom {
    pub fn describe(&self) -> String {
        REGULAR_ROOM_DESCRIPTION.to_string()
    }

    pub fn enter(&self, description: &str) -> Interaction {
        Interaction::message(format!("You enter {description}"))
    }

    pub fn interact(&self, description: &str, action: &str) -> Interaction {
        let message = match action {
            "look" | "examine" => format!(
                "You examine the room more closely. {description} There's nothing particularly interesting here."
            ),
            "search" => "You search the room carefully, but find nothing of value.".to_string(),
            _ => format!("There's nothing to {action} here."),
        };
        Interaction::message(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_room_texts() {
        let room = RegularRoom;
        let description = room.describe();
        assert_eq!(
            room.enter(&description).message,
            "You enter A simple stone room with flickering torches on the walls."
        );
        assert!(room
            .interact(&description, "examine")
            .message
            .contains("nothing particularly interesting"));
        assert_eq!(
            room.interact(&description, "dance").message,
            "There's nothing to dance here."
        );
    }
}
