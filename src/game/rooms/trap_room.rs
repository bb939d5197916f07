//! Trap rooms. A trap may go off on entry, can be searched for, disarmed or
//! stepped around.

use crate::game::{Entity, GameEvent, Interaction, Outcome, Player, Trap};
use crate::generation::{random_trap, random_trap_riddle};
use crate::utils::math::chance;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

pub const TRAP_ROOM_DESCRIPTION: &str = "A room that feels somehow off.";

/// Chance that a hidden trap goes off when the player walks in.
pub const HIDDEN_TRIGGER_CHANCE: f64 = 0.7;

/// Chance that examining the room uncovers a hidden trap.
pub const EXAMINE_REVEAL_CHANCE: f64 = 0.6;

/// Chance that the room's disarm action neutralizes an active trap.
pub const ROOM_DISARM_CHANCE: f64 = 0.5;

/// Chance of stepping around a visible trap unharmed.
pub const AVOID_CHANCE: f64 = 0.7;

const KILLED_BY_TRAP: &str = "\nYou have been killed by the trap!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapRoom {
    pub trap: Trap,
}

impl TrapRoom {
    pub fn new(trap: Trap) -> Self {
        Self { trap }
    }

    pub fn generate(rng: &mut StdRng) -> Self {
        Self::new(random_trap(rng))
    }

    /// Room text for the trap's current visibility. [`crate::Room`] captures
    /// it once, when the room is built.
    pub fn describe(&self) -> String {
        let detail = if self.trap.is_hidden() {
            "There's an uneasy feeling in the air."
        } else {
            "You can see a dangerous trap here."
        };
        format!("{TRAP_ROOM_DESCRIPTION} {detail}")
    }

    pub fn enter(&mut self, description: &str, player: &mut Player, rng: &mut StdRng) -> Interaction {
        let mut message = format!("You enter {description}\n");

        let triggers =
            self.trap.is_active() || (self.trap.is_hidden() && chance(rng, HIDDEN_TRIGGER_CHANCE));
        if !triggers {
            return Interaction::message(message);
        }

        if self.trap.is_hidden() {
            message.push_str("You've triggered a hidden trap! ");
        } else {
            message.push_str("You've triggered the visible trap! ");
        }

        let riddle = random_trap_riddle(rng);
        message.push_str(&format!(
            "\nYou are trapped! Solve the puzzle: {}",
            riddle.question
        ));
        player.set_trap_riddle(riddle);

        let raw = self.trap.trigger();
        let damage = player.take_damage(raw);
        message.push_str(&format!(
            "\nThe {} deals {damage} damage to you!",
            self.trap.name
        ));

        self.hurt(player, message, damage)
    }

    pub fn interact(&mut self, player: &mut Player, action: &str, rng: &mut StdRng) -> Interaction {
        match action {
            "examine" | "look" | "inspect" => self.examine(rng),
            "disarm" | "disable" => self.disarm(player, rng),
            "avoid" | "jump over" | "bypass" => self.avoid(player, rng),
            _ => Interaction::message("Try 'examine', 'disarm', or 'avoid' to interact with the room."),
        }
    }

    fn examine(&mut self, rng: &mut StdRng) -> Interaction {
        let trap = &mut self.trap;

        let message = if trap.is_hidden() && chance(rng, EXAMINE_REVEAL_CHANCE) {
            trap.reveal();
            format!(
                "You carefully examine the room and discover a hidden {}! {}",
                trap.name, trap.description
            )
        } else if trap.is_hidden() {
            "You examine the room carefully but don't notice anything unusual.".to_string()
        } else if trap.is_active() {
            format!("You examine the {}. {}", trap.name, trap.description)
        } else {
            format!("You examine the disabled {}. {}", trap.name, trap.description)
        };

        Interaction::message(message)
    }

    fn disarm(&mut self, player: &mut Player, rng: &mut StdRng) -> Interaction {
        if self.trap.is_disabled() {
            return Interaction::message("The trap is already disabled.");
        }
        if self.trap.is_hidden() {
            return Interaction::message(
                "You can't disarm a trap you haven't found yet. Try examining the room first.",
            );
        }

        if chance(rng, ROOM_DISARM_CHANCE) {
            self.trap.disable();
            return Interaction::message(format!(
                "You successfully disarm the {}!",
                self.trap.name
            ));
        }

        let damage = player.take_damage(self.trap.trigger());
        let message = format!(
            "You fail to disarm the trap and trigger it! The {} deals {damage} damage to you!",
            self.trap.name
        );
        self.hurt(player, message, damage)
    }

    fn avoid(&mut self, player: &mut Player, rng: &mut StdRng) -> Interaction {
        if self.trap.is_disabled() {
            return Interaction::message(format!(
                "You easily pass by the disabled {}.",
                self.trap.name
            ));
        }

        if self.trap.is_hidden() {
            let damage = player.take_damage(self.trap.trigger());
            let message = format!(
                "As you move through the room, you trigger a hidden {}! It deals {damage} damage to you!",
                self.trap.name
            );
            return self.hurt(player, message, damage);
        }

        if chance(rng, AVOID_CHANCE) {
            return Interaction::message(format!(
                "You carefully avoid the {} and pass safely.",
                self.trap.name
            ));
        }

        let damage = player.take_damage(self.trap.trigger() / 2);
        let message = format!(
            "You try to avoid the {} but partially trigger it! You take {damage} damage!",
            self.trap.name
        );
        self.hurt(player, message, damage)
    }

    fn hurt(&self, player: &Player, mut message: String, damage: i32) -> Interaction {
        let mut outcome = Outcome::Continue;
        if !player.is_alive() {
            message.push_str(KILLED_BY_TRAP);
            outcome = Outcome::PlayerDefeated;
        }

        Interaction::message(message)
            .with_outcome(outcome)
            .with_event(GameEvent::TrapTriggered {
                trap: self.trap.name.clone(),
                damage,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::TrapState;
    use rand::SeedableRng;

    fn room_with(state: TrapState) -> TrapRoom {
        let mut trap = Trap::new("Spike Pit", "A pit filled with sharp spikes", 20);
        trap.state = state;
        TrapRoom::new(trap)
    }

    #[test]
    fn test_description_reflects_initial_visibility() {
        assert!(room_with(TrapState::Hidden).describe().ends_with("uneasy feeling in the air."));
        assert!(room_with(TrapState::Active).describe().ends_with("dangerous trap here."));
    }

    #[test]
    fn test_active_trap_always_triggers_on_entry() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut room = room_with(TrapState::Active);
        let mut player = Player::default();

        let interaction = room.enter(&room.describe(), &mut player, &mut rng);
        assert!(interaction.message.contains("You've triggered the visible trap!"));
        assert!(player.is_trapped());
        assert!(player.trap_riddle().is_some());
        // 20 - 5/2 = 18
        assert_eq!(player.health(), 82);
        assert_eq!(
            interaction.events,
            vec![GameEvent::TrapTriggered {
                trap: "Spike Pit".to_string(),
                damage: 18
            }]
        );
    }

    #[test]
    fn test_disabled_trap_never_triggers_on_entry() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut room = room_with(TrapState::Disabled);
        let mut player = Player::default();
        for _ in 0..20 {
            room.enter(&room.describe(), &mut player, &mut rng);
        }
        assert_eq!(player.health(), 100);
        assert!(!player.is_trapped());
    }

    #[test]
    fn test_hidden_trap_triggers_on_most_entries() {
        let mut rng = StdRng::seed_from_u64(33);
        let mut triggered = 0;

        for _ in 0..200 {
            let mut room = room_with(TrapState::Hidden);
            let mut player = Player::default();
            let interaction = room.enter(&room.describe(), &mut player, &mut rng);

            if player.health() < 100 {
                triggered += 1;
                assert!(interaction.message.contains("You've triggered a hidden trap!"));
                assert!(room.trap.is_active());
                assert!(player.is_trapped());
            } else {
                assert!(room.trap.is_hidden());
                assert!(!player.is_trapped());
                assert!(interaction.events.is_empty());
            }
        }
        assert!((115..=165).contains(&triggered), "triggered {triggered} times");
    }

    #[test]
    fn test_examine_sometimes_reveals_hidden_trap() {
        let mut rng = StdRng::seed_from_u64(34);
        let mut player = Player::default();
        let mut revealed = 0;

        for _ in 0..200 {
            let mut room = room_with(TrapState::Hidden);
            let message = room.interact(&mut player, "inspect", &mut rng).message;

            if room.trap.is_active() {
                revealed += 1;
                assert_eq!(
                    message,
                    "You carefully examine the room and discover a hidden Spike Pit! A pit filled with sharp spikes"
                );
            } else {
                assert!(room.trap.is_hidden());
                assert_eq!(
                    message,
                    "You examine the room carefully but don't notice anything unusual."
                );
            }
        }
        assert!((95..=145).contains(&revealed), "revealed {revealed} times");
        assert_eq!(player.health(), 100);
    }

    #[test]
    fn test_examine_visible_and_disabled_traps() {
        let mut rng = StdRng::seed_from_u64(35);
        let mut player = Player::default();

        let mut active = room_with(TrapState::Active);
        assert_eq!(
            active.interact(&mut player, "look", &mut rng).message,
            "You examine the Spike Pit. A pit filled with sharp spikes"
        );

        let mut disabled = room_with(TrapState::Disabled);
        assert_eq!(
            disabled.interact(&mut player, "examine", &mut rng).message,
            "You examine the disabled Spike Pit. A pit filled with sharp spikes"
        );
        assert!(disabled.trap.is_disabled());
    }

    #[test]
    fn test_disarm_rules() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut player = Player::default();

        let mut hidden = room_with(TrapState::Hidden);
        let denied = hidden.interact(&mut player, "disarm", &mut rng);
        assert!(denied.message.starts_with("You can't disarm a trap you haven't found yet."));
        assert!(hidden.trap.is_hidden());

        let mut disabled = room_with(TrapState::Disabled);
        assert_eq!(
            disabled.interact(&mut player, "disable", &mut rng).message,
            "The trap is already disabled."
        );

        let mut disarmed = 0;
        for _ in 0..100 {
            let mut room = room_with(TrapState::Active);
            let mut player = Player::default();
            room.interact(&mut player, "disarm", &mut rng);
            if room.trap.is_disabled() {
                disarmed += 1;
                assert_eq!(player.health(), 100);
            } else {
                assert!(room.trap.is_active());
                assert_eq!(player.health(), 82);
            }
        }
        assert!((25..=75).contains(&disarmed), "disarmed {disarmed} times");
    }

    #[test]
    fn test_avoid_hidden_trap_hurts_and_reveals() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut room = room_with(TrapState::Hidden);
        let mut player = Player::default();

        let interaction = room.interact(&mut player, "bypass", &mut rng);
        assert!(interaction.message.contains("you trigger a hidden Spike Pit"));
        assert!(room.trap.is_active());
        assert_eq!(player.health(), 82);
    }

    #[test]
    fn test_avoid_active_trap_is_half_damage_when_it_fails() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..50 {
            let mut room = room_with(TrapState::Active);
            let mut player = Player::default();
            room.interact(&mut player, "jump over", &mut rng);
            // 10 - 5/2 = 8
            assert!(player.health() == 100 || player.health() == 92);
        }
    }

    #[test]
    fn test_lethal_trap_reports_defeat() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut room = room_with(TrapState::Active);
        let mut player = Player::default();
        player.stats.health = 3;

        let interaction = room.enter(&room.describe(), &mut player, &mut rng);
        assert!(interaction.is_defeat());
        assert!(interaction.message.ends_with("You have been killed by the trap!"));
        assert_eq!(player.health(), 0);
    }
}
