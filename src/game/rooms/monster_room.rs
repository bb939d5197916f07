//! Monster rooms. The enemy is fought to the death or snuck past.

use crate::game::{
    resolve_combat, Artifact, Enemy, Entity, GameEvent, Interaction, Outcome, Player,
};
use crate::generation::{monster_reward, random_enemy};
use log::info;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

pub const MONSTER_ROOM_DESCRIPTION: &str = "A dark room with the presence of danger.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterRoom {
    pub enemy: Enemy,
    pub reward: Artifact,
    pub defeated: bool,
}

impl MonsterRoom {
    pub fn new(enemy: Enemy, reward: Artifact) -> Self {
        Self {
            enemy,
            reward,
            defeated: false,
        }
    }

    pub fn generate(rng: &mut StdRng) -> Self {
        let enemy = random_enemy(rng);
        let reward = monster_reward(rng);
        Self::new(enemy, reward)
    }

    pub fn describe(&self) -> String {
        format!(
            "{MONSTER_ROOM_DESCRIPTION} {}",
            self.enemy.stats.description
        )
    }

    pub fn enter(&mut self, description: &str, rng: &mut StdRng) -> Interaction {
        let name = self.enemy.stats.name.clone();

        if self.defeated {
            return Interaction::message(format!(
                "You enter a room where you defeated a {name}. The creature's remains still litter the floor."
            ));
        }

        let reaction = self.enemy.player_detected(rng);
        let mut message = format!(
            "You enter a monster room! {description} The {name} is {}!",
            self.enemy.state_description()
        );
        if let Some(reaction) = reaction {
            message.push('\n');
            message.push_str(&reaction);
        }
        Interaction::message(message)
    }

    pub fn interact(&mut self, player: &mut Player, action: &str, rng: &mut StdRng) -> Interaction {
        let name = self.enemy.stats.name.clone();

        if self.defeated {
            return Interaction::message(format!("The {name} has already been defeated."));
        }

        match action {
            "attack" | "fight" => self.fight(player, rng),
            "examine" | "look" => Interaction::message(format!(
                "You examine the {name}. {} It is {}.",
                self.enemy.stats.description,
                self.enemy.state_description()
            )),
            "sneak" | "hide" => {
                if self.enemy.can_avoid() {
                    Interaction::message(format!(
                        "You successfully sneak past the {name} without alerting it."
                    ))
                } else {
                    self.enemy.player_detected(rng);
                    Interaction::message(format!(
                        "The {name} spots you trying to sneak by! It prepares to attack!"
                    ))
                }
            }
            _ => Interaction::message(
                "Try 'attack', 'examine', or 'sneak' to interact with the monster.",
            ),
        }
    }

    fn fight(&mut self, player: &mut Player, rng: &mut StdRng) -> Interaction {
        let name = self.enemy.stats.name.clone();
        let log = resolve_combat(player, &mut self.enemy, rng);
        let mut message = log.transcript();

        if !log.player_won {
            info!("{} was defeated by the {}", player.name(), name);
            message.push_str(&format!("You have been defeated by the {name}!"));
            return Interaction::message(message)
                .with_outcome(Outcome::PlayerDefeated)
                .with_event(GameEvent::CombatLost {
                    enemy: name,
                    damage_taken: log.damage_taken,
                });
        }

        self.defeated = true;
        let experience = self.enemy.experience_value;
        let levelled_up = player.gain_experience(experience);
        player.add_artifact(self.reward.clone());
        info!("{} defeated the {} in {} turns", player.name(), name, log.turns);

        message.push_str(&format!(
            "You defeated the {name}!\nYou gained {experience} experience!\nYou found: {}",
            self.reward
        ));

        let mut interaction = Interaction::message(message).with_event(GameEvent::CombatWon {
            enemy: name,
            experience,
            turns: log.turns,
            damage_taken: log.damage_taken,
        });

        if levelled_up {
            interaction
                .message
                .push_str(&format!("\nYou reached level {}!", player.level));
            interaction.events.push(GameEvent::LevelUp {
                level: player.level,
            });
        }

        interaction.with_event(GameEvent::ArtifactsCollected {
            names: vec![self.reward.name.clone()],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{EnemyStance, EnemyState, EntityStats, Position};
    use rand::SeedableRng;

    fn goblin_room() -> MonsterRoom {
        let enemy = Enemy::new(
            EntityStats::new("Goblin", "A small, green creature with a wicked grin", 15, 8, 3, 2),
            10,
            EnemyStance::Balanced,
        );
        MonsterRoom::new(
            enemy,
            Artifact::bonus("Monster Fang", "A sharp fang taken from a defeated monster", 0, 3, 0),
        )
    }

    #[test]
    fn test_description_includes_enemy() {
        assert_eq!(
            goblin_room().describe(),
            "A dark room with the presence of danger. A small, green creature with a wicked grin"
        );
    }

    #[test]
    fn test_one_hit_victory() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut room = goblin_room();
        let mut player = Player::default();
        player.stats.attack = 1000;
        player.move_to(Position::new(0, 0));

        let interaction = room.interact(&mut player, "attack", &mut rng);
        assert!(room.defeated);
        assert_eq!(interaction.outcome, Outcome::Continue);
        assert!(interaction.message.contains("You defeated the Goblin!"));
        assert!(interaction.message.contains("You gained 10 experience!"));
        assert_eq!(player.experience, 10);
        assert!(player.has_artifact("Monster Fang"));
        assert_eq!(player.stats.attack, 1003);

        let again = room.interact(&mut player, "attack", &mut rng);
        assert_eq!(again.message, "The Goblin has already been defeated.");
        assert_eq!(player.experience, 10);
    }

    #[test]
    fn test_living_player_is_never_reported_defeated() {
        let mut rng = StdRng::seed_from_u64(13);
        let wall = Enemy::new(
            EntityStats::new("Wall", "A living wall of stone", 15_000, 0, 0, 0),
            1,
            EnemyStance::Balanced,
        );
        let mut room = MonsterRoom::new(wall, goblin_room().reward);
        let mut player = Player::default();
        player.stats.attack = 0;
        player.stats.max_health = 20_000;
        player.stats.health = 20_000;

        let interaction = room.interact(&mut player, "attack", &mut rng);
        assert!(player.is_alive());
        assert!(!interaction.is_defeat());
        assert!(room.defeated);
        assert!(!interaction.message.contains("You have been defeated"));
    }

    #[test]
    fn test_defeat_leaves_room_unresolved() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut room = goblin_room();
        room.enemy.stats.attack = 1000;
        room.enemy.state = EnemyState::Hunting;
        let mut player = Player::default();
        player.stats.attack = 1;
        player.move_to(Position::new(0, 1));

        let interaction = room.interact(&mut player, "fight", &mut rng);
        assert!(interaction.is_defeat());
        assert!(!room.defeated);
        assert!(interaction.message.ends_with("You have been defeated by the Goblin!"));
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn test_sneak_depends_on_state() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut room = goblin_room();
        let mut player = Player::default();

        let sneaky = room.interact(&mut player, "sneak", &mut rng);
        assert!(sneaky.message.starts_with("You successfully sneak past"));

        room.enemy.state = EnemyState::Hunting;
        let spotted = room.interact(&mut player, "hide", &mut rng);
        assert!(spotted.message.contains("spots you"));
    }

    #[test]
    fn test_entry_detects_player() {
        let mut rng = StdRng::seed_from_u64(40);
        let mut woken = 0;

        for _ in 0..200 {
            let mut room = goblin_room();
            let message = room.enter(&room.describe(), &mut rng).message;

            match room.enemy.state {
                EnemyState::Hunting => {
                    woken += 1;
                    assert!(message.contains("The Goblin is alert and aggressively hunting you!"));
                    assert!(message.ends_with("\nThe Goblin wakes up and sees you!"));
                }
                EnemyState::Sleeping => {
                    assert!(message.contains("The Goblin is sleeping soundly"));
                    assert!(message.ends_with("\nThe Goblin stirs but remains asleep."));
                }
                EnemyState::Fleeing => panic!("detection never makes an enemy flee"),
            }
        }
        assert!((115..=165).contains(&woken), "woke {woken} times");
    }

    #[test]
    fn test_entry_keeps_hunting_enemy_hunting() {
        let mut rng = StdRng::seed_from_u64(41);
        let mut room = goblin_room();
        room.enemy.state = EnemyState::Hunting;

        let message = room.enter(&room.describe(), &mut rng).message;
        assert!(message.starts_with("You enter a monster room! A dark room with the presence of danger."));
        assert!(message.ends_with("The Goblin is already hunting you!"));
        assert_eq!(room.enemy.state, EnemyState::Hunting);

        room.enemy.state = EnemyState::Fleeing;
        let message = room.enter(&room.describe(), &mut rng).message;
        assert!(message.ends_with("The Goblin continues trying to escape!"));
        assert_eq!(room.enemy.state, EnemyState::Fleeing);
    }

    #[test]
    fn test_examine_describes_enemy_state() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut room = goblin_room();
        let mut player = Player::default();

        assert_eq!(
            room.interact(&mut player, "examine", &mut rng).message,
            "You examine the Goblin. A small, green creature with a wicked grin It is sleeping soundly, unaware of your presence."
        );
        room.enemy.state = EnemyState::Hunting;
        assert!(room
            .interact(&mut player, "look", &mut rng)
            .message
            .ends_with("It is alert and aggressively hunting you."));
        assert_eq!(room.enemy.state, EnemyState::Hunting);
    }

    #[test]
    fn test_defeated_room_entry() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut room = goblin_room();
        room.defeated = true;
        let message = room.enter(&room.describe(), &mut rng).message;
        assert!(message.contains("remains still litter the floor"));
        assert_eq!(room.enemy.state, EnemyState::Sleeping);
    }
}
