//! # Encounter Generation
//!
//! Tables for the creatures, traps and riddles placed in special rooms.

use crate::game::{Enemy, EnemyStance, EntityStats, RiddlePuzzle, Trap, TrapRiddle};
use crate::utils::math::chance;
use crate::{GenerationConfig, Generator, LabyrinthError, LabyrinthResult};
use rand::rngs::StdRng;
use rand::Rng;

/// A row of the enemy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub experience: u32,
}

impl EnemyTemplate {
    const fn new(
        name: &'static str,
        description: &'static str,
        health: i32,
        attack: i32,
        defense: i32,
        speed: i32,
        experience: u32,
    ) -> Self {
        Self {
            name,
            description,
            health,
            attack,
            defense,
            speed,
            experience,
        }
    }

    /// Builds a sleeping enemy from this template.
    pub fn spawn(&self, stance: EnemyStance) -> Enemy {
        let stats = EntityStats::new(
            self.name,
            self.description,
            self.health,
            self.attack,
            self.defense,
            self.speed,
        );
        Enemy::new(stats, self.experience, stance)
    }
}

pub const ENEMIES: [EnemyTemplate; 6] = [
    EnemyTemplate::new("Goblin", "A small, green creature with a wicked grin", 15, 8, 3, 2, 10),
    EnemyTemplate::new("Skeleton", "A reanimated skeleton clutching a rusty sword", 25, 10, 2, 3, 15),
    EnemyTemplate::new("Orc", "A bulky, green-skinned brute with tusks", 35, 12, 5, 5, 20),
    EnemyTemplate::new("Troll", "A towering creature with thick, regenerating skin", 50, 15, 8, 10, 30),
    EnemyTemplate::new("Ghost", "A translucent specter that floats eerily", 20, 8, 1, 15, 25),
    EnemyTemplate::new("Giant Spider", "A hairy arachnid the size of a wolf", 30, 12, 4, 4, 20),
];

/// `(name, description, damage)`
pub const TRAPS: [(&str, &str, i32); 5] = [
    ("Spike Pit", "A pit filled with sharp spikes", 20),
    ("Poison Dart", "A trap that shoots poisonous darts", 15),
    ("Fire Geyser", "A geyser that erupts with fire", 25),
    ("Crushing Ceiling", "A ceiling that lowers to crush intruders", 30),
    ("Acid Spray", "A trap that sprays corrosive acid", 18),
];

/// `(question, answer)` for puzzle rooms.
pub const RIDDLES: [(&str, &str); 5] = [
    (
        "I speak without a mouth and hear without ears. I have no body, but I come alive with wind. What am I?",
        "echo",
    ),
    ("The more you take, the more you leave behind. What am I?", "footsteps"),
    (
        "What has keys but no locks, space but no room, and you can enter but not go in?",
        "keyboard",
    ),
    ("What gets wetter as it dries?", "towel"),
    (
        "I'm light as a feather, yet the strongest person can't hold me for more than a few minutes. What am I?",
        "breath",
    ),
];

/// `(question, answer)` posed to a player caught in a trap.
pub const TRAP_RIDDLES: [(&str, &str); 5] = [
    ("What gets wetter as it dries?", "towel"),
    ("I'm tall when I'm young and short when I'm old. What am I?", "candle"),
    ("What has hands but can't clap?", "clock"),
    ("The more you take, the more you leave behind. What am I?", "footsteps"),
    ("What has to be broken before you can use it?", "egg"),
];

/// Chance that a freshly placed trap starts hidden.
pub const HIDDEN_TRAP_CHANCE: f64 = 0.7;

fn pick<T: Copy>(table: &[T], rng: &mut StdRng) -> T {
    table[rng.gen_range(0..table.len())]
}

/// A random sleeping enemy with a random stance.
pub fn random_enemy(rng: &mut StdRng) -> Enemy {
    let template = pick(&ENEMIES, rng);
    let stance = EnemyStance::random(rng);
    template.spawn(stance)
}

/// A random trap, hidden 70% of the time.
pub fn random_trap(rng: &mut StdRng) -> Trap {
    let (name, description, damage) = pick(&TRAPS, rng);
    if chance(rng, HIDDEN_TRAP_CHANCE) {
        Trap::new(name, description, damage)
    } else {
        Trap::active(name, description, damage)
    }
}

pub fn random_riddle(rng: &mut StdRng) -> RiddlePuzzle {
    let (question, answer) = pick(&RIDDLES, rng);
    RiddlePuzzle::new(question, answer)
}

pub fn random_trap_riddle(rng: &mut StdRng) -> TrapRiddle {
    let (question, answer) = pick(&TRAP_RIDDLES, rng);
    TrapRiddle::new(question, answer)
}

/// Generates the enemy for a monster room.
#[derive(Debug, Clone, Default)]
pub struct EncounterGenerator;

impl Generator<Enemy> for EncounterGenerator {
    fn generate(&self, _config: &GenerationConfig, rng: &mut StdRng) -> LabyrinthResult<Enemy> {
        Ok(random_enemy(rng))
    }

    fn validate(&self, content: &Enemy, _config: &GenerationConfig) -> LabyrinthResult<()> {
        if !ENEMIES.iter().any(|template| template.name == content.stats.name) {
            return Err(LabyrinthError::GenerationFailed(format!(
                "unknown enemy '{}'",
                content.stats.name
            )));
        }
        if content.stats.health != content.stats.max_health {
            return Err(LabyrinthError::GenerationFailed(
                "enemy spawned wounded".to_string(),
            ));
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "EncounterGenerator"
    }
}
