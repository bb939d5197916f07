//! # Item Generation
//!
//! Artifact tables for treasure hoards, puzzle rewards and monster drops.

use crate::game::{Artifact, KeyId};
use crate::utils::math::chance;
use crate::{GenerationConfig, Generator, LabyrinthResult};
use rand::rngs::StdRng;
use rand::Rng;

/// `(name, description, health, attack, defense)`
type BonusEntry = (&'static str, &'static str, i32, i32, i32);

pub const COMMON_TREASURES: [BonusEntry; 4] = [
    ("Health Potion", "A red potion that restores health", 20, 0, 0),
    ("Strength Elixir", "A potion that temporarily increases strength", 0, 5, 0),
    ("Shield Charm", "A charm that enhances defensive capabilities", 0, 0, 3),
    ("Minor Healing Scroll", "A scroll that heals minor wounds", 10, 0, 0),
];

pub const RARE_TREASURES: [BonusEntry; 4] = [
    ("Dragonscale Amulet", "An amulet made from dragon scales", 15, 5, 10),
    ("Enchanted Sword", "A sword imbued with magical energy", 0, 15, 0),
    ("Mage's Staff", "A staff that enhances magical abilities", 10, 10, 5),
    ("Blessed Shield", "A shield blessed by the gods", 0, 0, 20),
];

pub const PUZZLE_REWARDS: [BonusEntry; 5] = [
    ("Ancient Medallion", "A medallion with strange symbols", 0, 5, 0),
    ("Mystic Crystal", "A glowing crystal that hums with power", 10, 0, 0),
    ("Enchanted Ring", "A ring that protects its wearer", 0, 0, 5),
    ("Magical Amulet", "An amulet that enhances abilities", 5, 3, 2),
    ("Arcane Scepter", "A powerful scepter crackling with energy", 0, 10, 0),
];

pub const MONSTER_REWARDS: [BonusEntry; 5] = [
    ("Monster Fang", "A sharp fang taken from a defeated monster", 0, 3, 0),
    ("Monster Hide", "Tough hide that improves defense", 0, 0, 3),
    ("Monster Heart", "A still-beating heart that increases health", 10, 0, 0),
    ("Monster Claw", "A razor-sharp claw useful in combat", 0, 5, 0),
    ("Monster Eye", "A magical eye that enhances perception", 5, 2, 2),
];

/// `(key, description)`
pub const KEYS: [(KeyId, &str); 3] = [
    (KeyId::Golden, "A key that seems important"),
    (KeyId::Crystal, "A key made of pure crystal"),
    (KeyId::Runic, "A key with strange runes inscribed"),
];

/// Chance that a hoard contains one rare treasure.
pub const RARE_TREASURE_CHANCE: f64 = 0.3;

/// Chance that a hoard contains a key.
pub const KEY_CHANCE: f64 = 0.2;

/// Most common treasures a single hoard can hold.
pub const MAX_COMMON_TREASURES: usize = 3;

fn pick<T: Copy>(table: &[T], rng: &mut StdRng) -> T {
    table[rng.gen_range(0..table.len())]
}

fn bonus_artifact((name, description, health, attack, defense): BonusEntry) -> Artifact {
    Artifact::bonus(name, description, health, attack, defense)
}

/// Creates the key artifact that opens `key_id`.
pub fn key_artifact(key_id: KeyId) -> Artifact {
    let description = KEYS
        .iter()
        .find(|(id, _)| *id == key_id)
        .map_or("", |(_, description)| description);
    Artifact::key(key_id.key_name(), description, key_id)
}

/// One to three common treasures, then a possible rare treasure and a
/// possible key, in that order.
pub fn treasure_hoard(rng: &mut StdRng) -> Vec<Artifact> {
    let common = rng.gen_range(1..=MAX_COMMON_TREASURES);
    let mut hoard: Vec<Artifact> = (0..common)
        .map(|_| bonus_artifact(pick(&COMMON_TREASURES, rng)))
        .collect();

    if chance(rng, RARE_TREASURE_CHANCE) {
        hoard.push(bonus_artifact(pick(&RARE_TREASURES, rng)));
    }

    if chance(rng, KEY_CHANCE) {
        let (key_id, _) = pick(&KEYS, rng);
        hoard.push(key_artifact(key_id));
    }

    hoard
}

pub fn puzzle_reward(rng: &mut StdRng) -> Artifact {
    bonus_artifact(pick(&PUZZLE_REWARDS, rng))
}

pub fn monster_reward(rng: &mut StdRng) -> Artifact {
    bonus_artifact(pick(&MONSTER_REWARDS, rng))
}

/// Generates treasure hoards.
#[derive(Debug, Clone, Default)]
pub struct ItemGenerator;

impl Generator<Vec<Artifact>> for ItemGenerator {
    fn generate(&self, _config: &GenerationConfig, rng: &mut StdRng) -> LabyrinthResult<Vec<Artifact>> {
        Ok(treasure_hoard(rng))
    }

    fn validate(&self, content: &Vec<Artifact>, _config: &GenerationConfig) -> LabyrinthResult<()> {
        let common = content
            .iter()
            .filter(|artifact| COMMON_TREASURES.iter().any(|entry| entry.0 == artifact.name))
            .count();

        if common == 0 || common > MAX_COMMON_TREASURES {
            return Err(crate::LabyrinthError::GenerationFailed(format!(
                "treasure hoard has {common} common items"
            )));
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "ItemGenerator"
    }
}
