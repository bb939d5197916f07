//! # Combat System
//!
//! Combat strategies turn base stats into per-turn attack and defense values,
//! and [`resolve_combat`] runs a fight to completion.
//!
//! ## Strategies
//!
//! | Strategy   | Attack multiplier               | Defense multiplier              |
//! |------------|---------------------------------|---------------------------------|
//! | Aggressive | 1.5x base, then 0.8 to 1.2      | 0.7 to 0.9                      |
//! | Defensive  | 0.7 to 0.9                      | 1.75x base, then 0.9 to 1.1     |
//! | Magic      | 0.5 to 2.0, 15% chance doubled  | 0.8 to 1.3, 10% chance doubled  |
//! | Enemy      | depends on [`EnemyStance`]      | depends on [`EnemyStance`]      |

use crate::game::{Enemy, Entity, EntityStats, Player};
use crate::utils::math::{chance, roll_factor, scale};
use crate::{LabyrinthError, LabyrinthResult};
use log::trace;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chance that a magic attack lands a critical hit.
pub const MAGIC_CRITICAL_CHANCE: f64 = 0.15;

/// Chance that a magic barrier doubles defense.
pub const MAGIC_BARRIER_CHANCE: f64 = 0.10;

/// Fighting approach an enemy picks once, when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyStance {
    Balanced,
    Aggressive,
    Defensive,
    Magical,
}

impl EnemyStance {
    pub fn all() -> [EnemyStance; 4] {
        [
            EnemyStance::Balanced,
            EnemyStance::Aggressive,
            EnemyStance::Defensive,
            EnemyStance::Magical,
        ]
    }

    /// Picks a stance uniformly at random.
    pub fn random(rng: &mut StdRng) -> EnemyStance {
        let stances = EnemyStance::all();
        stances[rng.gen_range(0..stances.len())]
    }

    pub fn description(self) -> &'static str {
        match self {
            EnemyStance::Balanced => "balanced",
            EnemyStance::Aggressive => "aggressive",
            EnemyStance::Defensive => "defensive",
            EnemyStance::Magical => "magical",
        }
    }

    fn attack_roll(self, base: i32, rng: &mut StdRng) -> Roll {
        match self {
            EnemyStance::Balanced => Roll::plain(scale(base, roll_factor(rng, 0.9, 1.1))),
            EnemyStance::Aggressive => Roll::plain(scale(base, roll_factor(rng, 1.2, 1.5))),
            EnemyStance::Defensive => Roll::plain(scale(base, roll_factor(rng, 0.7, 0.9))),
            EnemyStance::Magical => {
                let factor = roll_factor(rng, 0.5, 2.0);
                Roll::boosted(base, factor, 1.5, chance(rng, MAGIC_CRITICAL_CHANCE))
            }
        }
    }

    fn defense_roll(self, base: i32, rng: &mut StdRng) -> Roll {
        match self {
            EnemyStance::Balanced => Roll::plain(scale(base, roll_factor(rng, 0.9, 1.1))),
            EnemyStance::Aggressive => Roll::plain(scale(base, roll_factor(rng, 0.6, 0.8))),
            EnemyStance::Defensive => Roll::plain(scale(base, roll_factor(rng, 1.2, 1.5))),
            EnemyStance::Magical => {
                let factor = roll_factor(rng, 0.8, 1.2);
                Roll::boosted(base, factor, 1.5, chance(rng, MAGIC_BARRIER_CHANCE))
            }
        }
    }
}

impl fmt::Display for EnemyStance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A rolled attack or defense value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll {
    pub value: i32,
    /// Critical hit on attack rolls, magic barrier on defense rolls
    pub boosted: bool,
}

impl Roll {
    fn plain(value: i32) -> Self {
        Self {
            value,
            boosted: false,
        }
    }

    fn boosted(base: i32, factor: f64, boost: f64, triggered: bool) -> Self {
        let factor = if triggered { factor * boost } else { factor };
        Self {
            value: scale(base, factor),
            boosted: triggered,
        }
    }
}

/// How a combatant converts base stats into attack and defense.
///
/// # Examples
///
/// ```
/// use labyrinth::{CombatStrategy, EntityStats};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let stats = EntityStats::new("Adventurer", "", 100, 10, 5, 5);
/// let mut rng = StdRng::seed_from_u64(1);
/// let attack = CombatStrategy::Aggressive.calculate_attack(&stats, &mut rng);
/// assert!((12..=18).contains(&attack));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CombatStrategy {
    #[default]
    Aggressive,
    Defensive,
    Magic,
    Enemy(EnemyStance),
}

impl CombatStrategy {
    /// The strategies a player can switch between.
    pub fn player_strategies() -> [CombatStrategy; 3] {
        [
            CombatStrategy::Aggressive,
            CombatStrategy::Defensive,
            CombatStrategy::Magic,
        ]
    }

    pub fn roll_attack(&self, stats: &EntityStats, rng: &mut StdRng) -> Roll {
        let base = stats.attack;
        match self {
            CombatStrategy::Aggressive => {
                let boosted = base + scale(base, 0.5);
                Roll::plain(scale(boosted, roll_factor(rng, 0.8, 1.2)))
            }
            CombatStrategy::Defensive => Roll::plain(scale(base, roll_factor(rng, 0.7, 0.9))),
            CombatStrategy::Magic => {
                let factor = roll_factor(rng, 0.5, 2.0);
                Roll::boosted(base, factor, 2.0, chance(rng, MAGIC_CRITICAL_CHANCE))
            }
            CombatStrategy::Enemy(stance) => stance.attack_roll(base, rng),
        }
    }

    pub fn roll_defense(&self, stats: &EntityStats, rng: &mut StdRng) -> Roll {
        let base = stats.defense;
        match self {
            CombatStrategy::Aggressive => Roll::plain(scale(base, roll_factor(rng, 0.7, 0.9))),
            CombatStrategy::Defensive => {
                let boosted = base + scale(base, 0.75);
                Roll::plain(scale(boosted, roll_factor(rng, 0.9, 1.1)))
            }
            CombatStrategy::Magic => {
                let factor = roll_factor(rng, 0.8, 1.3);
                Roll::boosted(base, factor, 2.0, chance(rng, MAGIC_BARRIER_CHANCE))
            }
            CombatStrategy::Enemy(stance) => stance.defense_roll(base, rng),
        }
    }

    pub fn calculate_attack(&self, stats: &EntityStats, rng: &mut StdRng) -> i32 {
        self.roll_attack(stats, rng).value
    }

    pub fn calculate_defense(&self, stats: &EntityStats, rng: &mut StdRng) -> i32 {
        self.roll_defense(stats, rng).value
    }

    pub fn name(&self) -> &'static str {
        match self {
            CombatStrategy::Aggressive => "Aggressive",
            CombatStrategy::Defensive => "Defensive",
            CombatStrategy::Magic => "Magic",
            CombatStrategy::Enemy(_) => "Enemy",
        }
    }

    /// Confirmation shown when a player adopts this strategy.
    pub fn switch_message(&self) -> String {
        match self {
            CombatStrategy::Aggressive => {
                "You switch to an aggressive combat style, trading defense for damage.".to_string()
            }
            CombatStrategy::Defensive => {
                "You switch to a defensive combat style, guarding carefully.".to_string()
            }
            CombatStrategy::Magic => {
                "You switch to a magic combat style. Your power becomes unpredictable.".to_string()
            }
            CombatStrategy::Enemy(stance) => format!("You adopt a {stance} stance."),
        }
    }
}

impl fmt::Display for CombatStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CombatStrategy {
    type Err = LabyrinthError;

    /// Parses the player-facing strategy names, with or without a trailing "mode".
    fn from_str(input: &str) -> LabyrinthResult<Self> {
        let normalized = input.trim().to_lowercase();
        let name = normalized
            .strip_suffix(" mode")
            .unwrap_or(normalized.as_str())
            .trim();

        match name {
            "aggressive" | "attack" => Ok(CombatStrategy::Aggressive),
            "defensive" | "defense" => Ok(CombatStrategy::Defensive),
            "magic" => Ok(CombatStrategy::Magic),
            _ => Err(LabyrinthError::InvalidAction(format!(
                "unknown combat strategy '{}'",
                input.trim()
            ))),
        }
    }
}

/// Record of a finished fight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatLog {
    pub lines: Vec<String>,
    pub player_won: bool,
    pub turns: u32,
    pub damage_dealt: i32,
    pub damage_taken: i32,
}

impl CombatLog {
    fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        trace!("combat: {}", line);
        self.lines.push(line);
    }

    /// The log as newline-terminated text.
    pub fn transcript(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }
}

/// Fights until the player or the enemy drops to zero health. Every hit
/// lands at least one point, so the loop always ends with one side down.
///
/// The player strikes first when standing on an even row. Rewards are left
/// to the caller.
pub fn resolve_combat(player: &mut Player, enemy: &mut Enemy, rng: &mut StdRng) -> CombatLog {
    let mut log = CombatLog::default();
    let enemy_name = enemy.stats.name.clone();

    log.push(format!("You engage the {enemy_name} in combat!"));
    if let Some(reaction) = enemy.player_detected(rng) {
        log.push(reaction);
    }

    let mut player_turn = player.position.y % 2 == 0;

    while player.is_alive() && enemy.is_alive() {
        log.turns += 1;

        if player_turn {
            let roll = player.combat_strategy.roll_attack(&player.stats, rng);
            if roll.boosted {
                log.push("Critical hit!");
            }

            let (damage, low_health_reaction) = enemy.receive_attack(roll.value, rng);
            log.damage_dealt = log.damage_dealt.saturating_add(damage);
            log.push(format!("You attack for {damage} damage!"));

            if !enemy.is_alive() {
                break;
            }
            if let Some(reaction) = low_health_reaction {
                log.push(reaction);
            }
            if let Some(reaction) = enemy.player_attacked(rng) {
                log.push(reaction);
            }
        } else {
            let attack = enemy.attack(rng);
            let damage = player.take_damage(attack);
            log.damage_taken = log.damage_taken.saturating_add(damage);
            log.push(format!("The {enemy_name} attacks for {damage} damage!"));

            if !player.is_alive() {
                break;
            }
        }

        player_turn = !player_turn;
    }

    log.player_won = player.is_alive() && !enemy.is_alive();
    log
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{EnemyState, Position};
    use rand::SeedableRng;

    fn stats(attack: i32, defense: i32) -> EntityStats {
        EntityStats::new("Tester", "", 100, attack, defense, 5)
    }

    fn sample<F: FnMut(&mut StdRng) -> i32>(mut f: F) -> Vec<i32> {
        let mut rng = StdRng::seed_from_u64(2024);
        (0..2000).map(|_| f(&mut rng)).collect()
    }

    #[test]
    fn test_aggressive_ranges() {
        let s = stats(10, 10);
        let attacks = sample(|rng| CombatStrategy::Aggressive.calculate_attack(&s, rng));
        assert!(attacks.iter().all(|v| (12..=17).contains(v)));
        let defenses = sample(|rng| CombatStrategy::Aggressive.calculate_defense(&s, rng));
        assert!(defenses.iter().all(|v| (7..=8).contains(v)));
    }

    #[test]
    fn test_defensive_ranges() {
        let s = stats(10, 4);
        let attacks = sample(|rng| CombatStrategy::Defensive.calculate_attack(&s, rng));
        assert!(attacks.iter().all(|v| (7..=8).contains(v)));
        // 4 + floor(3.0) = 7, then 0.9 to 1.1
        let defenses = sample(|rng| CombatStrategy::Defensive.calculate_defense(&s, rng));
        assert!(defenses.iter().all(|v| (6..=7).contains(v)));
    }

    #[test]
    fn test_magic_attack_can_crit() {
        let s = stats(10, 10);
        let mut rng = StdRng::seed_from_u64(5);
        let rolls: Vec<Roll> = (0..2000)
            .map(|_| CombatStrategy::Magic.roll_attack(&s, &mut rng))
            .collect();
        assert!(rolls.iter().all(|r| (5..40).contains(&r.value)));
        assert!(rolls.iter().any(|r| r.boosted));
        assert!(rolls.iter().any(|r| r.value >= 20));
        let crits = rolls.iter().filter(|r| r.boosted).count();
        assert!((150..=450).contains(&crits), "{crits} crits");
    }

    #[test]
    fn test_enemy_stance_ranges() {
        let s = stats(20, 20);
        let aggressive = CombatStrategy::Enemy(EnemyStance::Aggressive);
        let attacks = sample(|rng| aggressive.calculate_attack(&s, rng));
        assert!(attacks.iter().all(|v| (24..30).contains(v)));
        let defenses = sample(|rng| aggressive.calculate_defense(&s, rng));
        assert!(defenses.iter().all(|v| (12..16).contains(v)));

        let defensive = CombatStrategy::Enemy(EnemyStance::Defensive);
        let defenses = sample(|rng| defensive.calculate_defense(&s, rng));
        assert!(defenses.iter().all(|v| (24..30).contains(v)));

        let balanced = CombatStrategy::Enemy(EnemyStance::Balanced);
        let attacks = sample(|rng| balanced.calculate_attack(&s, rng));
        assert!(attacks.iter().all(|v| (18..22).contains(v)));
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(
            "aggressive".parse::<CombatStrategy>().unwrap(),
            CombatStrategy::Aggressive
        );
        assert_eq!(
            " Defense Mode ".parse::<CombatStrategy>().unwrap(),
            CombatStrategy::Defensive
        );
        assert_eq!(
            "magic mode".parse::<CombatStrategy>().unwrap(),
            CombatStrategy::Magic
        );
        assert!("berserk".parse::<CombatStrategy>().is_err());
    }

    #[test]
    fn test_one_hit_fight() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut player = Player::default();
        player.stats.attack = 1000;
        player.move_to(Position::new(0, 0));

        let mut enemy = Enemy::new(
            EntityStats::new("Goblin", "A small, green creature", 15, 8, 3, 2),
            10,
            EnemyStance::Balanced,
        );

        let log = resolve_combat(&mut player, &mut enemy, &mut rng);
        assert!(log.player_won);
        assert_eq!(log.turns, 1);
        assert_eq!(enemy.health(), 0);
        assert_eq!(player.health(), player.max_health());
        assert!(log.transcript().starts_with("You engage the Goblin in combat!\n"));
    }

    #[test]
    fn test_enemy_strikes_first_on_odd_rows() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut player = Player::default();
        player.stats.health = 1;
        player.move_to(Position::new(0, 1));

        let mut enemy = Enemy::new(
            EntityStats::new("Troll", "A towering creature", 50, 15, 8, 10),
            30,
            EnemyStance::Aggressive,
        );
        enemy.state = EnemyState::Hunting;

        let log = resolve_combat(&mut player, &mut enemy, &mut rng);
        assert!(!log.player_won);
        assert_eq!(log.turns, 1);
        assert_eq!(player.health(), 0);
        assert_eq!(enemy.health(), 50);
    }

    #[test]
    fn test_long_war_of_attrition_runs_to_a_finish() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut player = Player::default();
        player.stats.attack = 0;
        player.stats.max_health = 30_000;
        player.stats.health = 30_000;
        player.move_to(Position::new(0, 0));

        let mut enemy = Enemy::new(
            EntityStats::new("Wall", "A living wall of stone", 20_000, 0, 0, 0),
            5,
            EnemyStance::Balanced,
        );

        // Both sides land exactly one point per hit
        let log = resolve_combat(&mut player, &mut enemy, &mut rng);
        assert!(log.player_won);
        assert!(player.is_alive());
        assert!(!enemy.is_alive());
        assert_eq!(log.damage_dealt, 20_000);
        assert_eq!(log.damage_taken, 19_999);
        assert_eq!(log.turns, 39_999);
    }

    #[test]
    fn test_fight_ends_with_exactly_one_survivor() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut player = Player::default();
            let mut enemy = Enemy::new(
                EntityStats::new("Orc", "A bulky brute", 35, 12, 5, 5),
                20,
                EnemyStance::random(&mut rng),
            );
            let log = resolve_combat(&mut player, &mut enemy, &mut rng);
            assert_ne!(player.is_alive(), enemy.is_alive());
            assert_eq!(log.player_won, player.is_alive());
            assert!(log.damage_taken >= 100 - player.health());
        }
    }
}
