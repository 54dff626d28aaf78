//! Hostile combatants
//!
//! Enemies are value objects: built fresh from a template for each
//! encounter and dropped once the fight is over.

use super::stats::{Combatant, Stats};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    kind: String,
    stats: Stats,
}

impl Enemy {
    /// `experience` and `gold` are the fixed rewards for defeating it
    pub fn new(health: i32, attack: i32, experience: i32, gold: i32, kind: impl Into<String>) -> Self {
        let mut stats = Stats::new(health, attack);
        stats.max_health = health;
        stats.experience = experience;
        stats.gold = gold;
        Self {
            kind: kind.into(),
            stats,
        }
    }

    /// Display name, e.g. "Goblin"
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn health(&self) -> i32 {
        self.stats.health
    }

    pub fn attack(&self) -> i32 {
        self.stats.attack
    }

    pub fn xp_reward(&self) -> i32 {
        self.stats.experience
    }

    pub fn gold_reward(&self) -> i32 {
        self.stats.gold
    }
}

impl Combatant for Enemy {
    fn stats(&self) -> &Stats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }
}
