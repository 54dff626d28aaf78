//! The player character

use super::stats::{Combatant, Stats};
use crate::progression::{self, LevelUp};

/// Starting health and attack of a new character
pub const STARTING_HEALTH: i32 = 20;
pub const STARTING_ATTACK: i32 = 2;
/// Experience needed for the first level-up
pub const BASE_REQUIRED_EXP: i32 = 100;
/// Free rests granted per level
pub const RESTS_PER_LEVEL: i32 = 5;

/// The single live player of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub(crate) stats: Stats,
    pub(crate) required_exp: i32,
    pub(crate) rest_counter: i32,
}

impl Player {
    pub fn new(health: i32, attack: i32) -> Self {
        Self {
            stats: Stats::new(health, attack),
            required_exp: BASE_REQUIRED_EXP,
            rest_counter: RESTS_PER_LEVEL,
        }
    }

    pub fn health(&self) -> i32 {
        self.stats.health
    }

    pub fn max_health(&self) -> i32 {
        self.stats.max_health
    }

    pub fn attack(&self) -> i32 {
        self.stats.attack
    }

    pub fn gold(&self) -> i32 {
        self.stats.gold
    }

    pub fn experience(&self) -> i32 {
        self.stats.experience
    }

    pub fn level(&self) -> i32 {
        self.stats.level
    }

    pub fn required_exp(&self) -> i32 {
        self.required_exp
    }

    pub fn rest_counter(&self) -> i32 {
        self.rest_counter
    }

    pub fn add_gold(&mut self, amount: i32) {
        self.stats.add_gold(amount);
    }

    /// Grant experience and resolve every level-up it pays for
    pub fn add_exp(&mut self, amount: i32) -> Vec<LevelUp> {
        self.stats.add_exp(amount);
        progression::resolve_level_ups(self)
    }

    pub fn add_attack(&mut self, amount: i32) {
        self.stats.add_attack(amount);
    }

    pub fn add_max(&mut self, amount: i32) {
        self.stats.add_max(amount);
    }

    /// Bump the level counter without any stat growth
    pub fn add_level(&mut self, amount: i32) {
        self.stats.add_level(amount);
    }

    pub fn reset_rest_counter(&mut self) {
        self.rest_counter = RESTS_PER_LEVEL;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(STARTING_HEALTH, STARTING_ATTACK)
    }
}

impl Combatant for Player {
    fn stats(&self) -> &Stats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_player() {
        let player = Player::default();
        assert_eq!(player.health(), 20);
        assert_eq!(player.max_health(), 20);
        assert_eq!(player.attack(), 2);
        assert_eq!(player.level(), 1);
        assert_eq!(player.experience(), 0);
        assert_eq!(player.gold(), 0);
        assert_eq!(player.required_exp(), 100);
        assert_eq!(player.rest_counter(), 5);
    }

    #[test]
    fn test_add_level_has_no_stat_growth() {
        let mut player = Player::default();
        player.add_level(2);
        assert_eq!(player.level(), 3);
        assert_eq!(player.attack(), 2);
        assert_eq!(player.max_health(), 20);
        assert_eq!(player.required_exp(), 100);
    }

    #[test]
    fn test_add_exp_below_threshold() {
        let mut player = Player::default();
        assert!(player.add_exp(99).is_empty());
        assert_eq!(player.experience(), 99);
        assert_eq!(player.level(), 1);
    }
}
