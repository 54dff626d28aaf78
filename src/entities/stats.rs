//! Shared combatant attributes
//!
//! `Stats` is embedded by both the player and enemies. Mutators do no
//! game-rule bounds checking (callers enforce limits where the rules need
//! them) but saturate at the ends of `i32`.

/// Max health every freshly constructed combatant starts with
pub const BASE_MAX_HEALTH: i32 = 20;

/// Attribute block shared by every combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub health: i32,
    pub max_health: i32,
    pub attack: i32,
    pub gold: i32,
    pub experience: i32,
    pub level: i32,
}

impl Stats {
    pub fn new(health: i32, attack: i32) -> Self {
        Self {
            health,
            max_health: BASE_MAX_HEALTH,
            attack,
            gold: 0,
            experience: 0,
            level: 1,
        }
    }

    /// Subtract damage. Health may go negative after a killing blow.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Negative amounts are used for purchases
    pub fn add_gold(&mut self, amount: i32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Raw experience, no leveling
    pub fn add_exp(&mut self, amount: i32) {
        self.experience = self.experience.saturating_add(amount);
    }

    pub fn add_attack(&mut self, amount: i32) {
        self.attack = self.attack.saturating_add(amount);
    }

    /// Raise max health without healing
    pub fn add_max(&mut self, amount: i32) {
        self.max_health = self.max_health.saturating_add(amount);
    }

    pub fn add_level(&mut self, amount: i32) {
        self.level = self.level.saturating_add(amount);
    }

    /// Heal, clamped to max health
    pub fn heal(&mut self, amount: i32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}

/// Anything that can stand in a fight
pub trait Combatant {
    fn stats(&self) -> &Stats;
    fn stats_mut(&mut self) -> &mut Stats;

    fn take_damage(&mut self, amount: i32) {
        self.stats_mut().take_damage(amount);
    }

    fn is_defeated(&self) -> bool {
        self.stats().is_defeated()
    }
}
