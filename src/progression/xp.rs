//! Experience and leveling
//!
//! Converts banked experience into level-ups and applies the fixed
//! reward schedule for each one.

use crate::entities::Player;

/// Attack gained per level-up
pub const ATTACK_PER_LEVEL: i32 = 1;
/// Max health gained per level-up
pub const MAX_HEALTH_PER_LEVEL: i32 = 5;

/// One resolved level-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    /// Level reached
    pub level: i32,
    pub attack: i32,
    pub max_health: i32,
}

/// Experience threshold for the level after one needing `required_exp`.
/// Scales by 1.25 and truncates, saturating at `i32::MAX`.
pub fn next_required_exp(required_exp: i32) -> i32 {
    let next = i64::from(required_exp) * 5 / 4;
    i32::try_from(next).unwrap_or(i32::MAX)
}

/// Spend experience on as many level-ups as it covers.
///
/// Must loop: a single grant (an exp potion, a reload) can cross several
/// thresholds. On return `experience < required_exp` holds.
pub fn resolve_level_ups(player: &mut Player) -> Vec<LevelUp> {
    let mut gained = Vec::new();

    while player.required_exp > 0 && player.stats.experience >= player.required_exp {
        player.stats.experience -= player.required_exp;
        player.stats.add_level(1);
        player.stats.add_attack(ATTACK_PER_LEVEL);
        player.stats.add_max(MAX_HEALTH_PER_LEVEL);
        player.reset_rest_counter();
        player.stats.health = player.stats.max_health;
        player.required_exp = next_required_exp(player.required_exp);

        log::info!("Player reached level {}", player.stats.level);
        gained.push(LevelUp {
            level: player.stats.level,
            attack: player.stats.attack,
            max_health: player.stats.max_health,
        });
    }

    gained
}
