//! Damage calculation
//!
//! Every swing deals the attacker's attack value plus a small uniform bonus.

use rand::Rng;

/// Largest random bonus added to a swing (inclusive)
pub const MAX_DAMAGE_BONUS: i32 = 2;

/// Roll damage for one swing: `attack + uniform(0..=2)`
pub fn roll_damage(attack: i32, rng: &mut impl Rng) -> i32 {
    attack + rng.gen_range(0..=MAX_DAMAGE_BONUS)
}
