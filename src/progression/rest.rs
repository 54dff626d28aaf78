//! Resting between fights

use crate::entities::Player;

/// Health restored by one rest
pub const REST_HEAL: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestOutcome {
    Rested { health: i32, rests_remaining: i32 },
    /// No rests left until the next level-up
    Unavailable,
}

/// Spend one rest to heal, clamped to max health
pub fn rest(player: &mut Player) -> RestOutcome {
    if player.rest_counter <= 0 {
        return RestOutcome::Unavailable;
    }

    player.stats.heal(REST_HEAL);
    player.rest_counter -= 1;

    RestOutcome::Rested {
        health: player.health(),
        rests_remaining: player.rest_counter,
    }
}
