//! Combatants: the shared attribute block, the player and enemies

pub mod stats;
pub mod player;
pub mod enemy;

pub use stats::{Combatant, Stats, BASE_MAX_HEALTH};
pub use player::{Player, BASE_REQUIRED_EXP, RESTS_PER_LEVEL, STARTING_ATTACK, STARTING_HEALTH};
pub use enemy::Enemy;
