//! Combat system

pub mod damage;
pub mod resolver;

pub use damage::{roll_damage, MAX_DAMAGE_BONUS};
pub use resolver::{Battle, CombatEvent, CombatReport, CombatResolver, CombatState};
