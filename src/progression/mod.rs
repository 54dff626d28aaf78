//! Progression systems

pub mod xp;
pub mod rest;

pub use xp::{LevelUp, resolve_level_ups, next_required_exp};
pub use rest::{RestOutcome, rest, REST_HEAL};
