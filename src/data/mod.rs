//! Data loading and game content
//!
//! Enemy templates for encounters, optionally overridden by an external
//! RON file.

pub mod loader;
pub mod enemies;

pub use loader::{load_encounter_table, ENEMIES_FILE};
pub use enemies::{EnemyTemplate, EncounterTable, default_enemy_templates};
