//! Dungeon Explorer - a turn-based text adventure
//!
//! Fight enemies scaled to your level, bank gold and experience, level up,
//! spend gold in the shop, and save your hero under a name of your choice.

pub mod config;
pub mod entities;
pub mod progression;
pub mod data;
pub mod combat;
pub mod game;
pub mod save;
pub mod ui;

// Re-export commonly used types
pub use config::GameConfig;
pub use entities::{Enemy, Player, Stats};
pub use game::{Game, GameState};
