//! Save/load system
//!
//! Flat text saves of the player, one file per save name.

pub mod save_game;

pub use save_game::{
    SaveError, SaveRecord, RestoreMode,
    save_player, load_player, save_exists, save_path,
};
