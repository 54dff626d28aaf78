//! Console shell around the game engine

pub mod app;
pub mod menu;
pub mod text;

pub use app::App;
pub use menu::{MenuChoice, ShopChoice, Tokens};
