//! Game module - session state and the shop

mod state;
mod shop;

pub use state::{Game, GameState, LoadOutcome, time_seed};
pub use shop::{PurchaseOutcome, Shop, Upgrade, EXP_POTION_AMOUNT, HEALTH_POTION_AMOUNT};
