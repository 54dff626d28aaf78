//! The shop
//!
//! Three upgrades, each with its own price that rises after every purchase.

use crate::entities::Player;
use crate::progression::LevelUp;

/// Experience granted by an exp potion
pub const EXP_POTION_AMOUNT: i32 = 150;
/// Max health granted by a health potion
pub const HEALTH_POTION_AMOUNT: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upgrade {
    SharpenSword,
    HealthPotion,
    ExpPotion,
}

impl Upgrade {
    pub const ALL: [Upgrade; 3] = [Upgrade::SharpenSword, Upgrade::HealthPotion, Upgrade::ExpPotion];

    pub fn starting_price(&self) -> i32 {
        match self {
            Upgrade::SharpenSword => 5,
            Upgrade::HealthPotion => 10,
            Upgrade::ExpPotion => 15,
        }
    }

    /// How much the price goes up after each purchase
    pub fn price_step(&self) -> i32 {
        self.starting_price()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Upgrade::SharpenSword => "Sharpen your sword(+1 Damage)",
            Upgrade::HealthPotion => "Drink health potion(+5 Max Health)",
            Upgrade::ExpPotion => "Drink Exp Potion(+150 Experience)",
        }
    }

    fn index(&self) -> usize {
        match self {
            Upgrade::SharpenSword => 0,
            Upgrade::HealthPotion => 1,
            Upgrade::ExpPotion => 2,
        }
    }

    fn apply(&self, player: &mut Player) -> Vec<LevelUp> {
        match self {
            Upgrade::SharpenSword => {
                player.add_attack(1);
                Vec::new()
            }
            Upgrade::HealthPotion => {
                player.add_max(HEALTH_POTION_AMOUNT);
                Vec::new()
            }
            Upgrade::ExpPotion => player.add_exp(EXP_POTION_AMOUNT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Bought {
        upgrade: Upgrade,
        price: i32,
        level_ups: Vec<LevelUp>,
    },
    /// Nothing changed
    InsufficientGold { price: i32, gold: i32 },
}

/// Current prices for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shop {
    prices: [i32; 3],
}

impl Shop {
    pub fn new() -> Self {
        Self {
            prices: Upgrade::ALL.map(|u| u.starting_price()),
        }
    }

    pub fn price(&self, upgrade: Upgrade) -> i32 {
        self.prices[upgrade.index()]
    }

    pub fn buy(&mut self, upgrade: Upgrade, player: &mut Player) -> PurchaseOutcome {
        let price = self.price(upgrade);
        if player.gold() < price {
            return PurchaseOutcome::InsufficientGold {
                price,
                gold: player.gold(),
            };
        }

        player.add_gold(-price);
        self.prices[upgrade.index()] += upgrade.price_step();
        let level_ups = upgrade.apply(player);
        log::info!("Bought {:?} for {} gold", upgrade, price);

        PurchaseOutcome::Bought {
            upgrade,
            price,
            level_ups,
        }
    }
}

impl Default for Shop {
    fn default() -> Self {
        Self::new()
    }
}
