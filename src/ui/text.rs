//! Game text
//!
//! Everything the shell prints, built from engine results.

use crate::combat::{CombatEvent, CombatReport};
use crate::entities::Player;
use crate::game::{PurchaseOutcome, Shop, Upgrade};
use crate::progression::{LevelUp, RestOutcome, REST_HEAL};

pub const INTRO: &str = "You have always been fascinated by tales of adventure and heroism. \
From a young age, you have dreamed of exploring dungeons, fighting monsters, and claiming treasure.\n\n\
As you grow older, you honed your skills, becoming a formidable warrior in your own right. \
When news of a dungeon filled with goblins, trolls, orcs, and dragons reached your ears, \
you knew you had to take on the challenge.\n\n\
So picking up your pack and twirling your trusty blade, you set out to explore the depths \
of the dungeon and claim its riches.\n\n\
Welcome to the dungeon!\n";

pub const MAIN_MENU: &str = "1. Explore the dungeon\n\
2. Rest and heal\n\
3. Visit the shop\n\
4. Save the game\n\
5. Load the game\n\
6. Quit the game";

pub const INVALID_CHOICE: &str = "\nInvalid choice!";
pub const NOT_ENOUGH_GOLD: &str = "Not enough coins for that!";
pub const FAREWELL: &str = "\nThanks for playing!";

pub fn status_line(player: &Player) -> String {
    format!(
        "\nYou have {} health, {} gold, {}/{} experience and you are level {}.",
        player.health(),
        player.gold(),
        player.experience(),
        player.required_exp(),
        player.level()
    )
}

pub fn shop_menu(shop: &Shop) -> String {
    let mut lines: Vec<String> = Upgrade::ALL
        .iter()
        .enumerate()
        .map(|(i, u)| format!("{}. {} - {} Gold", i + 1, u.label(), shop.price(*u)))
        .collect();
    lines.push(format!("{}. Leave shop", Upgrade::ALL.len() + 1));
    lines.join("\n")
}

pub fn level_up(up: &LevelUp) -> String {
    format!("You leveled up! You are now level {}!", up.level)
}

/// Blow-by-blow account of a fight
pub fn combat_lines(report: &CombatReport) -> Vec<String> {
    let foe = report.enemy.kind();
    let mut lines = vec![format!("\nYou explore the dungeon and encounter a {}!", foe)];

    for event in &report.events {
        match event {
            CombatEvent::PlayerAttack { damage } => {
                lines.push(format!("You attack the {} and deal {} damage.", foe, damage));
            }
            CombatEvent::EnemyAttack { damage } => {
                lines.push(format!("The {} attacks you and deals {} damage.", foe, damage));
            }
            CombatEvent::EnemyDefeated { gold, experience } => {
                lines.push(format!("You defeat the {} and gain {} gold!", foe, gold));
                lines.push(format!("You gained {} experience points!", experience));
            }
            CombatEvent::LevelUp(up) => lines.push(level_up(up)),
            CombatEvent::PlayerDefeated => {}
        }
    }

    lines
}

pub fn game_over(score: i32) -> String {
    format!(
        "Sadly, the valiant efforts of your hero have come to an end. The dungeon claims another \
brave adventurer, and your legacy will be remembered by all who dare to follow in your footsteps.\n\n\
With heavy hearts, we bid farewell to you, and hope that your next adventure will be met with \
greater success. Game Over!\n\nYour score: {}",
        score
    )
}

pub fn rest(outcome: &RestOutcome) -> String {
    match outcome {
        RestOutcome::Rested { rests_remaining, .. } => format!(
            "\nYou rest and regain {} health.\nRests remaining: {}",
            REST_HEAL, rests_remaining
        ),
        RestOutcome::Unavailable => {
            "\nYou have no rests remaining. You must level up to reset your rest counter.".to_string()
        }
    }
}

pub fn purchase(outcome: &PurchaseOutcome) -> Vec<String> {
    match outcome {
        PurchaseOutcome::Bought { upgrade, level_ups, .. } => {
            let mut lines = vec![match upgrade {
                Upgrade::SharpenSword => "\nYou sharpened your sword! Your attack increased by 1.".to_string(),
                Upgrade::HealthPotion => "\nYou drank a health potion! Your max health increased by 5.".to_string(),
                Upgrade::ExpPotion => "\nYou drank an Exp potion!".to_string(),
            }];
            lines.extend(level_ups.iter().map(level_up));
            lines
        }
        PurchaseOutcome::InsufficientGold { .. } => vec![NOT_ENOUGH_GOLD.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        let mut player = Player::default();
        player.add_exp(250);
        assert_eq!(
            status_line(&player),
            "\nYou have 30 health, 0 gold, 25/156 experience and you are level 3."
        );
    }

    #[test]
    fn test_shop_menu_shows_current_prices() {
        let menu = shop_menu(&Shop::new());
        assert!(menu.starts_with("1. Sharpen your sword(+1 Damage) - 5 Gold"));
        assert!(menu.contains("3. Drink Exp Potion(+150 Experience) - 15 Gold"));
        assert!(menu.ends_with("4. Leave shop"));
    }

    #[test]
    fn test_rest_text() {
        let text = rest(&RestOutcome::Rested { health: 20, rests_remaining: 3 });
        assert!(text.contains("regain 2 health"));
        assert!(text.contains("Rests remaining: 3"));
        assert!(rest(&RestOutcome::Unavailable).contains("no rests remaining"));
    }
}
