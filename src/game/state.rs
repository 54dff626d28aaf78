//! Game session
//!
//! Owns the single live player and everything the menu actions need. Each
//! action borrows the session exclusively and runs to completion.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::shop::{PurchaseOutcome, Shop, Upgrade};
use crate::combat::{CombatReport, CombatResolver, CombatState};
use crate::config::GameConfig;
use crate::data::{load_encounter_table, EncounterTable};
use crate::entities::Player;
use crate::progression::{self, RestOutcome};
use crate::save::{self, RestoreMode, SaveError};

/// All possible session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    /// Player died; score is the level reached
    GameOver { score: i32 },
    Quit,
}

/// Result of a load request. Failure is not fatal: the session continues
/// with a brand-new player.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded { path: PathBuf },
    FellBack { error: SaveError },
}

/// The main game struct that holds all session data
pub struct Game<R = StdRng> {
    state: GameState,
    player: Player,
    shop: Shop,
    encounters: EncounterTable,
    combat: CombatResolver<R>,
    save_dir: PathBuf,
    restore_mode: RestoreMode,
}

/// Seed derived from the clock, used when no fixed seed is configured
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

impl Game<StdRng> {
    /// Build a session from config, seeding the generator once
    pub fn from_config(config: &GameConfig) -> (Self, u64) {
        let seed = config.rng_seed.unwrap_or_else(time_seed);
        let game = Self::new(StdRng::seed_from_u64(seed))
            .with_encounters(load_encounter_table(&config.data_dir))
            .with_save_dir(&config.save_dir)
            .with_restore_mode(config.restore_mode);
        (game, seed)
    }
}

impl<R: Rng> Game<R> {
    /// Fresh session with default content, saving to the working directory
    pub fn new(rng: R) -> Self {
        Self {
            state: GameState::Playing,
            player: Player::default(),
            shop: Shop::new(),
            encounters: EncounterTable::default(),
            combat: CombatResolver::new(rng),
            save_dir: PathBuf::from("."),
            restore_mode: RestoreMode::default(),
        }
    }

    pub fn with_encounters(mut self, encounters: EncounterTable) -> Self {
        self.encounters = encounters;
        self
    }

    pub fn with_save_dir(mut self, dir: &Path) -> Self {
        self.save_dir = dir.to_path_buf();
        self
    }

    pub fn with_restore_mode(mut self, mode: RestoreMode) -> Self {
        self.restore_mode = mode;
        self
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn encounters(&self) -> &EncounterTable {
        &self.encounters
    }

    /// Score shown at game over
    pub fn score(&self) -> i32 {
        self.player.level()
    }

    /// Meet the enemy for the player's level and fight it out
    pub fn explore(&mut self) -> CombatReport {
        let enemy = self.encounters.select_encounter(self.player.level());
        log::info!("Level {} player encounters a {}", self.player.level(), enemy.kind());

        let report = self.combat.resolve(&mut self.player, enemy);
        if report.outcome == CombatState::PlayerDefeated {
            self.state = GameState::GameOver { score: self.score() };
            log::info!("Player defeated at level {}", self.player.level());
        }
        report
    }

    pub fn rest(&mut self) -> RestOutcome {
        progression::rest(&mut self.player)
    }

    pub fn buy(&mut self, upgrade: Upgrade) -> PurchaseOutcome {
        self.shop.buy(upgrade, &mut self.player)
    }

    pub fn save(&self, name: &str) -> Result<PathBuf, SaveError> {
        save::save_player(&self.save_dir, name, &self.player)
    }

    /// Replace the player with the named save, or with a new player if the
    /// save can't be read. Shop prices carry over either way.
    pub fn load(&mut self, name: &str) -> LoadOutcome {
        match save::load_player(&self.save_dir, name, self.restore_mode) {
            Ok(player) => {
                self.player = player;
                LoadOutcome::Loaded {
                    path: save::save_path(&self.save_dir, name),
                }
            }
            Err(error) => {
                log::warn!("Load of {:?} failed: {}. Starting a new character.", name, error);
                self.player = Player::default();
                LoadOutcome::FellBack { error }
            }
        }
    }

    pub fn quit(&mut self) {
        self.state = GameState::Quit;
    }
}
