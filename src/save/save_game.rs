//! Game save/load system
//!
//! A save is one line of seven space-separated integers:
//! `health attack gold experience level restCounter requiredExp`,
//! written to `<name>.txt` inside the save directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::{Player, Stats, BASE_MAX_HEALTH};
use crate::progression::{self, xp::MAX_HEALTH_PER_LEVEL};

/// Number of integer fields in a record
pub const FIELD_COUNT: usize = 7;
/// Largest value accepted for any stored field. Keeps every later
/// gain (rewards, level-ups, max health rebuild) inside `i32`.
pub const MAX_FIELD_VALUE: i32 = 1_000_000;

/// Save error types
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid save data: {0}")]
    InvalidData(String),
}

/// How a loaded record is turned back into a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RestoreMode {
    /// Rebuild through the constructor: experience is replayed against the
    /// starting threshold of 100, the stored threshold and rest counter are
    /// ignored, max health starts over from 20.
    #[default]
    Legacy,
    /// Apply every stored field as written.
    Exact,
}

/// The seven persisted fields, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveRecord {
    pub health: i32,
    pub attack: i32,
    pub gold: i32,
    pub experience: i32,
    pub level: i32,
    pub rest_counter: i32,
    pub required_exp: i32,
}

impl SaveRecord {
    pub fn from_player(player: &Player) -> Self {
        Self {
            health: player.health(),
            attack: player.attack(),
            gold: player.gold(),
            experience: player.experience(),
            level: player.level(),
            rest_counter: player.rest_counter(),
            required_exp: player.required_exp(),
        }
    }

    /// Newline-terminated record line
    pub fn encode(&self) -> String {
        format!(
            "{} {} {} {} {} {} {}\n",
            self.health,
            self.attack,
            self.gold,
            self.experience,
            self.level,
            self.rest_counter,
            self.required_exp
        )
    }

    /// Parse the first seven whitespace-separated integers. Extra tokens are
    /// ignored.
    pub fn decode(text: &str) -> Result<Self, SaveError> {
        let mut fields = [0i32; FIELD_COUNT];
        let mut tokens = text.split_whitespace();

        for (i, slot) in fields.iter_mut().enumerate() {
            let token = tokens.next().ok_or_else(|| {
                SaveError::Parse(format!("expected {} fields, found {}", FIELD_COUNT, i))
            })?;
            *slot = token
                .parse()
                .map_err(|e| SaveError::Parse(format!("field {} ({:?}): {}", i + 1, token, e)))?;
        }

        let [health, attack, gold, experience, level, rest_counter, required_exp] = fields;
        let record = Self {
            health,
            attack,
            gold,
            experience,
            level,
            rest_counter,
            required_exp,
        };
        record.validate()?;
        Ok(record)
    }

    fn validate(&self) -> Result<(), SaveError> {
        let fields = [
            ("health", self.health),
            ("attack", self.attack),
            ("gold", self.gold),
            ("experience", self.experience),
            ("level", self.level),
            ("rest counter", self.rest_counter),
            ("required experience", self.required_exp),
        ];
        for (name, value) in fields {
            if value > MAX_FIELD_VALUE {
                return Err(SaveError::InvalidData(format!(
                    "{} above {}, got {}",
                    name, MAX_FIELD_VALUE, value
                )));
            }
        }

        // A dead hero would end the session the moment it loads
        if self.health < 1 {
            return Err(SaveError::InvalidData(format!("health must be positive, got {}", self.health)));
        }
        if self.attack < 1 {
            return Err(SaveError::InvalidData(format!("attack must be positive, got {}", self.attack)));
        }
        if self.level < 1 {
            return Err(SaveError::InvalidData(format!("level must be positive, got {}", self.level)));
        }
        if self.required_exp < 1 {
            return Err(SaveError::InvalidData(format!(
                "required experience must be positive, got {}",
                self.required_exp
            )));
        }
        if self.gold < 0 || self.experience < 0 || self.rest_counter < 0 {
            return Err(SaveError::InvalidData(format!(
                "gold, experience and rest counter can't be negative, got {} {} {}",
                self.gold, self.experience, self.rest_counter
            )));
        }
        Ok(())
    }

    pub fn into_player(self, mode: RestoreMode) -> Player {
        match mode {
            RestoreMode::Legacy => {
                let mut player = Player::new(self.health, self.attack);
                player.add_gold(self.gold);
                player.add_exp(self.experience);
                player.add_level(self.level - 1);
                player.reset_rest_counter();
                player
            }
            RestoreMode::Exact => {
                let mut player = Player {
                    stats: Stats {
                        health: self.health,
                        max_health: BASE_MAX_HEALTH + MAX_HEALTH_PER_LEVEL * (self.level - 1),
                        attack: self.attack,
                        gold: self.gold,
                        experience: self.experience,
                        level: self.level,
                    },
                    required_exp: self.required_exp,
                    rest_counter: self.rest_counter,
                };
                // Hand-edited files may hold more experience than the threshold
                progression::resolve_level_ups(&mut player);
                player
            }
        }
    }
}

/// Get the path for a named save
pub fn save_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.txt", name))
}

/// Check if a named save exists
pub fn save_exists(dir: &Path, name: &str) -> bool {
    save_path(dir, name).exists()
}

/// Write the player to `<dir>/<name>.txt`, creating the directory if needed
pub fn save_player(dir: &Path, name: &str, player: &Player) -> Result<PathBuf, SaveError> {
    fs::create_dir_all(dir).map_err(|source| SaveError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = save_path(dir, name);
    let record = SaveRecord::from_player(player);
    fs::write(&path, record.encode()).map_err(|source| SaveError::Io {
        path: path.clone(),
        source,
    })?;

    log::info!("Game saved to {}", path.display());
    Ok(path)
}

/// Read `<dir>/<name>.txt` and rebuild the player
pub fn load_player(dir: &Path, name: &str, mode: RestoreMode) -> Result<Player, SaveError> {
    let path = save_path(dir, name);
    let text = fs::read_to_string(&path).map_err(|source| SaveError::Io {
        path: path.clone(),
        source,
    })?;
    let record = SaveRecord::decode(&text)?;

    log::info!("Game loaded from {} ({:?} restore)", path.display(), mode);
    Ok(record.into_player(mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_three_player() -> Player {
        let mut player = Player::default();
        player.add_exp(250);
        player.add_gold(12);
        player
    }

    #[test]
    fn test_encode_format() {
        let record = SaveRecord::from_player(&level_three_player());
        assert_eq!(record.encode(), "30 4 12 25 3 5 156\n");
    }

    #[test]
    fn test_decode_ignores_trailing_tokens() {
        let record = SaveRecord::decode("30 4 12 25 3 5 156\nleftover").unwrap();
        assert_eq!(record.required_exp, 156);
        assert_eq!(record.health, 30);
    }

    #[test]
    fn test_decode_rejects_short_and_garbled_records() {
        assert!(matches!(SaveRecord::decode("30 4 12"), Err(SaveError::Parse(_))));
        assert!(matches!(SaveRecord::decode("30 four 12 25 3 5 156"), Err(SaveError::Parse(_))));
        assert!(matches!(SaveRecord::decode(""), Err(SaveError::Parse(_))));
    }

    #[test]
    fn test_decode_rejects_impossible_values() {
        assert!(matches!(SaveRecord::decode("30 0 12 25 3 5 156"), Err(SaveError::InvalidData(_))));
        assert!(matches!(SaveRecord::decode("30 4 12 25 0 5 156"), Err(SaveError::InvalidData(_))));
        assert!(matches!(SaveRecord::decode("30 4 12 25 3 5 0"), Err(SaveError::InvalidData(_))));
        assert!(matches!(SaveRecord::decode("30 4 -1 25 3 5 156"), Err(SaveError::InvalidData(_))));
        assert!(matches!(SaveRecord::decode("30 4 12 -25 3 5 156"), Err(SaveError::InvalidData(_))));
    }

    #[test]
    fn test_decode_rejects_dead_hero() {
        assert!(matches!(SaveRecord::decode("0 4 12 25 3 5 156"), Err(SaveError::InvalidData(_))));
        assert!(matches!(SaveRecord::decode("-3 4 12 25 3 5 156"), Err(SaveError::InvalidData(_))));
    }

    #[test]
    fn test_decode_rejects_oversized_fields() {
        // Each of these overflowed once restored or on the next reward
        for text in [
            "20 2 0 0 500000000 5 100",
            "20 50 2147483647 0 1 5 100",
            "20 2 0 2147483647 1 5 100",
            "20 2 0 0 1 5 2000000000",
            "2147483647 2 0 0 1 5 100",
        ] {
            assert!(
                matches!(SaveRecord::decode(text), Err(SaveError::InvalidData(_))),
                "{} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_largest_accepted_record_restores() {
        let m = MAX_FIELD_VALUE;
        let record = SaveRecord::decode(&format!("{m} {m} {m} 0 {m} {m} {m}")).unwrap();

        let exact = record.into_player(RestoreMode::Exact);
        assert_eq!(exact.level(), m);
        assert_eq!(exact.max_health(), 20 + 5 * (m - 1));

        let legacy = record.into_player(RestoreMode::Legacy);
        assert_eq!(legacy.level(), m);
        assert_eq!(legacy.gold(), m);

        // Banking the largest stored experience on top stays in range too
        let mut grown = SaveRecord::decode(&format!("{m} {m} {m} {m} {m} {m} {m}"))
            .unwrap()
            .into_player(RestoreMode::Legacy);
        grown.add_exp(m);
        assert!(grown.experience() < grown.required_exp());
    }

    #[test]
    fn test_legacy_restore_drops_threshold_and_max_health() {
        let record = SaveRecord::from_player(&level_three_player());
        let player = record.into_player(RestoreMode::Legacy);

        assert_eq!(player.level(), 3);
        assert_eq!(player.health(), 30);
        assert_eq!(player.attack(), 4);
        assert_eq!(player.gold(), 12);
        assert_eq!(player.experience(), 25);
        assert_eq!(player.rest_counter(), 5);
        // Not the persisted 156
        assert_eq!(player.required_exp(), 100);
        assert_eq!(player.max_health(), 20);
    }

    #[test]
    fn test_legacy_restore_replays_experience() {
        // A level 2 player holding 110/125 experience
        let record = SaveRecord::decode("25 3 7 110 2 4 125").unwrap();
        let player = record.into_player(RestoreMode::Legacy);

        // Replaying 110 against 100 grants a level-up on top of the stored level
        assert_eq!(player.level(), 3);
        assert_eq!(player.attack(), 4);
        assert_eq!(player.experience(), 10);
        assert_eq!(player.required_exp(), 125);
        assert_eq!(player.max_health(), 25);
        assert_eq!(player.health(), 25);
        assert_eq!(player.gold(), 7);
        assert_eq!(player.rest_counter(), 5);
    }

    #[test]
    fn test_exact_restore_keeps_every_field() {
        let record = SaveRecord::decode("25 3 7 110 2 4 125").unwrap();
        let player = record.into_player(RestoreMode::Exact);

        assert_eq!(player.level(), 2);
        assert_eq!(player.attack(), 3);
        assert_eq!(player.experience(), 110);
        assert_eq!(player.required_exp(), 125);
        assert_eq!(player.rest_counter(), 4);
        assert_eq!(player.max_health(), 25);
        assert_eq!(player.health(), 25);
        assert_eq!(SaveRecord::from_player(&player), record);
    }

    #[test]
    fn test_save_then_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let player = level_three_player();

        let path = save_player(dir.path(), "hero", &player).unwrap();
        assert_eq!(path, dir.path().join("hero.txt"));
        assert!(save_exists(dir.path(), "hero"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "30 4 12 25 3 5 156\n");

        let exact = load_player(dir.path(), "hero", RestoreMode::Exact).unwrap();
        assert_eq!(exact, player);

        let legacy = load_player(dir.path(), "hero", RestoreMode::Legacy).unwrap();
        assert_eq!(legacy.required_exp(), 100);
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("saves").join("slot");
        save_player(&nested, "hero", &Player::default()).unwrap();
        assert!(save_exists(&nested, "hero"));
    }

    #[test]
    fn test_missing_save_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_player(dir.path(), "nobody", RestoreMode::Legacy).unwrap_err();
        assert!(matches!(err, SaveError::Io { .. }));
        assert!(!save_exists(dir.path(), "nobody"));
    }
}
