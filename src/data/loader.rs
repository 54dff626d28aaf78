//! RON data loader
//!
//! Loads the encounter table from an external RON file, with fallback to
//! the hardcoded defaults.

use std::fs;
use std::path::Path;

use super::enemies::{EncounterTable, EnemyTemplate};

/// File name looked up inside the data directory
pub const ENEMIES_FILE: &str = "enemies.ron";

/// Load the encounter table from `data_dir/enemies.ron`.
///
/// A missing file is silent; unreadable, unparsable or empty files are
/// logged and replaced by the built-in table.
pub fn load_encounter_table(data_dir: &Path) -> EncounterTable {
    let path = data_dir.join(ENEMIES_FILE);
    if !path.exists() {
        return EncounterTable::default();
    }

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Failed to read {}: {}. Using default enemies.", path.display(), e);
            return EncounterTable::default();
        }
    };

    match ron::from_str::<Vec<EnemyTemplate>>(&content) {
        Ok(templates) => match EncounterTable::new(templates) {
            Some(table) => {
                log::info!("Loaded {} enemy templates from {}", table.len(), path.display());
                table
            }
            None => {
                log::warn!("{} has no usable enemies. Using default enemies.", path.display());
                EncounterTable::default()
            }
        },
        Err(e) => {
            log::warn!("Failed to parse {}: {}. Using default enemies.", path.display(), e);
            EncounterTable::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_encounter_table(dir.path()), EncounterTable::default());
    }

    #[test]
    fn test_custom_table() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(ENEMIES_FILE),
            r#"[
                (name: "Rat", health: 3, attack: 1, experience: 5, gold: 1),
                (name: "Wolf", health: 8, attack: 3, experience: 25, gold: 3),
            ]"#,
        )
        .unwrap();

        let table = load_encounter_table(dir.path());
        assert_eq!(table.len(), 2);
        assert_eq!(table.select_encounter(1).kind(), "Rat");
        assert_eq!(table.select_encounter(9).kind(), "Wolf");
    }

    #[test]
    fn test_bad_files_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ENEMIES_FILE);

        fs::write(&path, "not ron at all {").unwrap();
        assert_eq!(load_encounter_table(dir.path()), EncounterTable::default());

        fs::write(&path, "[]").unwrap();
        assert_eq!(load_encounter_table(dir.path()), EncounterTable::default());
    }
}
