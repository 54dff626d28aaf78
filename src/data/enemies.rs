//! Enemy templates and the level-indexed encounter table
//!
//! Templates can be loaded from RON files; the built-in table is the
//! fallback.

use serde::{Deserialize, Serialize};
use crate::entities::Enemy;

/// A template for creating enemies from external data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    /// Display name
    pub name: String,
    pub health: i32,
    pub attack: i32,
    /// XP reward for killing
    pub experience: i32,
    /// Gold reward for killing
    pub gold: i32,
}

impl EnemyTemplate {
    pub fn new(name: &str, health: i32, attack: i32, experience: i32, gold: i32) -> Self {
        Self {
            name: name.to_string(),
            health,
            attack,
            experience,
            gold,
        }
    }

    /// Build a fresh enemy from this template
    pub fn spawn(&self) -> Enemy {
        Enemy::new(self.health, self.attack, self.experience, self.gold, self.name.as_str())
    }
}

/// Ordered templates, weakest first. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterTable {
    templates: Vec<EnemyTemplate>,
}

impl EncounterTable {
    /// Returns `None` for an empty list, or if any template has
    /// non-positive health or attack.
    pub fn new(templates: Vec<EnemyTemplate>) -> Option<Self> {
        let invalid = templates.iter().any(|t| t.health < 1 || t.attack < 1);
        if templates.is_empty() || invalid {
            None
        } else {
            Some(Self { templates })
        }
    }

    pub fn templates(&self) -> &[EnemyTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Template index for a player level, clamped to both ends of the table
    pub fn index_for_level(&self, player_level: i32) -> usize {
        let last = self.templates.len() - 1;
        usize::try_from(player_level.saturating_sub(1))
            .unwrap_or(0)
            .min(last)
    }

    /// Pick the opponent for a player level. Levels past the end of the
    /// table all face the last template.
    pub fn select_encounter(&self, player_level: i32) -> Enemy {
        self.templates[self.index_for_level(player_level)].spawn()
    }
}

impl Default for EncounterTable {
    fn default() -> Self {
        Self {
            templates: default_enemy_templates(),
        }
    }
}

/// Built-in enemies
pub fn default_enemy_templates() -> Vec<EnemyTemplate> {
    vec![
        EnemyTemplate::new("Goblin", 5, 1, 20, 1),
        EnemyTemplate::new("Orc", 10, 2, 30, 2),
        EnemyTemplate::new("Troll", 15, 4, 40, 4),
        EnemyTemplate::new("Dragon", 20, 6, 60, 10),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Combatant;

    #[test]
    fn test_encounter_by_level() {
        let table = EncounterTable::default();
        assert_eq!(table.select_encounter(1).kind(), "Goblin");
        assert_eq!(table.select_encounter(2).kind(), "Orc");
        assert_eq!(table.select_encounter(3).kind(), "Troll");
        assert_eq!(table.select_encounter(4).kind(), "Dragon");
        assert_eq!(table.select_encounter(40).kind(), "Dragon");
    }

    #[test]
    fn test_low_levels_clamp_to_first() {
        let table = EncounterTable::default();
        assert_eq!(table.select_encounter(0).kind(), "Goblin");
        assert_eq!(table.select_encounter(-3).kind(), "Goblin");
    }

    #[test]
    fn test_difficulty_never_decreases() {
        let table = EncounterTable::default();
        let mut prev = table.select_encounter(1);
        for level in 2..10 {
            let next = table.select_encounter(level);
            assert!(next.health() >= prev.health());
            assert!(next.attack() >= prev.attack());
            assert!(next.xp_reward() >= prev.xp_reward());
            assert!(next.gold_reward() >= prev.gold_reward());
            prev = next;
        }
    }

    #[test]
    fn test_spawn_is_a_fresh_copy() {
        let table = EncounterTable::default();
        let mut first = table.select_encounter(1);
        first.take_damage(100);

        let second = table.select_encounter(1);
        assert_eq!(second.health(), 5);
        assert_eq!(table.templates()[0].health, 5);
    }

    #[test]
    fn test_invalid_tables_rejected() {
        assert!(EncounterTable::new(Vec::new()).is_none());
        assert!(EncounterTable::new(vec![EnemyTemplate::new("Slime", 4, 0, 5, 1)]).is_none());
    }
}
