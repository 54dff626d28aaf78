//! Turn-based fight resolution
//!
//! The player always swings first each round. A fight runs until one side
//! drops to zero health or below; there is no fleeing.

use rand::Rng;

use super::damage::roll_damage;
use crate::entities::{Combatant, Enemy, Player};
use crate::progression::LevelUp;

/// Where a fight stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatState {
    InProgress,
    PlayerDefeated,
    EnemyDefeated,
}

/// Something that happened during a round, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatEvent {
    PlayerAttack { damage: i32 },
    EnemyAttack { damage: i32 },
    EnemyDefeated { gold: i32, experience: i32 },
    LevelUp(LevelUp),
    PlayerDefeated,
}

/// A single fight against one enemy
#[derive(Debug, Clone)]
pub struct Battle {
    enemy: Enemy,
    state: CombatState,
    rounds: u32,
}

impl Battle {
    pub fn new(enemy: Enemy) -> Self {
        Self {
            enemy,
            state: CombatState::InProgress,
            rounds: 0,
        }
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn state(&self) -> CombatState {
        self.state
    }

    /// Rounds fought so far
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn is_over(&self) -> bool {
        self.state != CombatState::InProgress
    }
}

/// Summary of a finished fight
#[derive(Debug, Clone)]
pub struct CombatReport {
    /// The enemy as it ended the fight
    pub enemy: Enemy,
    pub outcome: CombatState,
    pub rounds: u32,
    pub events: Vec<CombatEvent>,
}

/// Runs fights using an owned randomness source
pub struct CombatResolver<R> {
    rng: R,
}

impl<R: Rng> CombatResolver<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Play one round. Does nothing once the battle is over.
    pub fn resolve_round(&mut self, player: &mut Player, battle: &mut Battle) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        if battle.is_over() {
            return events;
        }

        if player.is_defeated() {
            battle.state = CombatState::PlayerDefeated;
            events.push(CombatEvent::PlayerDefeated);
            return events;
        }

        battle.rounds += 1;

        let damage = roll_damage(player.attack(), &mut self.rng);
        battle.enemy.take_damage(damage);
        events.push(CombatEvent::PlayerAttack { damage });
        log::debug!(
            "Round {}: player hits {} for {} ({} left)",
            battle.rounds,
            battle.enemy.kind(),
            damage,
            battle.enemy.health()
        );

        // A killed enemy gets no retaliation swing
        if battle.enemy.is_defeated() {
            battle.state = CombatState::EnemyDefeated;
            let gold = battle.enemy.gold_reward();
            let experience = battle.enemy.xp_reward();
            player.add_gold(gold);
            events.push(CombatEvent::EnemyDefeated { gold, experience });
            events.extend(player.add_exp(experience).into_iter().map(CombatEvent::LevelUp));
            return events;
        }

        let damage = roll_damage(battle.enemy.attack(), &mut self.rng);
        player.take_damage(damage);
        events.push(CombatEvent::EnemyAttack { damage });
        log::debug!(
            "Round {}: {} hits player for {} ({} left)",
            battle.rounds,
            battle.enemy.kind(),
            damage,
            player.health()
        );

        if player.is_defeated() {
            battle.state = CombatState::PlayerDefeated;
            events.push(CombatEvent::PlayerDefeated);
        }

        events
    }

    /// Fight `enemy` to the end
    pub fn resolve(&mut self, player: &mut Player, enemy: Enemy) -> CombatReport {
        let mut battle = Battle::new(enemy);
        let mut events = Vec::new();

        while !battle.is_over() {
            events.extend(self.resolve_round(player, &mut battle));
        }

        log::info!(
            "Fight against {} ended after {} rounds: {:?}",
            battle.enemy.kind(),
            battle.rounds,
            battle.state
        );

        CombatReport {
            enemy: battle.enemy,
            outcome: battle.state,
            rounds: battle.rounds,
            events,
        }
    }
}
