//! # Combat
//!
//! Melee resolution, direct damage and the two death transitions.

use crate::game::{DeathCallback, EntityId, GameCompletionState, GameState};
use crate::rendering::palette;
use crate::utils::capitalize;
use crate::{BurrowError, BurrowResult};
use log::{debug, info};

/// Outcome of a melee attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The target lost this many hit points
    Hit(i32),
    /// Defense absorbed the blow
    NoEffect,
}

impl GameState {
    /// Resolves one melee attack: damage is attacker power minus target
    /// defense.
    ///
    /// # Errors
    ///
    /// Fails when either entity is missing or has no fighter.
    pub fn attack(&mut self, attacker: EntityId, target: EntityId) -> BurrowResult<AttackOutcome> {
        let attacker_entity = self.get(attacker)?;
        let power = attacker_entity
            .fighter
            .ok_or_else(|| BurrowError::InvalidAction(format!("{} cannot fight", attacker_entity.name)))?
            .power;
        let attacker_name = capitalize(&attacker_entity.name);

        let target_entity = self.get(target)?;
        let defense = target_entity
            .fighter
            .ok_or_else(|| BurrowError::InvalidAction(format!("{} cannot be attacked", target_entity.name)))?
            .defense;
        let target_name = target_entity.name.clone();

        let damage = power - defense;
        if damage > 0 {
            self.message(
                format!(
                    "{} attacks {} for {} hit points.",
                    attacker_name, target_name, damage
                ),
                palette::WHITE,
            );
            self.take_damage(target, damage)?;
            Ok(AttackOutcome::Hit(damage))
        } else {
            self.message(
                format!("{} attacks {} but it has no effect!", attacker_name, target_name),
                palette::WHITE,
            );
            Ok(AttackOutcome::NoEffect)
        }
    }

    /// Removes hit points from an entity, bypassing defense, and runs its
    /// death transition the first time hp reaches zero.
    ///
    /// Entities without a fighter are left alone.
    pub fn take_damage(&mut self, id: EntityId, damage: i32) -> BurrowResult<()> {
        let callback = match self.get_mut(id)?.fighter.as_mut() {
            Some(fighter) => fighter.take_damage(damage),
            None => None,
        };
        match callback {
            Some(DeathCallback::Player) => self.player_death(id),
            Some(DeathCallback::Monster) => self.monster_death(id),
            None => Ok(()),
        }
    }

    /// Restores hit points, clamped to the maximum.
    pub fn heal(&mut self, id: EntityId, amount: i32) -> BurrowResult<()> {
        if let Some(fighter) = self.get_mut(id)?.fighter.as_mut() {
            fighter.heal(amount);
        }
        Ok(())
    }

    fn player_death(&mut self, id: EntityId) -> BurrowResult<()> {
        let player = self.get_mut(id)?;
        player.glyph = '%';
        player.color = palette::DARK_RED;
        self.completion_state = GameCompletionState::Dead;
        self.message("You died!", palette::RED);
        info!("Player died on turn {}", self.turn_number);
        Ok(())
    }

    fn monster_death(&mut self, id: EntityId) -> BurrowResult<()> {
        let monster = self.get_mut(id)?;
        let name = monster.name.clone();
        monster.glyph = '%';
        monster.color = palette::DARK_RED;
        monster.blocks = false;
        monster.fighter = None;
        monster.ai = None;
        monster.name = format!("remains of {}", name);
        self.send_to_back(id);
        self.message(format!("{} is dead!", capitalize(&name)), palette::ORANGE);
        debug!("{} died and left remains", name);
        Ok(())
    }
}
