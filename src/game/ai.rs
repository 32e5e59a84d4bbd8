//! # Monster AI
//!
//! Monsters act through a closed set of behaviors. Confusion wraps the
//! behavior it replaced and hands it back once it wears off.

use crate::game::{EntityId, GameState};
use crate::rendering::palette;
use crate::utils::{step_toward, Dice};
use crate::BurrowResult;
use log::debug;

/// Monster behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ai {
    /// Chase the player while visible and attack when adjacent
    Basic,
    /// Stumble around at random, then revert to `previous`
    Confused { previous: Box<Ai>, num_turns: i32 },
}

impl Ai {
    /// Wraps `previous` in a confusion lasting `num_turns` turns.
    pub fn confused(previous: Ai, num_turns: i32) -> Self {
        Ai::Confused {
            previous: Box::new(previous),
            num_turns,
        }
    }

    /// Plays one turn for `monster` and returns the behavior it should have
    /// afterwards.
    pub fn take_turn(
        self,
        monster: EntityId,
        state: &mut GameState,
        dice: &mut dyn Dice,
    ) -> BurrowResult<Ai> {
        match self {
            Ai::Basic => {
                basic_turn(monster, state)?;
                Ok(Ai::Basic)
            }
            Ai::Confused {
                previous,
                num_turns,
            } => confused_turn(monster, state, dice, previous, num_turns),
        }
    }
}

fn basic_turn(monster: EntityId, state: &mut GameState) -> BurrowResult<()> {
    let position = state.get(monster)?.position;
    if !state.is_in_fov(position) {
        return Ok(());
    }

    let player = state.player()?;
    let player_id = player.id;
    let target = player.position;
    let player_alive = player.fighter.map_or(false, |fighter| fighter.hp > 0);

    if position.distance_to(target) >= 2.0 {
        let (dx, dy) = step_toward(position, target);
        if state.move_by(monster, dx, dy)? {
            debug!("{} moves toward the player", state.get(monster)?.name);
        }
    } else if player_alive {
        state.attack(monster, player_id)?;
    }
    Ok(())
}

fn confused_turn(
    monster: EntityId,
    state: &mut GameState,
    dice: &mut dyn Dice,
    previous: Box<Ai>,
    num_turns: i32,
) -> BurrowResult<Ai> {
    if num_turns <= 0 {
        return Ok(*previous);
    }

    let dx = dice.within(-1, 1);
    let dy = dice.within(-1, 1);
    state.move_by(monster, dx, dy)?;

    let remaining = num_turns - 1;
    if remaining == 0 {
        let name = state.get(monster)?.name.clone();
        state.message(format!("The {} is no longer confused!", name), palette::RED);
        Ok(*previous)
    } else {
        Ok(Ai::Confused {
            previous,
            num_turns: remaining,
        })
    }
}

impl GameState {
    /// Runs the AI of one entity, if it has any.
    ///
    /// The behavior is taken off the entity for the duration of the turn and
    /// the resulting behavior is stored back unless the entity stopped being
    /// a fighter meanwhile.
    pub fn take_ai_turn(&mut self, id: EntityId, dice: &mut dyn Dice) -> BurrowResult<()> {
        let ai = match self.entity_mut(id).and_then(|entity| entity.ai.take()) {
            Some(ai) => ai,
            None => return Ok(()),
        };
        let next = ai.take_turn(id, self, dice)?;
        if let Some(entity) = self.entity_mut(id) {
            if entity.fighter.is_some() {
                entity.ai = Some(next);
            }
        }
        Ok(())
    }
}
