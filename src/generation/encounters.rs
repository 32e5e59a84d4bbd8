//! # Encounter Generation
//!
//! Monster placement for freshly carved rooms.

use crate::game::{Entity, GameState};
use crate::generation::{GenerationConfig, Populator, Rect};
use crate::utils::Dice;
use crate::BurrowResult;

/// Percent chance that a placed monster is an orc rather than a troll.
pub const ORC_CHANCE: i32 = 80;

/// Drops up to `max_room_monsters` orcs and trolls into a room.
///
/// A roll that lands on a blocked cell is skipped, not retried.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonsterPopulator;

impl Populator for MonsterPopulator {
    fn populate(
        &self,
        state: &mut GameState,
        room: &Rect,
        config: &GenerationConfig,
        dice: &mut dyn Dice,
    ) -> BurrowResult<usize> {
        let count = dice.within(0, config.max_room_monsters);
        let mut placed = 0;
        for _ in 0..count {
            let position = room.random_interior(dice);
            if state.is_blocked(position) {
                continue;
            }
            let monster = if dice.within(0, 100) < ORC_CHANCE {
                Entity::orc(position)
            } else {
                Entity::troll(position)
            };
            state.add_entity(monster);
            placed += 1;
        }
        Ok(placed)
    }

    fn populator_type(&self) -> &'static str {
        "MonsterPopulator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::dungeon::create_room;
    use crate::utils::ScriptedDice;
    use crate::Position;

    fn carved(room: &Rect) -> GameState {
        let mut state = GameState::new(30, 30);
        create_room(&mut state.map, room);
        state
    }

    #[test]
    fn test_orc_and_troll_rolls() {
        let room = Rect::new(2, 2, 8, 8);
        let mut state = carved(&room);
        let config = GenerationConfig::new(1);
        // count, then (x, y, kind) per monster
        let mut dice = ScriptedDice::new(vec![2, 4, 4, 79, 6, 6, 80]);

        let placed = MonsterPopulator
            .populate(&mut state, &room, &config, &mut dice)
            .unwrap();
        assert_eq!(placed, 2);
        let names: Vec<_> = state.draw_list().skip(1).map(|e| e.name.clone()).collect();
        assert_eq!(names, ["orc", "troll"]);
        assert_eq!(state.draw_list().nth(2).unwrap().position, Position::new(6, 6));
    }

    #[test]
    fn test_blocked_cell_is_skipped() {
        let room = Rect::new(2, 2, 8, 8);
        let mut state = carved(&room);
        let player = state.player_id;
        state.set_position(player, Position::new(4, 4)).unwrap();
        let config = GenerationConfig::new(1);
        let mut dice = ScriptedDice::new(vec![1, 4, 4]);

        let placed = MonsterPopulator
            .populate(&mut state, &room, &config, &mut dice)
            .unwrap();
        assert_eq!(placed, 0);
        assert_eq!(state.entity_count(), 1);
        assert_eq!(dice.remaining(), 0);
    }
}
