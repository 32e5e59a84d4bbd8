//! # Item Generation
//!
//! Item placement for freshly carved rooms.

use crate::game::{Entity, GameState};
use crate::generation::{GenerationConfig, Populator, Rect};
use crate::utils::Dice;
use crate::BurrowResult;

/// Percent chance that a placed item is a healing potion.
pub const HEALING_CHANCE: i32 = 70;

/// Percent chance that a placed item is a lightning scroll.
pub const LIGHTNING_CHANCE: i32 = 15;

/// Drops up to `max_room_items` potions and scrolls into a room.
///
/// Items go to the back of the draw order so monsters walk over them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemPopulator;

impl Populator for ItemPopulator {
    fn populate(
        &self,
        state: &mut GameState,
        room: &Rect,
        config: &GenerationConfig,
        dice: &mut dyn Dice,
    ) -> BurrowResult<usize> {
        let count = dice.within(0, config.max_room_items);
        let mut placed = 0;
        for _ in 0..count {
            let position = room.random_interior(dice);
            if state.is_blocked(position) {
                continue;
            }
            let roll = dice.within(0, 100);
            let item = if roll < HEALING_CHANCE {
                Entity::healing_potion(position)
            } else if roll < HEALING_CHANCE + LIGHTNING_CHANCE {
                Entity::lightning_scroll(position)
            } else {
                Entity::confusion_scroll(position)
            };
            let id = state.add_entity(item);
            state.send_to_back(id);
            placed += 1;
        }
        Ok(placed)
    }

    fn populator_type(&self) -> &'static str {
        "ItemPopulator"
    }
}
