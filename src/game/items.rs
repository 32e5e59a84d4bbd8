//! # Items and Inventory
//!
//! Picking up, dropping and using items, and the effects bound to them.

use crate::config;
use crate::game::{Ai, EntityId, GameState, ItemEffect};
use crate::rendering::palette;
use crate::{BurrowError, BurrowResult};
use log::{debug, warn};

/// Outcome of using an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseResult {
    /// The effect happened and the item is gone
    UsedUp,
    /// Nothing happened; the item stays in the inventory
    Cancelled,
}

/// Outcome of trying to pick an item up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickUpResult {
    PickedUp,
    InventoryFull,
}

impl GameState {
    /// Moves a world item into the inventory.
    ///
    /// # Errors
    ///
    /// Fails when the entity is unknown or is not an item.
    pub fn pick_up(&mut self, id: EntityId) -> BurrowResult<PickUpResult> {
        let entity = self.get(id)?;
        if entity.item.is_none() {
            return Err(BurrowError::InvalidAction(format!(
                "{} cannot be picked up",
                entity.name
            )));
        }
        if self.inventory.len() >= config::INVENTORY_CAPACITY {
            let name = entity.name.clone();
            self.message(
                format!("Your inventory is full, cannot pick up {}.", name),
                palette::RED,
            );
            return Ok(PickUpResult::InventoryFull);
        }

        let entity = self.remove_entity(id)?;
        self.message(format!("You picked up a {}!", entity.name), palette::GREEN);
        self.inventory.push(entity);
        Ok(PickUpResult::PickedUp)
    }

    /// First item in draw order lying under the player.
    pub fn item_under_player(&self) -> Option<EntityId> {
        let position = self.entity(self.player_id)?.position;
        self.draw_list()
            .find(|entity| entity.item.is_some() && entity.position == position)
            .map(|entity| entity.id)
    }

    /// Puts an inventory item back on the map under the player.
    pub fn drop_item(&mut self, index: usize) -> BurrowResult<()> {
        if index >= self.inventory.len() {
            return Err(BurrowError::InvalidAction(format!(
                "no inventory slot {}",
                index
            )));
        }
        let position = self.player()?.position;
        let mut entity = self.inventory.remove(index);
        entity.position = position;
        self.message(format!("You dropped a {}.", entity.name), palette::YELLOW);
        let id = self.add_entity(entity);
        self.send_to_back(id);
        Ok(())
    }

    /// Uses the inventory item at `index`.
    ///
    /// The item is removed only when its effect reports it was used up.
    pub fn use_item(&mut self, index: usize) -> BurrowResult<UseResult> {
        let item = self.inventory.get(index).ok_or_else(|| {
            BurrowError::InvalidAction(format!("no inventory slot {}", index))
        })?;
        let name = item.name.clone();
        let effect = match item.item.and_then(|item| item.effect) {
            Some(effect) => effect,
            None => {
                self.message(format!("The {} cannot be used.", name), palette::WHITE);
                return Ok(UseResult::Cancelled);
            }
        };

        let result = match effect {
            ItemEffect::Heal => self.cast_heal()?,
            ItemEffect::Lightning => self.cast_lightning()?,
            ItemEffect::Confuse => self.cast_confuse()?,
        };
        if result == UseResult::UsedUp {
            self.inventory.remove(index);
            debug!("Used up {}", name);
        }
        Ok(result)
    }

    /// Nearest visible fighter other than the player within `max_range`.
    ///
    /// Ties go to the entity that comes first in draw order.
    pub fn closest_monster(&self, max_range: i32) -> Option<EntityId> {
        let origin = self.entity(self.player_id)?.position;
        let mut closest = None;
        let mut closest_distance = (max_range + 1) as f64;
        for entity in self.draw_list() {
            if entity.id == self.player_id
                || entity.fighter.is_none()
                || !self.is_in_fov(entity.position)
            {
                continue;
            }
            let distance = origin.distance_to(entity.position);
            if distance < closest_distance {
                closest = Some(entity.id);
                closest_distance = distance;
            }
        }
        closest
    }

    fn cast_heal(&mut self) -> BurrowResult<UseResult> {
        let (hp, max_hp) = self.player_hp();
        if hp >= max_hp {
            self.message("You are already at full health.", palette::RED);
            return Ok(UseResult::Cancelled);
        }
        self.message("Your wounds start to feel better!", palette::LIGHT_VIOLET);
        let player = self.player_id;
        self.heal(player, config::HEAL_AMOUNT)?;
        Ok(UseResult::UsedUp)
    }

    fn cast_lightning(&mut self) -> BurrowResult<UseResult> {
        let target = match self.closest_monster(config::LIGHTNING_RANGE) {
            Some(target) => target,
            None => {
                self.message("No enemy is close enough to strike.", palette::RED);
                return Ok(UseResult::Cancelled);
            }
        };
        let name = self.get(target)?.name.clone();
        self.message(
            format!(
                "A lightning bolt strikes the {} with a loud thunder! The damage is {} hit points.",
                name,
                config::LIGHTNING_DAMAGE
            ),
            palette::LIGHT_BLUE,
        );
        self.take_damage(target, config::LIGHTNING_DAMAGE)?;
        Ok(UseResult::UsedUp)
    }

    fn cast_confuse(&mut self) -> BurrowResult<UseResult> {
        let target = match self.closest_monster(config::CONFUSE_RANGE) {
            Some(target) => target,
            None => {
                self.message("No enemy is close enough to confuse.", palette::RED);
                return Ok(UseResult::Cancelled);
            }
        };
        let monster = self.get_mut(target)?;
        let previous = monster.ai.take().unwrap_or_else(|| {
            warn!("Confusing {} which had no AI", monster.name);
            Ai::Basic
        });
        monster.ai = Some(Ai::confused(previous, config::CONFUSE_NUM_TURNS));
        let name = monster.name.clone();
        self.message(
            format!(
                "The eyes of the {} look vacant, as he starts to stumble around!",
                name
            ),
            palette::LIGHT_GREEN,
        );
        Ok(UseResult::UsedUp)
    }
}
