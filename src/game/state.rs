//! # Game State Module
//!
//! Central game state shared by every simulation system.
//!
//! [`GameState`] owns the tile grid, the world entities in draw order, the
//! inventory, the message log and the field-of-view map. Generation, combat,
//! AI, item effects and the turn loop all take it by reference.

use crate::config;
use crate::game::{Entity, EntityId, Map, MessageLog, Position};
use crate::generation::{GenerationConfig, Generator, RoomTunnelGenerator};
use crate::rendering::{palette, FieldOfView, ShadowcastFov};
use crate::utils::Dice;
use crate::{BurrowError, BurrowResult};
use log::{debug, info};
use macroquad::color::Color;
use std::collections::HashMap;

/// Game completion state for the turn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCompletionState {
    /// Player and monsters take turns
    Playing,
    /// Player died; only exit is accepted
    Dead,
}

/// What the renderer needs to know about one map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub explored: bool,
    pub visible: bool,
    pub blocks_sight: bool,
}

/// Central game state.
#[derive(Debug)]
pub struct GameState {
    /// The tile grid
    pub map: Map,
    /// World entities, indexed by ID
    pub(crate) entities: HashMap<EntityId, Entity>,
    /// World entity IDs; earlier entries are drawn first
    pub(crate) draw_order: Vec<EntityId>,
    /// Carried items, oldest first
    pub(crate) inventory: Vec<Entity>,
    /// The player entity ID
    pub player_id: EntityId,
    /// In-game message log
    pub messages: MessageLog,
    /// Current game completion state
    pub completion_state: GameCompletionState,
    /// Number of ticks that consumed a turn
    pub turn_number: u64,
    pub(crate) fov: Box<dyn FieldOfView>,
    fov_recompute: bool,
}

impl GameState {
    /// Creates an all-wall map holding only the player at the origin.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_fov(width, height, Box::new(ShadowcastFov::new(width, height)))
    }

    /// Same as [`GameState::new`] with a caller-supplied visibility collaborator.
    pub fn with_fov(width: i32, height: i32, fov: Box<dyn FieldOfView>) -> Self {
        let player = Entity::player(Position::new(0, 0));
        let player_id = player.id;
        let mut state = Self {
            map: Map::new(width, height),
            entities: HashMap::new(),
            draw_order: Vec::new(),
            inventory: Vec::new(),
            player_id,
            messages: MessageLog::new(config::MESSAGE_CAPACITY),
            completion_state: GameCompletionState::Playing,
            turn_number: 0,
            fov,
            fov_recompute: true,
        };
        state.add_entity(player);
        state
    }

    /// Generates a fresh dungeon and readies it for play.
    ///
    /// # Errors
    ///
    /// Returns [`BurrowError::InvalidConfiguration`] when the configuration
    /// is unusable or generation places no rooms.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{GameState, GenerationConfig, SeededDice};
    ///
    /// let config = GenerationConfig::new(42);
    /// let mut dice = SeededDice::new(config.seed);
    /// let state = GameState::new_game(&config, &mut dice).unwrap();
    ///
    /// let player = state.player().unwrap();
    /// assert!(!state.map.is_wall(player.position));
    /// assert_eq!(state.messages.len(), 1);
    /// ```
    pub fn new_game(config: &GenerationConfig, dice: &mut dyn Dice) -> BurrowResult<Self> {
        config.validate()?;
        let mut state = Self::new(config.map_width, config.map_height);
        RoomTunnelGenerator::new().generate(&mut state, config, dice)?;
        state.messages.add(
            "Welcome stranger! Prepare to perish in the Tombs of the Ancient Kings.",
            palette::RED,
        );
        state.refresh_fov();
        info!(
            "New game started with seed {} ({} entities)",
            config.seed,
            state.entity_count()
        );
        Ok(state)
    }

    /// Adds an entity on top of the draw order.
    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.entities.insert(id, entity);
        self.draw_order.push(id);
        id
    }

    /// Takes an entity out of the world.
    pub fn remove_entity(&mut self, id: EntityId) -> BurrowResult<Entity> {
        let entity = self
            .entities
            .remove(&id)
            .ok_or(BurrowError::UnknownEntity(id))?;
        self.draw_order.retain(|other| *other != id);
        Ok(entity)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Like [`GameState::entity`] but an unknown ID is an error.
    pub fn get(&self, id: EntityId) -> BurrowResult<&Entity> {
        self.entity(id).ok_or(BurrowError::UnknownEntity(id))
    }

    /// Like [`GameState::entity_mut`] but an unknown ID is an error.
    pub fn get_mut(&mut self, id: EntityId) -> BurrowResult<&mut Entity> {
        self.entity_mut(id).ok_or(BurrowError::UnknownEntity(id))
    }

    pub fn player(&self) -> BurrowResult<&Entity> {
        self.get(self.player_id)
    }

    pub fn player_mut(&mut self) -> BurrowResult<&mut Entity> {
        let id = self.player_id;
        self.get_mut(id)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// World entities in draw order.
    pub fn draw_list(&self) -> impl Iterator<Item = &Entity> {
        self.draw_order
            .iter()
            .filter_map(move |id| self.entities.get(id))
    }

    /// Snapshot of world entity IDs in draw order.
    pub fn entity_ids(&self) -> Vec<EntityId> {
        self.draw_order.clone()
    }

    /// Moves an entity to the front of the draw order so everything else
    /// is drawn over it.
    pub fn send_to_back(&mut self, id: EntityId) {
        if let Some(index) = self.draw_order.iter().position(|other| *other == id) {
            let id = self.draw_order.remove(index);
            self.draw_order.insert(0, id);
        }
    }

    /// Whether a blocking tile or a blocking entity occupies `pos`.
    ///
    /// Positions outside the map are blocked.
    pub fn is_blocked(&self, pos: Position) -> bool {
        if self.map.is_wall(pos) {
            return true;
        }
        self.draw_list()
            .any(|entity| entity.blocks && entity.position == pos)
    }

    /// First entity in draw order at `pos` that can be attacked.
    pub fn fighter_at(&self, pos: Position) -> Option<EntityId> {
        self.draw_list()
            .find(|entity| entity.fighter.is_some() && entity.position == pos)
            .map(|entity| entity.id)
    }

    /// Moves an entity by a delta when the destination is free.
    ///
    /// Returns whether the entity moved.
    pub fn move_by(&mut self, id: EntityId, dx: i32, dy: i32) -> BurrowResult<bool> {
        let destination = self.get(id)?.position.offset(dx, dy);
        if (dx == 0 && dy == 0) || self.is_blocked(destination) {
            return Ok(false);
        }
        self.get_mut(id)?.position = destination;
        if id == self.player_id {
            self.fov_recompute = true;
        }
        Ok(true)
    }

    /// Places an entity directly, ignoring blocking.
    pub fn set_position(&mut self, id: EntityId, pos: Position) -> BurrowResult<()> {
        self.get_mut(id)?.position = pos;
        if id == self.player_id {
            self.fov_recompute = true;
        }
        Ok(())
    }

    /// Re-seeds the visibility collaborator from every tile.
    pub fn sync_fov(&mut self) {
        for pos in self.map.positions().collect::<Vec<_>>() {
            if let Some(tile) = self.map.get_tile(pos) {
                self.fov
                    .set_properties(pos, !tile.block_sight, !tile.blocked);
            }
        }
        self.fov_recompute = true;
    }

    /// Recomputes visibility around the player and marks what is seen as
    /// explored.
    pub fn recompute_fov(&mut self) {
        let origin = match self.entity(self.player_id) {
            Some(player) => player.position,
            None => return,
        };
        self.fov
            .compute_fov(origin, config::TORCH_RADIUS, config::FOV_LIGHT_WALLS);
        let visible: Vec<Position> = self
            .map
            .positions()
            .filter(|pos| self.fov.is_in_fov(*pos))
            .collect();
        for pos in visible {
            if let Some(tile) = self.map.get_tile_mut(pos) {
                tile.explored = true;
            }
        }
        self.fov_recompute = false;
        debug!("Recomputed field of view from {:?}", origin);
    }

    /// Recomputes visibility only when the player moved since the last pass.
    pub fn refresh_fov(&mut self) {
        if self.fov_recompute {
            self.recompute_fov();
        }
    }

    pub fn needs_fov_recompute(&self) -> bool {
        self.fov_recompute
    }

    pub fn is_in_fov(&self, pos: Position) -> bool {
        self.fov.is_in_fov(pos)
    }

    /// Render triple for one cell, `None` outside the map.
    pub fn cell_view(&self, pos: Position) -> Option<CellView> {
        self.map.get_tile(pos).map(|tile| CellView {
            explored: tile.explored,
            visible: self.fov.is_in_fov(pos),
            blocks_sight: tile.block_sight,
        })
    }

    /// Player hit points and maximum, for the status bar.
    pub fn player_hp(&self) -> (i32, i32) {
        self.entity(self.player_id)
            .and_then(|player| player.fighter)
            .map_or((0, 0), |fighter| (fighter.hp, fighter.max_hp))
    }

    /// Comma separated names of the visible entities at `pos`.
    pub fn names_at(&self, pos: Position) -> String {
        if !self.fov.is_in_fov(pos) {
            return String::new();
        }
        self.draw_list()
            .filter(|entity| entity.position == pos)
            .map(|entity| entity.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Carried items, oldest first.
    pub fn inventory(&self) -> &[Entity] {
        &self.inventory
    }

    pub fn is_playing(&self) -> bool {
        self.completion_state == GameCompletionState::Playing
    }

    /// Appends a line to the message log.
    pub fn message<T: Into<String>>(&mut self, text: T, color: Color) {
        self.messages.add(text, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Tile;

    fn open_state() -> GameState {
        let mut state = GameState::new(10, 10);
        for y in 1..9 {
            for x in 1..9 {
                state.map.carve(Position::new(x, y));
            }
        }
        state.sync_fov();
        state
    }

    #[test]
    fn test_new_state_contains_only_player() {
        let state = GameState::new(5, 5);
        assert_eq!(state.entity_count(), 1);
        assert_eq!(state.player().unwrap().name, "player");
        assert!(state.is_playing());
        assert_eq!(state.turn_number, 0);
    }

    #[test]
    fn test_is_blocked_by_tiles_and_entities() {
        let mut state = open_state();
        let orc_pos = Position::new(3, 3);
        state.add_entity(Entity::orc(orc_pos));
        state.add_entity(Entity::healing_potion(Position::new(4, 4)));

        assert!(state.is_blocked(Position::new(0, 0)));
        assert!(state.is_blocked(orc_pos));
        assert!(!state.is_blocked(Position::new(4, 4)));
        assert!(!state.is_blocked(Position::new(5, 5)));
        assert!(state.is_blocked(Position::new(-1, 5)));
    }

    #[test]
    fn test_move_by_respects_blocking() {
        let mut state = open_state();
        let player = state.player_id;
        state.set_position(player, Position::new(1, 1)).unwrap();

        assert!(!state.move_by(player, -1, 0).unwrap());
        assert!(state.move_by(player, 1, 1).unwrap());
        assert_eq!(state.player().unwrap().position, Position::new(2, 2));
    }

    #[test]
    fn test_send_to_back_reorders_draw_list() {
        let mut state = open_state();
        let potion = state.add_entity(Entity::healing_potion(Position::new(2, 2)));
        state.send_to_back(potion);

        let first = state.draw_list().next().unwrap();
        assert_eq!(first.id, potion);
        assert_eq!(state.entity_ids().len(), 2);
    }

    #[test]
    fn test_recompute_fov_stamps_explored() {
        let mut state = open_state();
        let player = state.player_id;
        state.set_position(player, Position::new(4, 4)).unwrap();
        assert!(state.needs_fov_recompute());

        state.refresh_fov();
        assert!(!state.needs_fov_recompute());
        let view = state.cell_view(Position::new(5, 5)).unwrap();
        assert!(view.visible && view.explored && !view.blocks_sight);
        assert!(state.map.get_tile(Position::new(8, 8)).unwrap().explored);
    }

    #[test]
    fn test_explored_survives_leaving_view() {
        let mut state = open_state();
        let player = state.player_id;
        state.set_position(player, Position::new(1, 1)).unwrap();
        state.recompute_fov();

        state.map.set_tile(Position::new(5, 1), Tile::wall()).unwrap();
        state.sync_fov();
        state.recompute_fov();
        assert!(!state.is_in_fov(Position::new(7, 1)));
        assert!(state.map.get_tile(Position::new(7, 1)).unwrap().explored);
    }

    #[test]
    fn test_names_at_lists_visible_entities() {
        let mut state = open_state();
        let player = state.player_id;
        state.set_position(player, Position::new(2, 2)).unwrap();
        state.add_entity(Entity::healing_potion(Position::new(3, 3)));
        state.add_entity(Entity::orc(Position::new(3, 3)));
        state.recompute_fov();

        assert_eq!(state.names_at(Position::new(3, 3)), "healing potion, orc");
        assert_eq!(state.names_at(Position::new(6, 6)), "");
    }

    #[test]
    fn test_remove_unknown_entity_fails() {
        let mut state = open_state();
        let result = state.remove_entity(crate::new_entity_id());
        assert!(matches!(result, Err(BurrowError::UnknownEntity(_))));
    }
}
