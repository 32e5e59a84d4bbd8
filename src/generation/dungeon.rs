//! # Dungeon Generation
//!
//! Room-and-tunnel layout: rectangular rooms dropped at random, rejected on
//! overlap, and chained together with L-shaped tunnels.

use crate::game::{GameState, Map, Position};
use crate::generation::{
    GenerationConfig, Generator, ItemPopulator, MonsterPopulator, Populator, Rect,
};
use crate::utils::Dice;
use crate::{BurrowError, BurrowResult};
use log::debug;

/// Primary dungeon generator.
///
/// For each of `max_rooms` attempts it rolls a room size and position and
/// keeps the room only if it touches no earlier room. Rejected rooms are not
/// retried. The first room receives the player; every later room is joined
/// to the previous one by a tunnel, then handed to the populators.
#[derive(Debug)]
pub struct RoomTunnelGenerator {
    monsters: Option<MonsterPopulator>,
    items: Option<ItemPopulator>,
}

impl RoomTunnelGenerator {
    /// Creates a generator that places monsters and items.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{GameState, GenerationConfig, Generator, RoomTunnelGenerator, SeededDice};
    ///
    /// let config = GenerationConfig::for_testing(5);
    /// let mut state = GameState::new(config.map_width, config.map_height);
    /// let mut dice = SeededDice::new(config.seed);
    ///
    /// let rooms = RoomTunnelGenerator::new()
    ///     .generate(&mut state, &config, &mut dice)
    ///     .unwrap();
    /// assert_eq!(state.player().unwrap().position, rooms[0].center());
    /// ```
    pub fn new() -> Self {
        Self {
            monsters: Some(MonsterPopulator),
            items: Some(ItemPopulator),
        }
    }

    /// Creates a generator that only carves the map.
    pub fn layout_only() -> Self {
        Self {
            monsters: None,
            items: None,
        }
    }

    fn roll_room(&self, config: &GenerationConfig, dice: &mut dyn Dice) -> Rect {
        let width = dice.within(config.room_min_size, config.room_max_size);
        let height = dice.within(config.room_min_size, config.room_max_size);
        let x = dice.within(0, config.map_width - width - 1);
        let y = dice.within(0, config.map_height - height - 1);
        Rect::new(x, y, width, height)
    }

    fn populate(
        &self,
        state: &mut GameState,
        room: &Rect,
        config: &GenerationConfig,
        dice: &mut dyn Dice,
    ) -> BurrowResult<()> {
        let populators: [Option<&dyn Populator>; 2] = [
            self.monsters.as_ref().map(|p| p as &dyn Populator),
            self.items.as_ref().map(|p| p as &dyn Populator),
        ];
        for populator in populators.into_iter().flatten() {
            let placed = populator.populate(state, room, config, dice)?;
            debug!(
                "{} placed {} entities in room at ({}, {})",
                populator.populator_type(),
                placed,
                room.x1,
                room.y1
            );
        }
        Ok(())
    }
}

impl Default for RoomTunnelGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for RoomTunnelGenerator {
    fn generate(
        &self,
        state: &mut GameState,
        config: &GenerationConfig,
        dice: &mut dyn Dice,
    ) -> BurrowResult<Vec<Rect>> {
        let mut rooms: Vec<Rect> = Vec::new();

        for _ in 0..config.max_rooms {
            let room = self.roll_room(config, dice);
            if rooms.iter().any(|other| room.intersects(other)) {
                continue;
            }

            create_room(&mut state.map, &room);
            let center = room.center();
            match rooms.last() {
                None => {
                    let player = state.player_id;
                    state.set_position(player, center)?;
                }
                Some(previous) => {
                    let previous = previous.center();
                    if dice.coin_flip() {
                        create_h_tunnel(&mut state.map, previous.x, center.x, previous.y);
                        create_v_tunnel(&mut state.map, previous.y, center.y, center.x);
                    } else {
                        create_v_tunnel(&mut state.map, previous.y, center.y, previous.x);
                        create_h_tunnel(&mut state.map, previous.x, center.x, center.y);
                    }
                }
            }

            self.populate(state, &room, config, dice)?;
            rooms.push(room);
        }

        if rooms.is_empty() {
            return Err(BurrowError::InvalidConfiguration(
                "dungeon generation placed no rooms".to_string(),
            ));
        }

        state.sync_fov();
        debug!(
            "{} accepted {} of {} rooms, {} floor tiles",
            self.generator_type(),
            rooms.len(),
            config.max_rooms,
            state.map.floor_count()
        );
        Ok(rooms)
    }

    fn generator_type(&self) -> &'static str {
        "RoomTunnelGenerator"
    }
}

/// Carves the interior of a room, leaving its outline as wall.
pub fn create_room(map: &mut Map, room: &Rect) {
    for y in room.y1 + 1..room.y2 {
        for x in room.x1 + 1..room.x2 {
            map.carve(Position::new(x, y));
        }
    }
}

/// Carves a horizontal line, both ends included.
pub fn create_h_tunnel(map: &mut Map, x1: i32, x2: i32, y: i32) {
    for x in x1.min(x2)..=x1.max(x2) {
        map.carve(Position::new(x, y));
    }
}

/// Carves a vertical line, both ends included.
pub fn create_v_tunnel(map: &mut Map, y1: i32, y2: i32, x: i32) {
    for y in y1.min(y2)..=y1.max(y2) {
        map.carve(Position::new(x, y));
    }
}
