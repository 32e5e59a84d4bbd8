//! # Generation Module
//!
//! Procedural content generation for dungeons, monsters and items.
//!
//! A [`Generator`] carves the tile grid of a [`GameState`] and hands each
//! accepted room to [`Populator`]s that fill it with entities. All decisions
//! come from a [`Dice`], so a seed reproduces the same dungeon.

pub mod dungeon;
pub mod encounters;
pub mod items;

pub use dungeon::*;
pub use encounters::*;
pub use items::*;

use crate::config;
use crate::game::{GameState, Position};
use crate::utils::{Dice, SeededDice};
use crate::{BurrowError, BurrowResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for procedural generation.
///
/// Controls map dimensions, room sizes and how densely rooms are populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Map width in tiles
    pub map_width: i32,
    /// Map height in tiles
    pub map_height: i32,
    /// Minimum room side length
    pub room_min_size: i32,
    /// Maximum room side length
    pub room_max_size: i32,
    /// Number of room placement attempts
    pub max_rooms: u32,
    /// Upper bound of monsters rolled per room
    pub max_room_monsters: i32,
    /// Upper bound of items rolled per room
    pub max_room_items: i32,
}

impl GenerationConfig {
    /// Creates the standard configuration for the given seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(7);
    /// assert_eq!((config.map_width, config.map_height), (80, 43));
    /// assert!(config.room_max_size >= config.room_min_size);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            map_width: config::DEFAULT_MAP_WIDTH,
            map_height: config::DEFAULT_MAP_HEIGHT,
            room_min_size: 6,
            room_max_size: 10,
            max_rooms: 30,
            max_room_monsters: 3,
            max_room_items: 2,
        }
    }

    /// Creates a configuration for testing with a smaller map.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            map_width: 40,
            map_height: 24,
            room_min_size: 4,
            room_max_size: 7,
            max_rooms: 12,
            max_room_monsters: 2,
            max_room_items: 1,
        }
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, does not parse, or holds values
    /// rejected by [`GenerationConfig::validate`].
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> BurrowResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that cannot produce a playable map.
    pub fn validate(&self) -> BurrowResult<()> {
        if self.room_min_size < 3 {
            return Err(BurrowError::InvalidConfiguration(format!(
                "room_min_size must be at least 3, got {}",
                self.room_min_size
            )));
        }
        if self.room_max_size < self.room_min_size {
            return Err(BurrowError::InvalidConfiguration(format!(
                "room_max_size {} is smaller than room_min_size {}",
                self.room_max_size, self.room_min_size
            )));
        }
        if self.map_width <= self.room_max_size || self.map_height <= self.room_max_size {
            return Err(BurrowError::InvalidConfiguration(format!(
                "map {}x{} cannot fit rooms of size {}",
                self.map_width, self.map_height, self.room_max_size
            )));
        }
        if self.max_rooms == 0 {
            return Err(BurrowError::InvalidConfiguration(
                "max_rooms must be positive".to_string(),
            ));
        }
        if self.max_room_monsters < 0 || self.max_room_items < 0 {
            return Err(BurrowError::InvalidConfiguration(
                "per-room monster and item counts cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Axis-aligned rectangle used while laying out rooms.
///
/// `x2`/`y2` are exclusive of the carved interior: the room floor spans
/// `x1 + 1..x2` by `y1 + 1..y2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    /// Center cell, rounded down.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{Position, Rect};
    ///
    /// assert_eq!(Rect::new(0, 0, 7, 5).center(), Position::new(3, 2));
    /// ```
    pub fn center(&self) -> Position {
        Position::new(
            (self.x1 + self.x2).div_euclid(2),
            (self.y1 + self.y2).div_euclid(2),
        )
    }

    /// Whether the two rectangles overlap; shared edges count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    /// Whether `pos` lies in the carved floor of this room.
    pub fn contains_interior(&self, pos: Position) -> bool {
        pos.x > self.x1 && pos.x < self.x2 && pos.y > self.y1 && pos.y < self.y2
    }

    /// Uniformly random floor cell.
    pub fn random_interior(&self, dice: &mut dyn Dice) -> Position {
        Position::new(
            dice.within(self.x1 + 1, self.x2 - 1),
            dice.within(self.y1 + 1, self.y2 - 1),
        )
    }
}

/// Common interface for map generators.
pub trait Generator {
    /// Carves the map of `state`, places the player and populates rooms.
    ///
    /// Returns the accepted rooms in placement order.
    fn generate(
        &self,
        state: &mut GameState,
        config: &GenerationConfig,
        dice: &mut dyn Dice,
    ) -> BurrowResult<Vec<Rect>>;

    /// Gets the type name of this generator for debugging.
    fn generator_type(&self) -> &'static str;
}

/// Fills one freshly carved room with entities.
pub trait Populator {
    /// Returns the number of entities placed.
    fn populate(
        &self,
        state: &mut GameState,
        room: &Rect,
        config: &GenerationConfig,
        dice: &mut dyn Dice,
    ) -> BurrowResult<usize>;

    /// Gets the type name of this populator for debugging.
    fn populator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;

    /// Creates seeded dice from the config.
    pub fn create_dice(config: &GenerationConfig) -> SeededDice {
        SeededDice::new(config.seed)
    }
}
