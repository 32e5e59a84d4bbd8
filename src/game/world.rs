//! # World Module
//!
//! The tile grid: which cells block movement, which block sight and which the
//! player has already seen.

use crate::game::Position;
use crate::{BurrowError, BurrowResult};
use serde::{Deserialize, Serialize};

/// A single cell of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Movement is impossible through this tile
    pub blocked: bool,
    /// Light does not pass through this tile
    pub block_sight: bool,
    /// The player has seen this tile at least once
    pub explored: bool,
}

impl Tile {
    /// Solid rock: blocks movement and sight.
    pub fn wall() -> Self {
        Self {
            blocked: true,
            block_sight: true,
            explored: false,
        }
    }

    /// Open floor.
    pub fn empty() -> Self {
        Self {
            blocked: false,
            block_sight: false,
            explored: false,
        }
    }
}

/// Row-major grid of tiles.
///
/// # Examples
///
/// ```
/// use burrow::{Map, Position};
///
/// let mut map = Map::new(10, 10);
/// assert!(map.get_tile(Position::new(3, 3)).unwrap().blocked);
///
/// map.carve(Position::new(3, 3));
/// assert!(!map.get_tile(Position::new(3, 3)).unwrap().blocked);
/// assert!(map.get_tile(Position::new(10, 3)).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    /// Width in tiles
    pub width: i32,
    /// Height in tiles
    pub height: i32,
    tiles: Vec<Tile>,
}

impl Map {
    /// Creates a map filled entirely with walls.
    pub fn new(width: i32, height: i32) -> Self {
        let cells = (width.max(0) * height.max(0)) as usize;
        Self {
            width,
            height,
            tiles: vec![Tile::wall(); cells],
        }
    }

    /// Checks whether a position lies inside the map.
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.is_valid_position(pos) {
            Some((pos.y * self.width + pos.x) as usize)
        } else {
            None
        }
    }

    /// Gets the tile at a position.
    pub fn get_tile(&self, pos: Position) -> Option<&Tile> {
        self.index(pos).and_then(|i| self.tiles.get(i))
    }

    /// Gets the tile at a position mutably.
    pub fn get_tile_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        match self.index(pos) {
            Some(i) => self.tiles.get_mut(i),
            None => None,
        }
    }

    /// Replaces the tile at a position.
    pub fn set_tile(&mut self, pos: Position, tile: Tile) -> BurrowResult<()> {
        let slot = self.get_tile_mut(pos).ok_or_else(|| {
            BurrowError::InvalidAction(format!("Position {:?} is outside the map", pos))
        })?;
        *slot = tile;
        Ok(())
    }

    /// Opens a tile for movement and sight. Positions outside the map are ignored.
    pub fn carve(&mut self, pos: Position) {
        if let Some(tile) = self.get_tile_mut(pos) {
            tile.blocked = false;
            tile.block_sight = false;
        }
    }

    /// True when the tile is solid or lies outside the map.
    pub fn is_wall(&self, pos: Position) -> bool {
        self.get_tile(pos).map_or(true, |tile| tile.blocked)
    }

    /// Iterates over every position of the map, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }

    /// Counts walkable tiles.
    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|tile| !tile.blocked).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_is_solid() {
        let map = Map::new(8, 6);
        assert_eq!(map.positions().count(), 48);
        assert_eq!(map.floor_count(), 0);
        assert!(map.positions().all(|pos| map.is_wall(pos)));
    }

    #[test]
    fn test_carve_opens_movement_and_sight() {
        let mut map = Map::new(5, 5);
        map.carve(Position::new(2, 2));

        let tile = map.get_tile(Position::new(2, 2)).unwrap();
        assert!(!tile.blocked);
        assert!(!tile.block_sight);
        assert!(!tile.explored);
        assert_eq!(map.floor_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_is_wall() {
        let map = Map::new(5, 5);
        assert!(map.is_wall(Position::new(-1, 0)));
        assert!(map.is_wall(Position::new(0, 5)));
        assert!(map.get_tile(Position::new(5, 0)).is_none());
    }

    #[test]
    fn test_set_tile_outside_map_fails() {
        let mut map = Map::new(5, 5);
        assert!(map.set_tile(Position::new(1, 1), Tile::empty()).is_ok());
        assert!(map.set_tile(Position::new(7, 1), Tile::empty()).is_err());
    }

    #[test]
    fn test_carve_outside_map_is_ignored() {
        let mut map = Map::new(3, 3);
        map.carve(Position::new(3, 3));
        assert_eq!(map.floor_count(), 0);
    }
}
