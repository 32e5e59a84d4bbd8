//! # Burrow Roguelike
//!
//! A classic turn-based roguelike: carve a dungeon of rooms and tunnels, fill
//! it with orcs, trolls, potions and scrolls, and let the player fight their
//! way through.
//!
//! ## Architecture Overview
//!
//! The crate is split into a deterministic simulation core and thin adapters
//! around it:
//!
//! - **Game State**: one [`GameState`] owns the tile grid, every entity, the
//!   inventory, the message log and the field-of-view map
//! - **Entity Model**: a single [`Entity`] type with optional fighter, AI and
//!   item capabilities
//! - **Turn Loop**: [`GameState::tick`] resolves one player command and, when
//!   it consumed a turn, one AI pass
//! - **Generation System**: room-and-tunnel dungeon carving plus room
//!   population with monsters and items
//! - **Rendering System**: field-of-view, menus and a macroquad frontend
//!
//! All randomness goes through the [`Dice`] trait so that every decision can
//! be replayed from a seed or a scripted sequence.

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod scenes;
pub mod utils;

// Core module re-exports
pub use game::*;

pub use generation::{
    GenerationConfig, Generator, ItemPopulator, MonsterPopulator, Populator, Rect,
    RoomTunnelGenerator,
};
pub use input::{InputHandler, KeyPress, PlayerInput};
pub use rendering::{Bar, FieldOfView, MacroquadDisplay, Menu, ShadowcastFov};
pub use scenes::SceneManager;
pub use utils::{Dice, ScriptedDice, SeededDice};

/// Core error type for the Burrow game engine.
#[derive(thiserror::Error, Debug)]
pub enum BurrowError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration cannot produce a playable game. Not recoverable.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An entity id does not refer to anything in the world or inventory
    #[error("Unknown entity: {0}")]
    UnknownEntity(EntityId),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Action cannot be performed
    #[error("Invalid action: {0}")]
    InvalidAction(String),
}

/// Result type used throughout the Burrow codebase.
pub type BurrowResult<T> = Result<T, BurrowError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Default map width in tiles
    pub const DEFAULT_MAP_WIDTH: i32 = 80;

    /// Default map height in tiles
    pub const DEFAULT_MAP_HEIGHT: i32 = 43;

    /// Field-of-view radius around the player
    pub const TORCH_RADIUS: i32 = 10;

    /// Whether walls bordering the visible area are lit
    pub const FOV_LIGHT_WALLS: bool = true;

    /// Hit points restored by a healing potion
    pub const HEAL_AMOUNT: i32 = 4;

    /// Damage dealt by a lightning bolt
    pub const LIGHTNING_DAMAGE: i32 = 20;

    /// Maximum distance a lightning bolt can reach
    pub const LIGHTNING_RANGE: i32 = 5;

    /// Maximum distance a confusion scroll can reach
    pub const CONFUSE_RANGE: i32 = 8;

    /// Number of turns a monster stays confused
    pub const CONFUSE_NUM_TURNS: i32 = 10;

    /// Inventory slots, one per menu letter
    pub const INVENTORY_CAPACITY: usize = 26;

    /// Lines kept in the message log
    pub const MESSAGE_CAPACITY: usize = 6;

    /// Player starting stats: max hp, defense, power
    pub const PLAYER_STATS: (i32, i32, i32) = (30, 2, 5);

    /// Orc stats: max hp, defense, power
    pub const ORC_STATS: (i32, i32, i32) = (10, 0, 3);

    /// Troll stats: max hp, defense, power
    pub const TROLL_STATS: (i32, i32, i32) = (16, 1, 4);
}
