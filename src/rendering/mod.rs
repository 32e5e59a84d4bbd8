//! # Rendering Module
//!
//! Visibility, colors, menus and the macroquad frontend.
//!
//! Only [`fov`] and [`palette`] are used by the simulation; [`display`] reads
//! the game state and never changes it.

pub mod display;
pub mod fov;
pub mod palette;
pub mod ui;

pub use display::*;
pub use fov::*;
pub use ui::*;
