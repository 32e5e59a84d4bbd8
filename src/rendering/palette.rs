//! Colors shared by the simulation (entities, messages) and the display.

use macroquad::color::Color;

pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const LIGHT_RED: Color = Color::new(1.0, 0.45, 0.45, 1.0);
pub const ORANGE: Color = Color::new(1.0, 0.5, 0.0, 1.0);
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
pub const LIGHT_YELLOW: Color = Color::new(1.0, 1.0, 0.45, 1.0);
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
pub const LIGHT_GREEN: Color = Color::new(0.45, 1.0, 0.45, 1.0);
pub const LIGHT_BLUE: Color = Color::new(0.45, 0.45, 1.0, 1.0);
pub const LIGHT_VIOLET: Color = Color::new(0.73, 0.45, 1.0, 1.0);
pub const VIOLET: Color = Color::new(0.5, 0.0, 1.0, 1.0);
pub const DESATURATED_GREEN: Color = Color::new(0.25, 0.5, 0.25, 1.0);
pub const DARKER_GREEN: Color = Color::new(0.0, 0.5, 0.0, 1.0);
pub const DARK_RED: Color = Color::new(0.75, 0.0, 0.0, 1.0);
pub const DARKER_RED: Color = Color::new(0.5, 0.0, 0.0, 1.0);
pub const LIGHT_GREY: Color = Color::new(0.75, 0.75, 0.75, 1.0);
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

// Map tiles
pub const COLOR_DARK_WALL: Color = Color::new(0.0, 0.0, 0.39, 1.0);
pub const COLOR_LIGHT_WALL: Color = Color::new(0.51, 0.43, 0.2, 1.0);
pub const COLOR_DARK_GROUND: Color = Color::new(0.2, 0.2, 0.59, 1.0);
pub const COLOR_LIGHT_GROUND: Color = Color::new(0.78, 0.71, 0.2, 1.0);
