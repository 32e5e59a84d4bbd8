//! # Display Management
//!
//! Screen rendering with macroquad: the map, entities, the status panel and
//! menus. Everything here reads [`GameState`] and never mutates it.

use crate::game::{GameState, Position};
use crate::rendering::{palette, Bar, Menu};
use macroquad::prelude::*;

/// Macroquad display manager for the game.
///
/// The map occupies the top of the window cell by cell. A panel below it
/// holds the hit point bar, the names under the mouse and the message log.
#[derive(Debug, Clone)]
pub struct MacroquadDisplay {
    /// Side of one map cell in pixels
    pub tile_size: f32,
    /// Glyph font size in pixels
    pub font_size: f32,
    /// Status bar width in cells
    pub bar_width: i32,
    /// Panel height in cells
    pub panel_height: i32,
}

impl MacroquadDisplay {
    pub fn new() -> Self {
        Self {
            tile_size: 16.0,
            font_size: 18.0,
            bar_width: 20,
            panel_height: 7,
        }
    }

    /// Window size in pixels needed for a map of this size.
    pub fn window_size(&self, map_width: i32, map_height: i32) -> (f32, f32) {
        (
            map_width as f32 * self.tile_size,
            (map_height + self.panel_height) as f32 * self.tile_size,
        )
    }

    /// Map cell under the mouse cursor.
    pub fn mouse_cell(&self) -> Position {
        let (x, y) = mouse_position();
        Position::new(
            (x / self.tile_size).floor() as i32,
            (y / self.tile_size).floor() as i32,
        )
    }

    /// Draws one full frame.
    pub fn render(&self, state: &GameState, mouse: Position) {
        clear_background(palette::BLACK);
        self.render_map(state);
        self.render_entities(state);
        self.render_panel(state, mouse);
    }

    fn render_map(&self, state: &GameState) {
        for pos in state.map.positions() {
            let view = match state.cell_view(pos) {
                Some(view) => view,
                None => continue,
            };
            let color = match (view.visible, view.blocks_sight) {
                (true, true) => palette::COLOR_LIGHT_WALL,
                (true, false) => palette::COLOR_LIGHT_GROUND,
                (false, true) if view.explored => palette::COLOR_DARK_WALL,
                (false, false) if view.explored => palette::COLOR_DARK_GROUND,
                _ => continue,
            };
            let (x, y) = self.cell_origin(pos.x, pos.y);
            draw_rectangle(x, y, self.tile_size, self.tile_size, color);
        }
    }

    fn render_entities(&self, state: &GameState) {
        for entity in state.draw_list() {
            if state.is_in_fov(entity.position) {
                self.draw_glyph(entity.position.x, entity.position.y, entity.glyph, entity.color);
            }
        }
    }

    fn render_panel(&self, state: &GameState, mouse: Position) {
        let panel_top = state.map.height;
        let (_, panel_y) = self.cell_origin(0, panel_top);
        draw_rectangle(
            0.0,
            panel_y,
            screen_width(),
            self.panel_height as f32 * self.tile_size,
            palette::BLACK,
        );

        self.draw_bar(&Bar::health(state), 1, panel_top + 1);
        self.draw_string(1, panel_top, &state.names_at(mouse), palette::LIGHT_GREY);

        let message_x = self.bar_width + 2;
        for (row, (text, color)) in state.messages.iter().enumerate() {
            self.draw_string(message_x, panel_top + 1 + row as i32, text, *color);
        }
    }

    /// Draws a menu centered over the map.
    pub fn render_menu(&self, menu: &Menu, width: i32) {
        let lines = menu.lines();
        let height = lines.len() as i32 + 1;
        let left = (screen_width() / self.tile_size) as i32 / 2 - width / 2;
        let top = (screen_height() / self.tile_size) as i32 / 2 - height / 2;

        let (x, y) = self.cell_origin(left, top);
        draw_rectangle(
            x,
            y,
            width as f32 * self.tile_size,
            height as f32 * self.tile_size,
            Color::new(0.0, 0.0, 0.0, 0.7),
        );
        self.draw_string(left, top, &menu.header, palette::WHITE);
        for (row, line) in lines.iter().enumerate() {
            self.draw_string(left, top + 1 + row as i32, line, palette::WHITE);
        }
    }

    fn draw_bar(&self, bar: &Bar, cell_x: i32, cell_y: i32) {
        let (x, y) = self.cell_origin(cell_x, cell_y);
        let total = self.bar_width as f32 * self.tile_size;
        draw_rectangle(x, y, total, self.tile_size, bar.background);
        draw_rectangle(x, y, bar.filled_width(total), self.tile_size, bar.foreground);

        let label = bar.label();
        let size = measure_text(&label, None, self.font_size as u16, 1.0);
        draw_text(
            &label,
            x + (total - size.width) / 2.0,
            y + self.tile_size * 0.8,
            self.font_size,
            palette::WHITE,
        );
    }

    fn draw_glyph(&self, cell_x: i32, cell_y: i32, glyph: char, color: Color) {
        let (x, y) = self.cell_origin(cell_x, cell_y);
        let mut buffer = [0u8; 4];
        draw_text(
            glyph.encode_utf8(&mut buffer),
            x + self.tile_size * 0.2,
            y + self.tile_size * 0.8,
            self.font_size,
            color,
        );
    }

    fn draw_string(&self, cell_x: i32, cell_y: i32, text: &str, color: Color) {
        let (x, y) = self.cell_origin(cell_x, cell_y);
        draw_text(text, x, y + self.tile_size * 0.8, self.font_size, color);
    }

    fn cell_origin(&self, cell_x: i32, cell_y: i32) -> (f32, f32) {
        (cell_x as f32 * self.tile_size, cell_y as f32 * self.tile_size)
    }
}

impl Default for MacroquadDisplay {
    fn default() -> Self {
        Self::new()
    }
}
