//! # User Interface Elements
//!
//! Display-independent models for menus and status bars. The display draws
//! them; the scene manager feeds key presses back into [`Menu::select`].

use crate::config;
use crate::game::GameState;
use crate::rendering::palette;
use crate::{BurrowError, BurrowResult};
use macroquad::color::Color;

/// A lettered list of options under a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub header: String,
    pub options: Vec<String>,
}

impl Menu {
    /// Builds a menu; each option gets one letter from `a` to `z`.
    ///
    /// # Errors
    ///
    /// More than 26 options is an [`BurrowError::InvalidConfiguration`].
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::Menu;
    ///
    /// let menu = Menu::new("Pick one", vec!["sword".into(), "shield".into()]).unwrap();
    /// assert_eq!(menu.lines(), ["(a) sword", "(b) shield"]);
    /// assert_eq!(menu.select('b'), Some(1));
    /// assert_eq!(menu.select('c'), None);
    /// ```
    pub fn new<S: Into<String>>(header: S, options: Vec<String>) -> BurrowResult<Self> {
        if options.len() > config::INVENTORY_CAPACITY {
            return Err(BurrowError::InvalidConfiguration(format!(
                "cannot have a menu with more than {} options, got {}",
                config::INVENTORY_CAPACITY,
                options.len()
            )));
        }
        Ok(Self {
            header: header.into(),
            options,
        })
    }

    /// Option text prefixed with its letter.
    pub fn lines(&self) -> Vec<String> {
        self.options
            .iter()
            .zip('a'..='z')
            .map(|(option, letter)| format!("({}) {}", letter, option))
            .collect()
    }

    /// Index chosen by a typed character, if it names an option.
    pub fn select(&self, character: char) -> Option<usize> {
        let lower = character.to_ascii_lowercase();
        if !lower.is_ascii_lowercase() {
            return None;
        }
        let index = (lower as u8 - b'a') as usize;
        (index < self.options.len()).then_some(index)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Menu listing the inventory, or a single placeholder line when empty.
///
/// Selecting the placeholder must not be treated as choosing an item; check
/// the inventory length before acting on a selection.
pub fn inventory_menu(state: &GameState, header: &str) -> BurrowResult<Menu> {
    let options = if state.inventory().is_empty() {
        vec!["Inventory is empty.".to_string()]
    } else {
        state
            .inventory()
            .iter()
            .map(|item| item.name.clone())
            .collect()
    };
    Menu::new(header, options)
}

/// A horizontal gauge such as the hit point bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub name: String,
    pub value: i32,
    pub maximum: i32,
    pub foreground: Color,
    pub background: Color,
}

impl Bar {
    /// The player's hit point bar.
    pub fn health(state: &GameState) -> Self {
        let (hp, max_hp) = state.player_hp();
        Self {
            name: "HP".to_string(),
            value: hp,
            maximum: max_hp,
            foreground: palette::LIGHT_RED,
            background: palette::DARKER_RED,
        }
    }

    /// Width of the filled part for a bar `total_width` wide.
    pub fn filled_width(&self, total_width: f32) -> f32 {
        if self.maximum <= 0 {
            return 0.0;
        }
        let ratio = self.value.clamp(0, self.maximum) as f32 / self.maximum as f32;
        ratio * total_width
    }

    /// Centered caption, e.g. `HP: 12/30`.
    pub fn label(&self) -> String {
        format!("{}: {}/{}", self.name, self.value, self.maximum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Entity, Position};

    #[test]
    fn test_menu_rejects_too_many_options() {
        let options: Vec<String> = (0..27).map(|i| format!("option {}", i)).collect();
        assert!(matches!(
            Menu::new("Too many", options),
            Err(BurrowError::InvalidConfiguration(_))
        ));

        let options: Vec<String> = (0..26).map(|i| format!("option {}", i)).collect();
        let menu = Menu::new("Just right", options).unwrap();
        assert_eq!(menu.select('z'), Some(25));
        assert_eq!(menu.select('Z'), Some(25));
    }

    #[test]
    fn test_menu_ignores_non_letters() {
        let menu = Menu::new("Pick", vec!["one".into()]).unwrap();
        assert_eq!(menu.select('1'), None);
        assert_eq!(menu.select(' '), None);
        assert_eq!(menu.select('a'), Some(0));
    }

    #[test]
    fn test_inventory_menu_lists_items() {
        let mut state = GameState::new(5, 5);
        let empty = inventory_menu(&state, "Inventory").unwrap();
        assert_eq!(empty.options, ["Inventory is empty."]);

        state
            .inventory
            .push(Entity::healing_potion(Position::new(0, 0)));
        state
            .inventory
            .push(Entity::lightning_scroll(Position::new(0, 0)));
        let menu = inventory_menu(&state, "Inventory").unwrap();
        assert_eq!(
            menu.lines(),
            ["(a) healing potion", "(b) scroll of lightning bolt"]
        );
    }

    #[test]
    fn test_health_bar() {
        let mut state = GameState::new(5, 5);
        let player = state.player_id;
        state.take_damage(player, 15).unwrap();

        let bar = Bar::health(&state);
        assert_eq!(bar.label(), "HP: 15/30");
        assert_eq!(bar.filled_width(100.0), 50.0);
    }
}
