//! # Input Module
//!
//! Keyboard handling: macroquad key events become [`KeyPress`] values, which
//! map to [`PlayerInput`], which in turn become game [`Command`]s.

use crate::game::{Command, Direction};
use macroquad::prelude::*;

/// One key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// Physical key
    pub code: KeyCode,
    /// Printable character, when the key produced one
    pub character: Option<char>,
    /// Whether Alt was held
    pub alt: bool,
}

impl KeyPress {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            character: None,
            alt: false,
        }
    }

    pub fn with_char(mut self, character: char) -> Self {
        self.character = Some(character);
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }
}

/// Player input types that can be processed by the input handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Step or attack in a direction
    Move(Direction),
    /// Rest for one turn
    Wait,
    /// Pick up the item underfoot
    PickUp,
    /// Open the inventory to use an item
    ShowInventory,
    /// Open the inventory to drop an item
    DropItem,
    /// Alt+Enter
    ToggleFullscreen,
    /// Leave the game
    Quit,
}

/// Input handler for processing player commands.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Whether to enable Vi-style movement keys (hjkl yubn)
    pub vi_keys_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{Direction, InputHandler, KeyPress, PlayerInput};
    /// use macroquad::input::KeyCode;
    ///
    /// let handler = InputHandler::new();
    /// let input = handler.map_key(&KeyPress::new(KeyCode::Up));
    /// assert_eq!(input, Some(PlayerInput::Move(Direction::North)));
    /// ```
    pub fn new() -> Self {
        Self {
            vi_keys_enabled: true,
        }
    }

    /// Polls macroquad for a key pressed this frame.
    pub fn read_key(&self) -> Option<KeyPress> {
        let code = get_last_key_pressed()?;
        Some(KeyPress {
            code,
            character: get_char_pressed(),
            alt: is_key_down(KeyCode::LeftAlt) || is_key_down(KeyCode::RightAlt),
        })
    }

    /// Maps a key press to a player input.
    pub fn map_key(&self, key: &KeyPress) -> Option<PlayerInput> {
        if key.code == KeyCode::Enter && key.alt {
            return Some(PlayerInput::ToggleFullscreen);
        }

        let input = match key.code {
            KeyCode::Escape => PlayerInput::Quit,

            KeyCode::Up | KeyCode::Kp8 => PlayerInput::Move(Direction::North),
            KeyCode::Down | KeyCode::Kp2 => PlayerInput::Move(Direction::South),
            KeyCode::Left | KeyCode::Kp4 => PlayerInput::Move(Direction::West),
            KeyCode::Right | KeyCode::Kp6 => PlayerInput::Move(Direction::East),
            KeyCode::Kp7 => PlayerInput::Move(Direction::Northwest),
            KeyCode::Kp9 => PlayerInput::Move(Direction::Northeast),
            KeyCode::Kp1 => PlayerInput::Move(Direction::Southwest),
            KeyCode::Kp3 => PlayerInput::Move(Direction::Southeast),

            KeyCode::K if self.vi_keys_enabled => PlayerInput::Move(Direction::North),
            KeyCode::J if self.vi_keys_enabled => PlayerInput::Move(Direction::South),
            KeyCode::H if self.vi_keys_enabled => PlayerInput::Move(Direction::West),
            KeyCode::L if self.vi_keys_enabled => PlayerInput::Move(Direction::East),
            KeyCode::Y if self.vi_keys_enabled => PlayerInput::Move(Direction::Northwest),
            KeyCode::U if self.vi_keys_enabled => PlayerInput::Move(Direction::Northeast),
            KeyCode::B if self.vi_keys_enabled => PlayerInput::Move(Direction::Southwest),
            KeyCode::N if self.vi_keys_enabled => PlayerInput::Move(Direction::Southeast),

            KeyCode::Period | KeyCode::Space | KeyCode::Kp5 => PlayerInput::Wait,
            KeyCode::G | KeyCode::Comma => PlayerInput::PickUp,
            KeyCode::I => PlayerInput::ShowInventory,
            KeyCode::D => PlayerInput::DropItem,
            _ => return None,
        };
        Some(input)
    }

    /// Converts inputs that need no menu straight into a command.
    ///
    /// Inventory inputs return `None`; the caller runs a menu first.
    pub fn input_to_command(&self, input: PlayerInput) -> Option<Command> {
        match input {
            PlayerInput::Move(direction) => Some(Command::Move(direction)),
            PlayerInput::Wait => Some(Command::Wait),
            PlayerInput::PickUp => Some(Command::PickUp),
            PlayerInput::ToggleFullscreen => Some(Command::ToggleFullscreen),
            PlayerInput::Quit => Some(Command::Exit),
            PlayerInput::ShowInventory | PlayerInput::DropItem => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alt_enter_toggles_fullscreen() {
        let handler = InputHandler::new();
        let plain = KeyPress::new(KeyCode::Enter);
        assert_eq!(handler.map_key(&plain), None);
        assert_eq!(
            handler.map_key(&plain.with_alt()),
            Some(PlayerInput::ToggleFullscreen)
        );
    }

    #[test]
    fn test_vi_keys_can_be_disabled() {
        let mut handler = InputHandler::new();
        let key = KeyPress::new(KeyCode::Y).with_char('y');
        assert_eq!(
            handler.map_key(&key),
            Some(PlayerInput::Move(Direction::Northwest))
        );

        handler.vi_keys_enabled = false;
        assert_eq!(handler.map_key(&key), None);
    }

    #[test]
    fn test_inputs_to_commands() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.input_to_command(PlayerInput::Quit),
            Some(Command::Exit)
        );
        assert_eq!(
            handler.input_to_command(PlayerInput::Move(Direction::East)),
            Some(Command::Move(Direction::East))
        );
        assert_eq!(handler.input_to_command(PlayerInput::ShowInventory), None);
        assert_eq!(
            handler.map_key(&KeyPress::new(KeyCode::Escape)),
            Some(PlayerInput::Quit)
        );
        assert_eq!(
            handler.map_key(&KeyPress::new(KeyCode::Period)),
            Some(PlayerInput::Wait)
        );
    }
}
