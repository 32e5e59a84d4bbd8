//! # Scene Management System
//!
//! The frame loop of the macroquad frontend. Each frame renders the game,
//! polls for one key press and, when the key maps to a command, runs one
//! tick. Inventory menus are scenes of their own so the game keeps drawing
//! underneath them while waiting for a letter.

use crate::game::{Command, GameState, PlayerAction};
use crate::input::{InputHandler, KeyPress, PlayerInput};
use crate::rendering::{inventory_menu, MacroquadDisplay};
use crate::utils::SeededDice;
use crate::BurrowResult;
use log::{debug, info};
use macroquad::prelude::*;

/// Width of inventory menus in cells.
const INVENTORY_WIDTH: i32 = 50;

/// Represents the current scene in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneType {
    /// Normal gameplay
    Playing,
    /// Choosing an item to use
    UseMenu,
    /// Choosing an item to drop
    DropMenu,
}

/// The main scene manager that coordinates all game scenes
pub struct SceneManager {
    current_scene: SceneType,
    game_state: GameState,
    display: MacroquadDisplay,
    input_handler: InputHandler,
    dice: SeededDice,
    fullscreen: bool,
}

impl SceneManager {
    /// Creates a scene manager around a generated game.
    pub fn new(
        game_state: GameState,
        input_handler: InputHandler,
        display: MacroquadDisplay,
        dice: SeededDice,
    ) -> Self {
        Self {
            current_scene: SceneType::Playing,
            game_state,
            display,
            input_handler,
            dice,
            fullscreen: false,
        }
    }

    /// Runs the main scene loop until the game exits
    pub async fn run(&mut self) -> BurrowResult<()> {
        loop {
            self.render();
            if let Some(key) = self.input_handler.read_key() {
                if let Some(command) = self.handle_key(&key) {
                    if self.apply(command)? == PlayerAction::Exit {
                        break;
                    }
                }
            }
            next_frame().await;
        }
        info!(
            "Leaving after {} turns ({:?})",
            self.game_state.turn_number, self.game_state.completion_state
        );
        Ok(())
    }

    fn render(&self) {
        let mouse = self.display.mouse_cell();
        self.display.render(&self.game_state, mouse);

        let header = match self.current_scene {
            SceneType::Playing => return,
            SceneType::UseMenu => "Press the key next to an item to use it, or any other to cancel.",
            SceneType::DropMenu => "Press the key next to an item to drop it, or any other to cancel.",
        };
        if let Ok(menu) = inventory_menu(&self.game_state, header) {
            self.display.render_menu(&menu, INVENTORY_WIDTH);
        }
    }

    /// Turns a key into a command for the current scene.
    fn handle_key(&mut self, key: &KeyPress) -> Option<Command> {
        match self.current_scene {
            SceneType::Playing => {
                let input = self.input_handler.map_key(key)?;
                match input {
                    PlayerInput::ShowInventory if self.game_state.is_playing() => {
                        self.current_scene = SceneType::UseMenu;
                        None
                    }
                    PlayerInput::DropItem if self.game_state.is_playing() => {
                        self.current_scene = SceneType::DropMenu;
                        None
                    }
                    other => self.input_handler.input_to_command(other),
                }
            }
            SceneType::UseMenu | SceneType::DropMenu => {
                let scene = self.current_scene;
                self.current_scene = SceneType::Playing;
                let index = self.menu_choice(key);
                debug!("Menu {:?} closed with {:?}", scene, index);
                Some(match (scene, index) {
                    (SceneType::UseMenu, Some(index)) => Command::UseItem(index),
                    (SceneType::DropMenu, Some(index)) => Command::DropItem(index),
                    _ => Command::Nothing,
                })
            }
        }
    }

    /// Inventory slot picked by a key, ignoring the empty-inventory line.
    fn menu_choice(&self, key: &KeyPress) -> Option<usize> {
        let character = key.character?;
        let menu = inventory_menu(&self.game_state, "").ok()?;
        menu.select(character)
            .filter(|index| *index < self.game_state.inventory().len())
    }

    fn apply(&mut self, command: Command) -> BurrowResult<PlayerAction> {
        if command == Command::ToggleFullscreen {
            self.fullscreen = !self.fullscreen;
            set_fullscreen(self.fullscreen);
        }
        self.game_state.tick(command, &mut self.dice)
    }
}
