//! # Turn Loop
//!
//! One tick resolves one player command and, when the command used up the
//! player's turn, lets every monster act once in draw order.

use crate::game::{Direction, GameState, PickUpResult, UseResult};
use crate::utils::Dice;
use crate::BurrowResult;
use log::{debug, info, warn};

/// A player request, already decoded from input and menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the game
    Exit,
    /// Switch between windowed and fullscreen
    ToggleFullscreen,
    /// Step in a direction, attacking whatever fighter stands there
    Move(Direction),
    /// Pass the turn
    Wait,
    /// Pick up the item under the player
    PickUp,
    /// Use the inventory item at this slot
    UseItem(usize),
    /// Drop the inventory item at this slot
    DropItem(usize),
    /// Nothing chosen, e.g. a menu closed without a selection
    Nothing,
}

/// What a command did to the flow of turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Monsters get to act
    TookTurn,
    /// Waiting for another command
    DidntTakeTurn,
    /// The loop should stop
    Exit,
}

impl GameState {
    /// Runs one tick of the game.
    ///
    /// Exit is honoured in every state. Other commands only act while the
    /// game is being played.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{Command, GameState, GenerationConfig, PlayerAction, SeededDice};
    ///
    /// let config = GenerationConfig::new(42);
    /// let mut dice = SeededDice::new(config.seed);
    /// let mut state = GameState::new_game(&config, &mut dice).unwrap();
    ///
    /// assert_eq!(state.tick(Command::Wait, &mut dice).unwrap(), PlayerAction::TookTurn);
    /// assert_eq!(state.turn_number, 1);
    /// assert_eq!(state.tick(Command::Exit, &mut dice).unwrap(), PlayerAction::Exit);
    /// ```
    pub fn tick(&mut self, command: Command, dice: &mut dyn Dice) -> BurrowResult<PlayerAction> {
        if command == Command::Exit {
            info!("Exit requested on turn {}", self.turn_number);
            return Ok(PlayerAction::Exit);
        }
        if !self.is_playing() {
            return Ok(PlayerAction::DidntTakeTurn);
        }

        let action = self.resolve_command(command)?;
        self.refresh_fov();

        if action == PlayerAction::TookTurn {
            self.turn_number += 1;
            self.run_monster_turns(dice)?;
        }
        Ok(action)
    }

    fn resolve_command(&mut self, command: Command) -> BurrowResult<PlayerAction> {
        let action = match command {
            Command::Exit => PlayerAction::Exit,
            Command::ToggleFullscreen | Command::Nothing => PlayerAction::DidntTakeTurn,
            Command::Move(direction) => {
                self.player_move_or_attack(direction)?;
                PlayerAction::TookTurn
            }
            Command::Wait => PlayerAction::TookTurn,
            Command::PickUp => match self.item_under_player() {
                Some(id) => match self.pick_up(id)? {
                    PickUpResult::PickedUp => PlayerAction::TookTurn,
                    PickUpResult::InventoryFull => PlayerAction::DidntTakeTurn,
                },
                None => PlayerAction::DidntTakeTurn,
            },
            Command::UseItem(index) => {
                if index >= self.inventory.len() {
                    warn!("No inventory slot {} to use", index);
                    PlayerAction::DidntTakeTurn
                } else {
                    match self.use_item(index)? {
                        UseResult::UsedUp => PlayerAction::TookTurn,
                        UseResult::Cancelled => PlayerAction::DidntTakeTurn,
                    }
                }
            }
            Command::DropItem(index) => {
                if index >= self.inventory.len() {
                    warn!("No inventory slot {} to drop", index);
                    PlayerAction::DidntTakeTurn
                } else {
                    self.drop_item(index)?;
                    PlayerAction::TookTurn
                }
            }
        };
        Ok(action)
    }

    /// Steps the player, or attacks the fighter standing in the way.
    ///
    /// Bumping into a wall still counts as the player's move.
    pub fn player_move_or_attack(&mut self, direction: Direction) -> BurrowResult<()> {
        let delta = direction.to_delta();
        let player = self.player_id;
        let destination = self.player()?.position + delta;

        match self.fighter_at(destination) {
            Some(target) => {
                self.attack(player, target)?;
            }
            None => {
                if !self.move_by(player, delta.x, delta.y)? {
                    debug!("Player bumped into {:?}", destination);
                }
            }
        }
        Ok(())
    }

    /// Gives every entity with an AI one turn, in draw order.
    pub fn run_monster_turns(&mut self, dice: &mut dyn Dice) -> BurrowResult<()> {
        if !self.is_playing() {
            return Ok(());
        }
        for id in self.entity_ids() {
            if self.entity(id).map_or(false, |entity| entity.ai.is_some()) {
                self.take_ai_turn(id, dice)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Entity, GameCompletionState, Position};
    use crate::utils::ScriptedDice;

    fn arena() -> GameState {
        let mut state = GameState::new(20, 20);
        for y in 1..19 {
            for x in 1..19 {
                state.map.carve(Position::new(x, y));
            }
        }
        state.sync_fov();
        let player = state.player_id;
        state.set_position(player, Position::new(5, 5)).unwrap();
        state.refresh_fov();
        state
    }

    #[test]
    fn test_move_takes_turn_and_recomputes_fov() {
        let mut state = arena();
        let mut dice = ScriptedDice::default();

        let action = state.tick(Command::Move(Direction::East), &mut dice).unwrap();
        assert_eq!(action, PlayerAction::TookTurn);
        assert_eq!(state.player().unwrap().position, Position::new(6, 5));
        assert!(!state.needs_fov_recompute());
        assert!(state.is_in_fov(Position::new(16, 5)));
        assert_eq!(state.turn_number, 1);
    }

    #[test]
    fn test_moving_into_monster_attacks() {
        let mut state = arena();
        let orc = state.add_entity(Entity::orc(Position::new(6, 5)));
        let mut dice = ScriptedDice::default();

        state.tick(Command::Move(Direction::East), &mut dice).unwrap();
        assert_eq!(state.player().unwrap().position, Position::new(5, 5));
        // 5 from the player, then the orc strikes back for 1
        assert_eq!(state.entity(orc).unwrap().fighter.unwrap().hp, 5);
        assert_eq!(state.player_hp(), (29, 30));
    }

    #[test]
    fn test_menu_without_selection_gives_monsters_nothing() {
        let mut state = arena();
        let orc = state.add_entity(Entity::orc(Position::new(9, 5)));
        let mut dice = ScriptedDice::default();

        let action = state.tick(Command::Nothing, &mut dice).unwrap();
        assert_eq!(action, PlayerAction::DidntTakeTurn);
        assert_eq!(state.entity(orc).unwrap().position, Position::new(9, 5));
        assert_eq!(state.turn_number, 0);

        let action = state.tick(Command::UseItem(3), &mut dice).unwrap();
        assert_eq!(action, PlayerAction::DidntTakeTurn);
    }

    #[test]
    fn test_monsters_act_in_draw_order() {
        let mut state = arena();
        let first = state.add_entity(Entity::orc(Position::new(8, 5)));
        let second = state.add_entity(Entity::orc(Position::new(9, 5)));
        let mut dice = ScriptedDice::default();

        state.tick(Command::Wait, &mut dice).unwrap();
        assert_eq!(state.entity(first).unwrap().position, Position::new(7, 5));
        assert_eq!(state.entity(second).unwrap().position, Position::new(8, 5));
    }

    #[test]
    fn test_pick_up_and_drop_take_turns() {
        let mut state = arena();
        state.add_entity(Entity::healing_potion(Position::new(5, 5)));
        let mut dice = ScriptedDice::default();

        assert_eq!(
            state.tick(Command::PickUp, &mut dice).unwrap(),
            PlayerAction::TookTurn
        );
        assert_eq!(state.inventory().len(), 1);
        assert_eq!(
            state.tick(Command::PickUp, &mut dice).unwrap(),
            PlayerAction::DidntTakeTurn
        );
        assert_eq!(
            state.tick(Command::DropItem(0), &mut dice).unwrap(),
            PlayerAction::TookTurn
        );
        assert!(state.inventory().is_empty());
        assert_eq!(state.turn_number, 2);
    }

    #[test]
    fn test_dead_player_can_only_exit() {
        let mut state = arena();
        let player = state.player_id;
        state.take_damage(player, 1000).unwrap();
        assert_eq!(state.completion_state, GameCompletionState::Dead);
        let mut dice = ScriptedDice::default();

        assert_eq!(
            state.tick(Command::Move(Direction::North), &mut dice).unwrap(),
            PlayerAction::DidntTakeTurn
        );
        assert_eq!(state.player().unwrap().position, Position::new(5, 5));
        assert_eq!(
            state.tick(Command::Exit, &mut dice).unwrap(),
            PlayerAction::Exit
        );
    }

    #[test]
    fn test_fullscreen_toggle_is_free() {
        let mut state = arena();
        let mut dice = ScriptedDice::default();
        assert_eq!(
            state.tick(Command::ToggleFullscreen, &mut dice).unwrap(),
            PlayerAction::DidntTakeTurn
        );
        assert_eq!(state.turn_number, 0);
    }
}
