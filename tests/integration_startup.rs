//! Integration tests for starting a game from a configuration.

mod common;

use burrow::{
    BurrowError, BurrowResult, GameState, GenerationConfig, Generator, Position,
    RoomTunnelGenerator, SeededDice,
};
use std::io::Write;

#[test]
fn test_basic_startup() -> BurrowResult<()> {
    let config = GenerationConfig::new(12345);
    let mut dice = SeededDice::new(config.seed);
    let state = GameState::new_game(&config, &mut dice)?;

    assert!(state.is_playing());
    assert_eq!(state.turn_number, 0);
    assert_eq!(state.player_hp(), (30, 30));
    assert!(state.inventory().is_empty());

    let player = state.player()?;
    assert!(!state.map.is_wall(player.position));
    assert!(state.is_in_fov(player.position));
    assert!(state.map.get_tile(player.position).unwrap().explored);

    let (welcome, _) = state.messages.last().unwrap();
    assert!(welcome.starts_with("Welcome stranger!"));
    Ok(())
}

#[test]
fn test_same_seed_same_dungeon() -> BurrowResult<()> {
    let layout = |seed: u64| -> BurrowResult<Vec<(String, Position)>> {
        let config = GenerationConfig::new(seed);
        let mut dice = SeededDice::new(seed);
        let state = GameState::new_game(&config, &mut dice)?;
        Ok(state
            .draw_list()
            .map(|entity| (entity.name.clone(), entity.position))
            .collect())
    };

    assert_eq!(layout(2024)?, layout(2024)?);
    Ok(())
}

#[test]
fn test_player_starts_in_first_room_center() -> BurrowResult<()> {
    for seed in [1, 2, 3, 99, 1000] {
        let config = GenerationConfig::new(seed);
        let mut state = GameState::new(config.map_width, config.map_height);
        let mut dice = SeededDice::new(seed);
        let rooms = RoomTunnelGenerator::new().generate(&mut state, &config, &mut dice)?;

        assert!(!rooms.is_empty());
        assert_eq!(state.player()?.position, rooms[0].center());
        assert!(rooms.len() <= config.max_rooms as usize);
    }
    Ok(())
}

#[test]
fn test_monsters_and_items_are_placed() -> BurrowResult<()> {
    let config = GenerationConfig::new(7);
    let mut dice = SeededDice::new(config.seed);
    let state = GameState::new_game(&config, &mut dice)?;

    let monsters = state.draw_list().filter(|e| e.ai.is_some()).count();
    let items = state.draw_list().filter(|e| e.item.is_some()).count();
    assert!(monsters > 0);
    assert!(items > 0);

    for entity in state.draw_list().filter(|e| e.item.is_some()) {
        assert!(!entity.blocks);
    }
    Ok(())
}

#[test]
fn test_new_game_from_config_file() -> BurrowResult<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{
            "seed": 5,
            "map_width": 50,
            "map_height": 30,
            "room_min_size": 4,
            "room_max_size": 8,
            "max_rooms": 15,
            "max_room_monsters": 1,
            "max_room_items": 1
        }}"#
    )?;

    let config = GenerationConfig::from_json_file(file.path())?;
    assert_eq!(config.map_width, 50);
    let mut dice = SeededDice::new(config.seed);
    let state = GameState::new_game(&config, &mut dice)?;
    assert_eq!(state.map.width, 50);
    assert_eq!(state.map.height, 30);
    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() {
    let mut config = GenerationConfig::new(1);
    config.room_min_size = 10;
    config.room_max_size = 6;
    let mut dice = SeededDice::new(1);

    let result = GameState::new_game(&config, &mut dice);
    assert!(matches!(result, Err(BurrowError::InvalidConfiguration(_))));
}

#[test]
fn test_fixture_arena_is_visible() {
    let state = common::arena(12, 12, Position::new(6, 6));
    assert!(state.is_in_fov(Position::new(1, 1)));
    assert!(!state.is_blocked(Position::new(10, 10)));
}
