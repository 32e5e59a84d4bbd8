//! Shared fixtures for integration tests.

use burrow::{GameState, Position};

/// Open room with a one-tile wall border and the player at `player`.
pub fn arena(width: i32, height: i32, player: Position) -> GameState {
    let mut state = GameState::new(width, height);
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            state.map.carve(Position::new(x, y));
        }
    }
    state.sync_fov();
    let player_id = state.player_id;
    state
        .set_position(player_id, player)
        .expect("player exists");
    state.refresh_fov();
    state
}
