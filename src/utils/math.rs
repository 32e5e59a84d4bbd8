//! # Game Mathematics
//!
//! Small numeric and text helpers shared by AI and messaging.

use crate::game::Position;

/// One grid step from `from` toward `to`.
///
/// The displacement is normalized to a unit vector and each axis is rounded
/// independently, so the result is always in `{-1, 0, 1}²`.
///
/// # Examples
///
/// ```
/// use burrow::Position;
/// use burrow::utils::step_toward;
///
/// assert_eq!(step_toward(Position::new(0, 0), Position::new(10, 0)), (1, 0));
/// assert_eq!(step_toward(Position::new(0, 0), Position::new(5, 5)), (1, 1));
/// assert_eq!(step_toward(Position::new(0, 0), Position::new(-10, 3)), (-1, 0));
/// ```
pub fn step_toward(from: Position, to: Position) -> (i32, i32) {
    let dx = (to.x - from.x) as f64;
    let dy = (to.y - from.y) as f64;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance == 0.0 {
        return (0, 0);
    }
    ((dx / distance).round() as i32, (dy / distance).round() as i32)
}

/// Uppercases the first character, for names starting a sentence.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
