//! # Utilities Module
//!
//! Randomness and small math/text helpers used across the game.

pub mod dice;
pub mod math;

pub use dice::*;
pub use math::*;
