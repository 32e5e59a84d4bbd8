//! # Field of View
//!
//! The simulation only asks three questions of the visibility collaborator:
//! seed a cell, recompute from an origin, and test a cell. [`ShadowcastFov`]
//! answers them with recursive shadowcasting over eight octants.

use crate::game::Position;
use std::fmt::Debug;

/// Visibility collaborator seeded from the tile grid.
pub trait FieldOfView: Debug {
    /// Records whether light passes through a cell and whether it can be walked on.
    fn set_properties(&mut self, pos: Position, transparent: bool, walkable: bool);

    /// Recomputes the visible set from `origin`.
    ///
    /// A `radius` of zero or less means unlimited range.
    fn compute_fov(&mut self, origin: Position, radius: i32, light_walls: bool);

    /// Whether `pos` was visible at the last recompute.
    fn is_in_fov(&self, pos: Position) -> bool;
}

/// Recursive shadowcasting over a fixed-size grid.
///
/// # Examples
///
/// ```
/// use burrow::{FieldOfView, Position, ShadowcastFov};
///
/// let mut fov = ShadowcastFov::new(10, 10);
/// for y in 0..10 {
///     for x in 0..10 {
///         fov.set_properties(Position::new(x, y), true, true);
///     }
/// }
/// fov.compute_fov(Position::new(5, 5), 3, true);
/// assert!(fov.is_in_fov(Position::new(5, 2)));
/// assert!(!fov.is_in_fov(Position::new(5, 1)));
/// ```
#[derive(Debug, Clone)]
pub struct ShadowcastFov {
    width: i32,
    height: i32,
    transparent: Vec<bool>,
    walkable: Vec<bool>,
    visible: Vec<bool>,
}

#[derive(Clone, Copy)]
struct Slope {
    y: i32,
    x: i32,
}

impl Slope {
    fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    fn greater_or_equal(&self, other: &Slope) -> bool {
        self.y * other.x >= other.y * self.x
    }

    fn greater_than(&self, other: &Slope) -> bool {
        self.y * other.x > other.y * self.x
    }
}

fn transform_octant(origin: Position, col: i32, row: i32, octant: u8) -> Position {
    match octant {
        0 => Position::new(origin.x + col, origin.y - row),
        1 => Position::new(origin.x + row, origin.y - col),
        2 => Position::new(origin.x - row, origin.y - col),
        3 => Position::new(origin.x - col, origin.y - row),
        4 => Position::new(origin.x - col, origin.y + row),
        5 => Position::new(origin.x - row, origin.y + col),
        6 => Position::new(origin.x + row, origin.y + col),
        7 => Position::new(origin.x + col, origin.y + row),
        _ => origin,
    }
}

impl ShadowcastFov {
    /// Creates a grid where every cell is opaque and nothing is visible.
    pub fn new(width: i32, height: i32) -> Self {
        let cells = (width.max(0) * height.max(0)) as usize;
        Self {
            width,
            height,
            transparent: vec![false; cells],
            walkable: vec![false; cells],
            visible: vec![false; cells],
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height {
            Some((pos.y * self.width + pos.x) as usize)
        } else {
            None
        }
    }

    fn is_transparent(&self, pos: Position) -> bool {
        self.index(pos).map_or(false, |i| self.transparent[i])
    }

    /// Whether the cell was seeded as walkable.
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.index(pos).map_or(false, |i| self.walkable[i])
    }

    fn mark_visible(&mut self, pos: Position) {
        if let Some(i) = self.index(pos) {
            self.visible[i] = true;
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn scan_octant(
        &mut self,
        origin: Position,
        radius: i32,
        light_walls: bool,
        col: i32,
        start: Slope,
        end: Slope,
        octant: u8,
    ) {
        if radius > 0 && col > radius {
            return;
        }
        if col > self.width.max(self.height) {
            return;
        }

        let mut blocked = false;
        let mut cur_start = start;
        for row in (0..=col).rev() {
            let top = Slope::new(2 * row + 1, 2 * col - 1);
            let bot = Slope::new(2 * row - 1, 2 * col + 1);
            if !(cur_start.greater_or_equal(&bot) && top.greater_than(&end)) {
                continue;
            }

            let pos = transform_octant(origin, col, row, octant);
            let opaque = !self.is_transparent(pos);
            let in_range = radius <= 0 || col * col + row * row <= radius * radius;
            if in_range && (light_walls || !opaque) {
                self.mark_visible(pos);
            }

            if opaque {
                if !blocked {
                    self.scan_octant(origin, radius, light_walls, col + 1, cur_start, top, octant);
                    blocked = true;
                }
                cur_start = bot;
            } else if blocked {
                blocked = false;
            }
        }

        if !blocked {
            self.scan_octant(origin, radius, light_walls, col + 1, cur_start, end, octant);
        }
    }
}

impl FieldOfView for ShadowcastFov {
    fn set_properties(&mut self, pos: Position, transparent: bool, walkable: bool) {
        if let Some(i) = self.index(pos) {
            self.transparent[i] = transparent;
            self.walkable[i] = walkable;
        }
    }

    fn compute_fov(&mut self, origin: Position, radius: i32, light_walls: bool) {
        self.visible.iter_mut().for_each(|cell| *cell = false);
        self.mark_visible(origin);
        for octant in 0..8 {
            self.scan_octant(
                origin,
                radius,
                light_walls,
                1,
                Slope::new(1, 1),
                Slope::new(0, 1),
                octant,
            );
        }
    }

    fn is_in_fov(&self, pos: Position) -> bool {
        self.index(pos).map_or(false, |i| self.visible[i])
    }
}
