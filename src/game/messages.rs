//! Bounded in-game message log.

use macroquad::color::Color;
use std::collections::VecDeque;

/// Ordered `(text, color)` lines with a fixed capacity.
///
/// When full, adding a line evicts the oldest one.
///
/// # Examples
///
/// ```
/// use burrow::MessageLog;
/// use burrow::rendering::palette;
///
/// let mut log = MessageLog::new(2);
/// log.add("one", palette::WHITE);
/// log.add("two", palette::WHITE);
/// log.add("three", palette::RED);
///
/// let texts: Vec<&str> = log.iter().map(|(text, _)| text.as_str()).collect();
/// assert_eq!(texts, ["two", "three"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MessageLog {
    lines: VecDeque<(String, Color)>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a line, trimming from the front to stay within capacity.
    pub fn add<T: Into<String>>(&mut self, text: T, color: Color) {
        self.lines.push_back((text.into(), color));
        while self.lines.len() > self.capacity {
            self.lines.pop_front();
        }
    }

    /// Oldest line first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &(String, Color)> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent line, if any.
    pub fn last(&self) -> Option<&(String, Color)> {
        self.lines.back()
    }
}
