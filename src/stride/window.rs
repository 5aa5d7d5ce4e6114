//! Build windows in wall coordinates

use serde::Serialize;
use std::fmt;

/// Rectangular region of the wall worked in one build session
///
/// Horizontal values are quarter units, vertical values are course indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Stride {
    /// Left edge of the window
    pub origin_x: usize,
    /// Lowest course of the window
    pub origin_y: usize,
    /// Window width in quarter units
    pub width: usize,
    /// Window height in courses
    pub height: usize,
}

impl Stride {
    /// Create a stride from origin and extent
    pub const fn new(origin_x: usize, origin_y: usize, width: usize, height: usize) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    /// Right edge of the window (exclusive bound for brick spans)
    ///
    /// Saturates, so an oversized window reaches the end of any wall.
    pub const fn right(&self) -> usize {
        self.origin_x.saturating_add(self.width)
    }

    /// One past the highest course of the window, saturating like `right`
    pub const fn top(&self) -> usize {
        self.origin_y.saturating_add(self.height)
    }

    /// Whether a brick spanning `left..right` lies entirely inside the window
    pub const fn contains_span(&self, left: usize, right: usize) -> bool {
        left >= self.origin_x && right <= self.right()
    }

    /// Same window moved to another origin
    #[must_use]
    pub const fn at(self, origin_x: usize, origin_y: usize) -> Self {
        Self::new(origin_x, origin_y, self.width, self.height)
    }
}

impl fmt::Display for Stride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stride at ({}, {}) spanning {}x{}",
            self.origin_x, self.origin_y, self.width, self.height
        )
    }
}
