//! Brick widths, bricks and the largest-first course filler

use serde::{Serialize, Serializer};
use std::fmt;

/// Brick width class in quarter-brick units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum BrickWidth {
    /// Quarter brick (closer)
    Quarter = 1,
    /// Half brick (header face)
    Half = 2,
    /// Full brick (stretcher face)
    #[default]
    Full = 4,
}

impl BrickWidth {
    /// Widths from largest to smallest, the order used when filling a course
    pub const DESCENDING: [Self; 3] = [Self::Full, Self::Half, Self::Quarter];

    /// Width in quarter units
    pub const fn units(self) -> usize {
        self as usize
    }

    /// Largest width that fits into `remaining` quarter units
    pub fn largest_fitting(remaining: usize) -> Option<Self> {
        Self::DESCENDING
            .into_iter()
            .find(|width| width.units() <= remaining)
    }
}

impl fmt::Display for BrickWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Quarter => "quarter",
            Self::Half => "half",
            Self::Full => "full",
        };
        f.write_str(name)
    }
}

impl Serialize for BrickWidth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.units() as u64)
    }
}

/// A single brick of the wall
///
/// Only `placed` and `stride` ever change after the layout is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Brick {
    /// Whether the brick has been laid
    pub placed: bool,
    /// Width class of the brick
    pub width: BrickWidth,
    /// Stride that laid the brick, if any
    pub stride: Option<u32>,
}

impl Brick {
    /// Create an unplaced brick of the given width
    pub const fn new(width: BrickWidth) -> Self {
        Self {
            placed: false,
            width,
            stride: None,
        }
    }

    /// Clear placement state
    pub const fn clear(&mut self) {
        self.placed = false;
        self.stride = None;
    }
}

/// One course of bricks, left to right
pub type Row = Vec<Brick>;

/// Append bricks from a width sequence
pub fn push_widths(row: &mut Row, widths: &[BrickWidth]) {
    row.extend(widths.iter().copied().map(Brick::new));
}

/// Fill `remaining` quarter units with the largest bricks that fit
pub fn fill_largest_first(row: &mut Row, mut remaining: usize) {
    while let Some(width) = BrickWidth::largest_fitting(remaining) {
        row.push(Brick::new(width));
        remaining -= width.units();
    }
}

/// Total width of a course in quarter units
pub fn row_width(row: &[Brick]) -> usize {
    row.iter().map(|brick| brick.width.units()).sum()
}

/// Interior head joint positions of a course
///
/// The wall ends are not joints, so the final cumulative width is excluded.
pub fn head_joints(row: &[Brick]) -> Vec<usize> {
    let total = row_width(row);
    row.iter()
        .scan(0, |edge, brick| {
            *edge += brick.width.units();
            Some(*edge)
        })
        .filter(|&edge| edge < total)
        .collect()
}
