//! Brick placement traversals
//!
//! Each traversal is a cursor that lays one brick per call against a wall it
//! borrows only for that call, so a driver can keep the cursor alongside the
//! wall between steps. The iterator adapters bind a cursor to a wall for
//! batch use.

use crate::bond::brick::Brick;
use crate::stride::window::Stride;
use crate::wall::state::Wall;
use serde::Serialize;

/// A brick laid by a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Course index
    pub row: usize,
    /// Brick index within the course
    pub col: usize,
    /// Brick state after placement
    pub brick: Brick,
}

/// Row-major, bottom-up cursor that ignores the support rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequentialCursor {
    row: usize,
    col: usize,
}

impl SequentialCursor {
    /// Cursor positioned at the first brick of course 0
    pub const fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Lay the next unlaid brick, or `None` once the wall is exhausted
    pub fn next_placement(&mut self, wall: &mut Wall) -> Option<Placement> {
        while let Some(course) = wall.courses.get_mut(self.row) {
            while let Some(brick) = course.bricks.get_mut(self.col) {
                let col = self.col;
                self.col += 1;
                if !brick.placed {
                    brick.placed = true;
                    return Some(Placement {
                        row: self.row,
                        col,
                        brick: *brick,
                    });
                }
            }
            self.row += 1;
            self.col = 0;
        }
        None
    }
}

/// Cursor laying every supported brick inside one stride
///
/// Support is evaluated when a brick is reached, so bricks laid earlier in
/// the same pass can support bricks in later courses of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrideCursor {
    stride: Stride,
    id: u32,
    row: usize,
    col: usize,
}

impl StrideCursor {
    /// Start a stride traversal, claiming the next stride id from the wall
    pub fn begin(wall: &mut Wall, stride: Stride) -> Self {
        let id = wall.begin_stride();
        log::debug!("stride {id}: {stride}");
        Self {
            stride,
            id,
            row: stride.origin_y,
            col: 0,
        }
    }

    /// The window being worked
    pub const fn stride(&self) -> Stride {
        self.stride
    }

    /// Id stamped on bricks laid by this traversal
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Lay the next placeable brick in the window, or `None` once the window is exhausted
    pub fn next_placement(&mut self, wall: &mut Wall) -> Option<Placement> {
        let top = self.stride.top().min(wall.height());

        while self.row < top {
            let Some(course) = wall.courses.get(self.row) else {
                break;
            };
            let len = course.bricks.len();

            while self.col < len {
                let col = self.col;
                self.col += 1;

                let inside = wall
                    .courses
                    .get(self.row)
                    .and_then(|course| course.span(col))
                    .is_some_and(|(left, right)| self.stride.contains_span(left, right));
                if !inside || !wall.is_supported(self.row, col) {
                    continue;
                }

                let brick = wall
                    .courses
                    .get_mut(self.row)
                    .and_then(|course| course.bricks.get_mut(col))?;
                brick.placed = true;
                brick.stride = Some(self.id);
                return Some(Placement {
                    row: self.row,
                    col,
                    brick: *brick,
                });
            }

            self.row += 1;
            self.col = 0;
        }
        None
    }
}

/// Iterator laying bricks left to right, bottom to top
pub struct LeftToRight<'w> {
    wall: &'w mut Wall,
    cursor: SequentialCursor,
}

impl Iterator for LeftToRight<'_> {
    type Item = Placement;

    fn next(&mut self) -> Option<Placement> {
        self.cursor.next_placement(self.wall)
    }
}

/// Iterator laying the placeable bricks of one stride
pub struct StridePlacement<'w> {
    wall: &'w mut Wall,
    cursor: StrideCursor,
}

impl StridePlacement<'_> {
    /// Id stamped on bricks laid by this traversal
    pub const fn id(&self) -> u32 {
        self.cursor.id()
    }
}

impl Iterator for StridePlacement<'_> {
    type Item = Placement;

    fn next(&mut self) -> Option<Placement> {
        self.cursor.next_placement(self.wall)
    }
}

impl Wall {
    /// Lay every unlaid brick in row-major order, ignoring support
    ///
    /// Lazy: bricks are laid as the iterator is advanced.
    pub const fn place_left_to_right(&mut self) -> LeftToRight<'_> {
        LeftToRight {
            wall: self,
            cursor: SequentialCursor::new(),
        }
    }

    /// Start a new stride and lay its placeable bricks lazily
    ///
    /// The stride counter is incremented immediately, even if the returned
    /// iterator is never advanced.
    pub fn place_for_stride(&mut self, stride: Stride) -> StridePlacement<'_> {
        let cursor = StrideCursor::begin(self, stride);
        StridePlacement { wall: self, cursor }
    }
}
