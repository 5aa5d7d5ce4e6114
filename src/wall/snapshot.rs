//! Placement-only snapshots for cheap probe and restore

use crate::io::error::{Result, invalid_parameter};
use crate::wall::state::Wall;
use bitvec::prelude::*;

/// Placement flags and stride labels of a wall, in row-major order
///
/// Geometry is never captured; a snapshot only restores onto a wall with the
/// same brick count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementSnapshot {
    placed: BitVec,
    strides: Vec<Option<u32>>,
    current_stride: u32,
}

impl PlacementSnapshot {
    /// Number of laid bricks recorded
    pub fn placed_count(&self) -> usize {
        self.placed.count_ones()
    }

    /// Number of bricks recorded
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Whether the snapshot records no bricks
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Stride counter at capture time
    pub const fn current_stride(&self) -> u32 {
        self.current_stride
    }
}

impl Wall {
    /// Capture placement state
    pub fn snapshot(&self) -> PlacementSnapshot {
        let count = self.brick_count();
        let mut placed = BitVec::with_capacity(count);
        let mut strides = Vec::with_capacity(count);

        for brick in self.rows().flat_map(|row| row.iter()) {
            placed.push(brick.placed);
            strides.push(brick.stride);
        }

        PlacementSnapshot {
            placed,
            strides,
            current_stride: self.current_stride,
        }
    }

    /// Restore placement state captured from this wall or an identical layout
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the snapshot's brick count differs.
    pub fn restore(&mut self, snapshot: &PlacementSnapshot) -> Result<()> {
        if snapshot.len() != self.brick_count() {
            return Err(invalid_parameter(
                "snapshot",
                &snapshot.len(),
                &format!("wall has {} bricks", self.brick_count()),
            ));
        }

        let bricks = self
            .courses
            .iter_mut()
            .flat_map(|course| course.bricks.iter_mut());
        for ((brick, placed), stride) in bricks
            .zip(snapshot.placed.iter().by_vals())
            .zip(snapshot.strides.iter().copied())
        {
            brick.placed = placed;
            brick.stride = stride;
        }
        self.current_stride = snapshot.current_stride;
        Ok(())
    }
}
