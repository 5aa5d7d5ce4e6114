//! Exhaustive search for the next build window
//!
//! The window's lowest course is fixed at the first unfinished course; every
//! horizontal origin is probed by running a stride traversal on a scratch
//! copy of the wall. The scratch copy is rewound from a placement snapshot
//! between probes, so the caller's wall is never touched.

use crate::io::error::{Result, WallError, invalid_parameter};
use crate::stride::window::Stride;
use crate::wall::state::Wall;

/// Outcome of a stride search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrideSearch {
    /// Best window found
    pub stride: Stride,
    /// Bricks the best window lays
    pub placeable: usize,
    /// Origins probed before the search finished or was aborted
    pub probes: usize,
}

/// Find the stride laying the most bricks
///
/// Ties go to the smallest `origin_x`.
///
/// # Errors
///
/// Returns `WallComplete` if every brick is laid and `InvalidParameter` if
/// either stride extent is zero.
pub fn find_best_stride(wall: &Wall, stride_width: usize, stride_height: usize) -> Result<Stride> {
    search_strides(wall, stride_width, stride_height, |_| true).map(|search| search.stride)
}

/// Probe every origin from the left wall end to the right wall end
///
/// `keep_going` is polled with each origin before it is probed; returning
/// `false` stops the search and keeps the best window found so far.
///
/// # Errors
///
/// Returns `WallComplete` if every brick is laid and `InvalidParameter` if
/// either stride extent is zero.
pub fn search_strides(
    wall: &Wall,
    stride_width: usize,
    stride_height: usize,
    mut keep_going: impl FnMut(usize) -> bool,
) -> Result<StrideSearch> {
    if stride_width == 0 {
        return Err(invalid_parameter(
            "stride_width",
            &stride_width,
            &"must be positive",
        ));
    }
    if stride_height == 0 {
        return Err(invalid_parameter(
            "stride_height",
            &stride_height,
            &"must be positive",
        ));
    }

    let origin_y = wall.first_unfinished_row().ok_or(WallError::WallComplete)?;
    let window = Stride::new(0, origin_y, stride_width, stride_height);

    let mut scratch = wall.clone();
    let baseline = scratch.snapshot();

    let mut best = StrideSearch {
        stride: window,
        placeable: 0,
        probes: 0,
    };

    for origin_x in 0..=wall.width() {
        if !keep_going(origin_x) {
            log::debug!("stride search aborted before origin {origin_x}");
            break;
        }

        scratch.restore(&baseline)?;
        let candidate = window.at(origin_x, origin_y);
        let placeable = scratch.place_for_stride(candidate).count();
        best.probes += 1;

        if placeable > best.placeable {
            best.stride = candidate;
            best.placeable = placeable;
        }
    }

    log::debug!(
        "best {} lays {} bricks ({} probes)",
        best.stride,
        best.placeable,
        best.probes
    );
    Ok(best)
}
