//! Stretcher bond: running courses offset by half a brick

use crate::bond::brick::{BrickWidth, Row, fill_largest_first, push_widths};
use crate::bond::layout::validate_dimensions;
use crate::io::error::Result;

/// Generate a stretcher bond layout
///
/// Even courses are laid largest-first; odd courses open with a half brick,
/// which shifts every head joint by half a brick against the course below.
///
/// # Errors
///
/// Returns `InvalidDimensions` if the width is not a positive number of half
/// bricks or the height is zero.
pub fn stretcher_bond(width: usize, height: usize) -> Result<Vec<Row>> {
    validate_dimensions(width, height)?;
    Ok((0..height).map(|row| course(row, width)).collect())
}

fn course(index: usize, width: usize) -> Row {
    let mut row = Row::new();
    let mut remaining = width;
    if index % 2 == 1 {
        push_widths(&mut row, &[BrickWidth::Half]);
        remaining -= BrickWidth::Half.units();
    }
    fill_largest_first(&mut row, remaining);
    row
}
