//! Flemish bond: stretchers and headers alternating within each course

use crate::bond::brick::{BrickWidth, Row, fill_largest_first, push_widths};
use crate::bond::layout::validate_dimensions;
use crate::io::error::Result;

const EVEN_UNIT: [BrickWidth; 2] = [BrickWidth::Full, BrickWidth::Half];
const ODD_UNIT: [BrickWidth; 2] = [BrickWidth::Half, BrickWidth::Full];
const UNIT_WIDTH: usize = BrickWidth::Full.units() + BrickWidth::Half.units();

/// Generate a Flemish bond layout
///
/// Even courses repeat full + half, odd courses open with a quarter closer and
/// repeat half + full. Whatever is left after the last whole unit is filled
/// largest-first.
///
/// # Errors
///
/// Returns `InvalidDimensions` if the width is not a positive number of half
/// bricks or the height is zero.
pub fn flemish_bond(width: usize, height: usize) -> Result<Vec<Row>> {
    validate_dimensions(width, height)?;
    Ok((0..height).map(|row| course(row, width)).collect())
}

fn course(index: usize, width: usize) -> Row {
    let mut row = Row::new();
    let mut remaining = width;
    let unit = if index % 2 == 0 {
        EVEN_UNIT
    } else {
        push_widths(&mut row, &[BrickWidth::Quarter]);
        remaining -= BrickWidth::Quarter.units();
        ODD_UNIT
    };

    while remaining >= UNIT_WIDTH {
        push_widths(&mut row, &unit);
        remaining -= UNIT_WIDTH;
    }

    fill_largest_first(&mut row, remaining);
    row
}
