//! English bond: alternating stretcher and header courses

use crate::bond::brick::{Brick, BrickWidth, Row, fill_largest_first};
use crate::bond::layout::validate_dimensions;
use crate::io::error::Result;

/// Generate an English bond layout
///
/// Even courses are stretchers laid largest-first. Odd courses are headers:
/// a quarter closer, then half bricks while a half still fits.
///
/// # Errors
///
/// Returns `InvalidDimensions` if the width is not a positive number of half
/// bricks or the height is zero.
pub fn english_bond(width: usize, height: usize) -> Result<Vec<Row>> {
    validate_dimensions(width, height)?;
    Ok((0..height)
        .map(|row| {
            if row % 2 == 0 {
                stretcher_course(width)
            } else {
                header_course(width)
            }
        })
        .collect())
}

fn stretcher_course(width: usize) -> Row {
    let mut row = Row::new();
    fill_largest_first(&mut row, width);
    row
}

fn header_course(width: usize) -> Row {
    let mut row = vec![Brick::new(BrickWidth::Quarter)];
    let mut remaining = width - BrickWidth::Quarter.units();

    while remaining >= BrickWidth::Half.units() {
        row.push(Brick::new(BrickWidth::Half));
        remaining -= BrickWidth::Half.units();
    }

    fill_largest_first(&mut row, remaining);
    row
}
