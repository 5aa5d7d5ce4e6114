//! Raster and PNG rendering of a wall

use crate::io::configuration::{
    RENDER_COURSE_PIXELS, RENDER_MORTAR_PIXELS, RENDER_QUARTER_PIXELS,
};
use crate::io::error::{Result, WallError};
use crate::wall::state::Wall;
use image::{Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

const MORTAR: Rgba<u8> = Rgba([214, 208, 196, 255]);
const UNLAID: Rgba<u8> = Rgba([238, 234, 226, 255]);
const LAID_WITHOUT_STRIDE: Rgba<u8> = Rgba([178, 74, 52, 255]);

// Consecutive strides cycle through these so neighbouring windows stay distinguishable
const STRIDE_PALETTE: [[u8; 4]; 8] = [
    [178, 74, 52, 255],
    [196, 120, 64, 255],
    [142, 60, 48, 255],
    [204, 150, 96, 255],
    [120, 84, 70, 255],
    [168, 98, 80, 255],
    [210, 128, 100, 255],
    [150, 110, 60, 255],
];

/// Colour used for bricks laid by a stride
pub fn stride_color(stride: u32) -> Rgba<u8> {
    let index = stride.saturating_sub(1) as usize % STRIDE_PALETTE.len();
    Rgba(STRIDE_PALETTE.get(index).copied().unwrap_or([0, 0, 0, 255]))
}

/// One cell per quarter unit per course, top course first
///
/// 0 marks an unlaid brick, 1 a brick laid outside any stride and `s + 1` a
/// brick laid by stride `s`.
pub fn raster(wall: &Wall) -> Array2<u32> {
    let height = wall.height();
    let mut cells = Array2::zeros((height, wall.width()));

    for (row, bricks) in wall.rows().enumerate() {
        let line = height - 1 - row;
        let mut left = 0;
        for brick in bricks {
            let right = left + brick.width.units();
            let value = match (brick.placed, brick.stride) {
                (false, _) => 0,
                (true, None) => 1,
                (true, Some(stride)) => stride + 1,
            };
            for x in left..right {
                if let Some(cell) = cells.get_mut([line, x]) {
                    *cell = value;
                }
            }
            left = right;
        }
    }

    cells
}

/// Colour of a raster cell
pub fn cell_color(cell: u32) -> Rgba<u8> {
    match cell {
        0 => UNLAID,
        1 => LAID_WITHOUT_STRIDE,
        stride => stride_color(stride - 1),
    }
}

/// Draw the wall with mortar gaps, coloured by stride
pub fn render_wall(wall: &Wall) -> RgbaImage {
    let cells = raster(wall);
    let height = wall.height();
    let mut img = RgbaImage::from_pixel(
        wall.width() as u32 * RENDER_QUARTER_PIXELS,
        height as u32 * RENDER_COURSE_PIXELS,
        MORTAR,
    );

    for (row, bricks) in wall.rows().enumerate() {
        let line = height - 1 - row;
        let top = line as u32 * RENDER_COURSE_PIXELS;
        let mut units = 0;
        for brick in bricks {
            let color = cells.get([line, units]).copied().map_or(UNLAID, cell_color);
            let left = units as u32 * RENDER_QUARTER_PIXELS;
            let span = brick.width.units() as u32 * RENDER_QUARTER_PIXELS;

            let x_end = (left + span).saturating_sub(RENDER_MORTAR_PIXELS);
            let y_end = (top + RENDER_COURSE_PIXELS).saturating_sub(RENDER_MORTAR_PIXELS);
            for y in top..y_end {
                for x in left..x_end {
                    img.put_pixel(x, y, color);
                }
            }
            units += brick.width.units();
        }
    }

    img
}

/// Create the parent directory of an output path
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be created.
pub fn ensure_parent(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| WallError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

/// Export the wall as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_wall_as_png(wall: &Wall, output_path: &Path) -> Result<()> {
    ensure_parent(output_path)?;
    render_wall(wall)
        .save(output_path)
        .map_err(|e| WallError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
