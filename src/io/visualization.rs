//! Build capture and GIF generation

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{Result, WallError, invalid_parameter};
use crate::io::image::{ensure_parent, render_wall};
use crate::wall::snapshot::PlacementSnapshot;
use crate::wall::state::Wall;
use image::{Delay, Frame};
use std::path::Path;

/// Records the wall's placement state as construction progresses
///
/// Only placement snapshots are stored; frames are rendered against the
/// wall's geometry at export time.
#[derive(Debug, Clone, Default)]
pub struct BuildRecorder {
    frames: Vec<PlacementSnapshot>,
}

impl BuildRecorder {
    /// Create an empty recorder
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Record the current state of the wall
    pub fn capture(&mut self, wall: &Wall) {
        self.frames.push(wall.snapshot());
    }

    /// Number of captured states
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured states as an animated GIF
    ///
    /// Frame delays below what viewers support are raised to the supported
    /// minimum and intermediate frames are skipped to keep the apparent speed.
    /// The last state is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No states were captured
    /// - A captured state does not match the wall
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, wall: &Wall, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_parameter(
                "frames",
                &0,
                &"no build states captured for visualization",
            ));
        }
        if frame_delay_ms == 0 {
            return Err(invalid_parameter(
                "frame_delay_ms",
                &frame_delay_ms,
                &"must be positive",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms).max(1) as usize;

        let frames = self.render_frames(wall, effective_delay_ms, skip_factor)?;

        ensure_parent(output_path)?;
        let file = std::fs::File::create(output_path).map_err(|e| WallError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| WallError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }

    fn render_frames(&self, wall: &Wall, delay_ms: u32, skip_factor: usize) -> Result<Vec<Frame>> {
        let mut scratch = wall.clone();
        let last = self.frames.len() - 1;
        let mut frames = Vec::with_capacity(self.frames.len() / skip_factor + 2);

        for (index, snapshot) in self.frames.iter().enumerate() {
            if index % skip_factor != 0 && index != last {
                continue;
            }
            scratch.restore(snapshot)?;
            let hold = if index == last { delay_ms * 25 } else { delay_ms };
            frames.push(Frame::from_parts(
                render_wall(&scratch),
                0,
                0,
                Delay::from_numer_denom_ms(hold, 1),
            ));
        }

        Ok(frames)
    }
}
