//! Terminal progress display for a wall build

use crate::build::session::Step;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} bricks {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the bricks of one wall
///
/// Hidden when constructed quiet, so callers never branch on visibility.
pub struct BuildProgress {
    bar: ProgressBar,
    last_stride: Option<u32>,
}

impl BuildProgress {
    /// Create a progress bar for `total` bricks
    pub fn new(total: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(PROGRESS_STYLE.clone());
            bar
        };
        Self {
            bar,
            last_stride: None,
        }
    }

    /// Report a laid brick
    pub fn record(&mut self, step: &Step) {
        self.bar.set_position(step.number as u64);

        let stride = step.placement.brick.stride;
        if stride != self.last_stride {
            if let (Some(id), Some(window)) = (stride, step.stride) {
                self.bar.set_message(format!(
                    "stride {id} at ({}, {})",
                    window.origin_x, window.origin_y
                ));
            }
            self.last_stride = stride;
        }
    }

    /// Bricks reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
