//! Command-line interface for generating and building a single wall

use crate::bond::layout::Bond;
use crate::bond::wild::WildSettings;
use crate::build::session::{BuildSession, PlacementMode, SessionConfig};
use crate::io::configuration::{
    DEFAULT_SEED, DEFAULT_STRIDE_HEIGHT, DEFAULT_STRIDE_WIDTH, DEFAULT_WALL_HEIGHT,
    DEFAULT_WALL_WIDTH, GIF_FRAME_DELAY_MS,
};
use crate::io::error::{Result, WallError};
use crate::io::image::export_wall_as_png;
use crate::io::payload::to_json_line;
use crate::io::progress::BuildProgress;
use crate::io::visualization::BuildRecorder;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "brickwork")]
#[command(
    author,
    version,
    about = "Generate masonry bond layouts and sequence their construction"
)]
/// Command-line arguments for the wall builder
// Output toggles are independent switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Wall width in half bricks
    #[arg(short = 'W', long, default_value_t = DEFAULT_WALL_WIDTH)]
    pub width: usize,

    /// Wall height in courses
    #[arg(short = 'H', long, default_value_t = DEFAULT_WALL_HEIGHT)]
    pub height: usize,

    /// Bond pattern
    #[arg(short, long, value_enum, default_value_t = Bond::Stretcher)]
    pub bond: Bond,

    /// Placement order
    #[arg(short, long, value_enum, default_value_t = PlacementMode::OptimalStrides)]
    pub mode: PlacementMode,

    /// Stride width in quarter-brick units
    #[arg(long, default_value_t = DEFAULT_STRIDE_WIDTH)]
    pub stride_width: usize,

    /// Stride height in courses
    #[arg(long, default_value_t = DEFAULT_STRIDE_HEIGHT)]
    pub stride_height: usize,

    /// Random seed for the wild bond
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Stop after laying this many bricks
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    /// Write the final wall as a PNG image
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Write the build sequence as an animated GIF
    #[arg(long, value_name = "PATH")]
    pub gif: Option<PathBuf>,

    /// Print the final wall as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Print one JSON line per laid brick
    #[arg(short, long)]
    pub trace: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Session configuration described by the arguments
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            width: self.width,
            height: self.height,
            bond: self.bond,
            mode: self.mode,
            stride_width: self.stride_width,
            stride_height: self.stride_height,
            seed: self.seed,
            wild: WildSettings::default(),
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Summary of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Bricks laid
    pub steps: usize,
    /// Whether the wall was finished
    pub complete: bool,
}

/// Drives a build session from the command line arguments
pub struct BuildRunner {
    cli: Cli,
}

impl BuildRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the wall and write the requested outputs
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the build stalls,
    /// or writing any output fails
    pub fn run(&self) -> Result<RunSummary> {
        let start_time = Instant::now();
        let mut session = BuildSession::initialize(self.cli.session_config())?;

        let mut progress = BuildProgress::new(
            session.wall().brick_count(),
            !self.cli.should_show_progress(),
        );
        let mut recorder = self.cli.gif.as_ref().map(|_| {
            let mut recorder = BuildRecorder::new();
            recorder.capture(session.wall());
            recorder
        });

        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        while self.cli.steps.is_none_or(|limit| session.steps() < limit) {
            let step = match session.advance() {
                Ok(step) => step,
                Err(WallError::WallComplete) => break,
                Err(err) => {
                    progress.finish();
                    return Err(err);
                }
            };

            progress.record(&step);
            if let Some(recorder) = recorder.as_mut() {
                recorder.capture(session.wall());
            }
            if self.cli.trace {
                Self::write_line(&mut out, &to_json_line(&step)?)?;
            }
        }
        progress.finish();

        log::info!(
            "laid {} of {} bricks in {:.2?}",
            session.wall().placed_count(),
            session.wall().brick_count(),
            start_time.elapsed()
        );

        if self.cli.json {
            Self::write_line(&mut out, &to_json_line(&session.snapshot())?)?;
        }

        if let Some(path) = &self.cli.png {
            export_wall_as_png(session.wall(), path)?;
            log::info!("wrote {}", path.display());
        }

        if let (Some(path), Some(recorder)) = (&self.cli.gif, &recorder) {
            recorder.export_gif(session.wall(), path, GIF_FRAME_DELAY_MS)?;
            log::info!("wrote {} ({} frames)", path.display(), recorder.frame_count());
        }

        Ok(RunSummary {
            steps: session.steps(),
            complete: session.is_complete(),
        })
    }

    fn write_line(out: &mut impl Write, line: &str) -> Result<()> {
        writeln!(out, "{line}").map_err(|e| WallError::FileSystem {
            path: PathBuf::from("<stdout>"),
            operation: "write output",
            source: e,
        })
    }
}
