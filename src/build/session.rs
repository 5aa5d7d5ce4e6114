//! Step-by-step wall construction driver
//!
//! A session owns one wall and advances it one brick per call, either in
//! plain reading order or stride by stride. In stride mode the next window is
//! chosen by the stride search whenever the current one runs dry.

use crate::bond::layout::{Bond, LayoutGenerator};
use crate::bond::wild::{WildBond, WildSettings};
use crate::io::configuration::{
    DEFAULT_SEED, DEFAULT_STRIDE_HEIGHT, DEFAULT_STRIDE_WIDTH, DEFAULT_WALL_HEIGHT,
    DEFAULT_WALL_WIDTH,
};
use crate::io::error::{Result, WallError, invalid_parameter};
use crate::io::payload::SessionPayload;
use crate::stride::optimizer::search_strides;
use crate::stride::window::Stride;
use crate::wall::placement::{Placement, SequentialCursor, StrideCursor};
use crate::wall::state::Wall;
use clap::ValueEnum;
use serde::Serialize;

/// Order in which a session lays bricks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementMode {
    /// Reading order, ignoring support
    LeftToRight,
    /// Supported bricks only, one optimised stride at a time
    OptimalStrides,
}

/// Everything needed to start a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Wall width in half bricks
    pub width: usize,
    /// Wall height in courses
    pub height: usize,
    /// Bond pattern
    pub bond: Bond,
    /// Placement order
    pub mode: PlacementMode,
    /// Stride width in quarter units
    pub stride_width: usize,
    /// Stride height in courses
    pub stride_height: usize,
    /// Seed for the wild bond
    pub seed: u64,
    /// Wild bond parameters
    pub wild: WildSettings,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WALL_WIDTH,
            height: DEFAULT_WALL_HEIGHT,
            bond: Bond::Stretcher,
            mode: PlacementMode::OptimalStrides,
            stride_width: DEFAULT_STRIDE_WIDTH,
            stride_height: DEFAULT_STRIDE_HEIGHT,
            seed: DEFAULT_SEED,
            wild: WildSettings::default(),
        }
    }
}

/// One brick laid by [`BuildSession::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    /// 1-based step number since initialisation or reset
    pub number: usize,
    /// The brick laid
    pub placement: Placement,
    /// Window active when the brick was laid (stride mode only)
    pub stride: Option<Stride>,
}

#[derive(Debug, Clone, Copy)]
enum Traversal {
    Sequential(SequentialCursor),
    Strided(StrideCursor),
}

/// A wall and the traversal currently working on it
#[derive(Debug, Clone)]
pub struct BuildSession {
    config: SessionConfig,
    wall: Wall,
    traversal: Traversal,
    steps: usize,
}

impl BuildSession {
    /// Generate the wall and position the first traversal
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` or `InvalidParameter` for a bad
    /// configuration, and `StrideStalled` if no stride can lay a brick.
    pub fn initialize(config: SessionConfig) -> Result<Self> {
        if config.mode == PlacementMode::OptimalStrides {
            if config.stride_width == 0 {
                return Err(invalid_parameter(
                    "stride_width",
                    &config.stride_width,
                    &"must be positive",
                ));
            }
            if config.stride_height == 0 {
                return Err(invalid_parameter(
                    "stride_height",
                    &config.stride_height,
                    &"must be positive",
                ));
            }
        }

        let wild = WildBond::new(config.seed).with_settings(config.wild)?;
        let mut generator = LayoutGenerator::with_wild(wild);
        let wall = Wall::generate(config.width, config.height, config.bond, &mut generator)?;

        let mut session = Self {
            config,
            wall,
            traversal: Traversal::Sequential(SequentialCursor::new()),
            steps: 0,
        };
        session.restart()?;
        Ok(session)
    }

    /// Lay one brick
    ///
    /// # Errors
    ///
    /// Returns `WallComplete` once nothing is left to lay and `StrideStalled`
    /// if unlaid bricks remain but no stride can reach them.
    pub fn advance(&mut self) -> Result<Step> {
        let placement = match &mut self.traversal {
            Traversal::Sequential(cursor) => cursor
                .next_placement(&mut self.wall)
                .ok_or(WallError::WallComplete)?,
            Traversal::Strided(cursor) => {
                if let Some(placement) = cursor.next_placement(&mut self.wall) {
                    placement
                } else {
                    self.next_stride_placement()?
                }
            }
        };

        self.steps += 1;
        Ok(Step {
            number: self.steps,
            placement,
            stride: self.stride(),
        })
    }

    /// Clear the wall and restart the configured traversal
    ///
    /// # Errors
    ///
    /// Returns `StrideStalled` if no stride can lay a brick.
    pub fn reset(&mut self) -> Result<()> {
        self.wall.reset();
        self.steps = 0;
        log::info!("wall reset");
        self.restart()
    }

    /// The wall being built
    pub const fn wall(&self) -> &Wall {
        &self.wall
    }

    /// Configuration the session was started with
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Window currently worked, if in stride mode
    pub const fn stride(&self) -> Option<Stride> {
        match &self.traversal {
            Traversal::Sequential(_) => None,
            Traversal::Strided(cursor) => Some(cursor.stride()),
        }
    }

    /// Bricks laid since initialisation or the last reset
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Whether every brick is laid
    pub fn is_complete(&self) -> bool {
        self.wall.is_complete()
    }

    /// Serialisable view of the wall and the active stride
    pub fn snapshot(&self) -> SessionPayload {
        SessionPayload::from(self)
    }

    fn restart(&mut self) -> Result<()> {
        self.traversal = match self.config.mode {
            PlacementMode::LeftToRight => Traversal::Sequential(SequentialCursor::new()),
            PlacementMode::OptimalStrides => Traversal::Strided(self.begin_best_stride()?),
        };
        Ok(())
    }

    /// Switch to the best next stride and lay its first brick
    fn next_stride_placement(&mut self) -> Result<Placement> {
        let mut cursor = self.begin_best_stride()?;
        let placement = cursor.next_placement(&mut self.wall);
        let stride = cursor.stride();
        self.traversal = Traversal::Strided(cursor);

        placement.ok_or(WallError::StrideStalled {
            origin_x: stride.origin_x,
            origin_y: stride.origin_y,
        })
    }

    fn begin_best_stride(&mut self) -> Result<StrideCursor> {
        let search = search_strides(
            &self.wall,
            self.config.stride_width,
            self.config.stride_height,
            |_| true,
        )?;

        if search.placeable == 0 {
            return Err(WallError::StrideStalled {
                origin_x: search.stride.origin_x,
                origin_y: search.stride.origin_y,
            });
        }

        log::info!(
            "next optimal stride at ({}, {}) lays {} bricks",
            search.stride.origin_x,
            search.stride.origin_y,
            search.placeable
        );
        Ok(StrideCursor::begin(&mut self.wall, search.stride))
    }
}
