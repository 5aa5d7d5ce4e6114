//! Masonry bond layout generation and support-aware build sequencing
//!
//! Walls are generated course by course in one of four bonds and then laid
//! brick by brick, either in reading order or in rectangular strides chosen to
//! lay as many supported bricks as possible per window.

#![forbid(unsafe_code)]

/// Bond generators, brick types and head joint checks
pub mod bond;
/// Step-by-step build sessions
pub mod build;
/// Input/output operations and error handling
pub mod io;
/// Build windows and the search for the best one
pub mod stride;
/// Wall grid, support rule and placement traversals
pub mod wall;

pub use bond::{Bond, Brick, BrickWidth};
pub use build::{BuildSession, PlacementMode, SessionConfig};
pub use io::error::{Result, WallError};
pub use stride::{Stride, find_best_stride};
pub use wall::Wall;
