//! Input, output and process-level concerns

/// Command-line arguments and the build runner
pub mod cli;
/// Physical constants and defaults
pub mod configuration;
/// Crate error type
pub mod error;
/// Raster and PNG rendering of walls
pub mod image;
/// JSON views of walls and sessions
pub mod payload;
/// Terminal progress display
pub mod progress;
/// Animated GIF capture of a build
pub mod visualization;
