//! Error types for wall construction, traversal and export

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for all wall operations
#[derive(Debug, Error)]
pub enum WallError {
    /// Requested wall dimensions cannot produce a layout
    #[error("Invalid wall dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        /// Width as supplied by the caller
        width: usize,
        /// Height in courses as supplied by the caller
        height: usize,
        /// Explanation of why the dimensions were rejected
        reason: &'static str,
    },

    /// Row or column index outside the current grid
    #[error("Brick out of bounds: row {row}, col {col}")]
    OutOfBounds {
        /// Requested course index
        row: usize,
        /// Requested brick index within the course (0 for row-only queries)
        col: usize,
    },

    /// Every brick is already placed
    #[error("Wall is complete, no unplaced bricks remain")]
    WallComplete,

    /// A course's bricks do not add up to the wall width
    #[error("Course {row} is {width} quarter units wide, expected {expected}")]
    InconsistentCourse {
        /// Offending course index
        row: usize,
        /// Summed width of the course
        width: usize,
        /// Width of course 0
        expected: usize,
    },

    /// No stride position can place a single brick
    ///
    /// Occurs when the stride is narrower than every placeable brick in the
    /// lowest unfinished course.
    #[error("No brick is placeable by any stride starting at course {origin_y} (best origin {origin_x})")]
    StrideStalled {
        /// Origin column of the best (empty) stride
        origin_x: usize,
        /// Lowest unfinished course
        origin_y: usize,
    },

    /// Parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered wall to disk
    #[error("Failed to export image to '{}': {source}", path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        #[source]
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Payload could not be serialized
    #[error("Failed to serialize wall payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for wall results
pub type Result<T> = std::result::Result<T, WallError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WallError {
    WallError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid dimensions error
pub const fn invalid_dimensions(width: usize, height: usize, reason: &'static str) -> WallError {
    WallError::InvalidDimensions {
        width,
        height,
        reason,
    }
}

impl WallError {
    /// Whether the caller can keep using the wall after this error
    ///
    /// Dimension and parameter errors are fatal to the call that raised them,
    /// but leave any existing wall untouched.
    pub const fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::ImageExport { .. } | Self::FileSystem { .. } | Self::Serialization(_)
        )
    }
}
