//! Physical constants and runtime configuration defaults

// Reference dimensions of a standard brick and the build agent's reach.
// Lengths are in tenths of a millimetre so the derived defaults stay integral.
/// Length of a full brick
pub const FULL_BRICK_LENGTH_DMM: usize = 2200;
/// Height of one course including its bed joint
pub const COURSE_HEIGHT_DMM: usize = 655;
/// Horizontal reach of the build agent
pub const AGENT_REACH_WIDTH_DMM: usize = 8000;
/// Vertical reach of the build agent
pub const AGENT_REACH_HEIGHT_DMM: usize = 13_000;

/// Quarter units in one full brick
pub const QUARTERS_PER_FULL_BRICK: usize = 4;

/// Default stride width in quarter units (floor of reach / brick length * 4)
pub const DEFAULT_STRIDE_WIDTH: usize =
    AGENT_REACH_WIDTH_DMM * QUARTERS_PER_FULL_BRICK / FULL_BRICK_LENGTH_DMM;

/// Default stride height in courses (floor of reach / course height)
pub const DEFAULT_STRIDE_HEIGHT: usize = AGENT_REACH_HEIGHT_DMM / COURSE_HEIGHT_DMM;

/// Default wall width in half-brick units
pub const DEFAULT_WALL_WIDTH: usize = 24;

/// Default wall height in courses
pub const DEFAULT_WALL_HEIGHT: usize = 30;

/// Fixed seed for reproducible wild bond layouts
pub const DEFAULT_SEED: u64 = 42;

// Safety limit to keep the stride search interactive
/// Maximum allowed wall dimension (half bricks or courses)
pub const MAX_WALL_DIMENSION: usize = 10_000;

// Wild bond generation defaults
/// Probability of drawing a half brick in a wild course
pub const WILD_HALF_PROBABILITY: f64 = 0.25;
/// Longest allowed run of consecutive full bricks
pub const WILD_MAX_FULL_RUN: usize = 5;
/// Longest allowed run of consecutive half bricks
pub const WILD_MAX_HALF_RUN: usize = 3;
/// Number of preceding courses inspected by the joint pattern check
pub const WILD_PATTERN_STEPS: usize = 4;
/// Candidate courses generated before settling for the best one
pub const WILD_MAX_ATTEMPTS: usize = 500;

// Rendering settings
/// Pixels per quarter unit horizontally
pub const RENDER_QUARTER_PIXELS: u32 = 6;
/// Pixels per course vertically
pub const RENDER_COURSE_PIXELS: u32 = 12;
/// Mortar gap drawn around each brick
pub const RENDER_MORTAR_PIXELS: u32 = 1;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
