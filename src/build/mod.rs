/// Session driver exposing initialize, advance and reset
pub mod session;

pub use session::{BuildSession, PlacementMode, SessionConfig, Step};
