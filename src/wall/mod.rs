/// Placement cursors and their iterator adapters
pub mod placement;
/// Placement-only snapshots used by the stride search
pub mod snapshot;
/// Wall grid, geometry queries and the support rule
pub mod state;

pub use placement::{Placement, SequentialCursor, StrideCursor};
pub use snapshot::PlacementSnapshot;
pub use state::Wall;
