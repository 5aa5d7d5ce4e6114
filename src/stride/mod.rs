/// Search for the build window placing the most bricks
pub mod optimizer;
/// Build window geometry
pub mod window;

pub use optimizer::{StrideSearch, find_best_stride, search_strides};
pub use window::Stride;
