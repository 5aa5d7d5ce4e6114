/// Brick widths, bricks and course helpers
pub mod brick;
/// English bond generator
pub mod english;
/// Flemish bond generator
pub mod flemish;
/// Head joint alignment checks used by irregular bonds
pub mod joints;
/// Bond selection, dimension validation and layout dispatch
pub mod layout;
/// Stretcher bond generator
pub mod stretcher;
/// Randomised wild bond generator
pub mod wild;

pub use brick::{Brick, BrickWidth, Row};
pub use layout::{Bond, LayoutGenerator};
