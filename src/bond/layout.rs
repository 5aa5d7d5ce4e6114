//! Bond selection and layout dispatch

use crate::bond::brick::Row;
use crate::bond::english::english_bond;
use crate::bond::flemish::flemish_bond;
use crate::bond::stretcher::stretcher_bond;
use crate::bond::wild::{CourseOutcome, WildBond};
use crate::io::configuration::MAX_WALL_DIMENSION;
use crate::io::error::{Result, invalid_dimensions, invalid_parameter};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Named rule set arranging brick widths within and across courses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bond {
    /// Full bricks with a half-brick offset every other course
    Stretcher,
    /// Alternating stretchers and headers in every course
    Flemish,
    /// Alternating stretcher and header courses
    English,
    /// Randomised courses that avoid aligned joint patterns
    #[value(alias = "wildverband")]
    Wild,
}

impl Bond {
    /// All bonds in declaration order
    pub const ALL: [Self; 4] = [Self::Stretcher, Self::Flemish, Self::English, Self::Wild];

    /// Lowercase bond name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stretcher => "stretcher",
            Self::Flemish => "flemish",
            Self::English => "english",
            Self::Wild => "wild",
        }
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Bond {
    type Err = crate::io::error::WallError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stretcher" => Ok(Self::Stretcher),
            "flemish" => Ok(Self::Flemish),
            "english" => Ok(Self::English),
            "wild" | "wildverband" => Ok(Self::Wild),
            _ => Err(invalid_parameter(
                "bond",
                &s,
                &"expected stretcher, flemish, english or wild",
            )),
        }
    }
}

/// Check generator dimensions
///
/// `width` is in quarter units and must be a positive whole number of half
/// bricks; `height` must be positive.
///
/// # Errors
///
/// Returns `InvalidDimensions` describing the first violated constraint.
pub fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(invalid_dimensions(
            width,
            height,
            "width and height must be positive",
        ));
    }
    if width % 2 != 0 {
        return Err(invalid_dimensions(
            width,
            height,
            "width must be a whole number of half bricks",
        ));
    }
    if width / 2 > MAX_WALL_DIMENSION || height > MAX_WALL_DIMENSION {
        return Err(invalid_dimensions(
            width,
            height,
            "dimensions exceed the supported maximum",
        ));
    }
    Ok(())
}

/// Produces unplaced layouts for any bond
///
/// Regular bonds are deterministic; the wild bond draws from the contained
/// seeded generator, so consecutive layouts from one generator differ.
#[derive(Default)]
pub struct LayoutGenerator {
    wild: WildBond,
    last_outcomes: Vec<CourseOutcome>,
}

impl LayoutGenerator {
    /// Create a generator whose wild bond draws from `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_wild(WildBond::new(seed))
    }

    /// Create a generator around a configured wild bond generator
    pub const fn with_wild(wild: WildBond) -> Self {
        Self {
            wild,
            last_outcomes: Vec::new(),
        }
    }

    /// Generate a layout `width` quarter units wide and `height` courses high
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if the dimensions fail validation.
    pub fn generate(&mut self, bond: Bond, width: usize, height: usize) -> Result<Vec<Row>> {
        self.last_outcomes.clear();
        match bond {
            Bond::Stretcher => stretcher_bond(width, height),
            Bond::Flemish => flemish_bond(width, height),
            Bond::English => english_bond(width, height),
            Bond::Wild => {
                let layout = self.wild.generate(width, height)?;
                self.last_outcomes = layout.outcomes;
                Ok(layout.rows)
            }
        }
    }

    /// Per-course outcomes of the most recent wild layout
    ///
    /// Empty after generating any other bond.
    pub fn last_outcomes(&self) -> &[CourseOutcome] {
        &self.last_outcomes
    }
}
