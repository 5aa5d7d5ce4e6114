//! Wild bond ("wildverband"): randomised courses with joint pattern rejection
//!
//! Each course is drawn brick by brick from a weighted half/full distribution,
//! constrained by run-length limits and by avoiding head joints directly above
//! the joints of the course below. The finished candidate is scored by a
//! [`JointCheck`]; candidates are regenerated until one scores zero or the
//! attempt budget runs out, in which case the lowest-scoring candidate wins.

use crate::bond::brick::{Brick, BrickWidth, Row, fill_largest_first, head_joints};
use crate::bond::joints::{CrossedJoints, JointCheck};
use crate::bond::layout::validate_dimensions;
use crate::io::configuration::{
    DEFAULT_SEED, WILD_HALF_PROBABILITY, WILD_MAX_ATTEMPTS, WILD_MAX_FULL_RUN, WILD_MAX_HALF_RUN,
    WILD_PATTERN_STEPS,
};
use crate::io::error::{Result, invalid_parameter};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::HashSet;

/// Parameters of the randomised course generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WildSettings {
    /// Probability that a free draw yields a half brick
    pub half_probability: f64,
    /// Longest run of consecutive full bricks
    pub max_full_run: usize,
    /// Longest run of consecutive half bricks
    pub max_half_run: usize,
    /// Candidates generated per course before settling for the best
    pub max_attempts: usize,
}

impl Default for WildSettings {
    fn default() -> Self {
        Self {
            half_probability: WILD_HALF_PROBABILITY,
            max_full_run: WILD_MAX_FULL_RUN,
            max_half_run: WILD_MAX_HALF_RUN,
            max_attempts: WILD_MAX_ATTEMPTS,
        }
    }
}

impl WildSettings {
    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the probability is outside `[0, 1]`, or a
    /// run limit or the attempt budget is zero.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.half_probability) {
            return Err(invalid_parameter(
                "half_probability",
                &self.half_probability,
                &"must be within [0, 1]",
            ));
        }
        if self.max_full_run == 0 {
            return Err(invalid_parameter(
                "max_full_run",
                &self.max_full_run,
                &"must allow at least one full brick",
            ));
        }
        if self.max_half_run == 0 {
            return Err(invalid_parameter(
                "max_half_run",
                &self.max_half_run,
                &"must allow at least one half brick",
            ));
        }
        if self.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &self.max_attempts,
                &"must be positive",
            ));
        }
        Ok(())
    }
}

/// How the generator settled on one course
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseOutcome {
    /// Candidates generated for this course
    pub attempts: usize,
    /// Joint check score of the kept candidate
    pub violations: usize,
}

impl CourseOutcome {
    /// Whether the kept course passed the joint check
    pub const fn is_clean(&self) -> bool {
        self.violations == 0
    }
}

/// A generated wild layout with per-course diagnostics
#[derive(Debug, Clone)]
pub struct WildLayout {
    /// Courses, bottom first
    pub rows: Vec<Row>,
    /// Outcome for each course, parallel to `rows`
    pub outcomes: Vec<CourseOutcome>,
}

/// Seeded generator for wild bond layouts
pub struct WildBond {
    settings: WildSettings,
    check: Box<dyn JointCheck>,
    rng: StdRng,
}

impl Default for WildBond {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl WildBond {
    /// Create a generator with default settings and the crossed joint check
    pub fn new(seed: u64) -> Self {
        Self {
            settings: WildSettings::default(),
            check: Box::new(CrossedJoints {
                steps: WILD_PATTERN_STEPS,
            }),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replace the generation settings
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the settings fail validation.
    pub fn with_settings(mut self, settings: WildSettings) -> Result<Self> {
        settings.validate()?;
        self.settings = settings;
        Ok(self)
    }

    /// Replace the joint pattern check
    #[must_use]
    pub fn with_check(mut self, check: impl JointCheck + 'static) -> Self {
        self.check = Box::new(check);
        self
    }

    /// Active settings
    pub const fn settings(&self) -> &WildSettings {
        &self.settings
    }

    /// Generate a complete layout
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if the width is not a positive number of
    /// half bricks or the height is zero.
    pub fn generate(&mut self, width: usize, height: usize) -> Result<WildLayout> {
        validate_dimensions(width, height)?;

        let mut rows: Vec<Row> = Vec::with_capacity(height);
        let mut outcomes = Vec::with_capacity(height);

        for index in 0..height {
            let (row, outcome) = self.settle_course(index, width, &rows);
            if !outcome.is_clean() {
                log::warn!(
                    "wild course {index}: kept best-effort candidate with {} violations after {} attempts",
                    outcome.violations,
                    outcome.attempts
                );
            }
            rows.push(row);
            outcomes.push(outcome);
        }

        Ok(WildLayout { rows, outcomes })
    }

    /// Draw candidates until one is clean or the budget is spent
    fn settle_course(&mut self, index: usize, width: usize, rows: &[Row]) -> (Row, CourseOutcome) {
        let below: HashSet<usize> = rows
            .last()
            .map(|row| head_joints(row).into_iter().collect())
            .unwrap_or_default();

        let mut best: Option<(Row, usize)> = None;
        let mut attempts = 0;

        while attempts < self.settings.max_attempts {
            attempts += 1;
            let candidate = self.draw_course(index, width, &below);
            let violations = self.check.violations(rows, &candidate);

            if best
                .as_ref()
                .is_none_or(|(_, best_score)| violations < *best_score)
            {
                best = Some((candidate, violations));
            }
            if violations == 0 {
                break;
            }
        }

        log::debug!("wild course {index} settled after {attempts} attempts");

        let (row, violations) = best.unwrap_or_default();
        (
            row,
            CourseOutcome {
                attempts,
                violations,
            },
        )
    }

    /// Build one candidate course
    fn draw_course(&mut self, index: usize, width: usize, below: &HashSet<usize>) -> Row {
        let starter = if index % 2 == 0 {
            BrickWidth::Full
        } else {
            BrickWidth::Quarter
        };

        let mut row = Row::new();
        if starter.units() > width {
            fill_largest_first(&mut row, width);
            return row;
        }

        row.push(Brick::new(starter));
        let mut edge = starter.units();
        let mut full_run = usize::from(starter == BrickWidth::Full);
        let mut half_run = 0;

        while width - edge >= BrickWidth::Full.units() {
            let brick = if full_run >= self.settings.max_full_run {
                BrickWidth::Half
            } else if half_run >= self.settings.max_half_run {
                BrickWidth::Full
            } else {
                let drawn = if self.rng.random_bool(self.settings.half_probability) {
                    BrickWidth::Half
                } else {
                    BrickWidth::Full
                };
                let joint = edge + drawn.units();
                if joint < width && below.contains(&joint) {
                    BrickWidth::Full
                } else {
                    drawn
                }
            };

            if brick == BrickWidth::Full {
                full_run += 1;
                half_run = 0;
            } else {
                half_run += 1;
                full_run = 0;
            }

            row.push(Brick::new(brick));
            edge += brick.units();
        }

        fill_largest_first(&mut row, width - edge);
        row
    }
}

/// Generate a wild bond layout with default settings
///
/// # Errors
///
/// Returns `InvalidDimensions` if the width is not a positive number of half
/// bricks or the height is zero.
pub fn wild_bond(width: usize, height: usize, seed: u64) -> Result<Vec<Row>> {
    Ok(WildBond::new(seed).generate(width, height)?.rows)
}
