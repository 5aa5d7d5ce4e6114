//! Head joint alignment checks for irregular bonds
//!
//! A wild bond must not let head joints line up into visible diagonals or
//! zigzags across several courses. A [`JointCheck`] scores a candidate course
//! against the courses already laid beneath it; zero means acceptable.

use crate::bond::brick::{Brick, Row, head_joints};
use std::collections::HashSet;

/// Scores a candidate course against the courses below it
pub trait JointCheck {
    /// Number of preceding courses the check inspects
    fn steps(&self) -> usize;

    /// Whether the joint at `position` forms a forbidden pattern
    ///
    /// `below` holds the joint sets of the inspected courses, nearest first:
    /// `below[0]` is the course directly beneath the candidate.
    fn is_flagged(&self, position: usize, below: &[HashSet<usize>]) -> bool;

    /// Count flagged head joints of `candidate`
    ///
    /// Returns 0 while fewer than [`JointCheck::steps`] courses exist.
    fn violations(&self, previous: &[Row], candidate: &[Brick]) -> usize {
        let steps = self.steps();
        if steps == 0 || previous.len() < steps {
            return 0;
        }

        let below: Vec<HashSet<usize>> = previous
            .iter()
            .rev()
            .take(steps)
            .map(|row| head_joints(row).into_iter().collect())
            .collect();

        head_joints(candidate)
            .into_iter()
            .filter(|&position| self.is_flagged(position, &below))
            .count()
    }
}

fn has_joint(joints: &HashSet<usize>, position: usize, offset: isize) -> bool {
    position
        .checked_add_signed(offset)
        .is_some_and(|shifted| joints.contains(&shifted))
}

/// Offset functions describing a run of joints climbing through the courses
///
/// `i` counts courses downwards from the candidate, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointTrace {
    /// Joint moves one quarter right per course down
    Inclining,
    /// Joint moves one quarter left per course down
    Declining,
    /// Joint alternates between one quarter right and straight above
    LeadingZigzag,
    /// Joint alternates between one quarter left and straight above
    TrailingZigzag,
}

impl JointTrace {
    /// All traces in evaluation order
    pub const ALL: [Self; 4] = [
        Self::Inclining,
        Self::Declining,
        Self::LeadingZigzag,
        Self::TrailingZigzag,
    ];

    /// Offset in quarter units for the course `i` steps below
    pub const fn offset(self, i: usize) -> isize {
        let step = i as isize;
        let odd = (i % 2) as isize;
        match self {
            Self::Inclining => step,
            Self::Declining => -step,
            Self::LeadingZigzag => odd,
            Self::TrailingZigzag => -odd,
        }
    }

    /// Whether every inspected course continues this trace from `position`
    pub fn follows(self, position: usize, below: &[HashSet<usize>]) -> bool {
        below
            .iter()
            .enumerate()
            .all(|(index, joints)| has_joint(joints, position, self.offset(index + 1)))
    }
}

/// Flags a joint continued by any single [`JointTrace`]
///
/// The score counts flagged joints, so a joint matching several traces counts once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggeredJoints {
    /// Number of courses a trace must span
    pub steps: usize,
}

impl JointCheck for StaggeredJoints {
    fn steps(&self) -> usize {
        self.steps
    }

    fn is_flagged(&self, position: usize, below: &[HashSet<usize>]) -> bool {
        JointTrace::ALL
            .into_iter()
            .any(|trace| trace.follows(position, below))
    }
}

/// Flags a joint where an inclining and a declining run meet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossedJoints {
    /// Number of courses both runs must span
    pub steps: usize,
}

impl JointCheck for CrossedJoints {
    fn steps(&self) -> usize {
        self.steps
    }

    fn is_flagged(&self, position: usize, below: &[HashSet<usize>]) -> bool {
        JointTrace::Inclining.follows(position, below)
            && JointTrace::Declining.follows(position, below)
    }
}
