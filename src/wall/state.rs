//! Wall state with geometry queries and the support rule
//!
//! Positions are quarter units from the left wall end; courses are indexed
//! from the ground up. A brick in course `r > 0` can be laid once both of its
//! end points rest on laid bricks in course `r - 1`. The span between the ends
//! may bridge a gap.

use crate::bond::brick::{Brick, Row, row_width};
use crate::bond::layout::{Bond, LayoutGenerator};
use crate::io::error::{Result, WallError, invalid_dimensions};
use crate::stride::window::Stride;

/// One course together with its precomputed brick edges
#[derive(Debug, Clone)]
pub(crate) struct Course {
    pub(crate) bricks: Row,
    /// `edges[i]` is the left edge of brick `i`; the last entry is the course width
    edges: Vec<usize>,
}

impl Course {
    fn new(bricks: Row) -> Self {
        let edges = std::iter::once(0)
            .chain(bricks.iter().scan(0, |edge, brick| {
                *edge += brick.width.units();
                Some(*edge)
            }))
            .collect();
        Self { bricks, edges }
    }

    pub(crate) fn span(&self, col: usize) -> Option<(usize, usize)> {
        Some((*self.edges.get(col)?, *self.edges.get(col + 1)?))
    }

    /// Whether a laid brick covers `position`; a shared edge counts for both neighbours
    fn covers(&self, position: usize) -> bool {
        let index = self.edges.partition_point(|&edge| edge < position);
        let placed = |col: usize| self.bricks.get(col).is_some_and(|brick| brick.placed);

        match self.edges.get(index) {
            Some(&edge) if edge == position => {
                (index > 0 && placed(index - 1)) || placed(index)
            }
            Some(_) => index > 0 && placed(index - 1),
            None => false,
        }
    }
}

/// The wall under construction
#[derive(Debug, Clone)]
pub struct Wall {
    pub(crate) courses: Vec<Course>,
    width: usize,
    pub(crate) current_stride: u32,
}

impl Wall {
    /// Build a wall from generated or hand-made courses
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` for an empty grid or an empty first course,
    /// and `InconsistentCourse` if any course differs in width from course 0.
    pub fn from_rows(rows: Vec<Row>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row_width(row));
        if width == 0 {
            return Err(invalid_dimensions(width, height, "wall has no bricks"));
        }

        for (row, bricks) in rows.iter().enumerate() {
            let course_width = row_width(bricks);
            if course_width != width {
                return Err(WallError::InconsistentCourse {
                    row,
                    width: course_width,
                    expected: width,
                });
            }
        }

        Ok(Self {
            courses: rows.into_iter().map(Course::new).collect(),
            width,
            current_stride: 0,
        })
    }

    /// Generate a wall `width` half bricks wide and `height` courses high
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero or too large.
    pub fn generate(
        width: usize,
        height: usize,
        bond: Bond,
        generator: &mut LayoutGenerator,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_dimensions(
                width,
                height,
                "number of rows and columns must be positive",
            ));
        }
        let quarters = width.checked_mul(2).ok_or_else(|| {
            invalid_dimensions(width, height, "dimensions exceed the supported maximum")
        })?;

        let wall = Self::from_rows(generator.generate(bond, quarters, height)?)?;
        log::info!(
            "initialized {bond} wall: {} quarter units x {} courses, {} bricks",
            wall.width(),
            wall.height(),
            wall.brick_count()
        );
        Ok(wall)
    }

    /// Generate a wall with the default wild bond seed
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero or too large.
    pub fn initialize(width: usize, height: usize, bond: Bond) -> Result<Self> {
        Self::generate(width, height, bond, &mut LayoutGenerator::default())
    }

    /// Wall width in quarter units
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of courses
    pub const fn height(&self) -> usize {
        self.courses.len()
    }

    /// Id of the most recently started stride (0 before the first)
    pub const fn current_stride(&self) -> u32 {
        self.current_stride
    }

    /// Bricks of one course
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the course does not exist.
    pub fn row(&self, row: usize) -> Result<&[Brick]> {
        self.course(row).map(|course| course.bricks.as_slice())
    }

    /// All courses, bottom first
    pub fn rows(&self) -> impl Iterator<Item = &[Brick]> + '_ {
        self.courses.iter().map(|course| course.bricks.as_slice())
    }

    /// A single brick
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the brick does not exist.
    pub fn brick(&self, row: usize, col: usize) -> Result<&Brick> {
        self.course(row)?
            .bricks
            .get(col)
            .ok_or(WallError::OutOfBounds { row, col })
    }

    /// Lay a brick directly, bypassing the support rule
    ///
    /// Used to stage partially built walls.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the brick does not exist.
    pub fn mark_placed(&mut self, row: usize, col: usize, stride: Option<u32>) -> Result<()> {
        let brick = self
            .courses
            .get_mut(row)
            .and_then(|course| course.bricks.get_mut(col))
            .ok_or(WallError::OutOfBounds { row, col })?;
        brick.placed = true;
        brick.stride = stride;
        Ok(())
    }

    fn course(&self, row: usize) -> Result<&Course> {
        self.courses
            .get(row)
            .ok_or(WallError::OutOfBounds { row, col: 0 })
    }

    /// Left and right edge of a brick in quarter units
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the brick does not exist.
    pub fn edges(&self, row: usize, col: usize) -> Result<(usize, usize)> {
        self.course(row)?
            .span(col)
            .ok_or(WallError::OutOfBounds { row, col })
    }

    /// Whether a laid brick covers `position` in `row`
    ///
    /// A position on the edge shared by two bricks is covered if either of
    /// them is laid. Positions beyond the wall end are never covered.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the course does not exist.
    pub fn occupied_at(&self, row: usize, position: usize) -> Result<bool> {
        Ok(self.course(row)?.covers(position))
    }

    /// Whether a brick can be laid now
    ///
    /// False for laid bricks. Course 0 rests on the ground; higher bricks need
    /// both edges covered in the course below.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the brick does not exist.
    pub fn can_place(&self, row: usize, col: usize) -> Result<bool> {
        self.brick(row, col)?;
        Ok(self.is_supported(row, col))
    }

    /// Support rule for indices known to be valid
    pub(crate) fn is_supported(&self, row: usize, col: usize) -> bool {
        let Some(course) = self.courses.get(row) else {
            return false;
        };
        let Some(brick) = course.bricks.get(col) else {
            return false;
        };
        if brick.placed {
            return false;
        }

        let Some(below) = row.checked_sub(1) else {
            return true;
        };
        let (Some(below), Some((left, right))) = (self.courses.get(below), course.span(col))
        else {
            return false;
        };

        below.covers(left) && below.covers(right)
    }

    /// Whether a brick lies entirely inside the stride's horizontal extent
    ///
    /// Partial overlap does not count.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the brick does not exist.
    pub fn in_window(&self, row: usize, col: usize, stride: &Stride) -> Result<bool> {
        let (left, right) = self.edges(row, col)?;
        Ok(stride.contains_span(left, right))
    }

    /// Lowest course that still has an unlaid brick
    pub fn first_unfinished_row(&self) -> Option<usize> {
        self.courses
            .iter()
            .position(|course| course.bricks.iter().any(|brick| !brick.placed))
    }

    /// Whether every brick of the wall is laid
    ///
    /// Every course is checked: a laid top course does not imply a laid wall,
    /// because a brick may bridge an unlaid brick below.
    pub fn is_complete(&self) -> bool {
        self.first_unfinished_row().is_none()
    }

    /// Total number of bricks
    pub fn brick_count(&self) -> usize {
        self.courses.iter().map(|course| course.bricks.len()).sum()
    }

    /// Number of laid bricks
    pub fn placed_count(&self) -> usize {
        self.rows()
            .flat_map(|row| row.iter())
            .filter(|brick| brick.placed)
            .count()
    }

    /// Clear every brick and restart stride numbering
    pub fn reset(&mut self) {
        for course in &mut self.courses {
            course.bricks.iter_mut().for_each(Brick::clear);
        }
        self.current_stride = 0;
    }

    /// Claim the id for a new stride traversal
    pub(crate) const fn begin_stride(&mut self) -> u32 {
        self.current_stride += 1;
        self.current_stride
    }
}
