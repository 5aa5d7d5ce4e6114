//! Tests for the English bond generator

#[cfg(test)]
mod tests {
    use brickwork::bond::brick::{BrickWidth, row_width};
    use brickwork::bond::english::english_bond;

    const F: BrickWidth = BrickWidth::Full;
    const H: BrickWidth = BrickWidth::Half;
    const Q: BrickWidth = BrickWidth::Quarter;

    // Tests stretcher and header courses of an eight half brick wall
    // Verified by filling header courses largest-first
    #[test]
    fn test_course_shapes() {
        let rows = english_bond(16, 2).expect("valid dimensions");
        let widths: Vec<Vec<_>> = rows
            .iter()
            .map(|row| row.iter().map(|brick| brick.width).collect())
            .collect();

        assert_eq!(widths.first(), Some(&vec![F, F, F, F]));
        assert_eq!(widths.get(1), Some(&vec![Q, H, H, H, H, H, H, H, Q]));
    }

    // Tests header courses open with a quarter closer then halves
    // Verified by starting header courses with a half brick
    #[test]
    fn test_header_opening() {
        let rows = english_bond(10, 5).expect("valid dimensions");

        for row in rows.iter().skip(1).step_by(2) {
            let opening: Vec<_> = row.iter().take(3).map(|brick| brick.width).collect();
            assert_eq!(opening, vec![Q, H, H]);
        }
    }

    // Tests every course matches the requested width
    // Verified by dropping the trailing closer
    #[test]
    fn test_course_widths() {
        for width in (2..=40).step_by(2) {
            let rows = english_bond(width, 4).expect("valid dimensions");
            assert!(rows.iter().all(|row| row_width(row) == width));
        }
    }
}
