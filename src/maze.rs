//! Grid model shared by every generator and solver.

pub mod cell;
pub mod grid;
pub mod io;
pub mod template;

pub use cell::{Cell, INFINITY};
pub use grid::Grid;

/// Grid coordinate as `(row, col)`.
pub type Coord = (usize, usize);

/// Manhattan distance between two coordinates.
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    (a.0.abs_diff(b.0) + a.1.abs_diff(b.1)) as u32
}

/// Coordinate halfway between two cells that are two steps apart, i.e. the
/// wall cell separating them.
pub fn midpoint(a: Coord, b: Coord) -> Coord {
    (a.0.min(b.0) + a.0.abs_diff(b.0) / 2, a.1.min(b.1) + a.1.abs_diff(b.1) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan() {
        assert_eq!(manhattan((0, 0), (4, 4)), 8);
        assert_eq!(manhattan((3, 1), (1, 3)), 4);
        assert_eq!(manhattan((2, 2), (2, 2)), 0);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(midpoint((2, 2), (2, 4)), (2, 3));
        assert_eq!(midpoint((4, 2), (2, 2)), (3, 2));
        assert_eq!(midpoint((0, 5), (0, 3)), (0, 4));
    }
}
