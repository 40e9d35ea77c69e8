use std::fmt;

use super::Coord;
use super::cell::Cell;
use crate::error::{MazeError, Result};

/// Rectangular, row-major grid of [`Cell`]s with exactly one start and one
/// end cell.
///
/// `grid[(r, c)].row == r && grid[(r, c)].col == c` holds for every valid
/// coordinate. Cloning produces an independent deep copy, which is what the
/// step recorder stores as a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<[Cell]>,
    rows: usize,
    cols: usize,
    start: Coord,
    end: Coord,
}

impl Grid {
    /// Creates an open grid (no walls) with the given endpoints.
    pub fn new(rows: usize, cols: usize, start: Coord, end: Coord) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let cells = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| Cell::new(r, c)))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        let mut grid = Grid {
            cells,
            rows,
            cols,
            start,
            end,
        };
        grid.check_endpoints(start, end)?;
        grid.cell_mut(start).is_start = true;
        grid.cell_mut(end).is_end = true;
        Ok(grid)
    }

    /// Creates a grid from a row-major wall mask. Rows must all have the same
    /// length. The endpoint cells are forced open.
    pub fn from_walls(walls: &[Vec<bool>], start: Coord, end: Coord) -> Result<Self> {
        let rows = walls.len();
        let cols = walls.first().map_or(0, Vec::len);
        if let Some((r, row)) = walls.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(MazeError::MalformedMaze {
                reason: format!("row {r} has {} cells, expected {cols}", row.len()),
            });
        }
        let mut grid = Grid::new(rows, cols, start, end)?;
        for (cell, &wall) in grid.cells.iter_mut().zip(walls.iter().flatten()) {
            cell.is_wall = wall && !cell.is_endpoint();
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    /// Checks if the given coordinate is within the bounds of the grid.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.rows && coord.1 < self.cols
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        coord.0 * self.cols + coord.1
    }

    pub(crate) fn cell_mut(&mut self, coord: Coord) -> &mut Cell {
        let idx = self.ravel_index(coord);
        &mut self.cells[idx]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Iterates over the grid one row slice at a time.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// Rejects endpoint pairs no algorithm can work with: out of bounds or
    /// coincident.
    pub(crate) fn check_endpoints(&self, start: Coord, end: Coord) -> Result<()> {
        let reason = if !self.is_in_bounds(start) {
            "start is out of bounds"
        } else if !self.is_in_bounds(end) {
            "end is out of bounds"
        } else if start == end {
            "start and end must differ"
        } else {
            return Ok(());
        };
        Err(MazeError::InvalidEndpoints { start, end, reason })
    }

    /// Get neighbors of a cell that are `distance` steps away in the cardinal
    /// directions, in the order up, down, left, right. Only bounds are
    /// checked, so walls are included.
    ///
    /// Pathfinding uses a distance of 1; maze carving uses 2 so that the cell
    /// in between is left over as the wall to knock down.
    pub fn neighbors(&self, coord: Coord, distance: usize) -> impl Iterator<Item = Coord> + '_ {
        let neighbors: Vec<Coord> = if self.is_in_bounds(coord) {
            let (r, c) = coord;
            // checked_sub filters underflow; the bounds check below filters overflow.
            [
                r.checked_sub(distance).map(|r| (r, c)),
                r.checked_add(distance).map(|r| (r, c)),
                c.checked_sub(distance).map(|c| (r, c)),
                c.checked_add(distance).map(|c| (r, c)),
            ]
            .into_iter()
            .flatten()
            .collect()
        } else {
            // No neighbors if the coordinate is out of bounds
            vec![]
        };

        neighbors.into_iter().filter(move |&c| self.is_in_bounds(c))
    }

    /// Adjacent cells that are not walls, in the order up, down, left, right.
    pub fn open_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.neighbors(coord, 1).filter(move |&c| !self[c].is_wall)
    }

    /// Resets visited/path markers, cost fields, and back-references while
    /// keeping walls and endpoints.
    pub fn clear_path(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear_transient);
    }

    /// Same as [`Grid::clear_path`], and removes every wall too.
    pub fn clear_all(&mut self) {
        self.cells.iter_mut().for_each(|cell| {
            cell.clear_transient();
            cell.is_wall = false;
        });
    }

    /// Sets the wall flag of a cell. Endpoints cannot become walls; returns
    /// whether the cell changed.
    pub fn set_wall(&mut self, coord: Coord, wall: bool) -> bool {
        if !self.is_in_bounds(coord) {
            return false;
        }
        let cell = self.cell_mut(coord);
        if cell.is_endpoint() || cell.is_wall == wall {
            return false;
        }
        cell.is_wall = wall;
        true
    }

    /// Flips the wall flag of a non-endpoint cell.
    pub fn toggle_wall(&mut self, coord: Coord) -> bool {
        if !self.is_in_bounds(coord) {
            return false;
        }
        let wall = !self[coord].is_wall;
        self.set_wall(coord, wall)
    }

    /// Moves the start cell. Refuses walls, the end cell, and out-of-bounds
    /// targets.
    pub fn move_start(&mut self, to: Coord) -> Result<()> {
        self.check_move(to, self.end)?;
        let from = self.start;
        self.cell_mut(from).is_start = false;
        self.cell_mut(to).is_start = true;
        self.start = to;
        Ok(())
    }

    /// Moves the end cell. Refuses walls, the start cell, and out-of-bounds
    /// targets.
    pub fn move_end(&mut self, to: Coord) -> Result<()> {
        self.check_move(self.start, to)?;
        let from = self.end;
        self.cell_mut(from).is_end = false;
        self.cell_mut(to).is_end = true;
        self.end = to;
        Ok(())
    }

    /// Re-seats both endpoint flags without looking at walls. Used on working
    /// copies whose walls are about to be rewritten anyway.
    pub(crate) fn set_endpoints(&mut self, start: Coord, end: Coord) -> Result<()> {
        self.check_endpoints(start, end)?;
        let (old_start, old_end) = (self.start, self.end);
        self.cell_mut(old_start).is_start = false;
        self.cell_mut(old_end).is_end = false;
        self.cell_mut(start).is_start = true;
        self.cell_mut(end).is_end = true;
        self.start = start;
        self.end = end;
        Ok(())
    }

    fn check_move(&self, start: Coord, end: Coord) -> Result<()> {
        self.check_endpoints(start, end)?;
        if self[start].is_wall || self[end].is_wall {
            return Err(MazeError::InvalidEndpoints {
                start,
                end,
                reason: "endpoint cannot be placed on a wall",
            });
        }
        Ok(())
    }

    /// Builds a fresh open grid of a new size. Endpoints are clamped into
    /// bounds; if clamping makes them collide, the end is moved to another
    /// cell.
    pub fn resize(&self, rows: usize, cols: usize) -> Result<Grid> {
        if rows == 0 || cols == 0 || rows * cols < 2 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let clamp = |(r, c): Coord| (r.min(rows - 1), c.min(cols - 1));
        let start = clamp(self.start);
        let mut end = clamp(self.end);
        if start == end {
            end = if start == (rows - 1, cols - 1) {
                (0, 0)
            } else {
                (rows - 1, cols - 1)
            };
        }
        Grid::new(rows, cols, start, end)
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[self.ravel_index(index)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_slices() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let grid = Grid::new(4, 6, (0, 0), (3, 5)).unwrap();
        for r in 0..4 {
            for c in 0..6 {
                assert_eq!(grid[(r, c)].coord(), (r, c));
            }
        }
        assert!(grid[(0, 0)].is_start);
        assert!(grid[(3, 5)].is_end);
        assert_eq!(grid.cells().filter(|c| c.is_start).count(), 1);
        assert_eq!(grid.cells().filter(|c| c.is_end).count(), 1);
    }

    #[test]
    fn test_invalid_construction() {
        assert!(matches!(
            Grid::new(0, 5, (0, 0), (0, 1)),
            Err(MazeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Grid::new(5, 5, (2, 2), (2, 2)),
            Err(MazeError::InvalidEndpoints { .. })
        ));
        assert!(matches!(
            Grid::new(5, 5, (0, 0), (5, 0)),
            Err(MazeError::InvalidEndpoints { .. })
        ));
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::new(5, 5, (0, 0), (4, 4)).unwrap();
        assert!(!grid.is_in_bounds((5, 5)));
        assert!(!grid.is_in_bounds((0, 5)));
        assert!(!grid.is_in_bounds((5, 0)));
        assert!(grid.is_in_bounds((4, 4)));
    }

    #[test]
    fn test_neighbors() {
        let grid = Grid::new(7, 7, (0, 0), (6, 6)).unwrap();
        let neighbors = grid.neighbors((3, 3), 2).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(1, 3), (5, 3), (3, 1), (3, 5)]);
        let corner = grid.neighbors((0, 0), 1).collect::<Vec<_>>();
        assert_eq!(corner, vec![(1, 0), (0, 1)]);
        assert_eq!(grid.neighbors((7, 0), 1).count(), 0);
        assert_eq!(grid.neighbors((6, 6), 2).collect::<Vec<_>>(), vec![(4, 6), (6, 4)]);
    }

    #[test]
    fn test_open_neighbors_skip_walls() {
        let mut grid = Grid::new(3, 3, (0, 0), (2, 2)).unwrap();
        assert!(grid.set_wall((0, 1), true));
        let open = grid.open_neighbors((1, 1)).collect::<Vec<_>>();
        assert_eq!(open, vec![(2, 1), (1, 0), (1, 2)]);
        // Generation neighbors still include the wall
        assert_eq!(grid.neighbors((1, 1), 1).count(), 4);
    }

    #[test]
    fn test_clone_is_independent() {
        let grid = Grid::new(3, 3, (0, 0), (2, 2)).unwrap();
        let mut copy = grid.clone();
        copy.set_wall((1, 1), true);
        assert!(!grid[(1, 1)].is_wall);
        assert!(copy[(1, 1)].is_wall);
    }

    #[test]
    fn test_endpoints_cannot_be_walled() {
        let mut grid = Grid::new(3, 3, (0, 0), (2, 2)).unwrap();
        assert!(!grid.set_wall((0, 0), true));
        assert!(!grid.toggle_wall((2, 2)));
        assert!(grid.toggle_wall((1, 1)));
        assert!(grid[(1, 1)].is_wall);
        assert!(grid.toggle_wall((1, 1)));
        assert!(!grid[(1, 1)].is_wall);
    }

    #[test]
    fn test_move_endpoints() {
        let mut grid = Grid::new(3, 3, (0, 0), (2, 2)).unwrap();
        grid.set_wall((1, 1), true);
        assert!(grid.move_start((1, 1)).is_err());
        assert!(grid.move_start((2, 2)).is_err());
        grid.move_start((0, 2)).unwrap();
        assert_eq!(grid.start(), (0, 2));
        assert!(!grid[(0, 0)].is_start);
        assert!(grid[(0, 2)].is_start);
        grid.move_end((2, 0)).unwrap();
        assert_eq!(grid.cells().filter(|c| c.is_end).count(), 1);
        assert!(grid[(2, 0)].is_end);
    }

    #[test]
    fn test_clear_path_and_all() {
        let mut grid = Grid::new(3, 3, (0, 0), (2, 2)).unwrap();
        grid.set_wall((1, 1), true);
        grid.cell_mut((0, 1)).is_visited = true;
        grid.cell_mut((0, 1)).previous_node = Some((0, 0));
        grid.clear_path();
        assert!(grid[(1, 1)].is_wall);
        assert!(!grid[(0, 1)].is_visited);
        assert_eq!(grid[(0, 1)].previous_node, None);
        grid.clear_all();
        assert!(grid.cells().all(|c| !c.is_wall));
        assert!(grid[(0, 0)].is_start);
    }

    #[test]
    fn test_from_walls() {
        let walls = vec![
            vec![true, true, false],
            vec![false, true, false],
            vec![false, false, true],
        ];
        let grid = Grid::from_walls(&walls, (0, 0), (2, 2)).unwrap();
        assert!(!grid[(0, 0)].is_wall, "start is forced open");
        assert!(!grid[(2, 2)].is_wall, "end is forced open");
        assert!(grid[(0, 1)].is_wall);
        assert!(grid[(1, 1)].is_wall);

        let ragged = vec![vec![false, false], vec![false]];
        assert!(matches!(
            Grid::from_walls(&ragged, (0, 0), (0, 1)),
            Err(MazeError::MalformedMaze { .. })
        ));
    }

    #[test]
    fn test_resize_clamps_endpoints() {
        let grid = Grid::new(25, 40, (5, 5), (20, 35)).unwrap();
        let small = grid.resize(10, 10).unwrap();
        assert_eq!(small.start(), (5, 5));
        assert_eq!(small.end(), (9, 9));

        let grid = Grid::new(10, 10, (9, 9), (9, 8)).unwrap();
        let tiny = grid.resize(1, 2).unwrap();
        assert_eq!(tiny.start(), (0, 1));
        assert_eq!(tiny.end(), (0, 0));
        assert!(grid.resize(1, 1).is_err());
    }
}
