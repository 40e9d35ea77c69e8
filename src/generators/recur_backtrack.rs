use crate::{
    maze::{Grid, midpoint},
    steps::StepRecorder,
};
use rand::Rng;

/// Depth-first carving from the start cell on a 2-cell pitch.
///
/// Every cell reachable on the pitch is visited exactly once and each visit
/// opens exactly one connecting wall, so the passages form a tree.
pub fn recursive_backtrack<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, recorder: &mut StepRecorder) {
    let start = grid.start();
    grid.cell_mut(start).is_visited = true;

    // The stack keeps only carved cells; its top is the cell being extended
    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let neighbors = grid
            .neighbors(cell, 2)
            .filter(|&c| !grid[c].is_visited)
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
            // Dead end, backtrack
            stack.pop();
            if !stack.is_empty() {
                recorder.record(grid);
            }
            continue;
        }

        let neighbor = neighbors[rng.random_range(0..neighbors.len())];
        grid.cell_mut(midpoint(cell, neighbor)).is_wall = false;

        let next = grid.cell_mut(neighbor);
        next.is_wall = false;
        next.is_visited = true;
        stack.push(neighbor);

        recorder.record(grid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{get_rng, tests::assert_perfect};

    fn all_walls(rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::new(rows, cols, (0, 0), (rows - 1, cols - 1)).unwrap();
        grid.cells_mut().for_each(|c| c.is_wall = !c.is_endpoint());
        grid
    }

    #[test]
    fn test_carves_perfect_maze() {
        for seed in 0..5 {
            let mut grid = all_walls(9, 13);
            let mut recorder = StepRecorder::new();
            recursive_backtrack(&mut grid, &mut get_rng(Some(seed)), &mut recorder);
            assert_perfect(&grid);

            // 5 x 7 lattice cells joined by lattice - 1 removed walls
            let open = grid.cells().filter(|c| !c.is_wall).count();
            assert_eq!(open, 35 + 34);
        }
    }

    #[test]
    fn test_step_cadence() {
        let mut grid = all_walls(5, 5);
        let mut recorder = StepRecorder::new();
        recursive_backtrack(&mut grid, &mut get_rng(Some(9)), &mut recorder);
        // 9 lattice cells: 8 carve steps, 9 pops of which the last is silent
        assert_eq!(recorder.len(), 8 + 8);
    }

    #[test]
    fn test_odd_start_uses_its_own_lattice() {
        let mut grid = Grid::new(7, 7, (1, 1), (5, 5)).unwrap();
        grid.cells_mut().for_each(|c| c.is_wall = !c.is_endpoint());
        recursive_backtrack(&mut grid, &mut get_rng(Some(2)), &mut StepRecorder::disabled());
        assert_perfect(&grid);
        assert!(grid[(0, 0)].is_wall);
        assert!(!grid[(3, 3)].is_wall);
    }
}
