use rand::Rng;

use crate::{
    maze::{Coord, Grid, midpoint},
    steps::StepRecorder,
};

/// Frontier entry: a cell two steps outside the carved region, tagged with
/// the carved cell it would be connected to.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    cell: Coord,
    from: Coord,
}

/// Randomized Prim's: grow the carved region from the start cell by opening
/// a uniformly random frontier entry at each step.
pub fn randomized_prim<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, recorder: &mut StepRecorder) {
    let start = grid.start();
    grid.cell_mut(start).is_visited = true;

    let mut frontiers = grid
        .neighbors(start, 2)
        .map(|cell| Frontier { cell, from: start })
        .collect::<Vec<_>>();

    while !frontiers.is_empty() {
        // Randomly select an entry from the frontiers
        let idx = rng.random_range(0..frontiers.len());
        let Frontier { cell, from } = frontiers.swap_remove(idx);

        // Reached from another side already
        if grid[cell].is_visited {
            continue;
        }

        let carved = grid.cell_mut(cell);
        carved.is_wall = false;
        carved.is_visited = true;
        grid.cell_mut(midpoint(from, cell)).is_wall = false;

        // Add the unvisited cells around the new one to the frontiers
        frontiers.extend(
            grid.neighbors(cell, 2)
                .filter(|&n| !grid[n].is_visited)
                .map(|n| Frontier { cell: n, from: cell }),
        );

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
    fn test_randomized_prim() {
        let mut grid = all_walls(7, 7);
        let mut recorder = StepRecorder::new();
        randomized_prim(&mut grid, &mut get_rng(Some(0)), &mut recorder);
        // Check that the start cell is open
        assert!(!grid[(0, 0)].is_wall);
        // Every lattice cell besides the start produced exactly one step
        assert_eq!(recorder.len(), 16 - 1);
        // Check that there are some walls left in the maze
        assert!(grid.cells().any(|c| c.is_wall));
        assert_perfect(&grid);
    }

    #[test]
    fn test_spanning_tree_across_seeds() {
        for seed in 0..8 {
            let mut grid = all_walls(11, 9);
            randomized_prim(&mut grid, &mut get_rng(Some(seed)), &mut StepRecorder::disabled());
            assert_perfect(&grid);
            let lattice = grid
                .cells()
                .filter(|c| c.row % 2 == 0 && c.col % 2 == 0)
                .all(|c| !c.is_wall && c.is_visited);
            assert!(lattice);
        }
    }
}
