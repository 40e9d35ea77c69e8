use std::collections::HashSet;

use super::{SearchOutcome, mark_visited, reconstruct_path};
use crate::{
    maze::{Coord, Grid, manhattan},
    steps::StepRecorder,
};

/// A* with the Manhattan heuristic and unit edge costs.
///
/// The open set is a plain list stably sorted by `f_score` before every pop,
/// so ties go to whichever entry was already ahead.
pub(super) fn solve_astar(grid: &mut Grid, recorder: &mut StepRecorder) -> SearchOutcome {
    let start = grid.start();
    let end = grid.end();

    grid.cells_mut()
        .for_each(|cell| cell.h_score = manhattan(cell.coord(), end));
    let start_cell = grid.cell_mut(start);
    start_cell.g_score = 0;
    start_cell.f_score = start_cell.h_score;
    recorder.record(grid);

    let mut open: Vec<Coord> = vec![start];
    let mut closed: HashSet<Coord> = HashSet::new();
    let mut visited_nodes = 0;

    while !open.is_empty() {
        open.sort_by_key(|&c| grid[c].f_score);
        let current = open.remove(0);

        if current == end {
            let path_length = reconstruct_path(grid, recorder);
            return SearchOutcome {
                visited_nodes,
                path_length,
            };
        }

        closed.insert(current);
        mark_visited(grid, current, recorder, &mut visited_nodes);

        let tentative_g = grid[current].g_score.saturating_add(1); // Uniform cost for each step
        let neighbors = grid
            .open_neighbors(current)
            .filter(|c| !closed.contains(c))
            .collect::<Vec<_>>();

        for neighbor in neighbors {
            let cell = grid.cell_mut(neighbor);
            if tentative_g >= cell.g_score {
                continue;
            }
            cell.previous_node = Some(current);
            cell.g_score = tentative_g;
            cell.f_score = tentative_g.saturating_add(cell.h_score);
            if !open.contains(&neighbor) {
                open.push(neighbor);
            }
        }
    }

    // Open set exhausted without reaching the end
    SearchOutcome {
        visited_nodes,
        path_length: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::tests::open_grid;

    #[test]
    fn test_straight_corridor() {
        let mut grid = open_grid(3, 7, (1, 0), (1, 6));
        grid.clear_path();
        let outcome = solve_astar(&mut grid, &mut StepRecorder::disabled());
        assert_eq!(outcome.path_length, 6);
        // The heuristic keeps the search on the middle row
        assert_eq!(outcome.visited_nodes, 5);
        assert!((0..7).all(|c| grid[(1, c)].is_path));
    }

    #[test]
    fn test_heuristic_written_to_cells() {
        let mut grid = open_grid(4, 4, (0, 0), (3, 3));
        solve_astar(&mut grid, &mut StepRecorder::disabled());
        assert_eq!(grid[(0, 0)].h_score, 6);
        assert_eq!(grid[(3, 3)].h_score, 0);
        assert_eq!(grid[(0, 0)].g_score, 0);
        assert_eq!(grid[(3, 3)].g_score, 6);
        assert_eq!(grid[(3, 3)].f_score, 6);
    }

    #[test]
    fn test_detour_around_wall() {
        // S . #
        // . . #
        // # . E
        let walls = vec![
            vec![false, false, true],
            vec![false, false, true],
            vec![true, false, false],
        ];
        let mut grid = Grid::from_walls(&walls, (0, 0), (2, 2)).unwrap();
        let outcome = solve_astar(&mut grid, &mut StepRecorder::disabled());
        assert_eq!(outcome.path_length, 4);
        assert!(grid[(2, 1)].is_path);
        assert!(grid[(1, 1)].is_path);
    }
}
