use super::{SearchOutcome, mark_visited, reconstruct_path};
use crate::{
    maze::{Coord, Grid, INFINITY},
    steps::StepRecorder,
};

/// Dijkstra over every open cell, extracting the minimum by a linear sort of
/// the unvisited list each round.
pub(super) fn solve_dijkstra(grid: &mut Grid, recorder: &mut StepRecorder) -> SearchOutcome {
    let start = grid.start();
    let end = grid.end();

    grid.cell_mut(start).distance = 0;
    recorder.record(grid);

    let mut unvisited: Vec<Coord> = grid
        .cells()
        .filter(|cell| !cell.is_wall)
        .map(|cell| cell.coord())
        .collect();
    let mut visited_nodes = 0;

    while !unvisited.is_empty() {
        unvisited.sort_by_key(|&c| grid[c].distance);
        let current = unvisited.remove(0);
        let distance = grid[current].distance;

        // Everything left is unreachable
        if distance == INFINITY {
            break;
        }

        if current == end {
            let path_length = reconstruct_path(grid, recorder);
            return SearchOutcome {
                visited_nodes,
                path_length,
            };
        }

        mark_visited(grid, current, recorder, &mut visited_nodes);

        let new_distance = distance + 1; // Uniform cost for each step
        let neighbors = grid.open_neighbors(current).collect::<Vec<_>>();
        for neighbor in neighbors {
            let cell = grid.cell_mut(neighbor);
            if new_distance < cell.distance {
                cell.distance = new_distance;
                cell.previous_node = Some(current);
            }
        }
    }

    SearchOutcome {
        visited_nodes,
        path_length: 0,
    }
}
