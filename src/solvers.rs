//! Shortest-path solvers over a grid's open cells.

mod astar;
mod dijkstra;

use std::collections::HashSet;

use astar::solve_astar;
use dijkstra::solve_dijkstra;

use crate::{
    error::{MazeError, Result},
    maze::{Coord, Grid},
    steps::StepRecorder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    AStar,
    Dijkstra,
}

impl Solver {
    pub const ALL: [Solver; 2] = [Solver::AStar, Solver::Dijkstra];

    /// Identifier used by front-ends and persisted settings.
    pub fn id(&self) -> &'static str {
        match self {
            Solver::AStar => "aStar",
            Solver::Dijkstra => "dijkstra",
        }
    }

    /// Forgiving lookup: unknown identifiers are logged and resolve to A*.
    pub fn parse_lenient(name: &str) -> Solver {
        name.parse().unwrap_or_else(|err| {
            tracing::warn!("{err}, falling back to {}", Solver::AStar);
            Solver::AStar
        })
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::AStar => write!(f, "A* Search"),
            Solver::Dijkstra => write!(f, "Dijkstra's Algorithm"),
        }
    }
}

impl std::str::FromStr for Solver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Solver::ALL
            .into_iter()
            .find(|solver| solver.id() == s)
            .ok_or_else(|| MazeError::UnknownAlgorithm { name: s.to_string() })
    }
}

/// Outcome of one solver run. A `path_length` of 0 means no path was found.
#[derive(Debug, Clone)]
pub struct PathResult {
    pub grid: Grid,
    pub steps: Vec<Grid>,
    /// Cells expanded during the search, start and end excluded.
    pub visited_nodes_count: usize,
    /// Edges on the reconstructed path.
    pub path_length: usize,
}

/// Counters a solver hands back alongside its mutated working grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct SearchOutcome {
    visited_nodes: usize,
    path_length: usize,
}

/// Find a shortest path from `start` to `end` on a copy of `grid`.
///
/// The caller's grid is left alone; the returned grid carries the visited
/// and path markers. With `record_steps == false` no snapshot is ever copied,
/// which is what comparison runs rely on.
pub fn find_path(
    grid: &Grid,
    start: Coord,
    end: Coord,
    solver: Solver,
    record_steps: bool,
) -> Result<PathResult> {
    grid.check_endpoints(start, end)?;
    if grid[start].is_wall || grid[end].is_wall {
        return Err(MazeError::InvalidEndpoints {
            start,
            end,
            reason: "endpoint cannot be placed on a wall",
        });
    }

    let mut working = grid.clone();
    working.set_endpoints(start, end)?;
    working.clear_path();

    tracing::debug!(
        "[solve] {} on {}x{} grid, start={:?} end={:?}",
        solver,
        working.rows(),
        working.cols(),
        start,
        end
    );

    let mut recorder = StepRecorder::with_enabled(record_steps);
    let outcome = match solver {
        Solver::AStar => solve_astar(&mut working, &mut recorder),
        Solver::Dijkstra => solve_dijkstra(&mut working, &mut recorder),
    };

    if outcome.path_length == 0 {
        tracing::info!(
            "[solve] {} found no path after visiting {} cells",
            solver,
            outcome.visited_nodes
        );
    } else {
        tracing::info!(
            "[solve] {} found a path of length {} after visiting {} cells",
            solver,
            outcome.path_length,
            outcome.visited_nodes
        );
    }

    Ok(PathResult {
        grid: working,
        steps: recorder.into_steps(),
        visited_nodes_count: outcome.visited_nodes,
        path_length: outcome.path_length,
    })
}

/// Marks an expanded cell as visited and snapshots it. Endpoints are
/// neither marked nor counted.
fn mark_visited(grid: &mut Grid, coord: Coord, recorder: &mut StepRecorder, visited: &mut usize) {
    let cell = grid.cell_mut(coord);
    if cell.is_endpoint() {
        return;
    }
    cell.is_visited = true;
    *visited += 1;
    recorder.record(grid);
}

/// Walk the back-references from the end cell to the start, marking the
/// path. One snapshot per cell walked, except the end cell itself. Returns
/// the number of edges on the path.
fn reconstruct_path(grid: &mut Grid, recorder: &mut StepRecorder) -> usize {
    let end = grid.end();
    let mut seen = HashSet::new();
    let mut current = Some(end);
    let mut cells = 0;

    while let Some(coord) = current {
        if !seen.insert(coord) {
            break; // Malformed back-references must not loop forever
        }
        grid.cell_mut(coord).is_path = true;
        cells += 1;
        if coord != end {
            recorder.record(grid);
        }
        current = grid[coord].previous_node;
    }

    cells - 1
}
