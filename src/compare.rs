//! Side-by-side solver runs for the comparison view.

use std::time::{Duration, Instant};

use crate::{
    error::Result,
    maze::{Coord, Grid},
    solvers::{Solver, find_path},
};

/// Metrics shown next to a solver's result.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceData {
    pub visited_nodes: usize,
    pub path_length: usize,
    /// Wall-clock time around the solver call, measured by the caller.
    pub execution_time: Duration,
}

#[derive(Debug, Clone)]
pub struct ComparisonEntry {
    pub solver: Solver,
    pub grid: Grid,
    pub performance: PerformanceData,
}

/// Run every solver in `solvers` on its own copy of `grid` without recording
/// steps, timing each call.
pub fn run_comparison(grid: &Grid, start: Coord, end: Coord, solvers: &[Solver]) -> Result<Vec<ComparisonEntry>> {
    let mut base = grid.clone();
    base.clear_path();

    solvers
        .iter()
        .map(|&solver| {
            let started = Instant::now();
            let result = find_path(&base, start, end, solver, false)?;
            let execution_time = started.elapsed();

            tracing::debug!(
                "[compare] {} visited {} cells in {:?}",
                solver,
                result.visited_nodes_count,
                execution_time
            );
            Ok(ComparisonEntry {
                solver,
                grid: result.grid,
                performance: PerformanceData {
                    visited_nodes: result.visited_nodes_count,
                    path_length: result.path_length,
                    execution_time,
                },
            })
        })
        .collect()
}
