//! Snapshot recording shared by the generators and solvers.

mod history;

pub use history::StepPlayer;

use crate::maze::Grid;

/// Append-only sink of full grid snapshots taken during one algorithm run.
///
/// A disabled recorder never allocates; algorithms call [`StepRecorder::record`]
/// unconditionally and the recorder decides whether to keep the copy.
#[derive(Debug)]
pub struct StepRecorder {
    steps: Option<Vec<Grid>>,
}

impl StepRecorder {
    pub fn new() -> Self {
        StepRecorder {
            steps: Some(Vec::new()),
        }
    }

    /// Recorder that drops every snapshot without copying the grid.
    pub fn disabled() -> Self {
        StepRecorder { steps: None }
    }

    pub fn with_enabled(enabled: bool) -> Self {
        if enabled { Self::new() } else { Self::disabled() }
    }

    pub fn is_enabled(&self) -> bool {
        self.steps.is_some()
    }

    /// Appends a deep copy of `grid` if recording is enabled.
    pub fn record(&mut self, grid: &Grid) {
        if let Some(steps) = &mut self.steps {
            steps.push(grid.clone());
        }
    }

    /// Number of snapshots taken so far.
    pub fn len(&self) -> usize {
        self.steps.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_steps(self) -> Vec<Grid> {
        self.steps.unwrap_or_default()
    }
}

impl Default for StepRecorder {
    fn default() -> Self {
        Self::new()
    }
}
