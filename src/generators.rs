//! Maze generators. Each one carves passages into an all-walls working copy
//! of the caller's grid and records a snapshot after every carving step.

use rand::{Rng, SeedableRng, rngs::StdRng};

mod kruskal;
mod prim;
mod recur_backtrack;

use kruskal::randomized_kruskal;
use prim::randomized_prim;
use recur_backtrack::recursive_backtrack;

use crate::{
    error::{MazeError, Result},
    maze::{Coord, Grid},
    steps::StepRecorder,
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    RecurBacktrack,
    Prim,
    Kruskal,
}

impl Generator {
    pub const ALL: [Generator; 3] = [Generator::RecurBacktrack, Generator::Prim, Generator::Kruskal];

    /// Identifier used by front-ends and persisted settings.
    pub fn id(&self) -> &'static str {
        match self {
            Generator::RecurBacktrack => "recursiveBacktracking",
            Generator::Prim => "prims",
            Generator::Kruskal => "kruskals",
        }
    }

    /// Forgiving lookup for callers that prefer a no-op over an error: unknown
    /// identifiers are logged and yield `None`, in which case the caller
    /// should fall back to [`passthrough`].
    pub fn parse_lenient(name: &str) -> Option<Generator> {
        match name.parse() {
            Ok(generator) => Some(generator),
            Err(err) => {
                tracing::warn!("{err}, leaving the grid unchanged");
                None
            }
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Generator::ALL
            .into_iter()
            .find(|g| g.id() == s)
            .ok_or_else(|| MazeError::UnknownAlgorithm { name: s.to_string() })
    }
}

/// Final carved grid plus every intermediate snapshot, oldest first.
#[derive(Debug, Clone)]
pub struct Generation {
    pub grid: Grid,
    pub steps: Vec<Grid>,
}

/// Result for an unrecognised generator: the input grid unchanged, with a
/// single snapshot of it.
pub fn passthrough(grid: &Grid) -> Generation {
    Generation {
        grid: grid.clone(),
        steps: vec![grid.clone()],
    }
}

/// Carve a maze into a copy of `grid` using `generator`.
///
/// The caller's grid is not touched. The working copy starts as all walls
/// with `start` and `end` open; the first snapshot shows that state. Visited
/// markers used while carving are cleared before returning so the grid is
/// ready for pathfinding.
pub fn generate_maze<R: Rng + ?Sized>(
    grid: &Grid,
    generator: Generator,
    start: Coord,
    end: Coord,
    rng: &mut R,
) -> Result<Generation> {
    let mut working = grid.clone();
    working.set_endpoints(start, end)?;
    working.cells_mut().for_each(|cell| {
        cell.clear_transient();
        cell.is_wall = !cell.is_endpoint();
    });

    tracing::debug!(
        "[generate] {} on {}x{} grid, start={:?} end={:?}",
        generator,
        working.rows(),
        working.cols(),
        start,
        end
    );

    let mut recorder = StepRecorder::new();
    recorder.record(&working);

    match generator {
        Generator::RecurBacktrack => recursive_backtrack(&mut working, rng, &mut recorder),
        Generator::Prim => randomized_prim(&mut working, rng, &mut recorder),
        Generator::Kruskal => randomized_kruskal(&mut working, rng, &mut recorder),
    }

    // Carving markers must not leak into the pathfinding phase
    working.cells_mut().for_each(|cell| cell.is_visited = false);

    tracing::info!("[generate] {} finished with {} steps", generator, recorder.len());
    Ok(Generation {
        grid: working,
        steps: recorder.into_steps(),
    })
}
