//! Grid algorithm engine for maze visualizers.
//!
//! Generators ([`generators`]) carve a maze into a copy of the caller's grid;
//! solvers ([`solvers`]) search a copy for a shortest path. Both hand back the
//! final grid together with every intermediate snapshot so a front-end can
//! replay the run, and the solvers also report visited-cell and path-length
//! counters.

pub mod compare;
pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod solvers;
pub mod steps;

pub use error::{MazeError, Result};
pub use maze::{Cell, Coord, Grid};
