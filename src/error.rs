//! Error type shared by the grid engine and its front-ends.

use std::fmt;

use crate::maze::Coord;

/// Everything that can go wrong when building grids, dispatching algorithms,
/// or decoding a persisted maze.
#[derive(Debug)]
pub enum MazeError {
    /// Algorithm identifier outside the supported set
    UnknownAlgorithm {
        /// The identifier as supplied by the caller
        name: String,
    },

    /// Start/end coordinates that no algorithm can work with
    InvalidEndpoints {
        /// Start coordinate as supplied
        start: Coord,
        /// End coordinate as supplied
        end: Coord,
        /// What is wrong with them
        reason: &'static str,
    },

    /// A grid must have at least one row and one column
    InvalidDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Persisted maze document is structurally invalid
    MalformedMaze {
        /// Description of the defect
        reason: String,
    },

    /// Persisted maze document is not valid JSON
    Json {
        /// Underlying decoder error
        source: serde_json::Error,
    },

    /// Configuration value could not be parsed
    InvalidConfig {
        /// Name of the setting
        key: &'static str,
        /// Raw value that failed to parse
        value: String,
    },

    /// I/O failure in one of the binaries
    Io {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAlgorithm { name } => write!(f, "unknown algorithm '{name}'"),
            Self::InvalidEndpoints { start, end, reason } => write!(
                f,
                "invalid endpoints start={start:?} end={end:?}: {reason}"
            ),
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "invalid grid dimensions {rows}x{cols}")
            }
            Self::MalformedMaze { reason } => write!(f, "invalid maze data format: {reason}"),
            Self::Json { source } => write!(f, "failed to import maze data: {source}"),
            Self::InvalidConfig { key, value } => {
                write!(f, "invalid value '{value}' for setting {key}")
            }
            Self::Io { operation, source } => write!(f, "failed to {operation}: {source}"),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for MazeError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MazeError>;
