//! JSON transport format for mazes.
//!
//! Only walls and endpoints travel; every transient field is rebuilt on
//! import no matter what the document carries.

use serde::{Deserialize, Serialize};

use super::{Coord, Grid};
use crate::error::{MazeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRecord {
    #[serde(default)]
    pub is_wall: bool,
    #[serde(default)]
    pub is_start: bool,
    #[serde(default)]
    pub is_end: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

/// Exported maze as written to disk by front-ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MazeDocument {
    pub grid: Vec<Vec<CellRecord>>,
    pub start_cell: [usize; 2],
    pub end_cell: [usize; 2],
    pub grid_size: GridSize,
}

/// Lenient mirror of [`MazeDocument`] so that a missing field is reported by
/// name instead of as a generic decode failure.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    grid: Option<Vec<Vec<CellRecord>>>,
    start_cell: Option<[usize; 2]>,
    end_cell: Option<[usize; 2]>,
    grid_size: Option<GridSize>,
}

fn missing(field: &str) -> MazeError {
    MazeError::MalformedMaze {
        reason: format!("missing field '{field}'"),
    }
}

/// Snapshot the structural part of a grid.
pub fn export_maze(grid: &Grid) -> MazeDocument {
    let records = grid
        .row_slices()
        .map(|row| {
            row.iter()
                .map(|cell| CellRecord {
                    is_wall: cell.is_wall,
                    is_start: cell.is_start,
                    is_end: cell.is_end,
                })
                .collect()
        })
        .collect();
    let (start, end) = (grid.start(), grid.end());
    MazeDocument {
        grid: records,
        start_cell: [start.0, start.1],
        end_cell: [end.0, end.1],
        grid_size: GridSize {
            rows: grid.rows(),
            cols: grid.cols(),
        },
    }
}

pub fn to_json(grid: &Grid) -> Result<String> {
    Ok(serde_json::to_string(&export_maze(grid))?)
}

/// Decode a maze document into a fresh grid.
///
/// Start/end flags come from `startCell`/`endCell`, not from the per-cell
/// records, and the endpoint cells are always open.
pub fn import_maze(json: &str) -> Result<Grid> {
    let raw: RawDocument = serde_json::from_str(json)?;
    let records = raw.grid.ok_or_else(|| missing("grid"))?;
    let start_cell = raw.start_cell.ok_or_else(|| missing("startCell"))?;
    let end_cell = raw.end_cell.ok_or_else(|| missing("endCell"))?;
    let size = raw.grid_size.ok_or_else(|| missing("gridSize"))?;

    if records.len() != size.rows {
        return Err(MazeError::MalformedMaze {
            reason: format!(
                "gridSize declares {} rows but grid has {}",
                size.rows,
                records.len()
            ),
        });
    }
    if let Some((r, row)) = records.iter().enumerate().find(|(_, row)| row.len() != size.cols) {
        return Err(MazeError::MalformedMaze {
            reason: format!("row {r} has {} cells, gridSize declares {}", row.len(), size.cols),
        });
    }

    let walls = records
        .iter()
        .map(|row| row.iter().map(|cell| cell.is_wall).collect())
        .collect::<Vec<Vec<bool>>>();
    let start: Coord = (start_cell[0], start_cell[1]);
    let end: Coord = (end_cell[0], end_cell[1]);
    let grid = Grid::from_walls(&walls, start, end)?;

    tracing::debug!(
        "[io] imported {}x{} maze, start={:?} end={:?}",
        grid.rows(),
        grid.cols(),
        start,
        end
    );
    Ok(grid)
}
