//! Preset wall layouts that can be stretched onto a grid of any size.

use rand::Rng;

use super::Grid;
use crate::error::{MazeError, Result};

/// Row-major wall mask, `true` meaning wall.
pub type WallPattern = Vec<Vec<bool>>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Template {
    Empty,
    Spiral,
    Checkerboard,
    /// Independent walls with the given probability, clamped to `0.0..=1.0`.
    Random { density: f64 },
    Rooms,
    Concentric,
}

impl Template {
    pub const ALL: [Template; 6] = [
        Template::Empty,
        Template::Spiral,
        Template::Checkerboard,
        Template::Random { density: 0.3 },
        Template::Rooms,
        Template::Concentric,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Template::Empty => "empty",
            Template::Spiral => "spiral",
            Template::Checkerboard => "checkerboard",
            Template::Random { .. } => "random",
            Template::Rooms => "rooms",
            Template::Concentric => "concentric",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Template::Empty => "An empty grid with no walls.",
            Template::Spiral => "A spiral-shaped wall winding in towards the center.",
            Template::Checkerboard => "Alternating walls that leave no orthogonal corridors.",
            Template::Random { .. } => "Randomly placed walls.",
            Template::Rooms => "Solid blocks separated by a lattice of corridors.",
            Template::Concentric => "Concentric rings with passages at the cardinal directions.",
        }
    }

    /// Build the template at its native size.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> WallPattern {
        match *self {
            Template::Empty => vec![vec![false; 20]; 20],
            Template::Spiral => spiral(21),
            Template::Checkerboard => checkerboard(20),
            Template::Random { density } => random_walls(20, 20, density, rng),
            Template::Rooms => rooms(20),
            Template::Concentric => concentric(21),
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Template::Empty => write!(f, "Empty Grid"),
            Template::Spiral => write!(f, "Spiral Maze"),
            Template::Checkerboard => write!(f, "Checkerboard Pattern"),
            Template::Random { density } => write!(f, "Random Walls ({:.0}%)", density * 100.0),
            Template::Rooms => write!(f, "Rooms and Corridors"),
            Template::Concentric => write!(f, "Concentric Rings"),
        }
    }
}

fn spiral(size: usize) -> WallPattern {
    let mut walls = vec![vec![false; size]; size];
    // 0: right, 1: down, 2: left, 3: up
    let mut direction = 0;
    let (mut row, mut col) = (0, 0);
    let mut steps = size.saturating_sub(1);
    let mut step_count = 0;

    while steps > 0 {
        walls[row][col] = true;
        match direction {
            0 => col += 1,
            1 => row += 1,
            2 => col -= 1,
            _ => row -= 1,
        }
        step_count += 1;

        if step_count == steps {
            direction = (direction + 1) % 4;
            step_count = 0;
            // Arms shrink by two after every right+down or left+up pair,
            // leaving a one-cell corridor between neighbouring arms
            if direction == 0 || direction == 2 {
                steps = steps.saturating_sub(2);
            }
        }
    }
    walls
}

fn checkerboard(size: usize) -> WallPattern {
    (0..size)
        .map(|r| (0..size).map(|c| (r + c) % 2 == 0).collect())
        .collect()
}

fn random_walls<R: Rng + ?Sized>(rows: usize, cols: usize, density: f64, rng: &mut R) -> WallPattern {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.random_bool(density)).collect())
        .collect()
}

fn rooms(size: usize) -> WallPattern {
    let mut walls = vec![vec![true; size]; size];
    for r in (2..size).step_by(4) {
        walls[r].iter_mut().for_each(|w| *w = false);
    }
    for c in (2..size).step_by(4) {
        walls.iter_mut().for_each(|row| row[c] = false);
    }
    walls
}

fn concentric(size: usize) -> WallPattern {
    let center = size / 2;
    let mut walls = (0..size)
        .map(|r| {
            (0..size)
                .map(|c| r.abs_diff(center).max(c.abs_diff(center)) % 2 == 0)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    // Punch a door through every wall ring on each side
    for ring in (2..=center).step_by(2) {
        walls[center - ring][center] = false;
        walls[center + ring.min(size - 1 - center)][center] = false;
        walls[center][center - ring] = false;
        walls[center][center + ring.min(size - 1 - center)] = false;
    }
    walls
}

/// Stretch `pattern` over a copy of `grid` by nearest-neighbour sampling.
///
/// Walls and transient fields of the copy are replaced; endpoints are never
/// walled.
pub fn apply_template(grid: &Grid, pattern: &WallPattern) -> Result<Grid> {
    let pattern_rows = pattern.len();
    let pattern_cols = pattern.first().map_or(0, Vec::len);
    if pattern_cols == 0 || pattern.iter().any(|row| row.len() != pattern_cols) {
        return Err(MazeError::MalformedMaze {
            reason: "template pattern must be a non-empty rectangle".to_string(),
        });
    }

    let (rows, cols) = (grid.rows(), grid.cols());
    let mut applied = grid.clone();
    applied.cells_mut().for_each(|cell| {
        let tr = cell.row * pattern_rows / rows;
        let tc = cell.col * pattern_cols / cols;
        cell.clear_transient();
        cell.is_wall = pattern[tr][tc] && !cell.is_endpoint();
    });
    Ok(applied)
}
