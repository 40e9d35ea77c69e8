use crossterm::style::{Color, Stylize};

use std::fmt;

use super::Coord;

/// Sentinel for cost fields that have not been reached yet.
pub const INFINITY: u32 = u32::MAX;

/// One grid position: structural flags, transient search markers, and the
/// cost fields the pathfinders write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub is_wall: bool,
    pub is_start: bool,
    pub is_end: bool,
    /// Set while an algorithm runs; cleared before every run.
    pub is_visited: bool,
    /// Set on the reconstructed shortest path.
    pub is_path: bool,
    /// Dijkstra tentative distance.
    pub distance: u32,
    /// A* cost from the start.
    pub g_score: u32,
    /// A* `g_score + h_score`.
    pub f_score: u32,
    /// Manhattan estimate to the end cell, 0 when unused.
    pub h_score: u32,
    /// Coordinate of the cell this one was reached from. A lookup key into
    /// the same grid, nothing more.
    pub previous_node: Option<Coord>,
}

impl Cell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    pub fn new(row: usize, col: usize) -> Self {
        Cell {
            row,
            col,
            is_wall: false,
            is_start: false,
            is_end: false,
            is_visited: false,
            is_path: false,
            distance: INFINITY,
            g_score: INFINITY,
            f_score: INFINITY,
            h_score: 0,
            previous_node: None,
        }
    }

    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }

    /// Start or end cell.
    pub fn is_endpoint(&self) -> bool {
        self.is_start || self.is_end
    }

    /// Reset the markers and cost fields an algorithm run may have written.
    pub fn clear_transient(&mut self) {
        self.is_visited = false;
        self.is_path = false;
        self.distance = INFINITY;
        self.g_score = INFINITY;
        self.f_score = INFINITY;
        self.h_score = 0;
        self.previous_node = None;
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Endpoints win over path, path over visited.
        let styled_symbol = if self.is_start {
            "🟩".with(Color::Green)
        } else if self.is_end {
            "🟥".with(Color::Red)
        } else if self.is_wall {
            "⬜".with(Color::DarkGrey)
        } else if self.is_path {
            "🟨".with(Color::Yellow)
        } else if self.is_visited {
            "* ".with(Color::Blue)
        } else {
            "  ".with(Color::Reset)
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Cell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
