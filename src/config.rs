use std::{path::PathBuf, str::FromStr, time::Duration};

use crate::{
    error::{MazeError, Result},
    maze::{Coord, Grid},
};

/// Settings for the terminal front-end and the profiling binary.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Grid height in cells
    pub rows: usize,
    /// Grid width in cells
    pub cols: usize,
    pub start: Coord,
    pub end: Coord,
    /// Delay between two replayed snapshots
    pub animation_delay: Duration,
    /// Seed for the maze generators; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Directory the log file is written to
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 25,
            cols: 40,
            // Even coordinates so every generator's carving lattice reaches both
            start: (4, 4),
            end: (20, 34),
            animation_delay: Duration::from_millis(50),
            seed: None,
            log_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub const ROWS_VAR: &'static str = "MAZEVIZ_ROWS";
    pub const COLS_VAR: &'static str = "MAZEVIZ_COLS";
    pub const SEED_VAR: &'static str = "MAZEVIZ_SEED";
    pub const DELAY_VAR: &'static str = "MAZEVIZ_DELAY_MS";
    pub const LOG_DIR_VAR: &'static str = "MAZEVIZ_LOG_DIR";

    /// Defaults overridden by `MAZEVIZ_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    /// Values that fail to parse are errors rather than silently ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();
        if let Some(rows) = parse_var(&lookup, Self::ROWS_VAR)? {
            config.rows = rows;
        }
        if let Some(cols) = parse_var(&lookup, Self::COLS_VAR)? {
            config.cols = cols;
        }
        config.seed = parse_var(&lookup, Self::SEED_VAR)?.or(config.seed);
        if let Some(ms) = parse_var(&lookup, Self::DELAY_VAR)? {
            config.animation_delay = Duration::from_millis(ms);
        }
        if let Some(dir) = lookup(Self::LOG_DIR_VAR) {
            config.log_dir = PathBuf::from(dir);
        }

        // Keep the default endpoints usable on smaller grids
        let defaults = Config::default();
        if (config.rows, config.cols) != (defaults.rows, defaults.cols) {
            let resized = defaults.initial_grid()?.resize(config.rows, config.cols)?;
            config.start = resized.start();
            config.end = resized.end();
        }
        config.validate()?;
        Ok(config)
    }

    /// Checks dimensions and endpoints.
    pub fn validate(&self) -> Result<()> {
        self.initial_grid().map(|_| ())
    }

    /// Empty grid described by this configuration.
    pub fn initial_grid(&self) -> Result<Grid> {
        Grid::new(self.rows, self.cols, self.start, self.end)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| MazeError::InvalidConfig { key, value }),
    }
}
