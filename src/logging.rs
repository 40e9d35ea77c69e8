use std::path::Path;

use tracing::level_filters::LevelFilter;
use tracing_appender::{non_blocking::WorkerGuard, rolling::RollingFileAppender};
use tracing_subscriber::filter::{Builder, EnvFilter};

use crate::error::{MazeError, Result};

/// Name of the log file created in the configured log directory.
pub const LOG_FILE_NAME: &str = "mazeviz.log";

/// Install a global subscriber that writes to `<dir>/mazeviz.log`, keeping the
/// terminal free for the maze itself. Directives come from `RUST_LOG`; when it
/// is unset or empty everything at `info` and above is logged.
///
/// Only binaries call this. Keep the returned guard alive for as long as
/// logs should be flushed.
pub fn init_logging(dir: &Path) -> Result<WorkerGuard> {
    let appender = open_log_file(dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter_builder().from_env_lossy())
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(guard)
}

fn filter_builder() -> Builder {
    EnvFilter::builder().with_default_directive(LevelFilter::INFO.into())
}

/// Creates `dir` if needed and opens the never-rotated log file inside it.
fn open_log_file(dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
        .map_err(|err| MazeError::Io {
            operation: "open log file",
            source: std::io::Error::other(err),
        })
}
