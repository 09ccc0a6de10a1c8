use std::io;
use std::sync::Mutex;

use slog::{Drain, Level, LevelFilter, Logger, o};

/// Maps the `--quiet` / `--verbose` flags to a log level. Quiet wins.
pub fn log_level(quiet: bool, verbose: bool) -> Level {
    if quiet {
        Level::Error
    } else if verbose {
        Level::Debug
    } else {
        Level::Info
    }
}

/// Builds the process logger: JSON records on stderr, filtered at `level`.
/// Stdout is left to user-facing messages.
pub fn get_logger(level: Level) -> Logger {
    let drain = slog_json::Json::default(io::stderr()).fuse();
    let drain = Mutex::new(drain).fuse();
    let drain = LevelFilter::new(drain, level).fuse();
    Logger::root(drain, o!("app" => env!("CARGO_PKG_NAME")))
}

/// A logger that drops everything, for tests and library callers.
pub fn discard_logger() -> Logger {
    Logger::root(slog::Discard, o!())
}
