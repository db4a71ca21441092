#![cfg(feature = "std")]
//! Minimal `log` backend for the binaries.

use std::env;
use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level, e.g. `BROADSIDE_LOG=debug`.
pub const LOG_ENV: &str = "BROADSIDE_LOG";

/// Writes records to stderr so stdout stays free for boards and JSON.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = record.target().trim_start_matches("broadside::");
        let _ = writeln!(
            std::io::stderr().lock(),
            "[{:<5} {}] {}",
            record.level(),
            target,
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the logger. The level comes from `BROADSIDE_LOG` when it parses,
/// otherwise `default`.
pub fn init_logging_with(default: LevelFilter) {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(default);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

/// Install the logger at `info` unless `BROADSIDE_LOG` says otherwise.
pub fn init_logging() {
    init_logging_with(LevelFilter::Info);
}
