#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    // stderr keeps stdout free for the boards and the sim summary.
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Initialize logging with a level taken from the `SEA_BATTLE_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid.
pub fn init_logging() {
    init_logging_with(LevelFilter::Info);
}

/// Like [`init_logging`], falling back to `default` when `SEA_BATTLE_LOG` is
/// unset or invalid.
pub fn init_logging_with(default: LevelFilter) {
    let level = env::var("SEA_BATTLE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(default);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
