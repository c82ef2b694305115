// src/log.rs
//
// `log` backend: appends "[elapsed][LEVEL] message" lines to the debug log.
// Records from other crates (HTTP/TLS stack) only get through at warn and up.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::consts::LOG_FILE;

static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: FileLogger = FileLogger { lock: Mutex::new(()) };

const OWN_TARGET: &str = env!("CARGO_CRATE_NAME");

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

fn format_line(elapsed_ms: u128, level: Level, msg: &fmt::Arguments) -> String {
    format!("[{}][{level}] {msg}\n", fmt_elapsed(elapsed_ms))
}

struct FileLogger {
    lock: Mutex<()>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.target().starts_with(OWN_TARGET) {
            metadata.level() <= log::max_level()
        } else {
            metadata.level() <= Level::Warn
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(start().elapsed().as_millis(), record.level(), record.args());

        if let Ok(_guard) = self.lock.lock() {
            if let Some(dir) = Path::new(LOG_FILE).parent() {
                let _ = fs::create_dir_all(dir);
            }
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(LOG_FILE) {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

/// Install the file logger. Call once, early; a second call returns the error from `log`.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    start();
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}
