//! Console Logger
//!
//! `log` backend for browser apps. Every record goes to the devtools console
//! (stderr when not on wasm32) and the most recent lines are kept in a
//! circular buffer so failures stay inspectable after they scroll away.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Buffered lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    /// The newest `count` lines, oldest first
    pub fn tail(&self, count: usize) -> Vec<String> {
        let lines = self.lock();
        let skip = lines.len().saturating_sub(count);
        lines.iter().skip(skip).cloned().collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn push_line(&self, line: String) {
        let mut lines = self.lock();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        emit(record.level(), &line);
        self.push_line(line);
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the logger globally
///
/// Returns the installed instance so callers can read the buffer later.
pub fn init(
    level: LevelFilter,
    capacity: usize,
) -> Result<&'static ConsoleLogger, SetLoggerError> {
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger::new(level, capacity)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_at(logger: &ConsoleLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", msg))
                .level(level)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_buffer_drops_oldest_lines() {
        let logger = ConsoleLogger::new(LevelFilter::Debug, 2);
        log_at(&logger, Level::Info, "first");
        log_at(&logger, Level::Info, "second");
        log_at(&logger, Level::Error, "third");

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("test: second"));
        assert!(lines[1].contains("ERROR"));
        assert!(lines[1].ends_with("test: third"));
    }

    #[test]
    fn test_records_below_level_are_skipped() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        log_at(&logger, Level::Debug, "noise");
        log_at(&logger, Level::Warn, "kept");

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("kept"));
    }

    #[test]
    fn test_tail_returns_newest_lines_in_order() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 10);
        for msg in ["a", "b", "c", "d"] {
            log_at(&logger, Level::Info, msg);
        }

        let tail = logger.tail(2);
        assert_eq!(tail.len(), 2);
        assert!(tail[0].ends_with("test: c"));
        assert!(tail[1].ends_with("test: d"));
        assert_eq!(logger.tail(50).len(), 4);
    }

    #[test]
    fn test_clear_empties_buffer() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 10);
        log_at(&logger, Level::Error, "failed");
        logger.clear();
        assert!(logger.recent_lines().is_empty());

        log_at(&logger, Level::Info, "after");
        assert_eq!(logger.tail(5).len(), 1);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 0);
        log_at(&logger, Level::Info, "a");
        log_at(&logger, Level::Info, "b");
        assert_eq!(logger.recent_lines().len(), 1);
    }
}
