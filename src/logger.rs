//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log
//! entries into a shared buffer for display in the UI log pane.

use crate::error::AppError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of captured log entries kept for display.
///
const MAX_ENTRIES: usize = 200;

/// Shared buffer of formatted log entries, newest last.
///
pub type LogBuffer = Arc<Mutex<VecDeque<String>>>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Install the capturing logger and return the buffer it writes to.
///
pub fn init(level: LevelFilter) -> Result<LogBuffer, AppError> {
    let buffer: LogBuffer = Arc::new(Mutex::new(VecDeque::new()));
    let logger = BufferLogger {
        buffer: Arc::clone(&buffer),
        level,
    };
    log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(buffer)
}

/// Custom logger that captures records into the shared buffer.
///
struct BufferLogger {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl Log for BufferLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // If the lock is poisoned the entry is dropped; logging must
            // never bring the application down.
            if let Ok(mut entries) = self.buffer.lock() {
                entries.push_back(format_log(record));
                while entries.len() > MAX_ENTRIES {
                    entries.pop_front();
                }
            }
        }
    }

    fn flush(&self) {
        // No-op
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_logger_captures_and_caps_entries() {
        let buffer: LogBuffer = Arc::new(Mutex::new(VecDeque::new()));
        let logger = BufferLogger {
            buffer: Arc::clone(&buffer),
            level: LevelFilter::Info,
        };

        for i in 0..(MAX_ENTRIES + 10) {
            logger.log(
                &Record::builder()
                    .args(format_args!("entry {}", i))
                    .level(Level::Info)
                    .target("quote_tui::test")
                    .build(),
            );
        }

        let entries = buffer.lock().unwrap();
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert!(entries.back().unwrap().contains("INFO"));
    }

    #[test]
    fn test_buffer_logger_respects_level() {
        let buffer: LogBuffer = Arc::new(Mutex::new(VecDeque::new()));
        let logger = BufferLogger {
            buffer: Arc::clone(&buffer),
            level: LevelFilter::Warn,
        };

        logger.log(
            &Record::builder()
                .args(format_args!("too quiet"))
                .level(Level::Debug)
                .target("quote_tui::test")
                .build(),
        );

        assert!(buffer.lock().unwrap().is_empty());
    }
}
