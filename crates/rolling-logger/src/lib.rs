//! Rolling Logger
//!
//! `log` backend that writes every record to the console and keeps the most
//! recent lines in a circular buffer.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Fixed-capacity line buffer; the oldest line is evicted when full
#[derive(Debug)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

pub struct RollingLogger {
    app_name: String,
    level: LevelFilter,
    buffer: Mutex<LogBuffer>,
}

impl RollingLogger {
    pub fn new(app_name: &str, capacity: usize, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            buffer: Mutex::new(LogBuffer::new(capacity)),
        }
    }

    fn format_line(&self, record: &Record) -> String {
        format!(
            "[{}] {} {:<5} {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            self.app_name,
            record.level(),
            record.args()
        )
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_line(record);
        write_console(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the rolling logger as the global `log` backend.
/// Debug builds log at debug level, release builds at info.
pub fn init_logger(app_name: &str, capacity: usize) -> Result<(), SetLoggerError> {
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    let logger = LOGGER.get_or_init(|| RollingLogger::new(app_name, capacity, level));
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(())
}

/// Lines held by the installed logger, oldest first.
/// Empty until `init_logger` has run.
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingLogger::recent).unwrap_or_default()
}
