//! `log` backend that writes to the browser console.
//!
//! Off wasm32 the logger is never installed and the `log` macros are no-ops
//! unless the host installs its own backend.

use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct ConsoleLogger {
    level: Level,
}

impl ConsoleLogger {
    pub const fn new(level: Level) -> Self {
        Self { level }
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
        #[cfg(target_arch = "wasm32")]
        {
            let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
            let value = wasm_bindgen::JsValue::from_str(&line);
            match record.level() {
                Level::Error => web_sys::console::error_1(&value),
                Level::Warn => web_sys::console::warn_1(&value),
                Level::Info => web_sys::console::info_1(&value),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger::new(Level::Info);

/// Install the console logger. Safe to call more than once.
pub fn install() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}
