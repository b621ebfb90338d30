//! Logging configuration for the browser
//!
//! Formats `tracing` events with `tracing-subscriber` and forwards each line
//! to the matching `console.*` method.

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::{fmt, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wasm_bindgen::JsValue;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,       // filter directive (trace, debug, info, warn, error)
    pub with_target: bool,   // prefix lines with the module path
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: if cfg!(debug_assertions) { "debug" } else { "info" }.to_string(),
            with_target: cfg!(debug_assertions),
        }
    }
}

impl LoggingConfig {
    /// Install the console subscriber. Fails if one is already installed.
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        let env_filter = EnvFilter::try_new(&self.level)?;

        // No wall clock on wasm32-unknown-unknown, so no timestamps
        let console_layer = fmt::layer()
            .with_target(self.with_target)
            .with_level(true)
            .without_time()
            .with_writer(ConsoleMakeWriter);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .try_init()?;

        tracing::info!("Logging initialized - level: {}", self.level);

        Ok(())
    }
}

/// Hands out one [`ConsoleWriter`] per event
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it to the console when dropped
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self { level, buf: Vec::new() }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(line) = console_line(&self.buf) else {
            return;
        };
        let line = JsValue::from_str(&line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            Level::DEBUG => web_sys::console::debug_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }
}

/// Formatted event without the trailing newline, `None` if blank
fn console_line(buf: &[u8]) -> Option<String> {
    let line = String::from_utf8_lossy(buf);
    let line = line.trim_end();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}
