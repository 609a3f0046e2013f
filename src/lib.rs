//! # histlog
//! Dual-sink logger: every accepted record is kept in a bounded in-memory
//! queue for later inspection (e.g. by an interactive UI) and echoed to an
//! external stream, with verbosity and format switched by a debug flag.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! histlog = "0.1.0"
//! ```
//!
//! ```rust
//! use histlog::logger_config;
//!
//! let router = logger_config().init_global();
//! log::warn!("disk low");
//! assert_eq!(router.snapshot(), vec!["[WARNING] disk low".to_string()]);
//! ```
//!
//! ## Modes
//! In normal mode (the default) the queue keeps info and up in concise
//! format while only warning and up is written to stderr. With
//! `with_debug(true)` everything down to debug reaches both sinks in an
//! extended format carrying the time of day and the record's source.
//!
//! ## Explicit instances
//! `build()` returns the router without installing it as the process-wide
//! `log` backend, for applications that prefer passing a handle around:
//!
//! ```rust
//! use histlog::{logger_config, LogEvent, Severity};
//!
//! let router = logger_config().with_debug(true).build();
//! router.emit(&LogEvent::new(Severity::Info, "startup", "ready"));
//! assert!(router.snapshot()[0].ends_with("[startup] |INFO| ready"));
//! ```

mod config;
mod event;
mod queue;
mod router;
mod severity;

use std::sync::Arc;

use log::{LevelFilter, Log};

pub use config::{HISTLOG_CONFIG, HistlogConfig};
pub use event::{FormatStyle, LogEvent};
pub use queue::BoundedLogQueue;
pub use router::{LogRouter, LogStderr, Mode, RouterConfig, SinkConfig, StreamWriter};
pub use severity::Severity;

/// `log` facade backend handing every record to the router.
struct RouterLogger(Arc<LogRouter>);

impl Log for RouterLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        // Per-sink thresholds are applied by the router.
        true
    }

    fn log(&self, record: &log::Record) {
        self.0.emit(&LogEvent::from_record(record));
    }

    fn flush(&self) {
        self.0.flush();
    }
}

/// Builder for configuring and initializing the router.
pub struct ConfigBuilder {
    debug: bool,
    capacity: usize,
    stream: Box<dyn StreamWriter>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            debug: false,
            capacity: HISTLOG_CONFIG.QUEUE_CAPACITY,
            stream: Box::new(LogStderr),
        }
    }
}

impl ConfigBuilder {
    /// Selects debug mode (everything down to debug, extended format) or
    /// normal mode.
    pub fn with_debug(self, debug: bool) -> Self {
        Self { debug, ..self }
    }

    /// Overrides the history queue capacity.
    pub fn with_capacity(self, capacity: usize) -> Self {
        Self { capacity, ..self }
    }

    /// Replaces the stream sink; stderr by default.
    pub fn with_stream(self, stream: impl StreamWriter + 'static) -> Self {
        Self {
            stream: Box::new(stream),
            ..self
        }
    }

    /// Builds a router without touching the `log` facade, for callers that
    /// pass an explicit handle to their emitters.
    pub fn build(self) -> Arc<LogRouter> {
        let router = Arc::new(LogRouter::new(self.capacity, self.stream));
        router.configure(Mode::from(self.debug));
        router
    }

    /// Builds the router and installs it as the process-wide `log` backend.
    /// Returns the handle so collaborators can read history via
    /// [`LogRouter::snapshot`].
    ///
    /// Panics if a global logger is already installed.
    pub fn init_global(self) -> Arc<LogRouter> {
        let router = self.build();
        log::set_boxed_logger(Box::new(RouterLogger(Arc::clone(&router))))
            .expect("global logger already installed");
        // The router filters per sink; let every record through the facade.
        log::set_max_level(LevelFilter::Trace);
        router
    }
}

/// Returns a default ConfigBuilder for configuring the router.
pub fn logger_config() -> ConfigBuilder {
    ConfigBuilder::default()
}
