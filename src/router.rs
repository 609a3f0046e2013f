use std::{
    io::{self, Write},
    sync::Mutex,
};

use crate::{
    event::{FormatStyle, LogEvent},
    queue::BoundedLogQueue,
    severity::Severity,
};

/// Verbosity mode selecting the per-sink thresholds and format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Debug,
    Normal,
}

impl From<bool> for Mode {
    fn from(debug: bool) -> Self {
        if debug { Mode::Debug } else { Mode::Normal }
    }
}

/// Threshold and format applied to one sink.
#[derive(Debug, Clone, Copy)]
pub struct SinkConfig {
    pub threshold: Severity,
    pub format: FormatStyle,
}

/// The configuration pair for the two sinks, swapped whole by
/// [`LogRouter::configure`] so an emit never observes a partial update.
#[derive(Debug, Clone, Copy)]
pub struct RouterConfig {
    pub queue: SinkConfig,
    pub stream: SinkConfig,
}

impl RouterConfig {
    /// Fixed per-mode table. In normal mode the queue is more permissive
    /// than the stream on purpose: it keeps more history than is printed.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Debug => Self {
                queue: SinkConfig {
                    threshold: Severity::Debug,
                    format: FormatStyle::Extended,
                },
                stream: SinkConfig {
                    threshold: Severity::Debug,
                    format: FormatStyle::Extended,
                },
            },
            Mode::Normal => Self {
                queue: SinkConfig {
                    threshold: Severity::Info,
                    format: FormatStyle::Concise,
                },
                stream: SinkConfig {
                    threshold: Severity::Warning,
                    format: FormatStyle::Concise,
                },
            },
        }
    }
}

/// Destination for formatted lines leaving the process.
pub trait StreamWriter: Send {
    fn write_line(&mut self, line: &str);
    fn flush(&mut self) {}
}

/// Writes one line per accepted event to standard error.
#[derive(Debug, Default)]
pub struct LogStderr;

impl StreamWriter for LogStderr {
    fn write_line(&mut self, line: &str) {
        // A failed stderr write is the stream's concern, not the router's.
        writeln!(io::stderr(), "{line}").ok();
    }

    fn flush(&mut self) {
        io::stderr().flush().ok();
    }
}

struct RouterState {
    config: RouterConfig,
    queue: BoundedLogQueue,
    stream: Box<dyn StreamWriter>,
}

/// Routes each event to the queue sink and the stream sink, applying each
/// sink's threshold and format independently.
///
/// A freshly built router carries the [`Mode::Normal`] configuration, so
/// emitting before an explicit [`configure`](LogRouter::configure) call is
/// well defined.
pub struct LogRouter {
    state: Mutex<RouterState>,
}

impl LogRouter {
    pub fn new(capacity: usize, stream: Box<dyn StreamWriter>) -> Self {
        Self {
            state: Mutex::new(RouterState {
                config: RouterConfig::for_mode(Mode::Normal),
                queue: BoundedLogQueue::new(capacity),
                stream,
            }),
        }
    }

    /// Replaces the whole configuration with the pair declared for `mode`.
    /// Idempotent; nothing from the previous configuration survives.
    pub fn configure(&self, mode: Mode) {
        let mut state = self.state.lock().unwrap();
        state.config = RouterConfig::for_mode(mode);
    }

    /// Delivers `event` to every sink whose threshold it meets.
    pub fn emit(&self, event: &LogEvent) {
        let mut state = self.state.lock().unwrap();
        let config = state.config;
        if event.severity >= config.queue.threshold {
            let line = config.queue.format.render(event);
            state.queue.push(line);
        }
        if event.severity >= config.stream.threshold {
            let line = config.stream.format.render(event);
            state.stream.write_line(&line);
        }
    }

    /// Current queue contents, oldest first. Collaborators such as an
    /// interactive log viewer read recent history through this.
    pub fn snapshot(&self) -> Vec<String> {
        self.state.lock().unwrap().queue.snapshot()
    }

    pub fn flush(&self) {
        self.state.lock().unwrap().stream.flush();
    }
}
