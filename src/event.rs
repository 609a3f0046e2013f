use chrono::{DateTime, Utc};

use crate::severity::Severity;

/// A single log event. Immutable once created.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub severity: Severity,
    pub source: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl LogEvent {
    /// Creates an event stamped with the current time.
    pub fn new(severity: Severity, source: &str, message: &str) -> Self {
        Self {
            severity,
            source: source.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub(crate) fn from_record(record: &log::Record) -> Self {
        Self {
            severity: record.level().into(),
            source: record.target().to_string(),
            message: record.args().to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Deterministic string template mapping a [`LogEvent`] to output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatStyle {
    /// `[<SEVERITY>] <message>`
    Concise,
    /// `<HH:MM:SS>,<milliseconds> [<source>] |<SEVERITY>| <message>`
    Extended,
}

impl FormatStyle {
    /// Renders `event` as a single line. Total; rendering never fails.
    pub fn render(&self, event: &LogEvent) -> String {
        match self {
            FormatStyle::Concise => format!("[{}] {}", event.severity, event.message),
            FormatStyle::Extended => format!(
                "{} [{}] |{}| {}",
                event.timestamp.format("%H:%M:%S,%3f"),
                event.source,
                event.severity,
                event.message
            ),
        }
    }
}
