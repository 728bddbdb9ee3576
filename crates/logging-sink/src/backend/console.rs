//! crates/logging-sink/src/backend/console.rs
//! Backend that writes records to standard error or any other stream.

use std::fmt;
use std::io::{self, Write};

use logging::{ConfigError, LogConfig, LogWriter, Location, Logger, Severity};

use crate::record::RecordFormat;
use crate::sink::MessageSink;

type Stream = Box<dyn Write + Send>;

/// Logger that writes timestamped records, one per line, to a stream.
///
/// The default destination is standard error. Records below the configured
/// minimum severity are suppressed; fatal records are always written.
pub struct ConsoleLogger {
    minimum: Severity,
    format: RecordFormat,
    sink: MessageSink<Stream>,
}

impl ConsoleLogger {
    /// Creates a logger that writes to standard error.
    #[must_use]
    pub fn new(minimum: Severity) -> Self {
        Self::with_writer(minimum, io::stderr())
    }

    /// Creates a logger that writes to `writer`.
    ///
    /// ```
    /// use logging::{Logger, Severity};
    /// use logging_sink::ConsoleLogger;
    ///
    /// let logger = ConsoleLogger::with_writer(Severity::Warn, std::io::sink());
    /// assert!(logger.writer(Severity::Info).is_none());
    /// assert!(logger.writer(Severity::Error).is_some());
    /// ```
    pub fn with_writer<W>(minimum: Severity, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            minimum,
            format: RecordFormat::STREAM,
            sink: MessageSink::new(Box::new(writer)),
        }
    }

    /// Builds the logger described by `config`.
    ///
    /// The target, if any, is ignored.
    pub fn from_config(config: &LogConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.minimum_severity()?))
    }

    /// Returns the minimum severity this logger writes.
    #[must_use]
    pub const fn minimum_severity(&self) -> Severity {
        self.minimum
    }
}

impl Logger for ConsoleLogger {
    fn accepts(&self, severity: Severity) -> bool {
        severity.allows(self.minimum)
    }

    fn writer(&self, severity: Severity) -> Option<LogWriter<'_>> {
        if !self.accepts(severity) {
            return None;
        }
        Some(Box::new(self.sink.lock()))
    }

    fn format_message(
        &self,
        severity: Severity,
        location: &Location,
        args: fmt::Arguments<'_>,
    ) -> String {
        self.format.render(severity, location, args)
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("minimum", &self.minimum)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}
