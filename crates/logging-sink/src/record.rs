//! crates/logging-sink/src/record.rs
//! Text layout of a single log record.

use std::fmt::{self, Write as _};

use chrono::{DateTime, SecondsFormat, Utc};
use logging::{Location, Severity};

use crate::line_mode::LineMode;

/// How a backend lays out a record.
///
/// Every layout begins with the severity name and ends with the call site and
/// message: `<SEV> [<timestamp> ]<file>:<line> <function>] <text>`. Stream
/// backends stamp records with the UTC time; syslog stamps entries itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RecordFormat {
    timestamp: bool,
    line_mode: LineMode,
}

impl RecordFormat {
    /// Layout for console and UDP output: timestamped, one record per line.
    pub const STREAM: Self = Self::new(true, LineMode::WithNewline);

    /// Layout for syslog(3): no timestamp, no terminator.
    pub const SYSLOG: Self = Self::new(false, LineMode::WithoutNewline);

    /// Creates a layout.
    #[must_use]
    pub const fn new(timestamp: bool, line_mode: LineMode) -> Self {
        Self {
            timestamp,
            line_mode,
        }
    }

    /// Returns the line terminator policy.
    #[must_use]
    pub const fn line_mode(self) -> LineMode {
        self.line_mode
    }

    /// Reports whether records carry a timestamp.
    #[must_use]
    pub const fn timestamped(self) -> bool {
        self.timestamp
    }

    /// Renders a record stamped with the current time.
    #[must_use]
    pub fn render(self, severity: Severity, location: &Location, args: fmt::Arguments<'_>) -> String {
        self.render_at(Utc::now(), severity, location, args)
    }

    /// Renders a record stamped with `now`.
    #[must_use]
    pub fn render_at(
        self,
        now: DateTime<Utc>,
        severity: Severity,
        location: &Location,
        args: fmt::Arguments<'_>,
    ) -> String {
        let mut record = String::with_capacity(96);
        let _ = write!(record, "{severity} ");
        if self.timestamp {
            let _ = write!(
                record,
                "{} ",
                now.to_rfc3339_opts(SecondsFormat::Micros, true)
            );
        }
        let _ = write!(record, "{location}] {args}");
        self.line_mode.terminate(&mut record);
        record
    }
}

impl Default for RecordFormat {
    fn default() -> Self {
        Self::STREAM
    }
}
