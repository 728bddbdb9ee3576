//! crates/logging/src/logger.rs
//! The contract every backend logger implements.

use std::fmt;
use std::io::Write;

use super::location::Location;
use super::severity::Severity;
use super::stack::stack_traces;

/// Destination handed out by [`Logger::writer`] for one record.
///
/// Backends that share a resource between threads return a handle that keeps
/// the resource locked until it is dropped, so a record and the stack trace
/// that follows a fatal record are written together.
pub type LogWriter<'a> = Box<dyn Write + 'a>;

/// A backend that receives formatted records.
///
/// Implementors provide [`accepts`](Self::accepts), [`writer`](Self::writer)
/// and [`format_message`](Self::format_message); the severity methods are
/// built on top of them. Write failures are the backend's own concern and are
/// dropped.
pub trait Logger: Send + Sync {
    /// Reports whether records at `severity` pass this backend's filter.
    ///
    /// Must not acquire the destination: it runs before the record is
    /// rendered, and rendering may log through this same backend.
    fn accepts(&self, severity: Severity) -> bool;

    /// Returns the destination for records at `severity`, or `None` when the
    /// backend suppresses that severity.
    fn writer(&self, severity: Severity) -> Option<LogWriter<'_>>;

    /// Renders a record, including any trailing line terminator the
    /// destination expects.
    fn format_message(
        &self,
        severity: Severity,
        location: &Location,
        args: fmt::Arguments<'_>,
    ) -> String;

    /// Formats and writes one record to this backend.
    ///
    /// Fatal records are followed by a snapshot of the calling thread's stack
    /// on the same writer. Returns whether the backend accepted the severity.
    ///
    /// The record and stack text are rendered before the writer is acquired,
    /// so arguments whose `Display` impls log again never wait on this
    /// backend's lock.
    fn log(&self, severity: Severity, location: &Location, args: fmt::Arguments<'_>) -> bool {
        if !self.accepts(severity) {
            return false;
        }

        let message = self.format_message(severity, location, args);
        let stack = (severity == Severity::Fatal).then(stack_traces);

        let Some(mut writer) = self.writer(severity) else {
            return false;
        };
        let _ = writer.write_all(message.as_bytes());
        if let Some(stack) = stack {
            let _ = writer.write_all(stack.as_bytes());
        }
        let _ = writer.flush();
        true
    }

    /// Writes an INFO record.
    fn info(&self, location: &Location, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, location, args);
    }

    /// Writes a WARN record.
    fn warn(&self, location: &Location, args: fmt::Arguments<'_>) {
        self.log(Severity::Warn, location, args);
    }

    /// Writes an ERROR record.
    fn error(&self, location: &Location, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, location, args);
    }

    /// Writes a FATAL record followed by a snapshot of the calling thread's
    /// stack.
    ///
    /// Only this backend is written and the process keeps running; process
    /// termination belongs to the registry that fans records out.
    fn fatal(&self, location: &Location, args: fmt::Arguments<'_>) {
        self.log(Severity::Fatal, location, args);
    }
}
