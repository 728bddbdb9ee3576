//! crates/logging-sink/src/backend/syslog.rs
//! Backend that submits records through libc `openlog`/`syslog`.
//!
//! POSIX allows one syslog connection per process. The first syslog logger
//! opens it and later ones share it.

use std::ffi::CString;
use std::fmt;
use std::io::{self, Write};
use std::sync::OnceLock;

use logging::{ConfigError, LogConfig, LogWriter, Location, Logger, Severity};

use crate::record::RecordFormat;

/// Default syslog ident when the configuration carries no target.
pub const DEFAULT_SYSLOG_TAG: &str = "fanlog";

/// Syslog priority levels used for each [`Severity`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogPriority {
    /// Critical conditions (LOG_CRIT).
    Critical = libc::LOG_CRIT,
    /// Error conditions (LOG_ERR).
    Error = libc::LOG_ERR,
    /// Warning conditions (LOG_WARNING).
    Warning = libc::LOG_WARNING,
    /// Informational messages (LOG_INFO).
    Info = libc::LOG_INFO,
    /// Debug-level messages (LOG_DEBUG).
    Debug = libc::LOG_DEBUG,
}

impl From<Severity> for SyslogPriority {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Debug => Self::Debug,
            Severity::Info => Self::Info,
            Severity::Warn => Self::Warning,
            Severity::Error => Self::Error,
            Severity::Fatal => Self::Critical,
        }
    }
}

/// Logger that submits records to the local syslog daemon.
pub struct SyslogLogger {
    minimum: Severity,
    tag: String,
}

impl SyslogLogger {
    /// Opens syslog with `tag` as the ident and returns a logger writing at
    /// `minimum` and above.
    ///
    /// Fails when `tag` contains a NUL byte.
    pub fn open(minimum: Severity, tag: &str) -> io::Result<Self> {
        let ident = CString::new(tag).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "syslog tag contains a NUL byte",
            )
        })?;
        let active = open_once(ident);
        if active.as_bytes() != tag.as_bytes() {
            tracing::debug!(
                requested = tag,
                active = %active.to_string_lossy(),
                "syslog already open; sharing the existing ident"
            );
        }

        Ok(Self {
            minimum,
            tag: tag.to_owned(),
        })
    }

    /// Builds the logger described by `config`, using its target as the ident.
    pub fn from_config(config: &LogConfig) -> Result<Self, ConfigError> {
        let minimum = config.minimum_severity()?;
        let tag = config.target().unwrap_or(DEFAULT_SYSLOG_TAG);
        Self::open(minimum, tag).map_err(|source| ConfigError::construction(config, source))
    }

    /// Returns the minimum severity this logger writes.
    #[must_use]
    pub const fn minimum_severity(&self) -> Severity {
        self.minimum
    }

    /// Returns the ident this logger was configured with.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

// The ident pointer handed to openlog(3) must stay valid for the process
// lifetime, so it lives in a static.
fn open_once(ident: CString) -> &'static CString {
    static IDENT: OnceLock<CString> = OnceLock::new();
    IDENT.get_or_init(|| {
        // SAFETY: the ident pointer is valid for the process lifetime because
        // it is stored in a static `OnceLock<CString>`, and `get_or_init`
        // runs this closure at most once.
        unsafe {
            libc::openlog(ident.as_ptr(), libc::LOG_PID, libc::LOG_USER);
        }
        ident
    })
}

impl Logger for SyslogLogger {
    fn accepts(&self, severity: Severity) -> bool {
        severity.allows(self.minimum)
    }

    fn writer(&self, severity: Severity) -> Option<LogWriter<'_>> {
        if !self.accepts(severity) {
            return None;
        }
        Some(Box::new(SyslogWriter::new(severity.into())))
    }

    fn format_message(
        &self,
        severity: Severity,
        location: &Location,
        args: fmt::Arguments<'_>,
    ) -> String {
        RecordFormat::SYSLOG.render(severity, location, args)
    }
}

impl fmt::Debug for SyslogLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyslogLogger")
            .field("minimum", &self.minimum)
            .field("tag", &self.tag)
            .finish()
    }
}

/// Writer that submits each line it receives as one syslog entry.
#[derive(Debug)]
pub struct SyslogWriter {
    priority: SyslogPriority,
}

impl SyslogWriter {
    /// Creates a writer submitting entries at `priority`.
    #[must_use]
    pub const fn new(priority: SyslogPriority) -> Self {
        Self { priority }
    }

    /// Returns the priority entries are submitted with.
    #[must_use]
    pub const fn priority(&self) -> SyslogPriority {
        self.priority
    }
}

impl Write for SyslogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        for line in text.lines().filter(|line| !line.is_empty()) {
            syslog_message(self.priority, line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sends one entry to syslog(3); entries with embedded NUL bytes are dropped.
pub fn syslog_message(priority: SyslogPriority, message: &str) {
    let Ok(c_message) = CString::new(message) else {
        return;
    };

    // syslog(3) interprets `%` as a format specifier, so the message is always
    // passed as the argument of a fixed "%s" format.
    //
    // SAFETY: syslog is safe to call from multiple threads. Both pointers are
    // valid NUL-terminated C strings for the duration of the call.
    unsafe {
        libc::syslog(
            priority as libc::c_int,
            c"%s".as_ptr(),
            c_message.as_ptr(),
        );
    }
}
