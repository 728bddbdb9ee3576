#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the concrete [`logging::Logger`] backends used by
//! the fanlog facade (console, syslog, and UDP) together with the
//! [`new_logger`] dispatch that builds one from a [`logging::LogConfig`].
//!
//! # Design
//!
//! Stream-like backends keep their destination inside a [`MessageSink`], a
//! mutex-guarded writer. [`Logger::writer`](logging::Logger::writer) hands out
//! a [`SinkGuard`] that holds the lock for one record, so concurrent records
//! never interleave and a fatal record keeps its stack snapshot attached.
//! Record text is laid out by [`RecordFormat`]; [`LineMode`] decides whether
//! records carry a trailing newline.
//!
//! # Invariants
//!
//! - Each backend serializes its own writes; the facade never locks across
//!   backends.
//! - Records below a backend's minimum severity are never rendered; fatal
//!   records are always written.
//! - Write failures are swallowed by the backend and never reach callers.
//!
//! # Errors
//!
//! Construction surfaces [`logging::ConfigError`]: unknown backend names,
//! invalid severities, and I/O failures while acquiring a destination.
//!
//! # Examples
//!
//! ```
//! use logging::{caller_location, LogConfig, Logger, Severity};
//! use logging_sink::new_logger;
//!
//! let logger = new_logger(&LogConfig::new("console", "WARN"))?;
//! assert!(logger.writer(Severity::Info).is_none());
//! logger.warn(&caller_location!(), format_args!("disk {}% full", 91));
//! # Ok::<(), logging::ConfigError>(())
//! ```

mod backend;
mod line_mode;
mod record;
mod sink;

pub use backend::console::ConsoleLogger;
#[cfg(unix)]
pub use backend::syslog::{
    DEFAULT_SYSLOG_TAG, SyslogLogger, SyslogPriority, SyslogWriter, syslog_message,
};
pub use backend::udp::{DEFAULT_UDP_ADDRESS, DatagramWriter, MAX_DATAGRAM, UdpLogger};
pub use backend::{BackendKind, new_logger};
pub use line_mode::LineMode;
pub use record::RecordFormat;
pub use sink::{MessageSink, SinkGuard};
