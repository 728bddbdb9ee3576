#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `fanlog` is a logging facade: one static entry point per severity
//! ([`infof!`], [`warnf!`], [`errorf!`], [`fatalf!`]) that fans each record
//! out to every configured backend (console, syslog, or UDP).
//!
//! # Design
//!
//! Backends live in a [`Registry`], an append-only ordered list owned by the
//! application. The static API drives a lazily created process-wide registry
//! returned by [`global`]; components that prefer an explicit handle pass a
//! `&Registry` and use the `registry:` form of the macros.
//!
//! Each macro captures the file, function, and line of its call site. The
//! registry then asks every backend, in registration order, for a writer at
//! the record's severity; a backend that suppresses the severity returns none.
//! Fatal records are followed by a stack snapshot on each backend, and the
//! process exits with [`FATAL_EXIT_CODE`] only after every backend has been
//! written.
//!
//! # Invariants
//!
//! - Emitting before any backend is registered is a silent no-op.
//! - Backends are never removed; initialization only appends.
//! - Write failures stay inside the backend and never reach the caller.
//!
//! # Errors
//!
//! [`init_with_config`] returns [`ConfigError`] for unknown backend names,
//! invalid severities, and destinations that cannot be acquired. It stops at
//! the first failure and keeps the backends registered before it.
//!
//! # Examples
//!
//! ```
//! use fanlog::LogConfig;
//!
//! fanlog::init_with_config(&[LogConfig::new("console", "WARN")])?;
//!
//! fanlog::infof!("suppressed by the WARN threshold");
//! fanlog::warnf!("{} retries left", 2);
//! # Ok::<(), fanlog::ConfigError>(())
//! ```

mod facade;
mod registry;

pub use facade::{
    errorf, fatalf, global, infof, init, init_with_config, set_exit_hook, warnf,
};
pub use registry::{ExitHook, FATAL_EXIT_CODE, Registry};

pub use logging::{
    ConfigError, LogConfig, LogWriter, Location, Logger, ParseSeverityError, Severity,
    caller_location, function_name, stack_traces,
};
pub use logging_sink::{BackendKind, ConsoleLogger, UdpLogger, new_logger};
#[cfg(unix)]
pub use logging_sink::SyslogLogger;
