#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` holds the vocabulary shared by the fanlog facade and its
//! backends: [`Severity`] levels, the [`LogConfig`] record that selects a
//! backend, the call-site [`Location`] attached to every record, and the
//! [`Logger`] trait each backend implements.
//!
//! # Design
//!
//! A [`Logger`] exposes two capabilities. [`Logger::writer`] resolves the
//! destination for a severity and returns `None` when the backend suppresses
//! it; [`Logger::format_message`] renders the record text. The provided
//! [`Logger::log`] method combines them and, for [`Severity::Fatal`], appends
//! the output of [`stack_traces`] to the same writer.
//!
//! # Invariants
//!
//! - Severity names and parsing agree for the configurable levels, and parsing
//!   ignores ASCII case.
//! - [`Severity::Fatal`] is never a valid threshold and is delivered by every
//!   backend.
//!
//! # Errors
//!
//! [`ParseSeverityError`] reports unknown severity names. [`ConfigError`]
//! covers every way turning a [`LogConfig`] into a backend can fail.
//!
//! # Examples
//!
//! ```
//! use logging::{LogConfig, Severity};
//!
//! let config = LogConfig::new("console", "warn");
//! assert_eq!(config.minimum_severity(), Ok(Severity::Warn));
//! assert_eq!(config.to_string(), "LogConfig(Name=console, Severity=warn)");
//! ```

mod config;
mod error;
#[doc(hidden)]
pub mod location;
mod logger;
mod severity;
mod stack;

pub use config::LogConfig;
pub use error::ConfigError;
pub use location::Location;
pub use logger::{LogWriter, Logger};
pub use severity::{ParseSeverityError, Severity, SeverityOutOfRange};
pub use stack::stack_traces;
