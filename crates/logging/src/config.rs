//! crates/logging/src/config.rs
//! Configuration describing one backend logger to construct.

use std::fmt;

use super::severity::{ParseSeverityError, Severity};

/// Logging configuration passed to a backend constructor.
///
/// `name` selects the backend kind (`"console"`, `"syslog"`, or `"udplog"`)
/// and `severity` holds the minimum severity by name. Neither field is
/// validated here; the backend constructor rejects bad values.
///
/// `target` carries the single backend-specific parameter: the destination
/// address for `udplog` and the ident tag for `syslog`. The console backend
/// ignores it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogConfig {
    name: String,
    severity: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    target: Option<String>,
}

impl LogConfig {
    /// Creates a configuration for the backend `name` with the given minimum severity.
    pub fn new(name: impl Into<String>, severity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            severity: severity.into(),
            target: None,
        }
    }

    /// Sets the backend-specific target.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Returns the backend kind name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the configured minimum severity as written.
    pub fn severity(&self) -> &str {
        &self.severity
    }

    /// Returns the backend-specific target, if any.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Parses the configured minimum severity.
    pub fn minimum_severity(&self) -> Result<Severity, ParseSeverityError> {
        self.severity.parse()
    }
}

impl fmt::Display for LogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogConfig(Name={}, Severity={}", self.name, self.severity)?;
        if let Some(target) = &self.target {
            write!(f, ", Target={target}")?;
        }
        f.write_str(")")
    }
}
