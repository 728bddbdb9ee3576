//! crates/logging/src/severity.rs
//! Severity levels attached to every log record.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Urgency classification of a log record.
///
/// The first four levels form the configurable table used as a backend's
/// minimum severity. [`Severity::Fatal`] is a dispatch-only level: it is never
/// accepted as a threshold and every backend delivers it regardless of the
/// threshold it was configured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(i32)]
pub enum Severity {
    /// Verbose diagnostics intended for development.
    Debug = 0,
    /// Routine operational messages.
    Info = 1,
    /// Conditions that deserve attention but do not stop the program.
    Warn = 2,
    /// Failures of an operation.
    Error = 3,
    /// Unrecoverable failures; the process terminates after delivery.
    Fatal = 4,
}

impl Severity {
    /// Levels that may be configured as a backend's minimum severity, in ordinal order.
    pub const CONFIGURABLE: [Self; 4] = [Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// Every level, including the dispatch-only [`Severity::Fatal`].
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    /// Returns the upper-case name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Returns the integer ordinal of the level.
    #[must_use]
    pub const fn ordinal(self) -> i32 {
        self as i32
    }

    /// Converts an ordinal back into a level, returning `None` when out of range.
    #[must_use]
    pub const fn from_ordinal(ordinal: i32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warn),
            3 => Some(Self::Error),
            4 => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Reports whether the level can be used as a minimum severity.
    #[must_use]
    pub const fn is_configurable(self) -> bool {
        !matches!(self, Self::Fatal)
    }

    /// Reports whether a record at this level passes a backend configured with
    /// `threshold` as its minimum severity.
    ///
    /// Fatal records always pass.
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert!(Severity::Warn.allows(Severity::Info));
    /// assert!(!Severity::Info.allows(Severity::Error));
    /// assert!(Severity::Fatal.allows(Severity::Error));
    /// ```
    #[must_use]
    pub fn allows(self, threshold: Self) -> bool {
        self == Self::Fatal || self >= threshold
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a severity name is not part of the configurable table.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unsupported severity: {name}")]
pub struct ParseSeverityError {
    name: String,
}

impl ParseSeverityError {
    /// Returns the rejected name, upper-cased.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses one of `DEBUG`, `INFO`, `WARN`, or `ERROR`, ignoring ASCII case.
    ///
    /// `FATAL` is rejected because it is not a valid threshold.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Self::CONFIGURABLE
            .into_iter()
            .find(|level| level.as_str() == upper)
            .ok_or(ParseSeverityError { name: upper })
    }
}

/// Error returned when an integer does not name a severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("severity ordinal {0} is out of range")]
pub struct SeverityOutOfRange(pub i32);

impl TryFrom<i32> for Severity {
    type Error = SeverityOutOfRange;

    fn try_from(value: i32) -> Result<Self, SeverityOutOfRange> {
        Self::from_ordinal(value).ok_or(SeverityOutOfRange(value))
    }
}

#[cfg(test)]
mod tests;
