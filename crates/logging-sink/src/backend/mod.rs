//! crates/logging-sink/src/backend/mod.rs
//! Backend selection from a [`LogConfig`].

use std::fmt;
use std::sync::Arc;

use logging::{ConfigError, LogConfig, Logger};

pub mod console;
#[cfg(unix)]
#[allow(unsafe_code)]
pub mod syslog;
pub mod udp;

use console::ConsoleLogger;
use udp::UdpLogger;

/// The closed set of backends a [`LogConfig`] can name.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BackendKind {
    /// Standard error stream (`"console"`).
    Console,
    /// Local syslog daemon (`"syslog"`).
    Syslog,
    /// UDP collector (`"udplog"`).
    Udp,
}

impl BackendKind {
    /// Every backend kind.
    pub const ALL: [Self; 3] = [Self::Console, Self::Syslog, Self::Udp];

    /// Returns the configuration name of the backend.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Syslog => "syslog",
            Self::Udp => "udplog",
        }
    }

    /// Looks up a backend by its exact configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Constructs the backend named by `config`.
///
/// Unknown names fail with [`ConfigError::UnknownBackend`], whose message
/// embeds the whole configuration.
///
/// ```
/// use logging::{ConfigError, LogConfig};
/// use logging_sink::new_logger;
///
/// assert!(new_logger(&LogConfig::new("console", "INFO")).is_ok());
///
/// let err = new_logger(&LogConfig::new("bogus", "INFO")).err().unwrap();
/// assert!(matches!(err, ConfigError::UnknownBackend(_)));
/// assert_eq!(err.to_string(), "unknown logger: LogConfig(Name=bogus, Severity=INFO)");
/// ```
pub fn new_logger(config: &LogConfig) -> Result<Arc<dyn Logger>, ConfigError> {
    let Some(kind) = BackendKind::from_name(config.name()) else {
        tracing::warn!(%config, "unknown logger backend");
        return Err(ConfigError::UnknownBackend(config.clone()));
    };

    let logger: Result<Arc<dyn Logger>, ConfigError> = match kind {
        BackendKind::Console => {
            ConsoleLogger::from_config(config).map(|l| Arc::new(l) as Arc<dyn Logger>)
        }
        BackendKind::Syslog => open_syslog(config),
        BackendKind::Udp => {
            UdpLogger::from_config(config).map(|l| Arc::new(l) as Arc<dyn Logger>)
        }
    };

    match &logger {
        Ok(_) => tracing::debug!(backend = %kind, %config, "constructed logger"),
        Err(error) => tracing::warn!(backend = %kind, %error, "failed to construct logger"),
    }
    logger
}

#[cfg(unix)]
fn open_syslog(config: &LogConfig) -> Result<Arc<dyn Logger>, ConfigError> {
    syslog::SyslogLogger::from_config(config).map(|l| Arc::new(l) as Arc<dyn Logger>)
}

#[cfg(not(unix))]
fn open_syslog(config: &LogConfig) -> Result<Arc<dyn Logger>, ConfigError> {
    config.minimum_severity()?;
    Err(ConfigError::construction(
        config,
        std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "syslog is only available on unix platforms",
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in BackendKind::ALL {
            assert_eq!(BackendKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(BackendKind::from_name("Console"), None);
        assert_eq!(BackendKind::from_name("UDPLOG"), None);
        assert_eq!(BackendKind::from_name("udp"), None);
    }

    #[test]
    fn console_config_constructs() {
        assert!(new_logger(&LogConfig::new("console", "debug")).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn syslog_config_constructs() {
        assert!(new_logger(&LogConfig::new("syslog", "INFO")).is_ok());
    }

    #[test]
    fn udplog_config_constructs() {
        let config = LogConfig::new("udplog", "WARN").with_target("127.0.0.1:9");
        assert!(new_logger(&config).is_ok());
    }

    #[test]
    fn unknown_backend_carries_configuration() {
        let config = LogConfig::new("bogus", "INFO");
        let err = new_logger(&config).err().expect("bogus is rejected");
        match &err {
            ConfigError::UnknownBackend(rejected) => assert_eq!(rejected, &config),
            other => panic!("unexpected error {other}"),
        }
        let message = err.to_string();
        assert!(message.contains("bogus"));
        assert!(message.contains("INFO"));
    }

    #[test]
    fn bad_severity_fails_known_backend() {
        let err = new_logger(&LogConfig::new("console", "TRACE"))
            .err()
            .expect("TRACE is rejected");
        assert!(matches!(err, ConfigError::Severity(_)));
    }
}
