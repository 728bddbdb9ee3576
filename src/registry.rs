//! src/registry.rs
//! Ordered collection of backends that every record fans out to.

use std::fmt;
use std::process;
use std::sync::{Arc, PoisonError, RwLock};

use logging::{ConfigError, LogConfig, Location, Logger, Severity};
use logging_sink::new_logger;

/// Exit status used after a fatal record has been delivered.
pub const FATAL_EXIT_CODE: i32 = 255;

/// Callback that terminates the process with the given status.
pub type ExitHook = Arc<dyn Fn(i32) + Send + Sync>;

/// Append-only list of backends plus the hook run after fatal records.
///
/// A registry starts empty; emitting into an empty registry does nothing.
/// [`init`](Self::init) and [`init_with_config`](Self::init_with_config)
/// append backends, and nothing ever removes them. Emission works on a
/// snapshot of the list, so I/O never happens under the registry lock.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use fanlog::{ConsoleLogger, Logger, Registry, Severity};
///
/// let console = ConsoleLogger::with_writer(Severity::Info, std::io::sink());
/// let registry = Registry::new();
/// registry.init([Arc::new(console) as Arc<dyn Logger>]);
/// fanlog::infof!(registry: &registry, "x={}", 5);
/// assert_eq!(registry.len(), 1);
/// ```
pub struct Registry {
    loggers: RwLock<Vec<Arc<dyn Logger>>>,
    exit_hook: RwLock<ExitHook>,
}

impl Registry {
    /// Creates an empty registry that exits the process after fatal records.
    #[must_use]
    pub fn new() -> Self {
        Self::with_exit_hook(|code| process::exit(code))
    }

    /// Creates an empty registry that calls `hook` after fatal records.
    pub fn with_exit_hook<F>(hook: F) -> Self
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        Self {
            loggers: RwLock::new(Vec::new()),
            exit_hook: RwLock::new(Arc::new(hook)),
        }
    }

    /// Replaces the hook called after fatal records.
    pub fn set_exit_hook<F>(&self, hook: F)
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        *self
            .exit_hook
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(hook);
    }

    /// Appends already constructed backends in order.
    pub fn init<I>(&self, loggers: I)
    where
        I: IntoIterator<Item = Arc<dyn Logger>>,
    {
        let mut registered = self.loggers.write().unwrap_or_else(PoisonError::into_inner);
        let before = registered.len();
        registered.extend(loggers);
        tracing::debug!(
            added = registered.len() - before,
            total = registered.len(),
            "registered loggers"
        );
    }

    /// Constructs and appends one backend per configuration, in order.
    ///
    /// Stops at the first configuration that fails and returns its error.
    /// Backends built from earlier configurations stay registered; callers
    /// should treat a failure here as fatal for the process.
    pub fn init_with_config(&self, configs: &[LogConfig]) -> Result<(), ConfigError> {
        for (index, config) in configs.iter().enumerate() {
            let logger = new_logger(config).inspect_err(|error| {
                tracing::warn!(
                    index,
                    skipped = configs.len() - index - 1,
                    %error,
                    "logger initialization aborted"
                );
            })?;
            self.init([logger]);
        }
        Ok(())
    }

    /// Returns the number of registered backends.
    pub fn len(&self) -> usize {
        self.loggers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Reports whether no backend has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the registered backends in registration order.
    pub fn loggers(&self) -> Vec<Arc<dyn Logger>> {
        self.loggers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Delivers one record to every backend that accepts `severity`.
    ///
    /// Returns how many backends wrote the record. Fatal records are followed
    /// by a stack snapshot on each backend, but this method never exits; see
    /// [`fatal`](Self::fatal).
    pub fn log(
        &self,
        severity: Severity,
        location: &Location,
        args: fmt::Arguments<'_>,
    ) -> usize {
        let mut delivered = 0;
        for logger in self.loggers() {
            if logger.log(severity, location, args) {
                delivered += 1;
            }
        }
        delivered
    }

    /// Delivers an INFO record.
    pub fn info(&self, location: &Location, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, location, args);
    }

    /// Delivers a WARN record.
    pub fn warn(&self, location: &Location, args: fmt::Arguments<'_>) {
        self.log(Severity::Warn, location, args);
    }

    /// Delivers an ERROR record.
    pub fn error(&self, location: &Location, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, location, args);
    }

    /// Delivers a FATAL record with a stack snapshot to every backend, then
    /// runs the exit hook with [`FATAL_EXIT_CODE`].
    ///
    /// The snapshot covers the calling thread only; other threads' stacks are
    /// not captured.
    ///
    /// The hook runs only after every backend has been written, whether or
    /// not the writes succeeded. With the default hook this never returns.
    ///
    /// Unlike the other severities, a fatal record is not a no-op on an empty
    /// registry: nothing is written, but the hook still runs. A fatal call
    /// marks a state the program cannot continue from, and that holds whether
    /// or not logging was set up.
    pub fn fatal(&self, location: &Location, args: fmt::Arguments<'_>) {
        let delivered = self.log(Severity::Fatal, location, args);
        tracing::debug!(
            delivered,
            code = FATAL_EXIT_CODE,
            "fatal record delivered, exiting"
        );

        let hook = Arc::clone(
            &self
                .exit_hook
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        );
        hook(FATAL_EXIT_CODE);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("loggers", &self.len())
            .finish_non_exhaustive()
    }
}
