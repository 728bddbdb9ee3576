//! src/facade.rs
//! Process-wide default registry and the static emission API.

use std::fmt;
use std::sync::{Arc, OnceLock};

use logging::{ConfigError, LogConfig, Location, Logger};

use crate::registry::Registry;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Returns the process-wide registry behind the static API, creating it empty
/// on first use.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::new)
}

/// Appends constructed backends to the process-wide registry.
pub fn init<I>(loggers: I)
where
    I: IntoIterator<Item = Arc<dyn Logger>>,
{
    global().init(loggers);
}

/// Constructs backends from `configs` and appends them to the process-wide
/// registry. See [`Registry::init_with_config`].
pub fn init_with_config(configs: &[LogConfig]) -> Result<(), ConfigError> {
    global().init_with_config(configs)
}

/// Replaces the hook the process-wide registry runs after fatal records.
pub fn set_exit_hook<F>(hook: F)
where
    F: Fn(i32) + Send + Sync + 'static,
{
    global().set_exit_hook(hook);
}

/// Delivers an INFO record through the process-wide registry.
pub fn infof(location: &Location, args: fmt::Arguments<'_>) {
    global().info(location, args);
}

/// Delivers a WARN record through the process-wide registry.
pub fn warnf(location: &Location, args: fmt::Arguments<'_>) {
    global().warn(location, args);
}

/// Delivers an ERROR record through the process-wide registry.
pub fn errorf(location: &Location, args: fmt::Arguments<'_>) {
    global().error(location, args);
}

/// Delivers a FATAL record through the process-wide registry and terminates
/// the process with [`FATAL_EXIT_CODE`](crate::FATAL_EXIT_CODE).
///
/// Terminates even before any backend is registered. See
/// [`Registry::fatal`].
pub fn fatalf(location: &Location, args: fmt::Arguments<'_>) {
    global().fatal(location, args);
}

/// Logs an INFO record from the calling location.
///
/// Targets the process-wide registry, or `registry: <expr>` when given.
///
/// ```
/// fanlog::infof!("listening on port {}", 8080);
///
/// let registry = fanlog::Registry::new();
/// fanlog::infof!(registry: &registry, "{} backends", registry.len());
/// ```
#[macro_export]
macro_rules! infof {
    (registry: $registry:expr, $($arg:tt)+) => {
        $crate::Registry::info(
            $registry,
            &$crate::caller_location!(),
            ::core::format_args!($($arg)+),
        )
    };
    ($($arg:tt)+) => {
        $crate::infof(&$crate::caller_location!(), ::core::format_args!($($arg)+))
    };
}

/// Logs a WARN record from the calling location.
#[macro_export]
macro_rules! warnf {
    (registry: $registry:expr, $($arg:tt)+) => {
        $crate::Registry::warn(
            $registry,
            &$crate::caller_location!(),
            ::core::format_args!($($arg)+),
        )
    };
    ($($arg:tt)+) => {
        $crate::warnf(&$crate::caller_location!(), ::core::format_args!($($arg)+))
    };
}

/// Logs an ERROR record from the calling location.
#[macro_export]
macro_rules! errorf {
    (registry: $registry:expr, $($arg:tt)+) => {
        $crate::Registry::error(
            $registry,
            &$crate::caller_location!(),
            ::core::format_args!($($arg)+),
        )
    };
    ($($arg:tt)+) => {
        $crate::errorf(&$crate::caller_location!(), ::core::format_args!($($arg)+))
    };
}

/// Logs a FATAL record with a stack snapshot from the calling location, then
/// terminates the process once every backend has received it.
///
/// The snapshot covers the calling thread only. The process terminates even
/// when no backend is registered, in which case nothing is written first.
#[macro_export]
macro_rules! fatalf {
    (registry: $registry:expr, $($arg:tt)+) => {
        $crate::Registry::fatal(
            $registry,
            &$crate::caller_location!(),
            ::core::format_args!($($arg)+),
        )
    };
    ($($arg:tt)+) => {
        $crate::fatalf(&$crate::caller_location!(), ::core::format_args!($($arg)+))
    };
}
