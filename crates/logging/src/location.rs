//! crates/logging/src/location.rs
//! Call-site capture for log records.

use std::fmt;

/// Source location of the call that produced a log record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    file: &'static str,
    function: &'static str,
    line: u32,
}

impl Location {
    /// Creates a location from its parts.
    ///
    /// Most callers use [`caller_location!`](crate::caller_location) instead.
    #[must_use]
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// Returns the source path as reported by `file!()`.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Returns the final component of the source path.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }

    /// Returns the fully qualified name of the enclosing function.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// Returns the line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.file_name(), self.line, self.function)
    }
}

#[doc(hidden)]
#[must_use]
pub fn trim_function_name(raw: &'static str) -> &'static str {
    let mut name = raw.strip_suffix("::__fanlog_here").unwrap_or(raw);
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name
}

/// Expands to the fully qualified name of the enclosing function.
///
/// Closures are attributed to the function that defines them.
///
/// ```
/// fn outer() -> &'static str {
///     logging::function_name!()
/// }
///
/// assert!(outer().ends_with("outer"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __fanlog_here() {}
        fn __fanlog_type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::location::trim_function_name(__fanlog_type_name_of(__fanlog_here))
    }};
}

/// Captures the [`Location`] of the macro invocation.
///
/// ```
/// let here = logging::caller_location!();
/// assert!(here.file_name().ends_with(".rs"));
/// assert!(here.line() > 0);
/// ```
#[macro_export]
macro_rules! caller_location {
    () => {
        $crate::Location::new(::core::file!(), $crate::function_name!(), ::core::line!())
    };
}
