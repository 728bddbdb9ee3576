//! crates/logging/src/stack.rs
//! Stack snapshots appended to fatal records.

use std::backtrace::Backtrace;
use std::fmt::Write as _;
use std::thread;

/// Captures the stack of the calling thread, and only that thread, as
/// printable text.
///
/// The result always starts with a header naming the thread, so it is never
/// empty even when symbol information is unavailable. Other threads are not
/// included; the standard library exposes no portable way to walk them.
#[must_use]
pub fn stack_traces() -> String {
    let current = thread::current();
    let name = current.name().unwrap_or("<unnamed>");
    let backtrace = Backtrace::force_capture();

    let mut text = String::new();
    let _ = writeln!(text, "thread '{name}' ({:?}):", current.id());
    let _ = writeln!(text, "{backtrace}");
    text
}
