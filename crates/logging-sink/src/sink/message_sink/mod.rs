use std::fmt;
use std::sync::Mutex;

/// Writer shared between threads that serializes whole records.
///
/// The sink owns its destination behind a mutex. Each record is written while
/// holding the lock through a [`SinkGuard`](crate::SinkGuard), so records
/// emitted concurrently never interleave. A poisoned lock is recovered rather
/// than propagated.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use logging_sink::MessageSink;
///
/// let sink = MessageSink::new(Vec::new());
/// sink.write_record("INFO ready\n")?;
/// sink.lock().write_all(b"WARN low disk\n")?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output.lines().count(), 2);
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct MessageSink<W> {
    writer: Mutex<W>,
}

mod constructors;
mod writing;

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .finish()
    }
}
