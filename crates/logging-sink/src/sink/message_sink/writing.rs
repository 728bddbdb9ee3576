use std::io::{self, Write};
use std::sync::PoisonError;

use super::MessageSink;
use crate::sink::SinkGuard;

impl<W> MessageSink<W> {
    /// Locks the destination for the duration of one record.
    ///
    /// Further writes through the returned guard are appended to the same
    /// record, which is how a fatal record keeps its stack snapshot attached.
    pub fn lock(&self) -> SinkGuard<'_, W> {
        SinkGuard::new(self.writer.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes a rendered record and flushes the destination.
    pub fn write_record(&self, record: &str) -> io::Result<()> {
        let mut guard = self.lock();
        guard.write_all(record.as_bytes())?;
        guard.flush()
    }
}
