use std::io::{self, Write};
use std::ops::{Deref, DerefMut};
use std::sync::MutexGuard;

/// Exclusive handle on a [`MessageSink`](crate::MessageSink)'s destination.
///
/// Created by [`MessageSink::lock`](crate::MessageSink::lock). Other threads
/// block on the sink until the guard is dropped. The guard implements
/// [`Write`], so it can be handed out as a [`logging::LogWriter`].
#[must_use = "dropping the guard immediately releases the sink"]
pub struct SinkGuard<'a, W> {
    inner: MutexGuard<'a, W>,
}

impl<'a, W> SinkGuard<'a, W> {
    pub(crate) const fn new(inner: MutexGuard<'a, W>) -> Self {
        Self { inner }
    }
}

impl<W> Write for SinkGuard<'_, W>
where
    W: Write,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W> Deref for SinkGuard<'_, W> {
    type Target = W;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<W> DerefMut for SinkGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
