use std::sync::{Mutex, PoisonError};

use super::MessageSink;

impl<W> MessageSink<W> {
    /// Creates a sink that owns `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> Default for MessageSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> From<W> for MessageSink<W> {
    fn from(writer: W) -> Self {
        Self::new(writer)
    }
}
