mod guard;
mod message_sink;

pub use guard::SinkGuard;
pub use message_sink::MessageSink;
