//! Shared helpers for fanlog integration tests.

#![allow(dead_code)]

use std::io::{self, Write};
use std::net::{Ipv4Addr, UdpSocket};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use fanlog::{ConsoleLogger, Logger, Severity};

/// In-memory destination whose contents stay readable after being handed to
/// a backend.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn text(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_owned).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Console backend writing into a fresh buffer.
pub fn buffered_console(minimum: Severity) -> (Arc<dyn Logger>, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let logger = ConsoleLogger::with_writer(minimum, buffer.clone());
    (Arc::new(logger), buffer)
}

/// Local UDP socket standing in for a log collector.
pub fn collector() -> UdpSocket {
    let socket = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).expect("bind collector");
    socket
        .set_read_timeout(Some(Duration::from_secs(5)))
        .expect("set read timeout");
    socket
}

/// Receives one datagram as text.
pub fn receive(socket: &UdpSocket) -> String {
    let mut buf = vec![0u8; 65_536];
    let (len, _) = socket.recv_from(&mut buf).expect("datagram arrives");
    String::from_utf8_lossy(&buf[..len]).into_owned()
}
