//! crates/logging-sink/src/backend/udp.rs
//! Backend that sends each record as a UDP datagram.

use std::fmt;
use std::io::{self, Write};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use logging::{ConfigError, LogConfig, LogWriter, Location, Logger, Severity};

use crate::record::RecordFormat;
use crate::sink::MessageSink;

/// Destination used when the configuration carries no target.
pub const DEFAULT_UDP_ADDRESS: &str = "127.0.0.1:5140";

/// Largest payload that fits in one IPv4 UDP datagram.
pub const MAX_DATAGRAM: usize = 65_507;

/// Logger that sends timestamped records to a UDP collector.
///
/// Each write becomes one datagram; payloads larger than [`MAX_DATAGRAM`]
/// are split across consecutive datagrams.
pub struct UdpLogger {
    minimum: Severity,
    peer: SocketAddr,
    sink: MessageSink<DatagramWriter>,
}

impl UdpLogger {
    /// Binds an ephemeral local socket connected to `address`.
    pub fn connect<A>(minimum: Severity, address: A) -> io::Result<Self>
    where
        A: ToSocketAddrs,
    {
        let peer = address.to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "address resolved to no socket addresses",
            )
        })?;
        let local: SocketAddr = if peer.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(local)?;
        socket.connect(peer)?;

        Ok(Self {
            minimum,
            peer,
            sink: MessageSink::new(DatagramWriter { socket }),
        })
    }

    /// Builds the logger described by `config`; the target is the destination
    /// address and defaults to [`DEFAULT_UDP_ADDRESS`].
    pub fn from_config(config: &LogConfig) -> Result<Self, ConfigError> {
        let minimum = config.minimum_severity()?;
        let address = config.target().unwrap_or(DEFAULT_UDP_ADDRESS);
        Self::connect(minimum, address).map_err(|source| ConfigError::construction(config, source))
    }

    /// Returns the minimum severity this logger writes.
    #[must_use]
    pub const fn minimum_severity(&self) -> Severity {
        self.minimum
    }

    /// Returns the collector address.
    #[must_use]
    pub const fn peer(&self) -> SocketAddr {
        self.peer
    }
}

impl Logger for UdpLogger {
    fn accepts(&self, severity: Severity) -> bool {
        severity.allows(self.minimum)
    }

    fn writer(&self, severity: Severity) -> Option<LogWriter<'_>> {
        if !self.accepts(severity) {
            return None;
        }
        Some(Box::new(self.sink.lock()))
    }

    fn format_message(
        &self,
        severity: Severity,
        location: &Location,
        args: fmt::Arguments<'_>,
    ) -> String {
        RecordFormat::STREAM.render(severity, location, args)
    }
}

impl fmt::Debug for UdpLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UdpLogger")
            .field("minimum", &self.minimum)
            .field("peer", &self.peer)
            .finish_non_exhaustive()
    }
}

/// Connected UDP socket exposed as a [`Write`] destination.
#[derive(Debug)]
pub struct DatagramWriter {
    socket: UdpSocket,
}

impl Write for DatagramWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        let len = buf.len().min(MAX_DATAGRAM);
        self.socket.send(&buf[..len])
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
