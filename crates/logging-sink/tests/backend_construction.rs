//! Integration tests for building backends from configuration.
//!
//! These tests drive `new_logger` with the same configuration values an
//! application would pass and observe the resulting backends through the
//! `Logger` trait.

use std::net::{Ipv4Addr, UdpSocket};
use std::time::Duration;

use logging::{ConfigError, LogConfig, Logger, Severity, caller_location};
use logging_sink::{BackendKind, MAX_DATAGRAM, new_logger};

// ============================================================================
// Helper Functions
// ============================================================================

fn collector() -> UdpSocket {
    let socket = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).expect("bind collector");
    socket
        .set_read_timeout(Some(Duration::from_secs(5)))
        .expect("set timeout");
    socket
}

fn receive(socket: &UdpSocket) -> String {
    let mut buf = vec![0u8; MAX_DATAGRAM];
    let (len, _) = socket.recv_from(&mut buf).expect("datagram arrives");
    String::from_utf8_lossy(&buf[..len]).into_owned()
}

// ============================================================================
// Dispatch
// ============================================================================

/// Verifies each known backend name constructs on this platform.
#[test]
fn known_backends_construct() {
    let collector = collector();
    let address = collector.local_addr().expect("collector address").to_string();
    for kind in BackendKind::ALL {
        if cfg!(not(unix)) && kind == BackendKind::Syslog {
            continue;
        }
        let config = LogConfig::new(kind.name(), "INFO").with_target(address.clone());
        let logger = new_logger(&config).expect("known backend constructs");
        assert!(logger.writer(Severity::Debug).is_none());
        assert!(logger.writer(Severity::Info).is_some());
    }
}

/// Verifies unknown names report the whole configuration.
#[test]
fn unknown_backend_message() {
    let err = new_logger(&LogConfig::new("bogus", "INFO"))
        .err()
        .expect("bogus is rejected");
    assert_eq!(
        err.to_string(),
        "unknown logger: LogConfig(Name=bogus, Severity=INFO)"
    );
}

/// Verifies an unresolvable UDP destination fails construction.
#[test]
fn bad_udp_target_is_a_construction_error() {
    let config = LogConfig::new("udplog", "INFO").with_target("not an address");
    let err = new_logger(&config).err().expect("construction fails");
    assert!(matches!(err, ConfigError::Construction { .. }));
    assert_eq!(err.config(), Some(&config));
    assert!(err.to_string().starts_with(
        "failed to construct logger from LogConfig(Name=udplog, Severity=INFO, Target=not an address): "
    ));
}

/// Verifies a syslog ident with an interior NUL fails construction.
#[cfg(unix)]
#[test]
fn bad_syslog_tag_is_a_construction_error() {
    let config = LogConfig::new("syslog", "INFO").with_target("fan\0log");
    let err = new_logger(&config).err().expect("construction fails");
    assert!(matches!(err, ConfigError::Construction { .. }));
}

// ============================================================================
// Delivery
// ============================================================================

/// Verifies a UDP backend built from configuration delivers formatted records.
#[test]
fn udp_backend_delivers_records() {
    let collector = collector();
    let address = collector.local_addr().expect("collector address").to_string();
    let logger = new_logger(&LogConfig::new("udplog", "WARN").with_target(address))
        .expect("udplog constructs");

    assert!(!logger.log(Severity::Info, &caller_location!(), format_args!("suppressed")));
    assert!(logger.log(Severity::Error, &caller_location!(), format_args!("code {}", 7)));

    let datagram = receive(&collector);
    assert!(datagram.starts_with("ERROR "), "unexpected datagram {datagram}");
    assert!(datagram.contains("backend_construction.rs:"));
    assert!(datagram.contains("backend_construction::udp_backend_delivers_records] code 7\n"));
}

/// Verifies a syslog backend accepts records without surfacing errors.
#[cfg(unix)]
#[test]
fn syslog_backend_accepts_records() {
    let logger = new_logger(&LogConfig::new("syslog", "ERROR")).expect("syslog constructs");
    let here = caller_location!();
    assert!(!logger.log(Severity::Warn, &here, format_args!("below threshold")));
    assert!(logger.log(Severity::Error, &here, format_args!("integration test record")));
}
