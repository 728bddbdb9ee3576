//! Configuration-driven initialization stops at the first bad entry and keeps
//! what it already registered.

mod common;

use common::{collector, receive};
use fanlog::{ConfigError, LogConfig, Registry};

#[test]
fn udplog_then_unknown_backend_keeps_the_udp_logger() {
    let collector = collector();
    let address = collector.local_addr().expect("collector address").to_string();
    let registry = Registry::new();

    let configs = [
        LogConfig::new("udplog", "INFO").with_target(address),
        LogConfig::new("bogus", "INFO"),
    ];
    let err = registry
        .init_with_config(&configs)
        .expect_err("bogus backend is rejected");

    assert!(matches!(err, ConfigError::UnknownBackend(_)));
    assert!(err.to_string().contains("bogus"));
    assert_eq!(registry.len(), 1);

    fanlog::infof!(registry: &registry, "x={}", 5);
    let datagram = receive(&collector);
    assert!(datagram.starts_with("INFO "), "unexpected datagram {datagram}");
    assert!(datagram.ends_with("] x=5\n"), "unexpected datagram {datagram}");
}

#[test]
fn invalid_severity_stops_before_later_entries() {
    let registry = Registry::new();
    let configs = [
        LogConfig::new("console", "WARN"),
        LogConfig::new("console", "verbose"),
        LogConfig::new("console", "ERROR"),
    ];

    let err = registry
        .init_with_config(&configs)
        .expect_err("verbose is not a severity");
    assert_eq!(err.to_string(), "unsupported severity: VERBOSE");
    assert_eq!(registry.len(), 1);
}

#[test]
fn empty_configuration_registers_nothing() {
    let registry = Registry::new();
    registry.init_with_config(&[]).expect("nothing to fail");
    assert!(registry.is_empty());
}

#[test]
fn udp_collector_sees_only_records_at_or_above_its_threshold() {
    let collector = collector();
    let address = collector.local_addr().expect("collector address").to_string();
    let registry = Registry::new();
    registry
        .init_with_config(&[LogConfig::new("udplog", "warn").with_target(address)])
        .expect("udplog config is valid");

    fanlog::infof!(registry: &registry, "dropped");
    fanlog::warnf!(registry: &registry, "kept {}", 1);

    let datagram = receive(&collector);
    assert!(datagram.starts_with("WARN "));
    assert!(datagram.ends_with("] kept 1\n"));
}
