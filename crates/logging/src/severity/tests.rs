use super::{ParseSeverityError, Severity, SeverityOutOfRange};
use proptest::prelude::*;

#[test]
fn names_match_reference_table() {
    let table = [
        (Severity::Debug, "DEBUG", 0),
        (Severity::Info, "INFO", 1),
        (Severity::Warn, "WARN", 2),
        (Severity::Error, "ERROR", 3),
    ];

    for (level, name, ordinal) in table {
        assert_eq!(level.as_str(), name);
        assert_eq!(level.to_string(), name);
        assert_eq!(level.ordinal(), ordinal);
    }
}

#[test]
fn configurable_levels_round_trip_through_names() {
    for level in Severity::CONFIGURABLE {
        assert_eq!(level.as_str().parse::<Severity>(), Ok(level));
    }
}

#[test]
fn parsing_ignores_case() {
    assert_eq!("warn".parse::<Severity>(), "WARN".parse::<Severity>());
    assert_eq!("Error".parse::<Severity>(), Ok(Severity::Error));
    assert_eq!("dEbUg".parse::<Severity>(), Ok(Severity::Debug));
}

#[test]
fn unknown_names_are_rejected() {
    let err = "TRACE".parse::<Severity>().unwrap_err();
    assert_eq!(err.name(), "TRACE");
    assert_eq!(err.to_string(), "unsupported severity: TRACE");

    assert!("".parse::<Severity>().is_err());
    assert!(" INFO".parse::<Severity>().is_err());
    assert!("WARNING".parse::<Severity>().is_err());
}

#[test]
fn rejected_name_is_reported_upper_case() {
    let err: ParseSeverityError = "verbose".parse::<Severity>().unwrap_err();
    assert_eq!(err.to_string(), "unsupported severity: VERBOSE");
}

#[test]
fn fatal_is_not_a_threshold() {
    assert_eq!(Severity::Fatal.as_str(), "FATAL");
    assert!(!Severity::Fatal.is_configurable());
    assert!("fatal".parse::<Severity>().is_err());
    assert!(Severity::CONFIGURABLE.iter().all(|level| level.is_configurable()));
}

#[test]
fn ordering_follows_ordinals() {
    assert!(Severity::Debug < Severity::Info);
    assert!(Severity::Info < Severity::Warn);
    assert!(Severity::Warn < Severity::Error);
    assert!(Severity::Error < Severity::Fatal);
}

#[test]
fn allows_compares_against_threshold() {
    assert!(Severity::Info.allows(Severity::Debug));
    assert!(Severity::Info.allows(Severity::Info));
    assert!(!Severity::Info.allows(Severity::Warn));
    assert!(!Severity::Warn.allows(Severity::Error));
    for threshold in Severity::CONFIGURABLE {
        assert!(Severity::Fatal.allows(threshold));
    }
}

#[test]
fn ordinals_convert_back() {
    for level in Severity::ALL {
        assert_eq!(Severity::from_ordinal(level.ordinal()), Some(level));
        assert_eq!(Severity::try_from(level.ordinal()), Ok(level));
    }
    assert_eq!(Severity::from_ordinal(-1), None);
    assert_eq!(Severity::try_from(5), Err(SeverityOutOfRange(5)));
    assert_eq!(
        SeverityOutOfRange(7).to_string(),
        "severity ordinal 7 is out of range"
    );
}

proptest! {
    #[test]
    fn parse_is_case_insensitive_for_any_casing(mask in proptest::collection::vec(any::<bool>(), 5), index in 0usize..4) {
        let level = Severity::CONFIGURABLE[index];
        let mixed: String = level
            .as_str()
            .chars()
            .zip(mask.iter().cycle())
            .map(|(ch, lower)| if *lower { ch.to_ascii_lowercase() } else { ch })
            .collect();
        prop_assert_eq!(mixed.parse::<Severity>(), Ok(level));
    }

    #[test]
    fn parse_never_accepts_names_outside_the_table(name in "[A-Za-z]{0,8}") {
        let upper = name.to_ascii_uppercase();
        let known = Severity::CONFIGURABLE.iter().any(|level| level.as_str() == upper);
        prop_assert_eq!(name.parse::<Severity>().is_ok(), known);
    }
}
