//! Tests for call levels and verbosity thresholds.

use clog::{Level, Verbosity};

#[test]
fn level_ranks_follow_severity_groups() {
    assert_eq!(Level::Fatal.rank(), 1);
    assert_eq!(Level::Critical.rank(), 1);
    assert_eq!(Level::Error.rank(), 2);
    assert_eq!(Level::Warning.rank(), 3);
    for level in [
        Level::Info,
        Level::Header,
        Level::Success,
        Level::Money,
        Level::Input,
    ] {
        assert_eq!(level.rank(), 4, "{level}");
    }
    assert_eq!(Level::Extra.rank(), 5);
    assert_eq!(Level::Debug.rank(), 6);
    assert_eq!(Level::Trace.rank(), 7);
}

#[test]
fn level_declaration_order_never_contradicts_rank() {
    let levels = Level::all();
    for pair in levels.windows(2) {
        assert!(pair[0] < pair[1]);
        assert!(pair[0].rank() >= pair[1].rank());
    }
}

#[test]
fn level_display() {
    assert_eq!(Level::Trace.to_string(), "trace");
    assert_eq!(Level::Money.to_string(), "money");
    assert_eq!(Level::Warning.to_string(), "warning");
    assert_eq!(Level::Fatal.to_string(), "fatal");
}

#[test]
fn level_from_str() {
    assert_eq!("trace".parse::<Level>().unwrap(), Level::Trace);
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("Crit".parse::<Level>().unwrap(), Level::Critical);
    assert_eq!("ok".parse::<Level>().unwrap(), Level::Success);
}

#[test]
fn level_from_str_invalid() {
    let err = "loud".parse::<Level>().unwrap_err();
    assert_eq!(err.to_string(), "unknown log level: 'loud'");
}

#[test]
fn level_display_round_trips_through_from_str() {
    for level in Level::all() {
        assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
    }
    for verbosity in Verbosity::all() {
        assert_eq!(verbosity.to_string().parse::<Verbosity>().unwrap(), verbosity);
    }
}

#[test]
fn trace_worthy_defaults() {
    let worthy: Vec<Level> = Level::all()
        .into_iter()
        .filter(|l| l.is_trace_worthy())
        .collect();
    assert_eq!(
        worthy,
        vec![
            Level::Trace,
            Level::Debug,
            Level::Error,
            Level::Critical,
            Level::Fatal
        ]
    );
}

#[test]
fn verbosity_ranks_are_nested() {
    let all = Verbosity::all();
    for pair in all.windows(2) {
        assert_eq!(pair[0].rank() + 1, pair[1].rank());
    }
    assert_eq!(Verbosity::default(), Verbosity::Info);
}

#[test]
fn verbosity_from_str_aliases() {
    assert_eq!("off".parse::<Verbosity>().unwrap(), Verbosity::None);
    assert_eq!("trace".parse::<Verbosity>().unwrap(), Verbosity::All);
    assert_eq!("WARN".parse::<Verbosity>().unwrap(), Verbosity::Warning);
    assert!("everything".parse::<Verbosity>().is_err());
}
