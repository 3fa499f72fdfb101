//! Tests for gating, sink resolution and decoration.

use chrono::{TimeZone, Utc};
use clog::{
    Color, Level, LogRecord, Policy, Sink, SinkMode, SinkSet, SourceLocation, SymbolSet,
    SymbolStyle, Verbosity,
};

fn admitted_by(verbosity: Verbosity) -> Vec<Level> {
    use Level::*;
    let mut admitted = Vec::new();
    if verbosity >= Verbosity::Critical {
        admitted.extend([Critical, Fatal]);
    }
    if verbosity >= Verbosity::Error {
        admitted.push(Error);
    }
    if verbosity >= Verbosity::Warning {
        admitted.push(Warning);
    }
    if verbosity >= Verbosity::Info {
        admitted.extend([Info, Header, Success, Money, Input]);
    }
    if verbosity >= Verbosity::Extra {
        admitted.push(Extra);
    }
    if verbosity >= Verbosity::Debug {
        admitted.push(Debug);
    }
    if verbosity >= Verbosity::All {
        admitted.push(Trace);
    }
    admitted
}

#[test]
fn should_emit_matches_rank_for_every_pair() {
    for verbosity in Verbosity::all() {
        let policy = Policy {
            verbosity,
            ..Policy::default()
        };
        let expected = admitted_by(verbosity);
        for level in Level::all() {
            assert_eq!(
                policy.should_emit(level),
                level.rank() <= verbosity.rank(),
                "{level} at {verbosity}"
            );
            assert_eq!(
                policy.should_emit(level),
                expected.contains(&level),
                "{level} at {verbosity}"
            );
        }
    }
}

#[test]
fn warning_threshold_suppresses_info() {
    let policy = Policy {
        verbosity: Verbosity::Warning,
        ..Policy::default()
    };
    assert!(policy.should_emit(Level::Warning));
    assert!(policy.should_emit(Level::Fatal));
    assert!(!policy.should_emit(Level::Info));
    assert!(!policy.should_emit(Level::Success));
}

#[test]
fn resolve_sinks_per_mode() {
    let sinks = |mode| {
        Policy {
            mode,
            ..Policy::default()
        }
        .resolve_sinks()
    };

    assert!(sinks(SinkMode::None).is_empty());
    assert_eq!(sinks(SinkMode::Console).iter().collect::<Vec<_>>(), vec![Sink::Console]);
    assert_eq!(sinks(SinkMode::File).iter().collect::<Vec<_>>(), vec![Sink::File]);
    assert_eq!(
        sinks(SinkMode::Both).iter().collect::<Vec<_>>(),
        vec![Sink::Console, Sink::File]
    );
    assert_eq!(SinkSet::from(SinkMode::None), SinkSet::default());
}

#[test]
fn sink_mode_from_str() {
    assert_eq!("console".parse::<SinkMode>().unwrap(), SinkMode::Console);
    assert_eq!("ConsoleAndFile".parse::<SinkMode>().unwrap(), SinkMode::Both);
    assert_eq!("console_and_file".parse::<SinkMode>().unwrap(), SinkMode::Both);
    assert!(matches!(
        "pipe".parse::<SinkMode>(),
        Err(clog::Error::InvalidMode(_))
    ));
}

fn fixed_policy() -> Policy {
    Policy {
        symbols: SymbolSet::new(SymbolStyle::Words),
        timestamp_format: Some("%H:%M:%S".to_string()),
        utc: true,
        ..Policy::default()
    }
}

fn record(level: Level, msg: &str) -> LogRecord {
    LogRecord::new(level, msg, SourceLocation::new("src/app.rs", "connect", 42))
        .at(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
}

#[test]
fn decorate_plain_line() {
    let line = fixed_policy().decorate(&record(Level::Warning, "disk low"));
    assert_eq!(line.render(false), "03:04:05 | WARNING disk low");
}

#[test]
fn decorate_colored_wraps_symbol_and_message() {
    let line = fixed_policy().decorate(&record(Level::Warning, "disk low"));
    assert_eq!(
        line.render(true),
        "03:04:05 | \x1b[38;2;241;250;140mWARNING disk low\x1b[0m"
    );
}

#[test]
fn decorate_adds_trace_for_trace_worthy_levels() {
    let policy = fixed_policy();
    let debug = policy.decorate(&record(Level::Debug, "x"));
    assert_eq!(debug.render(false), "03:04:05 | DEBUG src/app.rs:connect:42: x");

    let info = policy.decorate(&record(Level::Info, "x"));
    assert_eq!(info.trace, None);
}

#[test]
fn decorate_respects_tracing_switch_and_custom_levels() {
    let off = Policy {
        tracing: false,
        ..fixed_policy()
    };
    assert_eq!(off.decorate(&record(Level::Error, "x")).trace, None);

    let custom = Policy {
        trace_levels: Some([Level::Info].into_iter().collect()),
        ..fixed_policy()
    };
    assert!(custom.decorate(&record(Level::Info, "x")).trace.is_some());
    assert!(custom.decorate(&record(Level::Error, "x")).trace.is_none());
}

#[test]
fn decorate_uses_separators() {
    let policy = Policy {
        header_separator: " ~ ".to_string(),
        tracing_separator: "/".to_string(),
        ..fixed_policy()
    };
    let line = policy.decorate(&record(Level::Fatal, "bye"));
    assert_eq!(line.render(false), "03:04:05 ~ FATAL src/app.rs/connect/42/ bye");
}

#[test]
fn decorate_without_timestamp_or_symbol() {
    let policy = Policy {
        timestamp_format: None,
        symbols: SymbolSet::new(SymbolStyle::None),
        ..fixed_policy()
    };
    let line = policy.decorate(&record(Level::Info, "bare"));
    assert_eq!(line.render(false), "bare");
}

#[test]
fn unknown_function_is_left_out_of_trace() {
    let policy = fixed_policy();
    let rec = LogRecord::new(Level::Error, "x", SourceLocation::new("a.rs", "", 7))
        .at(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
    assert_eq!(policy.decorate(&rec).render(false), "03:04:05 | ERROR a.rs:7: x");
}

#[test]
fn missing_location_drops_trace() {
    let policy = fixed_policy();
    let rec = LogRecord::new(Level::Error, "boom", SourceLocation::default())
        .at(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
    let line = policy.decorate(&rec);
    assert_eq!(line.trace, None);
    assert_eq!(line.render(false), "03:04:05 | ERROR boom");
}

#[test]
fn color_overrides_win() {
    let mut policy = fixed_policy();
    policy.colors.insert(Level::Info, Color::new(1, 2, 3));
    assert_eq!(policy.color(Level::Info), Color::new(1, 2, 3));
    assert_eq!(policy.color(Level::Error), Color::for_level(Level::Error));
}

#[test]
fn plain_render_never_contains_escapes() {
    let policy = Policy {
        verbosity: Verbosity::All,
        ..fixed_policy()
    };
    for level in Level::all() {
        let rendered = policy.decorate(&record(level, "msg")).render(false);
        assert!(!rendered.contains('\x1b'), "{level}: {rendered:?}");
    }
}
