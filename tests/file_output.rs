//! File sink lifecycle: lazy append, explicit open/close and open failures.

use clog::{Capture, Level, Logger, SinkMode, SymbolStyle, Verbosity};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn file_mode_writes_only_to_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let capture = Capture::new();

    let logger = Logger::builder()
        .mode(SinkMode::File)
        .symbols(SymbolStyle::Words)
        .no_timestamp()
        .console()
        .capture(&capture)
        .done()
        .file()
        .path(path_str(&path))
        .done()
        .build();

    logger.info("to file");

    assert_eq!(capture.stderr(), "");
    assert_eq!(fs::read_to_string(&path).unwrap(), "INFO to file\n");
}

#[test]
fn console_mode_never_creates_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("unused.log");
    let capture = Capture::new();

    let logger = Logger::builder()
        .mode(SinkMode::Console)
        .console()
        .capture(&capture)
        .done()
        .file()
        .path(path_str(&path))
        .done()
        .build();

    logger.warning("console only");

    assert!(capture.stderr().contains("console only"));
    assert!(!path.exists());
    assert!(logger.file_path().is_none());
}

#[test]
fn warning_scenario_console_colored_file_plain() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("both.log");
    let capture = Capture::new();

    let logger = Logger::builder()
        .verbosity(Verbosity::Warning)
        .symbols(SymbolStyle::Words)
        .console()
        .colors(true)
        .capture(&capture)
        .done()
        .file()
        .path(path_str(&path))
        .done()
        .build();

    logger.warning("disk low");

    let console = capture.stderr();
    assert!(console.contains("\x1b[38;2;241;250;140mWARNING disk low\x1b[0m\n"));

    let file = fs::read_to_string(&path).unwrap();
    assert!(file.ends_with(" | WARNING disk low\n"));
    assert!(!file.contains('\x1b'));

    logger.info("ignored");

    assert_eq!(capture.stderr(), console);
    assert_eq!(fs::read_to_string(&path).unwrap(), file);
}

#[test]
fn file_is_opened_lazily_and_appends() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("nested").join("dir").join("lazy.log");

    let logger = Logger::builder()
        .symbols(SymbolStyle::None)
        .no_timestamp()
        .file()
        .path(path_str(&path))
        .done()
        .build();

    assert!(!path.exists());
    logger.info("one");
    logger.info("two");

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().collect::<Vec<_>>(), vec!["one", "two"]);
}

#[test]
fn explicit_open_and_close_lifecycle() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("cycle.log");
    fs::write(&path, "existing\n").unwrap();

    let logger = Logger::builder()
        .symbols(SymbolStyle::None)
        .no_timestamp()
        .file()
        .path(path_str(&path))
        .done()
        .build();

    logger.open().unwrap();
    logger.info("after open");
    logger.close().unwrap();
    logger.info("after close");

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "existing\nafter open\nafter close\n");
}

#[test]
fn open_failure_is_returned() {
    let tmp_dir = TempDir::new().unwrap();
    let blocker = tmp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let path = blocker.join("sub").join("x.log");

    let logger = Logger::builder()
        .file()
        .path(path_str(&path))
        .done()
        .build();

    let err = logger.open().unwrap_err();
    assert!(matches!(err, clog::Error::FileOpen { .. }));
    assert!(err.to_string().contains("cannot open log file"));
}

#[test]
fn lazy_open_failure_is_reported_once_on_console() {
    clog::internal::init_with_config(&clog::Config::default());
    let tmp_dir = TempDir::new().unwrap();
    let blocker = tmp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let path = blocker.join("x.log");
    let capture = Capture::new();

    let logger = Logger::builder()
        .symbols(SymbolStyle::Words)
        .no_timestamp()
        .tracing(false)
        .console()
        .colors(false)
        .capture(&capture)
        .done()
        .file()
        .path(path_str(&path))
        .done()
        .build();

    let first = clog::LogRecord::new(Level::Error, "a", clog::here!());
    assert!(logger.emit(&first).is_err());
    let second = clog::LogRecord::new(Level::Error, "b", clog::here!());
    assert!(logger.emit(&second).is_ok());

    let console = capture.stderr();
    assert!(console.contains("ERROR a\n"));
    assert!(console.contains("ERROR b\n"));
    assert_eq!(console.matches("cannot open log file").count(), 1);
}

#[test]
fn lazy_open_failure_without_console_still_fails_the_call() {
    let tmp_dir = TempDir::new().unwrap();
    let blocker = tmp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let capture = Capture::new();

    let logger = Logger::builder()
        .mode(SinkMode::File)
        .console()
        .capture(&capture)
        .done()
        .file()
        .path(path_str(&blocker.join("x.log")))
        .done()
        .build();

    let rec = clog::LogRecord::new(Level::Error, "a", clog::here!());
    assert!(matches!(logger.emit(&rec), Err(clog::Error::FileOpen { .. })));
    assert_eq!(capture.stderr(), "");
}

#[test]
fn default_path_is_derived_from_calling_source_file() {
    let logger = Logger::builder().mode(SinkMode::File).build();
    assert_eq!(logger.file_path(), Some(Path::new("file_output.log")));
}

#[test]
fn tilde_is_expanded() {
    let logger = Logger::builder().file().path("~/x.log").done().build();
    let path = logger.file_path().unwrap();
    if std::env::var_os("HOME").is_some() {
        assert!(!path.starts_with("~"));
    }
    assert!(path.ends_with("x.log"));
}
