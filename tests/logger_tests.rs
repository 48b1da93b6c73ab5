//! Integration tests for logger behavior.

use rbviz::logger::{current_level, init_file_logging, set_level, Level};
use rbviz::{debug, error, info, warn};

#[test]
fn level_parse_accepts_valid() {
    assert_eq!(Level::parse("error"), Some(Level::Error));
    assert_eq!(Level::parse("warn"), Some(Level::Warn));
    assert_eq!(Level::parse("info"), Some(Level::Info));

    let level = Level::parse("DEBUG").expect("DEBUG should parse");
    set_level(level);
    assert_eq!(current_level(), Level::Debug);
}

#[test]
fn level_parse_rejects_invalid() {
    assert_eq!(Level::parse("invalid"), None);
    assert_eq!(Level::parse(""), None);
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_opens_missing_file() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("rbviz.log");
    assert!(init_file_logging(&path));
    assert!(path.exists());
}
