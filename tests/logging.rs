//! File logging setup. Installs the global subscriber, so this binary keeps
//! a single initializing test.

use assembly_designer::error::AppError;
use assembly_designer::logging::init_tracing;
use tempfile::TempDir;

#[test]
fn init_creates_parent_dirs_and_writes_lines() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs").join("nested").join("designer.log");

    init_tracing(&log_path).unwrap();
    assert!(log_path.parent().unwrap().is_dir());

    tracing::info!("wizard log line for assertion");
    tracing::warn!(selection = "moclo", "selection warning");

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("wizard log line for assertion"));
    assert!(content.contains("INFO"));
    assert!(content.contains("WARN"));
    assert!(content.contains("moclo"));
    // File output carries no color codes
    assert!(!content.contains('\u{1b}'));
}

#[test]
fn unusable_parent_is_logging_error() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();

    let err = init_tracing(&blocker.join("designer.log")).unwrap_err();
    match err {
        AppError::Logging { path, .. } => assert!(path.ends_with("not-a-dir/designer.log")),
        other => panic!("Expected Logging error, got {other}"),
    }
}
