use std::{fs, thread::sleep, time::Duration};

use tempfile::tempdir;

// The global subscriber can only be installed once per process, so every
// logging assertion lives in this one test.
#[test]
fn debug_logging_writes_to_the_configured_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logs").join("inkguide.log");

    inkguide::logging::init(true, Some(path.clone()));
    tracing::info!("overlay started");

    // A second init is ignored and keeps the first writer.
    inkguide::logging::init(false, None);
    tracing::info!("second message");

    sleep(Duration::from_millis(100));

    assert!(path.exists(), "log file was not created");
    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("overlay started"));
    assert!(contents.contains("second message"));
}
