use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Appends a timestamped copy of a user-facing notification to `path`.
/// Failures are logged and otherwise ignored.
pub fn append_toast_log(path: &Path, msg: &str) {
    let result = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| writeln!(file, "{} - {}", Local::now().to_rfc3339(), msg));
    if let Err(err) = result {
        tracing::debug!(%err, path = %path.display(), "toast log append failed");
    }
}
