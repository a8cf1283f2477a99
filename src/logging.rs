use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Initialise logging. With `debug` the default level is `debug` and
/// `RUST_LOG` may override it; otherwise the level is pinned to `info`.
/// When `log_file` is given, output goes to that file instead of stderr.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    // Without debug logging we ignore `RUST_LOG` so a stray variable in the
    // user's environment cannot make the overlay chatty.
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let file_writer = log_file.as_ref().and_then(|path| {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let name = path.file_name()?;
        if let Err(err) = std::fs::create_dir_all(dir) {
            eprintln!("failed to create log directory {}: {err}", dir.display());
            return None;
        }
        Some(tracing_appender::rolling::never(dir, name))
    });

    let _ = match file_writer {
        Some(writer) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(writer)
            .try_init(),
        None => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    };
}
