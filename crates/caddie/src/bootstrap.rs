use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.caddie/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing parents):
/// - `~/.caddie/`
/// - `~/.caddie/logs/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let caddie_dir = home.join(".caddie");
    std::fs::create_dir_all(&caddie_dir)?;
    std::fs::create_dir_all(caddie_dir.join("logs"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
///
/// The `log_file` parameter is accepted for forward-compatibility but file
/// logging is not yet wired – all output currently goes to stderr.
pub fn setup_logging(log_level: &str, _log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" | "CRITICAL" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Data-path discovery ────────────────────────────────────────────────────────

/// Attempt to locate a launch-monitor export when `--data` is not given.
///
/// Checks the following paths in order and returns the first that exists:
/// 1. `./golfdata.csv` (the conventional export name, next to the shell)
/// 2. `~/.caddie/golfdata.csv`
///
/// Returns `None` when neither path exists.
pub fn discover_data_path() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from("golfdata.csv")];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".caddie").join("golfdata.csv"));
    }
    candidates.into_iter().find(|p| p.exists())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ── test_ensure_directories ───────────────────────────────────────────────

    #[test]
    fn test_ensure_directories() {
        let tmp = TempDir::new().expect("tempdir");

        // Override HOME so that dirs::home_dir() resolves to our temp dir.
        let original_home = std::env::var_os("HOME");
        std::env::set_var("HOME", tmp.path());

        let result = ensure_directories();

        // Restore HOME.
        match original_home {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }

        result.expect("ensure_directories should succeed");

        let caddie_dir = tmp.path().join(".caddie");
        assert!(caddie_dir.is_dir(), ".caddie dir must exist");
        assert!(caddie_dir.join("logs").is_dir(), "logs subdir must exist");
    }

    // ── test_discover_data_path ───────────────────────────────────────────────

    #[test]
    fn test_discover_data_path_finds_home_export() {
        let tmp = TempDir::new().expect("tempdir");
        let caddie_dir = tmp.path().join(".caddie");
        std::fs::create_dir_all(&caddie_dir).expect("create .caddie dir");
        let export = caddie_dir.join("golfdata.csv");
        std::fs::write(&export, "Club\n").expect("write export");

        let original_home = std::env::var_os("HOME");
        std::env::set_var("HOME", tmp.path());

        let path = discover_data_path();

        match original_home {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }

        // The cwd candidate may shadow the home one only if a golfdata.csv
        // exists in the test runner's working directory, which it does not.
        assert_eq!(path, Some(export));
    }

    #[test]
    fn test_discover_data_path_returns_none_when_absent() {
        let tmp = TempDir::new().expect("tempdir");

        let original_home = std::env::var_os("HOME");
        std::env::set_var("HOME", tmp.path());

        let path = discover_data_path();

        match original_home {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }

        assert!(path.is_none(), "should return None when no export exists");
    }
}
