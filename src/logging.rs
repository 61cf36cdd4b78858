use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::settings::Settings;

pub const LOG_ENV: &str = "SUBREPORTS_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr for one-shot commands.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log to the settings' log file while the terminal UI owns the screen.
pub fn init_file(settings: &Settings) -> Result<()> {
    let path = settings.log_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

/// File logging for the dashboard; a log that cannot be opened is reported
/// on stderr and the dashboard runs without one.
pub fn init_file_or_warn(settings: &Settings) -> bool {
    match init_file(settings) {
        Ok(()) => true,
        Err(e) => {
            eprintln!(
                "Warning: logging disabled, cannot open {}: {e}",
                settings.log_path().display()
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unopenable_log_file_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let settings = Settings {
            log_file: Some(blocker.join("subreports.log").to_string_lossy().to_string()),
            ..Settings::default()
        };
        assert!(init_file(&settings).is_err());
        assert!(!init_file_or_warn(&settings));
    }
}
