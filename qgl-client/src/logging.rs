//! Logger setup.
//!
//! Log lines go to stderr, and also to a file when the configuration names
//! one. Each line looks like `[2026-01-31 12:00:00][INFO][qgl_client] message`.

use std::sync::Once;

use qgl_core::LogConfig;

static INIT: Once = Once::new();

fn format_line(timestamp: &str, level: log::Level, target: &str, message: &std::fmt::Arguments) -> String {
    format!("[{}][{}][{}] {}", timestamp, level, target, message)
}

/// Installs the global logger. Calls after the first one do nothing.
pub fn init(config: &LogConfig) -> Result<(), std::io::Error> {
    if INIT.is_completed() {
        return Ok(());
    }

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
            out.finish(format_args!(
                "{}",
                format_line(&timestamp, record.level(), record.target(), message)
            ))
        })
        .level(config.level_filter())
        .chain(std::io::stderr());

    if let Some(path) = &config.file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }

    INIT.call_once(|| {
        if let Err(e) = dispatch.apply() {
            eprintln!("Logger already installed: {}", e);
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_layout() {
        let line = format_line(
            "2026-01-31 12:00:00",
            log::Level::Warn,
            "qgl_client::lessons",
            &format_args!("texture {} missing", "container.jpg"),
        );
        assert_eq!(
            line,
            "[2026-01-31 12:00:00][WARN][qgl_client::lessons] texture container.jpg missing"
        );
    }

    #[test]
    fn test_init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            level: "debug".to_string(),
            file: Some(dir.path().join("qgl.log")),
        };
        init(&config).unwrap();
        init(&config).unwrap();
        assert!(INIT.is_completed());

        // a later call must not open another file
        let other = LogConfig {
            level: "trace".to_string(),
            file: Some(dir.path().join("other.log")),
        };
        init(&other).unwrap();
        assert!(!dir.path().join("other.log").exists());
    }
}
