//! Configuration shared by every lesson.
//!
//! The configuration is an optional JSON file at
//! `<config dir>/qianggl/config.json`. Every field has a default, so the file
//! may contain only the values that should differ. A missing file is not an
//! error; a file that cannot be read or parsed is.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable that overrides [`LogConfig::level`].
pub const LOG_ENV_VAR: &str = "QGL_LOG";

/// Errors raised while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Window and context settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub vsync: bool,
    /// Requested OpenGL core profile version as `(major, minor)`.
    pub gl_version: (u8, u8),
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "QiangGL".to_string(),
            width: 800,
            height: 600,
            resizable: true,
            vsync: true,
            gl_version: (3, 3),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
    /// Also write the log to this file when set.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Parses [`LogConfig::level`], falling back to `Info` for unknown names.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.trim().parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// The whole configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    /// Directory holding `textures/`, relative to the working directory unless absolute.
    pub resources_dir: PathBuf,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Loads the configuration from `path`, returning defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::from_json(&contents)
    }

    /// Where the configuration file lives on this platform, if anywhere.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("qianggl").join("config.json"))
    }

    /// Loads the configuration from [`AppConfig::default_path`] and applies
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::load_or_default() {
            (_, Some(e)) => Err(e),
            (config, None) => Ok(config),
        }
    }

    /// Like [`AppConfig::load`], but never fails: a bad file yields the defaults
    /// together with the error. The `QGL_LOG` override applies either way.
    pub fn load_or_default() -> (Self, Option<ConfigError>) {
        Self::resolve(Self::default_path().as_deref(), std::env::var(LOG_ENV_VAR).ok())
    }

    fn resolve(path: Option<&Path>, log_level: Option<String>) -> (Self, Option<ConfigError>) {
        let (mut config, error) = match path.map(Self::load_from) {
            Some(Ok(config)) => (config, None),
            Some(Err(e)) => (Self::default(), Some(e)),
            None => (Self::default(), None),
        };
        config.apply_env_override(log_level);
        (config, error)
    }

    fn apply_env_override(&mut self, log_level: Option<String>) {
        if let Some(level) = log_level.filter(|l| !l.trim().is_empty()) {
            self.log.level = level;
        }
    }

    /// Path of a texture file inside the resources directory.
    pub fn texture_path(&self, file_name: &str) -> PathBuf {
        self.resources_dir.join("textures").join(file_name)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            resources_dir: PathBuf::from("resources"),
            log: LogConfig::default(),
        }
    }
}
