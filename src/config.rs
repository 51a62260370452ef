// Configuration loaded from ~/.ezview/rc
//
// The rc file holds `key=value` lines:
//
//   locale=zh-CN
//   toast.duration=3s
//   toast.type=info
//   color=auto

use crate::models::{Locale, LocaleError};
use crate::utils::duration::parse_duration_ms;
use crate::view::toast::{DEFAULT_DURATION_MS, DEFAULT_SEVERITY};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the rc file location
pub const RC_ENV_VAR: &str = "EZVIEW_RC";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed config line {line_no}: '{line}' (expected key=value)")]
    MalformedLine { line_no: usize, line: String },
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
    #[error(transparent)]
    Locale(#[from] LocaleError),
}

/// When to emit ANSI colors on terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" | "on" => Some(ColorMode::Always),
            "never" | "off" => Some(ColorMode::Never),
            _ => None,
        }
    }

    pub fn use_color(&self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub locale: Locale,
    pub toast_duration_ms: u64,
    pub toast_severity: String,
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            toast_duration_ms: DEFAULT_DURATION_MS,
            toast_severity: DEFAULT_SEVERITY.to_string(),
            color: ColorMode::default(),
        }
    }
}

impl Config {
    /// Get the configuration file path (`$EZVIEW_RC`, else `~/.ezview/rc`)
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(RC_ENV_VAR).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(".ezview").join("rc"))
    }

    /// Load configuration from the default location, falling back to defaults
    /// when no rc file exists
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                log::debug!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                log::debug!("No home directory, using default config");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse rc file content; blank lines and `#` comments are skipped
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::MalformedLine {
                    line_no: idx + 1,
                    line: line.to_string(),
                });
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                "locale" => config.locale = Locale::parse(value)?,
                "toast.duration" => {
                    config.toast_duration_ms =
                        parse_duration_ms(value).map_err(|e| ConfigError::InvalidValue {
                            key: key.to_string(),
                            reason: e.to_string(),
                        })?;
                }
                "toast.type" => {
                    if value.is_empty() {
                        return Err(ConfigError::InvalidValue {
                            key: key.to_string(),
                            reason: "toast type cannot be empty".to_string(),
                        });
                    }
                    config.toast_severity = value.to_string();
                }
                "color" => {
                    config.color = ColorMode::from_str(value).ok_or_else(|| ConfigError::InvalidValue {
                        key: key.to_string(),
                        reason: format!("'{}' is not one of auto, always, never", value),
                    })?;
                }
                _ => log::warn!("Ignoring unknown config key '{}'", key),
            }
        }

        Ok(config)
    }
}
