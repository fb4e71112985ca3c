use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level configuration, optionally loaded from a TOML file.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SigbeepConfig {
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Text printed before the count on quit.
    pub label: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            label: "Количество писков".to_string(),
        }
    }
}

/// Errors that can occur while loading the config file.
#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse config {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

/// Load config from `path`, or return the built-in defaults when no path is given.
///
/// An explicitly named file that is missing or malformed is an error.
pub fn load_config(path: Option<&Path>) -> Result<SigbeepConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(SigbeepConfig::default());
    };

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
