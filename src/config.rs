//! Session size configuration, optionally read from a TOML file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_COMBINED_LIMIT: usize = 15;
const DEFAULT_LESSON_LIMIT: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Caps on how many questions a session holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct QuizConfig {
    /// Most questions in a combined session.
    #[serde(default = "default_combined_limit")]
    pub combined_limit: usize,
    /// Most questions in a single-lesson session.
    #[serde(default = "default_lesson_limit")]
    pub lesson_limit: usize,
}

const fn default_combined_limit() -> usize {
    DEFAULT_COMBINED_LIMIT
}

const fn default_lesson_limit() -> usize {
    DEFAULT_LESSON_LIMIT
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            combined_limit: DEFAULT_COMBINED_LIMIT,
            lesson_limit: DEFAULT_LESSON_LIMIT,
        }
    }
}

impl QuizConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(contents)?;
        config.normalize();
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    fn normalize(&mut self) {
        if self.combined_limit == 0 {
            self.combined_limit = DEFAULT_COMBINED_LIMIT;
        }
        if self.lesson_limit == 0 {
            self.lesson_limit = DEFAULT_LESSON_LIMIT;
        }
    }
}
