//! Error types for the configuration registry.
//!
//! # Design Decisions
//! - Pipeline stages speak `ValidationError` only; the registry wraps it
//! - Bulk loads collect every failure into `LoadErrors` instead of failing fast
//! - File errors always carry the path they were raised for

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::value::ValueKind;

/// A message produced by one pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

/// Registry-level errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Variable '{0}' not found")]
    NotFound(String),

    #[error("Variable '{name}' holds {actual}, not {expected}")]
    TypeMismatch {
        name: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("Variable '{0}' is readonly")]
    ReadOnly(String),

    #[error("File `{0}` doesn't exist")]
    MissingFile(PathBuf),

    #[error("IO error when accessing `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error in `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error serializing config: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("No config path set. Use set_config_path() first.")]
    NoConfigPath,

    #[error("{0}")]
    Load(LoadErrors),
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Per-variable failures collected during a bulk load.
#[derive(Debug, Default)]
pub struct LoadErrors {
    failures: Vec<(String, String)>,
}

impl LoadErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.failures.push((name.into(), message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// `(variable name, message)` pairs in the order they were recorded.
    pub fn failures(&self) -> &[(String, String)] {
        &self.failures
    }

    /// Names of every variable that failed.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|(name, _)| name.as_str())
    }

    /// Convert to Result (returns Err if anything failed).
    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Load(self))
        }
    }
}

impl fmt::Display for LoadErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Some variables failed to load:")?;
        for (name, message) in &self.failures {
            writeln!(f, " - {}: {}", name, message)?;
        }
        Ok(())
    }
}

impl std::error::Error for LoadErrors {}
