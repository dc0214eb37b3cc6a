//! # Facade Configuration
//!
//! Settings that shape how a [`LogFacade`](crate::logger::LogFacade) renders its lines.
//! The lazily constructed global instance always uses [`FacadeConfig::default`].
//! Callers that want something else build a config themselves and hand it to
//! [`LogFacade::init`](crate::logger::LogFacade::init) or
//! [`LogFacade::new`](crate::logger::LogFacade::new).
//!
//! Configuration can be written as TOML:
//!
//! ```toml
//! name = "Console"
//! stream = "stderr"
//! ansi = false
//! thread_ids = true
//! timestamps = true
//! ```
//!
//! Missing fields fall back to their defaults. Leaving `ansi` out colors the output
//! only when the chosen stream is a terminal. There is no threshold setting, because
//! every facade admits every level.

use crate::constants::DEFAULT_LOGGER_NAME;
use crate::error::FacadeError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Console stream a facade writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleStream {
    #[default]
    Stdout,
    Stderr,
}

/// Facade configuration structure
///
/// ## Field Descriptions
///
/// - `name`: logger name, attached to every line as the `logger` field
/// - `stream`: console stream receiving the output
/// - `ansi`: colorize with ANSI escapes; unset means "only when writing to a terminal"
/// - `thread_ids`: include the emitting thread's id in each line
/// - `timestamps`: prefix each line with a timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacadeConfig {
    pub name: String,
    pub stream: ConsoleStream,
    pub ansi: Option<bool>,
    pub thread_ids: bool,
    pub timestamps: bool,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_LOGGER_NAME.to_string(),
            stream: ConsoleStream::Stdout,
            ansi: None,
            thread_ids: false,
            timestamps: true,
        }
    }
}

impl FacadeConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, FacadeError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    ///
    /// A missing or corrupt file is returned as an error rather than replaced by defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, FacadeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| FacadeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Render the configuration as pretty-printed TOML.
    pub fn to_toml_string(&self) -> Result<String, FacadeError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that the logger name is non-empty and free of whitespace and control
    /// characters, so it renders as a single `logger=<name>` token.
    pub fn validate(&self) -> Result<(), FacadeError> {
        let bad_char = |c: char| c.is_whitespace() || c.is_control();
        if self.name.is_empty() || self.name.chars().any(bad_char) {
            return Err(FacadeError::InvalidName(self.name.clone()));
        }
        Ok(())
    }

    /// Whether to emit ANSI escapes, given whether the destination is a terminal.
    pub fn use_ansi(&self, is_terminal: bool) -> bool {
        self.ansi.unwrap_or(is_terminal)
    }

    /// Config with colors and timestamps off, convenient for asserting on captured output.
    pub fn plain() -> Self {
        Self {
            ansi: Some(false),
            timestamps: false,
            ..Self::default()
        }
    }
}
