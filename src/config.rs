//! Daemon wrapper configuration parsing and validation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{AppError, Result};

fn default_session_name() -> String {
    "chat-daemon".into()
}

fn default_tmux_bin() -> String {
    "tmux".into()
}

fn default_interpreter() -> String {
    "python3".into()
}

fn default_daemon_path() -> PathBuf {
    "chat-daemon.py".into()
}

/// Configuration parsed from `config.toml`.
///
/// Every field carries a default so the binary runs with no config file at
/// all. The daemon path is handed to the multiplexer verbatim and is *not*
/// checked for existence here: a missing daemon only becomes observable
/// inside the session, via `logs`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DaemonConfig {
    /// Well-known session name the daemon runs under.
    #[serde(default = "default_session_name")]
    pub session_name: String,
    /// Multiplexer binary used to host the session.
    #[serde(default = "default_tmux_bin")]
    pub tmux_bin: String,
    /// Interpreter that runs the daemon program.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
    /// Path to the daemon program, passed to the interpreter as-is.
    #[serde(default = "default_daemon_path")]
    pub daemon_path: PathBuf,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            session_name: default_session_name(),
            tmux_bin: default_tmux_bin(),
            interpreter: default_interpreter(),
            daemon_path: default_daemon_path(),
        }
    }
}

impl DaemonConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The single command line the session hosts.
    #[must_use]
    pub fn daemon_command(&self) -> String {
        format!("{} {}", self.interpreter, self.daemon_path.display())
    }

    fn validate(&self) -> Result<()> {
        if self.session_name.is_empty() {
            return Err(AppError::Config("session_name must not be empty".into()));
        }

        // tmux target syntax reserves ':' (window) and '.' (pane); a name
        // containing either would silently address the wrong session.
        if self
            .session_name
            .chars()
            .any(|c| c == ':' || c == '.' || c.is_whitespace())
        {
            return Err(AppError::Config(format!(
                "session_name '{}' must not contain ':', '.', or whitespace",
                self.session_name
            )));
        }

        if self.tmux_bin.is_empty() {
            return Err(AppError::Config("tmux_bin must not be empty".into()));
        }

        if self.interpreter.is_empty() {
            return Err(AppError::Config("interpreter must not be empty".into()));
        }

        Ok(())
    }
}
