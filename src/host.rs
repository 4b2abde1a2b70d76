//! Session host abstraction over the external terminal multiplexer.
//!
//! The [`SessionHost`] trait decouples the lifecycle manager from the
//! multiplexer that actually owns session state. The production
//! implementation ([`TmuxHost`]) shells out to tmux; tests substitute an
//! in-memory fake behind the same seam.

use std::future::Future;
use std::pin::Pin;

use tokio::process::Command;
use tracing::debug;

use crate::{AppError, Result};

/// Interface to the external session registry.
///
/// All session state lives on the other side of this trait; the manager
/// holds nothing beyond the well-known name and command line. Operations
/// are fire-and-forget: no retries, no timeouts.
pub trait SessionHost: Send + Sync {
    /// Create a new detached session hosting `command`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Host`](crate::AppError::Host) if the multiplexer
    /// cannot be invoked or refuses to create the session (for example when
    /// a session with the same name already exists).
    fn create(
        &self,
        name: &str,
        command: &str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;

    /// Terminate the named session.
    ///
    /// Callers treating termination as best-effort discard the result; an
    /// absent session reports as an error here and is suppressed there.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Host`](crate::AppError::Host) if the multiplexer
    /// cannot be invoked or the session does not exist.
    fn kill(&self, name: &str) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;

    /// Query whether the named session currently exists. Non-mutating.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Host`](crate::AppError::Host) only if the
    /// multiplexer cannot be invoked at all; "no such session" is `Ok(false)`.
    fn exists(&self, name: &str) -> Pin<Box<dyn Future<Output = Result<bool>> + Send + '_>>;

    /// Attach the invoking terminal to the named session.
    ///
    /// Blocks until the user detaches or the session ends, then yields the
    /// attach process's exit code. An absent session surfaces as the
    /// multiplexer's own non-zero exit, with its error text already printed
    /// to the inherited stderr.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Host`](crate::AppError::Host) if the multiplexer
    /// cannot be invoked at all.
    fn attach(&self, name: &str) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>>;
}

/// Production [`SessionHost`] backed by the tmux binary.
#[derive(Debug, Clone)]
pub struct TmuxHost {
    tmux_bin: String,
}

impl TmuxHost {
    /// Build a host that invokes the given tmux binary.
    #[must_use]
    pub fn new(tmux_bin: &str) -> Self {
        Self {
            tmux_bin: tmux_bin.to_owned(),
        }
    }

    /// Run a tmux subcommand with captured output and map a non-zero exit
    /// to [`AppError::Host`] carrying tmux's stderr.
    async fn run_captured(&self, args: &[&str]) -> Result<()> {
        let output = Command::new(&self.tmux_bin)
            .args(args)
            .output()
            .await
            .map_err(|err| AppError::Host(format!("failed to run {}: {err}", self.tmux_bin)))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(AppError::Host(format!(
                "{} {} failed: {}",
                self.tmux_bin,
                args.first().unwrap_or(&""),
                stderr.trim()
            )))
        }
    }
}

impl SessionHost for TmuxHost {
    fn create(
        &self,
        name: &str,
        command: &str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let name = name.to_owned();
        let command = command.to_owned();
        Box::pin(async move {
            debug!(session = %name, %command, "tmux new-session");
            self.run_captured(&["new-session", "-d", "-s", &name, &command])
                .await
        })
    }

    fn kill(&self, name: &str) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let name = name.to_owned();
        Box::pin(async move {
            debug!(session = %name, "tmux kill-session");
            self.run_captured(&["kill-session", "-t", &name]).await
        })
    }

    fn exists(&self, name: &str) -> Pin<Box<dyn Future<Output = Result<bool>> + Send + '_>> {
        let name = name.to_owned();
        Box::pin(async move {
            let output = Command::new(&self.tmux_bin)
                .args(["has-session", "-t", &name])
                .output()
                .await
                .map_err(|err| {
                    AppError::Host(format!("failed to run {}: {err}", self.tmux_bin))
                })?;
            Ok(output.status.success())
        })
    }

    fn attach(&self, name: &str) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>> {
        let name = name.to_owned();
        Box::pin(async move {
            // Stdio is inherited so the session takes over the terminal;
            // tmux prints its own error when the session is absent.
            let status = Command::new(&self.tmux_bin)
                .args(["attach-session", "-t", &name])
                .status()
                .await
                .map_err(|err| {
                    AppError::Host(format!("failed to run {}: {err}", self.tmux_bin))
                })?;
            Ok(status.code().unwrap_or(1))
        })
    }
}
