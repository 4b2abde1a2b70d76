//! Session lifecycle management: start, stop, status, logs.
//!
//! [`SessionManager`] maps the four CLI operations onto a [`SessionHost`].
//! It owns no session state of its own beyond the well-known session name
//! and the rendered daemon command line. At most one session with that name
//! exists at a time, enforced by unconditionally killing any prior session
//! before creating a new one.

use tracing::{debug, info};

use crate::config::DaemonConfig;
use crate::host::SessionHost;
use crate::Result;

/// Lifecycle manager for the single daemon session.
#[derive(Debug)]
pub struct SessionManager<H> {
    host: H,
    session_name: String,
    daemon_command: String,
}

impl<H: SessionHost> SessionManager<H> {
    /// Build a manager over `host` using the configured session name and
    /// daemon invocation.
    #[must_use]
    pub fn new(host: H, config: &DaemonConfig) -> Self {
        Self {
            host,
            session_name: config.session_name.clone(),
            daemon_command: config.daemon_command(),
        }
    }

    /// The well-known session name this manager controls.
    #[must_use]
    pub fn session_name(&self) -> &str {
        &self.session_name
    }

    /// Restart the daemon: kill any prior session, then create a fresh one.
    ///
    /// The kill is best-effort: an absent session is the common case on
    /// first start and its error is discarded. Termination happens at the
    /// session level; the daemon gets no graceful shutdown signal.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Host`](crate::AppError::Host) if the new session
    /// cannot be created.
    pub async fn start(&self) -> Result<()> {
        if let Err(err) = self.host.kill(&self.session_name).await {
            debug!(session = %self.session_name, %err, "no prior session killed");
        }

        self.host
            .create(&self.session_name, &self.daemon_command)
            .await?;

        info!(session = %self.session_name, command = %self.daemon_command, "daemon session created");
        Ok(())
    }

    /// Terminate the session if present; no-op otherwise.
    ///
    /// Intentionally infallible from the caller's view: the kill result is
    /// discarded, so "was running" and "was already absent" are
    /// indistinguishable afterwards.
    pub async fn stop(&self) {
        if let Err(err) = self.host.kill(&self.session_name).await {
            debug!(session = %self.session_name, %err, "no session to kill");
        }
        info!(session = %self.session_name, "daemon session stopped");
    }

    /// Query whether the daemon session currently exists. Non-mutating.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Host`](crate::AppError::Host) if the multiplexer
    /// cannot be invoked at all.
    pub async fn status(&self) -> Result<bool> {
        self.host.exists(&self.session_name).await
    }

    /// Attach the terminal to the daemon session, blocking until detach.
    ///
    /// Yields the attach exit code so the caller can propagate it. An
    /// absent session surfaces as the multiplexer's own non-zero exit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Host`](crate::AppError::Host) if the multiplexer
    /// cannot be invoked at all.
    pub async fn logs(&self) -> Result<i32> {
        self.host.attach(&self.session_name).await
    }
}
