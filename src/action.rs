//! Lifecycle action — which operation the CLI performs against the session.
//!
//! `Action` is the single positional CLI argument. When omitted the manager
//! defaults to [`Action::Start`], matching the historical wrapper-script
//! behavior of "no argument means restart".

use clap::ValueEnum;

/// Lifecycle operation selected on the command line.
///
/// The variant set is closed: anything that does not parse into one of the
/// four operations is rejected before dispatch.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, ValueEnum)]
pub enum Action {
    /// Restart the daemon: kill any prior session, then create a fresh one.
    #[default]
    Start,
    /// Terminate the session if present; no-op otherwise.
    Stop,
    /// Report whether the session currently exists.
    Status,
    /// Attach the terminal to the session and block until detach.
    Logs,
}
