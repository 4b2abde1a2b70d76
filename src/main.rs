#![forbid(unsafe_code)]

//! `chatmux` — lifecycle manager for a tmux-hosted chat daemon.
//!
//! Maps four commands (`start`, `stop`, `status`, `logs`) onto a named tmux
//! session that hosts the daemon process. The daemon itself is an opaque
//! collaborator; this binary only creates, kills, queries, and attaches to
//! the session wrapping it.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use chatmux::action::Action;
use chatmux::config::DaemonConfig;
use chatmux::host::TmuxHost;
use chatmux::manager::SessionManager;
use chatmux::{AppError, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "chatmux", about = "Lifecycle manager for a tmux-hosted chat daemon", version, long_about = None)]
struct Cli {
    /// Lifecycle command to run.
    #[arg(value_enum, default_value_t = Action::Start)]
    command: Action,

    /// Path to the TOML configuration file (defaults apply when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let args = parse_cli();
    init_tracing(args.log_format)?;

    let code = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args))?;

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

async fn run(args: Cli) -> Result<i32> {
    let config = match args.config {
        Some(path) => DaemonConfig::load_from_path(path)?,
        None => DaemonConfig::default(),
    };

    let manager = SessionManager::new(TmuxHost::new(&config.tmux_bin), &config);

    match args.command {
        Action::Start => {
            manager.start().await?;
            println!(
                "chat daemon started in session '{}'; follow it with `chatmux logs`",
                manager.session_name()
            );
            println!("shut it down with `chatmux stop`");
            Ok(0)
        }
        Action::Stop => {
            manager.stop().await;
            println!("chat daemon stopped");
            Ok(0)
        }
        Action::Status => {
            if manager.status().await? {
                println!("RUNNING");
            } else {
                println!("NOT running");
            }
            Ok(0)
        }
        Action::Logs => manager.logs().await,
    }
}

/// Parse the command line, keeping clap's stock `--help`/`--version`
/// behavior but reporting unrecognized commands as a usage line on stdout
/// with exit status 1.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            println!("usage: chatmux [start|stop|status|logs]");
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr: stdout is reserved for the status lines callers parse.
fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
