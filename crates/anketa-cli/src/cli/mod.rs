//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::logging;

#[derive(Parser)]
#[command(name = "anketa")]
#[command(version)]
#[command(about = "Terminal login/registration form")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log file path (the TUI owns stdout, so logs go to a file)
    #[arg(long, env = "ANKETA_LOG_FILE", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the auth form
    Auth,
}

/// Parses arguments and dispatches.
///
/// The form is the app's only destination: a bare invocation redirects to
/// `auth`.
///
/// # Errors
/// Returns an error if logging or the terminal cannot be initialized.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive for the whole run so buffered logs flush on exit.
    let _guard = logging::init(cli.log_file.clone()).context("Failed to initialize logging")?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "anketa starting");

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    match cli.command.unwrap_or(Commands::Auth) {
        Commands::Auth => runtime.block_on(anketa_tui::run()),
    }
}
