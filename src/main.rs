mod config;
mod responder;
mod signals;

use clap::Parser;
use responder::Responder;
use signals::SignalHandler;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Beep on every SIGINT; on SIGQUIT print how many beeps there were and exit.
#[derive(Parser, Debug)]
#[command(name = "sigbeep", version, about)]
pub struct Cli {
    /// Config file path (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the resolved settings and exit without waiting for signals
    #[arg(long)]
    dry_run: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries only the bell and the final count; logs go to stderr.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_thread_ids(false)
        .init();

    tracing::debug!(?cli, "parsed CLI arguments");

    let config = match config::load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "failed to load config");
            return ExitCode::FAILURE;
        }
    };

    if cli.dry_run {
        println!("sigbeep v{}", env!("CARGO_PKG_VERSION"));
        println!("label: {}", config.output.label);
        return ExitCode::SUCCESS;
    }

    let mut handler = match SignalHandler::install() {
        Ok(h) => h,
        Err(e) => {
            tracing::error!(error = %e, "failed to install signal handlers");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(pid = std::process::id(), "signal handlers installed");

    let mut responder = Responder::new(std::io::stdout(), config.output.label);
    handler.run(&mut responder).await;

    ExitCode::SUCCESS
}
