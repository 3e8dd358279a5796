//! StageKV CLI
//!
//! Runs command lines against an in-memory store, either interactively
//! from stdin or from a script file.

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use stagekv::{Config, Session, SessionSummary, TransactionalStore};
use tracing_subscriber::{fmt, EnvFilter};

/// StageKV CLI
#[derive(Parser, Debug)]
#[command(name = "stagekv-cli")]
#[command(about = "Transactional in-memory key-value store")]
#[command(version)]
struct Args {
    /// Read commands from a script file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Do not print a prompt before each command
    #[arg(short, long)]
    quiet: bool,

    /// Initial capacity of the committed store
    #[arg(long, default_value = "0")]
    capacity: usize,
}

const PROMPT: &str = "stagekv> ";

fn main() {
    // Initialize tracing/logging (stderr, so responses on stdout stay clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,stagekv=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("StageKV CLI v{}", stagekv::VERSION);

    let config = Config::builder().committed_capacity(args.capacity).build();

    let result = match &args.script {
        Some(path) => {
            tracing::info!("Running script: {}", path.display());
            run_script(path, config)
        }
        None => run_interactive(config, !args.quiet),
    };

    match result {
        // Script ran to completion but reported errors
        Ok(summary) if summary.errors > 0 && args.script.is_some() => {
            std::process::exit(2);
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!("Session error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_script(path: &Path, config: Config) -> stagekv::Result<SessionSummary> {
    let stdout = io::stdout();
    let store = TransactionalStore::with_config(config);
    let mut session = Session::from_path(path, stdout.lock(), store)?;
    session.run()
}

fn run_interactive(config: Config, show_prompt: bool) -> stagekv::Result<SessionSummary> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::with_store(
        stdin.lock(),
        stdout.lock(),
        TransactionalStore::with_config(config),
    );
    if show_prompt {
        session = session.prompt(PROMPT);
    }

    session.run()
}
