//! propkit binary.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use propkit::cli::Cli;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the looked-up value
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!("Starting propkit v{}", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    match propkit::run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "Run failed");
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        },
    }
}
