#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]
#![allow(clippy::print_stdout)]

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use client_assertion::cli::{render, Cli};
use client_assertion::SystemClock;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Load and validate configuration first (fail-fast)
    let config = cli.load_config()?;

    // Logs go to stderr so stdout stays machine readable
    let filter = EnvFilter::try_new(&config.logging.level)
        .with_context(|| format!("invalid logging.level '{}'", config.logging.level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "client-assertion starting up"
    );

    let rendered = render(&cli, &config, Arc::new(SystemClock))?;
    println!("{rendered}");

    Ok(())
}
