//! Command-line front end: prints the header and claims of a client assertion as JSON.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use crate::clock::Clock;
use crate::config::Config;
use crate::decorator::{ClientAssertionDecorator, CompositeDecorator, StaticDecorator};

/// Print the header and claims of a client assertion as JSON.
///
/// The output is ready to be handed to a JWS signer; nothing is signed here.
#[derive(Debug, Parser)]
#[command(name = "client-assertion", version)]
pub struct Cli {
    /// DER-encoded client certificate.
    #[arg(long)]
    pub certificate: PathBuf,

    /// YAML configuration file (defaults to ./config.yaml when present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// Load configuration from the file named on the command line, or the defaults.
    ///
    /// # Errors
    /// Returns an error if an explicitly named file is missing, or if the
    /// configuration cannot be loaded or is invalid.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .map_err(|e| anyhow::anyhow!("{e}"))
    }
}

/// Build the assertion content and render it as `{"header": .., "claims": ..}`.
///
/// # Errors
/// Returns an error if the certificate cannot be read or is empty, or if the
/// configuration is invalid.
pub fn render(cli: &Cli, config: &Config, clock: Arc<dyn Clock>) -> anyhow::Result<String> {
    let certificate = std::fs::read(&cli.certificate)
        .with_context(|| format!("failed to read certificate {}", cli.certificate.display()))?;
    if certificate.is_empty() {
        anyhow::bail!("certificate file {} is empty", cli.certificate.display());
    }

    let decorator = ClientAssertionDecorator::from_config(&config.assertion, &certificate, clock)
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    tracing::info!(
        audience = %decorator.audience(),
        client_id = %decorator.client_id(),
        x5t = %decorator.thumbprint(),
        validity_seconds = decorator.validity_seconds(),
        "building client assertion"
    );

    let (header, claims) = CompositeDecorator::new()
        .with(Arc::new(StaticDecorator::new().with_header("typ", "JWT")))
        .with(Arc::new(decorator))
        .into_parts();

    let output = serde_json::json!({ "header": header, "claims": claims });
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(rendered)
}
