//! `quill serve` command implementation.

use clap::Args;
use quill_server::{Config, run_server};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Host to bind to (overrides HOST).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (per-request timing logs).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is incomplete or the server fails
    /// to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let mut config = Config::from_env()?;
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }

        output.info(&format!(
            "Starting server on {}:{}",
            config.host, config.port
        ));
        output.info(&format!(
            "Serving collection {} from {}",
            config.collection_id, config.api_host
        ));

        run_server(config).await?;
        Ok(())
    }
}
