pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod server;
pub mod ui;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    match &cli.command {
        Command::Serve(args) => server::serve(args.clone().into()).await,
        _ => app::commands::execute(&cli).await,
    }
}

/// Logs go to stderr so client output stays pipeable. `RUST_LOG` overrides
/// the default level: info for the gateway, warn for client commands.
pub fn init_tracing(cli: &Cli) {
    let default_level = if cli.is_serve() { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
