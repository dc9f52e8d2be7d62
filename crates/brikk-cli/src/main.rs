//! Brikk CLI - Command-line driver for the Brikk coordination platform
//!
//! This is the main entry point for the `brikk` binary. It parses
//! arguments, builds one SDK client from flags and environment, and hands
//! each subcommand to its handler.

mod cli;
mod error;
mod handlers;
mod logging;
mod output;

use brikk_core::{Brikk, ConfigOverrides, ClientConfig};
use cli::{Cli, Commands, ConnectionArgs};
use colored::control;
use error::Result;
use output::OutputWriter;
use std::process;

#[tokio::main]
async fn main() {
    // Pick up a local .env before anything reads the environment
    dotenv::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    if let Err(e) = logging::init_logging(cli.verbosity_level(), cli.quiet) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    let result = run(cli).await;

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
async fn run(cli: Cli) -> Result<()> {
    let brikk = build_client(&cli.connection)?;
    let output = OutputWriter::new(cli.output, cli.use_color(), cli.quiet);

    tracing::info!(
        base_url = %brikk.config().base_url,
        command = ?cli.command,
        "executing command"
    );

    match cli.command {
        Commands::Health => handlers::handle_health(&brikk, &output).await,
        Commands::Agents(command) => handlers::handle_agents(command, &brikk, &output).await,
        Commands::Send(args) => handlers::handle_send(args, &brikk, &output).await,
        Commands::Economy(command) => handlers::handle_economy(command, &brikk, &output).await,
        Commands::Reputation(command) => {
            handlers::handle_reputation(command, &brikk, &output).await
        }
    }
}

/// Build the SDK client from connection flags.
///
/// Flags already carry their `BRIKK_*` env fallbacks via clap; the core
/// resolution layer fills in anything still unset.
fn build_client(connection: &ConnectionArgs) -> Result<Brikk> {
    let config = ClientConfig::resolve(ConfigOverrides {
        base_url: connection.base_url.clone(),
        api_key: connection.api_key.clone(),
        signing_secret: connection.signing_secret.clone(),
        org_id: connection.org_id.clone(),
        timeout_ms: connection.timeout_ms,
        max_retries: connection.max_retries,
    })?;
    Ok(Brikk::new(config)?)
}
