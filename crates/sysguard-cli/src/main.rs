//! CLI entry point.
//!
//! Parses arguments, initialises tracing, loads the configuration and
//! dispatches to the subcommand handlers. All failures surface as a
//! sysexits-style exit code; each scheduled invocation starts fresh.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sysguard_cli::{Cli, CliError, Commands, config, handlers};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}

async fn run() -> Result<(), CliError> {
    // Load environment variables (credential override lives here)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = config::load(&cli.config)?;

    match cli.command {
        Commands::Smart => handlers::smart(&settings).await,
        Commands::Wifi => handlers::wifi(&settings).await,
        Commands::CheckConfig => handlers::check_config(&settings),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
