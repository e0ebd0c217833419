use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// eventboard - register, log in, publish and join events
#[derive(Parser)]
#[command(name = "eventboard")]
#[command(about = "Minimal event board backend", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Delete the users and events data files
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = eventboard::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    eventboard::observability::init_observability(
        "eventboard",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::serve(config, host, port).await,
        Commands::Reset => cli::reset(config).await,
    }
}
