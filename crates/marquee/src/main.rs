//! Marquee CLI binary.
//!
//! This binary provides command-line access to Marquee:
//! - Serve the HTTP API
//! - Generate a single poster or a full campaign from the terminal

use clap::Parser;
use marquee::{MarqueeConfig, ObservabilityConfig, init_tracing};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use cli::{Cli, Commands, run_campaign, run_poster, run_server};

    // Parse command-line arguments
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let observability = ObservabilityConfig::default()
        .with_log_level(log_level)
        .with_json_logs(cli.json_logs);
    init_tracing(&observability).map_err(|e| anyhow::anyhow!("{}", e))?;

    let config = MarqueeConfig::load()?;

    match cli.command {
        Commands::Serve { bind } => run_server(&config, bind).await?,
        Commands::Poster(args) => run_poster(&config, args).await?,
        Commands::Campaign(args) => run_campaign(&config, args).await?,
    }

    Ok(())
}
