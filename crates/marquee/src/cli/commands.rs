//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Marquee - turn a movie summary into a poster campaign
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "Turn a movie summary into a poster campaign", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Listen address (defaults to bind_address from configuration)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Generate a single poster, skipping analysis
    Poster(GenerateArgs),

    /// Generate a full campaign
    Campaign(GenerateArgs),
}

/// Arguments shared by the generation commands
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Movie plot summary
    #[arg(long)]
    pub summary: String,

    /// Optional style direction (e.g. "retro 80s")
    #[arg(long)]
    pub style_hint: Option<String>,

    /// Directory to save generated images into
    #[arg(long)]
    pub out: Option<PathBuf>,
}
