//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the marquee binary.

mod commands;
mod generate;
mod server;

pub use commands::{Cli, Commands, GenerateArgs};
pub use generate::{run_campaign, run_poster};
pub use server::run_server;
