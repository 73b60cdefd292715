//! Tunebridge - cross-platform music link resolver.
//!
//! Spots a streaming-service link in a chat message, asks Odesli and
//! Songwhip for the same item on every other platform, and replies with
//! one merged list of links.

pub mod bot;
pub mod cli;
pub mod config;
pub mod error;
pub mod links;
pub mod resolver;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr; stdout carries replies
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("tunebridge=info"),
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run_command(&args)
}
