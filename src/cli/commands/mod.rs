//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `resolve`: one-shot classification and resolution
//! - `listen`: newline-delimited JSON message stream
//! - `config`: config file management

mod config;
mod listen;
mod resolve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

pub use config::cmd_config;
pub use listen::cmd_listen;
pub use resolve::{cmd_classify, cmd_resolve};

/// Tunebridge CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to the OS config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Per-aggregator timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Odesli API key (or set ODESLI_API_KEY env var)
    #[arg(long, global = true, env = "ODESLI_API_KEY", hide_env_values = true)]
    pub odesli_api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Show which music link (if any) a text contains
    Classify {
        /// Message text
        text: String,
    },
    /// Resolve the music link in a text and print the reply
    Resolve {
        /// Message text
        text: String,
        /// Name credited in the reply
        #[arg(long, default_value = "someone")]
        user: String,
        /// Chat user id, turns the name into a mention
        #[arg(long)]
        user_id: Option<i64>,
    },
    /// Read JSON messages from stdin, write JSON replies to stdout
    Listen,
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Classify { text } => cmd_classify(text),
        Commands::Resolve {
            text,
            user,
            user_id,
        } => {
            let rt = Runtime::new()?;
            cmd_resolve(&rt, &effective_config(cli), text, user, *user_id)
        }
        Commands::Listen => {
            let rt = Runtime::new()?;
            cmd_listen(&rt, &effective_config(cli))
        }
        Commands::Config { action } => cmd_config(cli, action),
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Config file location from `--config` or the OS default
pub(crate) fn config_location(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(crate::config::config_path)
}

/// Loaded config with command-line overrides applied
pub(crate) fn effective_config(cli: &Cli) -> crate::config::Config {
    let mut config = match &cli.config {
        Some(path) => crate::config::load_from(path),
        None => crate::config::load(),
    };

    if let Some(secs) = cli.timeout {
        config.resolver.timeout_secs = secs;
    }
    if let Some(key) = cli.odesli_api_key.as_ref().filter(|k| !k.is_empty()) {
        config.odesli.api_key = Some(key.clone());
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_resolve() {
        let cli = Cli::try_parse_from([
            "tunebridge",
            "--timeout",
            "3",
            "resolve",
            "https://open.spotify.com/track/1",
            "--user",
            "Alice",
            "--user-id",
            "42",
        ])
        .unwrap();

        assert_eq!(cli.timeout, Some(3));
        match cli.command {
            Commands::Resolve { text, user, user_id } => {
                assert_eq!(text, "https://open.spotify.com/track/1");
                assert_eq!(user, "Alice");
                assert_eq!(user_id, Some(42));
            }
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn test_overrides_apply() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[resolver]\ntimeout_secs = 20\n").unwrap();

        let cli = Cli::try_parse_from([
            "tunebridge",
            "--config",
            path.to_str().unwrap(),
            "--timeout",
            "4",
            "--odesli-api-key",
            "k",
            "listen",
        ])
        .unwrap();

        let config = effective_config(&cli);
        assert_eq!(config.resolver.timeout_secs, 4);
        assert_eq!(config.odesli.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
