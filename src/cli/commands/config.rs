//! Config file management commands.

use crate::config::{self, Config};
use crate::error::ResultExt;

use super::{Cli, ConfigAction, config_location, effective_config};

/// Run a `config` subcommand
pub fn cmd_config(cli: &Cli, action: &ConfigAction) -> anyhow::Result<()> {
    match action {
        ConfigAction::Init { force } => {
            let path = config_location(cli)
                .ok_or(config::ConfigError::NoConfigDir)
                .with_context("locating config file")?;
            if path.exists() && !force {
                eprintln!("Config already exists at {}", path.display());
                eprintln!("Use --force to overwrite it.");
                return Ok(());
            }
            config::save_to(&Config::default(), &path)
                .with_context(format!("writing {}", path.display()))?;
            println!("Wrote default config to {}", path.display());
        }
        ConfigAction::Show => {
            let mut config = effective_config(cli);
            if config.odesli.api_key.is_some() {
                config.odesli.api_key = Some("<redacted>".to_string());
            }
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => match config_location(cli) {
            Some(path) => println!("{}", path.display()),
            None => println!("no config directory on this platform"),
        },
    }
    Ok(())
}
