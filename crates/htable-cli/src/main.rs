use clap::Parser;
use htable_core::error::{AppError, StorageError};
use htable_core::storage::config::Config;
use log::{debug, warn};
use std::path::PathBuf;

mod cli;

use cli::dispatcher::Dispatcher;
use cli::main_types::{Cli, Commands, ConfigCommands};

fn main() {
    let cli = Cli::parse();

    cli::logging::init(cli.verbose);

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    if let Some(config_dir) = &cli.config_dir {
        debug!("Using config directory: {}", config_dir);
    }

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        // `config set` rewrites the file, so it may start over from defaults
        Err(err @ StorageError::ConfigParseError { .. }) if overwrites_config(&cli.command) => {
            warn!("{}; starting from default configuration", err);
            Config::default()
        }
        Err(err) => exit_with_error(err.into()),
    };

    let dispatcher = Dispatcher::new(config, config_path);

    if let Err(e) = dispatcher.dispatch(cli.command) {
        exit_with_error(e);
    }
}

fn overwrites_config(command: &Commands) -> bool {
    matches!(
        command,
        Commands::Config {
            command: ConfigCommands::Set { .. }
        }
    )
}

fn exit_with_error(e: AppError) -> ! {
    eprintln!("Error: {}", e);
    if let Some(hint) = e.troubleshooting_hint() {
        eprintln!("Hint: {}", hint);
    }
    debug!("Error severity: {}", e.severity().label());
    std::process::exit(1);
}
