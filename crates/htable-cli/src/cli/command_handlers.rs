use crate::cli::main_types::{ConfigCommands, RenderArgs};
use htable_core::core::services::config_service::ConfigService;
use htable_core::core::services::render_service::RenderService;
use htable_core::core::services::types::{ConfigUpdate, RenderParams};
use htable_core::error::{AppError, CliError, StorageError};
use htable_core::storage::config::Config;
use log::{debug, info};
use std::path::PathBuf;

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config_service: &mut ConfigService,
        config_path: Option<PathBuf>,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                debug!("Showing configuration");

                println!("Current Configuration:");
                println!("=====================");
                println!("Sort field parameter: {}", config_service.sort_field_name());
                println!("Sort order parameter: {}", config_service.sort_order_name());
                println!("Empty text: {}", config_service.empty_text());
                println!(
                    "Escape HTML: {}",
                    if config_service.escape() { "yes" } else { "no" }
                );
                Ok(())
            }
            ConfigCommands::Set {
                sort_field_name,
                sort_order_name,
                empty_text,
                escape,
            } => {
                let update = ConfigUpdate {
                    sort_field_name,
                    sort_order_name,
                    empty_text,
                    escape,
                };
                if update.is_empty() {
                    return Err(CliError::InvalidArguments(
                        "Nothing to set. Pass at least one option, see 'htable config set --help'"
                            .to_string(),
                    )
                    .into());
                }

                debug!("Applying configuration update: {:?}", update);
                config_service.apply(update)?;
                config_service.save_config(config_path)?;
                println!("✅ Configuration saved");
                Ok(())
            }
        }
    }
}

#[derive(Default)]
pub struct RenderHandler;

impl RenderHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, args: RenderArgs, config: Config) -> Result<(), AppError> {
        debug!(
            "Render command: layout={}, rows={}, query={:?}, params={:?}",
            args.layout.display(),
            args.rows.display(),
            args.query,
            args.param
        );

        let service = RenderService::new(config);
        let html = service.render(&RenderParams {
            layout: args.layout,
            rows: args.rows,
            query: args.query,
            params: args.param,
            empty_text: args.empty_text,
        })?;

        match args.output {
            Some(path) => {
                std::fs::write(&path, format!("{}\n", html)).map_err(|source| {
                    StorageError::FileIo {
                        path: path.to_string_lossy().to_string(),
                        source,
                    }
                })?;
                info!("Wrote table to {}", path.display());
            }
            None => println!("{}", html),
        }
        Ok(())
    }
}
