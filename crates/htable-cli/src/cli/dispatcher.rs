use crate::cli::command_handlers::{ConfigHandler, RenderHandler};
use crate::cli::main_types::Commands;
use htable_core::core::services::config_service::ConfigService;
use htable_core::error::AppError;
use htable_core::storage::config::Config;
use std::path::PathBuf;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
}

impl Dispatcher {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    // Helper method to create ConfigService with current configuration
    fn create_config_service(&self) -> ConfigService {
        ConfigService::new(self.config.clone())
    }

    pub fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Render(args) => {
                let handler = RenderHandler::new();
                handler.handle(args, self.config.clone())
            }
            Commands::Config { command } => {
                let handler = ConfigHandler::new();
                let mut config_service = self.create_config_service();
                handler.handle(command, &mut config_service, self.config_path.clone())
            }
        }
    }
}
