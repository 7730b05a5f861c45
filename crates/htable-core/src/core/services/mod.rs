pub mod config_service;
pub mod render_service;
pub mod types;
