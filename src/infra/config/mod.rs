mod app_config;
mod file_config;
mod loader;

pub use app_config::{AppConfig, ChatConfig, LogConfig, StoreConfig};
pub use loader::{load, FileConfigAdapter};
