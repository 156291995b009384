pub mod app_config;
pub mod cart;
pub mod config;

pub use app_config::{AppConfig, Environment};
pub use cart::{CartItem, CartLink, CartReport, ProcessingError, ProcessingErrorKind};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
