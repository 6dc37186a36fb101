//! User configuration: named kegs, title settings and logging.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use types::{ConfigFile, KegProfile, LoggingConfig, ResolvedConfig, TitleConfig};
