//! Configuration: TOML file under the user config dir, with defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LogConfig};
