//! Configuration loading for the state core and the `hive` tool.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{HiveConfig, LoggingConfig, PointsConfig, RaffleConfig, StoreConfig};
