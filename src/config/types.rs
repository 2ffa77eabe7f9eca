use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HiveConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub points: PointsConfig,
    #[serde(default)]
    pub raffle: RaffleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dispatch settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Maximum actions queued behind an in-flight dispatch (default: 256).
    #[serde(default = "default_max_queued_actions")]
    pub max_queued_actions: usize,
}

/// Points slice settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsConfig {
    /// Points a user aims to earn per day (default: 100).
    #[serde(default = "default_daily_goal")]
    pub daily_goal: u64,
}

/// Raffle slice settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaffleConfig {
    /// Number of spinner ticks before the wheel settles (default: 24).
    #[serde(default = "default_spin_ticks")]
    pub spin_ticks: u32,
}

/// Logging settings for the `hive` binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_max_queued_actions() -> usize {
    256
}

fn default_daily_goal() -> u64 {
    100
}

fn default_spin_ticks() -> u32 {
    24
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_queued_actions: default_max_queued_actions(),
        }
    }
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            daily_goal: default_daily_goal(),
        }
    }
}

impl Default for RaffleConfig {
    fn default() -> Self {
        Self {
            spin_ticks: default_spin_ticks(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
