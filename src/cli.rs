use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "hive", version, about = "Replay and check Hive client actions")]
pub struct Cli {
    /// Path to the config file (default: ~/.config/hive/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Dispatch a JSON array of actions and print the dashboard view model.
    Replay {
        file: PathBuf,
        /// Stop at the first rejected action.
        #[arg(long)]
        fail_fast: bool,
    },
    /// Validate a JSON array of actions without dispatching them.
    Check { file: PathBuf },
}
