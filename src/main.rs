mod cli;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use serde_json::json;

use cli::{Cli, Command};
use hive::config::HiveConfig;
use hive::logging::init_tracing;
use hive::replay::{check, read_recording, replay};
use hive::select::select_dashboard;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => HiveConfig::load_from(path),
        None => HiveConfig::load(),
    }
    .context("loading configuration")?;
    init_tracing(&config.logging.filter);

    match cli.command {
        Command::Replay { file, fail_fast } => {
            let actions = read_recording(&file).context("reading recording")?;
            let store = hive::build_store(&config);
            let report = replay(&store, actions, fail_fast);
            let clean = report.rejected.is_empty();
            let output = json!({
                "report": report,
                "stats": store.stats(),
                "dashboard": select_dashboard(&store.get_state()),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(exit_code(clean))
        }
        Command::Check { file } => {
            let actions = read_recording(&file).context("reading recording")?;
            let rejected = check(&actions);
            println!("{}", serde_json::to_string_pretty(&rejected)?);
            Ok(exit_code(rejected.is_empty()))
        }
    }
}

fn exit_code(clean: bool) -> ExitCode {
    if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
