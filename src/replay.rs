//! Replaying recorded actions against a store.
//!
//! Used by the `hive` tool: a recording is a JSON array of raw
//! `{type, payload}` actions, as service code would dispatch them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::action::HiveAction;
use crate::mvi::ParseAction;
use crate::HiveStore;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read recording '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse recording '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Recording '{path}' must be a JSON array of actions")]
    NotAnArray { path: PathBuf },
}

/// One action that could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Position in the recording.
    pub index: usize,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ReplayReport {
    pub applied: usize,
    pub rejected: Vec<Rejection>,
    /// Actions not attempted because of `fail_fast`.
    pub skipped: usize,
}

/// Read a recording from disk.
pub fn read_recording(path: &Path) -> Result<Vec<Value>, ReplayError> {
    let content = fs::read_to_string(path).map_err(|source| ReplayError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&content).map_err(|source| ReplayError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Array(actions) => Ok(actions),
        _ => Err(ReplayError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

/// Dispatch each raw action in order.
///
/// With `fail_fast`, stops at the first rejected action and counts the rest
/// as skipped.
pub fn replay(store: &HiveStore, actions: Vec<Value>, fail_fast: bool) -> ReplayReport {
    let total = actions.len();
    let mut report = ReplayReport::default();
    for (index, raw) in actions.into_iter().enumerate() {
        match store.dispatch_raw(raw) {
            Ok(()) => report.applied += 1,
            Err(err) => {
                report.rejected.push(Rejection {
                    index,
                    error: err.to_string(),
                });
                if fail_fast {
                    report.skipped = total - index - 1;
                    break;
                }
            }
        }
    }
    tracing::info!(
        applied = report.applied,
        rejected = report.rejected.len(),
        skipped = report.skipped,
        "replay finished"
    );
    report
}

/// Validate the shape of each raw action without dispatching anything.
pub fn check(actions: &[Value]) -> Vec<Rejection> {
    actions
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            HiveAction::parse(raw.clone()).err().map(|err| Rejection {
                index,
                error: err.to_string(),
            })
        })
        .collect()
}
