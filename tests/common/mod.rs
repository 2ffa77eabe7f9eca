//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;

use hive::action::HiveAction;
use hive::config::{HiveConfig, StoreConfig};
use hive::slices::quests::Quest;
use hive::slices::raffle::Raffle;
use hive::state::HiveState;
use hive::store::Store;
use hive::HiveStore;
use parking_lot::Mutex;

/// Store with default configuration.
pub fn new_store() -> HiveStore {
    hive::build_store(&HiveConfig::default())
}

/// Store whose re-entrant dispatch queue holds at most `limit` actions.
pub fn store_with_queue_limit(limit: usize) -> HiveStore {
    Store::new(
        HiveState::default(),
        &StoreConfig {
            max_queued_actions: limit,
        },
    )
}

/// Ordered log shared between callbacks.
#[derive(Clone, Default)]
pub struct EventLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl EventLog {
    pub fn push(&self, entry: impl Into<String>) {
        self.entries.lock().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    pub fn count(&self, entry: &str) -> usize {
        self.entries.lock().iter().filter(|e| *e == entry).count()
    }
}

pub fn received(points: u64) -> HiveAction {
    HiveAction::PointsReceived { points }
}

pub fn quest(id: &str, completed: bool) -> Quest {
    Quest {
        id: id.to_string(),
        title: format!("Quest {id}"),
        reward: 10,
        completed,
    }
}

pub fn raffle(id: &str, entrants: &[&str]) -> Raffle {
    Raffle {
        id: id.to_string(),
        title: format!("Raffle {id}"),
        entrants: entrants.iter().map(|e| e.to_string()).collect(),
        winner: None,
    }
}
