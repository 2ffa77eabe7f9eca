mod common;

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use common::{new_store, received, store_with_queue_limit, EventLog};
use hive::action::HiveAction;
use hive::error::{ReduceError, StoreError};
use hive::select::select_total_points;
use hive::HiveStore;
use parking_lot::Mutex;
use serde_json::json;

#[test]
fn get_state_starts_at_initial_tree() {
    let store = new_store();
    assert_eq!(select_total_points(&store.get_state()), 0);
    assert_eq!(store.get_state().points.daily_goal, 100);
}

#[test]
fn subscribers_are_notified_once_in_registration_order() {
    let store = new_store();
    let log = EventLog::default();

    let subscriptions: Vec<_> = (0..3)
        .map(|n| {
            let log = log.clone();
            store.subscribe(move |_| log.push(format!("sub{n}")))
        })
        .collect();

    store.dispatch(received(1)).unwrap();
    assert_eq!(log.entries(), vec!["sub0", "sub1", "sub2"]);
    drop(subscriptions);
}

#[test]
fn subscribers_see_committed_state() {
    let store = new_store();
    let seen = EventLog::default();
    let log = seen.clone();
    let _sub = store.subscribe(move |state| log.push(state.points.total.to_string()));

    store.dispatch(received(42)).unwrap();
    store.dispatch(received(8)).unwrap();
    assert_eq!(seen.entries(), vec!["42", "50"]);
}

#[test]
fn subscribers_are_notified_even_without_change() {
    let store = new_store();
    let log = EventLog::default();
    let sink = log.clone();
    let _sub = store.subscribe(move |_| sink.push("called"));

    let before = store.get_state();
    store.dispatch(HiveAction::RaffleSpinTick).unwrap();
    assert!(Arc::ptr_eq(&before, &store.get_state()));
    assert_eq!(log.count("called"), 1);
}

#[test]
fn reducer_failure_leaves_state_and_skips_notification() {
    let store = new_store();
    store.dispatch(received(5)).unwrap();
    let before = store.get_state();

    let log = EventLog::default();
    let sink = log.clone();
    let _sub = store.subscribe(move |_| sink.push("called"));

    let err = store
        .dispatch(HiveAction::PointsSpent { points: 6 })
        .unwrap_err();
    match err {
        StoreError::Reducer { action, source } => {
            assert_eq!(action, "POINTS_SPENT");
            assert_eq!(
                source,
                ReduceError::InsufficientPoints {
                    requested: 6,
                    balance: 5
                }
            );
        }
        other => panic!("expected reducer error, got {other:?}"),
    }

    assert!(Arc::ptr_eq(&before, &store.get_state()));
    assert!(log.entries().is_empty());

    store.dispatch(received(1)).unwrap();
    assert_eq!(store.get_state().points.total, 6);
}

#[test]
fn dispatch_from_subscriber_is_applied_after_the_pass() {
    let store = new_store();
    let log = EventLog::default();

    let inner = store.clone();
    let first_log = log.clone();
    let _first = store.subscribe(move |state| {
        first_log.push(format!("first:{}", state.points.total));
        if state.points.total == 1 {
            inner.dispatch(received(10)).unwrap();
            // Not applied yet: still inside the pass for the first action.
            assert_eq!(inner.get_state().points.total, 1);
        }
    });

    let second_log = log.clone();
    let _second = store.subscribe(move |state| {
        second_log.push(format!("second:{}", state.points.total));
    });

    store.dispatch(received(1)).unwrap();

    assert_eq!(
        log.entries(),
        vec!["first:1", "second:1", "first:11", "second:11"]
    );
    assert_eq!(store.get_state().points.total, 11);
}

#[test]
fn queued_actions_run_in_issue_order() {
    let store = new_store();
    let inner = store.clone();
    let _sub = store.subscribe(move |state| {
        if state.points.total == 1 {
            inner.dispatch(received(10)).unwrap();
            inner.dispatch(received(100)).unwrap();
        }
    });

    let totals = EventLog::default();
    let sink = totals.clone();
    let _watch = store.subscribe(move |state| sink.push(state.points.total.to_string()));

    store.dispatch(received(1)).unwrap();
    assert_eq!(totals.entries(), vec!["1", "11", "111"]);
}

#[test]
fn failing_queued_action_reports_to_outer_caller() {
    let store = new_store();
    let inner = store.clone();
    let _sub = store.subscribe(move |state| {
        if state.points.total == 3 {
            inner.dispatch(HiveAction::PointsSpent { points: 50 }).unwrap();
            inner.dispatch(received(1)).unwrap();
        }
    });

    let err = store.dispatch(received(3)).unwrap_err();
    assert!(matches!(err, StoreError::Reducer { action: "POINTS_SPENT", .. }));
    // The first transition committed; the action queued after the failure
    // was discarded.
    assert_eq!(store.get_state().points.total, 3);

    store.dispatch(received(1)).unwrap();
    assert_eq!(store.get_state().points.total, 4);
}

#[test]
fn queue_overflow_is_reported_to_the_dispatching_subscriber() {
    let store = store_with_queue_limit(2);
    let results = EventLog::default();

    let inner = store.clone();
    let sink = results.clone();
    let _sub = store.subscribe(move |state| {
        if state.points.total == 1 {
            for _ in 0..3 {
                let outcome = match inner.dispatch(received(1)) {
                    Ok(()) => "queued".to_string(),
                    Err(StoreError::QueueOverflow { limit }) => format!("overflow:{limit}"),
                    Err(other) => format!("other:{other}"),
                };
                sink.push(outcome);
            }
        }
    });

    store.dispatch(received(1)).unwrap();
    assert_eq!(results.entries(), vec!["queued", "queued", "overflow:2"]);
    assert_eq!(store.get_state().points.total, 3);
    assert_eq!(store.stats().rejected, 1);
}

#[test]
fn raw_dispatch_validates_shape() {
    let store = new_store();

    let err = store.dispatch_raw(json!({"payload": {"points": 1}})).unwrap_err();
    assert!(matches!(err, StoreError::MalformedAction { .. }));

    let err = store.dispatch_raw(json!({"type": "HIGH_FIVE"})).unwrap_err();
    assert!(matches!(err, StoreError::UnknownAction { .. }));

    assert_eq!(store.stats().committed, 0);
    assert_eq!(store.stats().rejected, 2);

    store
        .dispatch_raw(json!({"type": "POINTS_RECEIVED", "payload": {"points": 42}}))
        .unwrap();
    assert_eq!(store.get_state().points.total, 42);
}

#[test]
fn panicking_subscriber_does_not_wedge_the_store() {
    let store = new_store();
    let sub = store.subscribe(|state| {
        if state.points.total == 1 {
            panic!("render blew up");
        }
    });

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _ = store.dispatch(received(1));
    }));
    assert!(outcome.is_err());
    drop(sub);

    // The transition committed before notification; the store accepts new
    // dispatches afterwards.
    assert_eq!(store.get_state().points.total, 1);
    store.dispatch(received(1)).unwrap();
    assert_eq!(store.get_state().points.total, 2);
}

#[test]
fn clones_share_one_container() {
    let store = new_store();
    let other = store.clone();
    other.dispatch(received(7)).unwrap();
    assert_eq!(store.get_state().points.total, 7);
}

/// Subscribes a callback that, on the first transition reaching `total`,
/// signals the returned receiver and then stalls the pass for a while.
fn stall_pass_at(store: &HiveStore, total: u64) -> (hive::store::Subscription, mpsc::Receiver<()>) {
    let (entered_tx, entered_rx) = mpsc::channel();
    let entered_tx = Mutex::new(Some(entered_tx));
    let subscription = store.subscribe(move |state| {
        if state.points.total == total {
            if let Some(tx) = entered_tx.lock().take() {
                tx.send(()).unwrap();
                thread::sleep(Duration::from_millis(200));
            }
        }
    });
    (subscription, entered_rx)
}

#[test]
fn other_threads_wait_for_the_pass_and_get_their_own_result() {
    let store = new_store();
    let (_stall, entered) = stall_pass_at(&store, 1);

    let spawn = |action: HiveAction| {
        let store = store.clone();
        thread::spawn(move || store.dispatch(action))
    };

    let first = spawn(received(1));
    entered.recv().unwrap();
    let overspend = spawn(HiveAction::PointsSpent { points: 100 });
    let bonus = spawn(received(5));

    assert!(first.join().unwrap().is_ok());
    let err = overspend.join().unwrap().unwrap_err();
    assert!(matches!(err, StoreError::Reducer { action: "POINTS_SPENT", .. }));
    assert!(bonus.join().unwrap().is_ok());

    assert_eq!(store.get_state().points.total, 6);
    assert_eq!(store.stats().committed, 2);
    assert_eq!(store.stats().rejected, 1);
}

#[test]
fn other_thread_runs_after_queued_actions_drain() {
    let store = new_store();
    let totals = EventLog::default();

    let inner = store.clone();
    let _requeue = store.subscribe(move |state| {
        if state.points.total == 1 {
            inner.dispatch(received(10)).unwrap();
        }
    });
    let (_stall, entered) = stall_pass_at(&store, 1);
    let sink = totals.clone();
    let _watch = store.subscribe(move |state| sink.push(state.points.total.to_string()));

    let first = {
        let store = store.clone();
        thread::spawn(move || store.dispatch(received(1)))
    };
    entered.recv().unwrap();
    store.dispatch(received(100)).unwrap();
    first.join().unwrap().unwrap();

    assert_eq!(totals.entries(), vec!["1", "11", "111"]);
}
