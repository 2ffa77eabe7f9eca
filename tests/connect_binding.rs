mod common;

use std::sync::Arc;

use common::{new_store, quest, received, EventLog};
use hive::action::HiveAction;
use hive::connect::{Binding, Component, Outbox};
use hive::error::StoreError;
use hive::select::{select_total_points, ViewSelectors};
use hive::slices::quests::Quest;
use hive::state::HiveState;
use hive::HiveStore;

/// Points badge that records every hook call.
struct PointsBadge {
    log: EventLog,
    shown: Option<u64>,
    renders: usize,
}

impl PointsBadge {
    fn new(log: EventLog) -> Self {
        Self {
            log,
            shown: None,
            renders: 0,
        }
    }
}

impl Component<HiveState> for PointsBadge {
    fn activated(&mut self) {
        self.log.push("activated");
    }

    fn state_changed(&mut self, state: &HiveState) {
        let total = select_total_points(state);
        self.log.push(format!("state:{total}"));
        if self.shown != Some(total) {
            self.shown = Some(total);
            self.renders += 1;
        }
    }

    fn deactivated(&mut self) {
        self.log.push("deactivated");
    }
}

#[test]
fn activation_delivers_current_state_once() {
    let store = new_store();
    store.dispatch(received(5)).unwrap();

    let log = EventLog::default();
    let mut binding = Binding::new(store.clone(), PointsBadge::new(log.clone()));
    binding.activate().unwrap();

    assert_eq!(log.entries(), vec!["activated", "state:5"]);
    assert_eq!(binding.inspect(|badge| badge.shown), Some(5));
}

#[test]
fn transitions_reach_active_component() {
    let store = new_store();
    let log = EventLog::default();
    let mut binding = Binding::new(store.clone(), PointsBadge::new(log.clone()));
    binding.activate().unwrap();

    store.dispatch(received(3)).unwrap();
    store.dispatch(HiveAction::RaffleSpinTick).unwrap();

    assert_eq!(
        log.entries(),
        vec!["activated", "state:0", "state:3", "state:3"]
    );
    // Component-level diffing skipped the unchanged total.
    assert_eq!(binding.inspect(|badge| badge.renders), 2);
}

#[test]
fn no_hook_after_deactivation() {
    let store = new_store();
    let log = EventLog::default();
    let mut binding = Binding::new(store.clone(), PointsBadge::new(log.clone()));
    binding.activate().unwrap();
    binding.deactivate();
    store.dispatch(received(9)).unwrap();

    assert_eq!(log.entries(), vec!["activated", "state:0", "deactivated"]);
    assert!(!binding.is_active());
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn activate_twice_subscribes_once() {
    let store = new_store();
    let log = EventLog::default();
    let mut binding = Binding::new(store.clone(), PointsBadge::new(log.clone()));
    binding.activate().unwrap();
    binding.activate().unwrap();
    assert_eq!(store.subscriber_count(), 1);
    assert_eq!(log.count("activated"), 1);
}

#[test]
fn dropping_binding_deactivates() {
    let store = new_store();
    let log = EventLog::default();
    {
        let mut binding = Binding::new(store.clone(), PointsBadge::new(log.clone()));
        binding.activate().unwrap();
    }
    store.dispatch(received(1)).unwrap();
    assert_eq!(log.entries(), vec!["activated", "state:0", "deactivated"]);
}

#[test]
fn deactivation_inside_a_pass_prevents_queued_delivery() {
    let store = new_store();
    let log = EventLog::default();
    let badge = Arc::new(parking_lot::Mutex::new(Some(Binding::new(
        store.clone(),
        PointsBadge::new(log.clone()),
    ))));

    // Registered before the badge: tears it down when points arrive and
    // queues another transition.
    let inner = store.clone();
    let owner = Arc::clone(&badge);
    let _router = store.subscribe(move |state| {
        if state.points.total == 1 {
            inner.dispatch(received(1)).unwrap();
            owner.lock().take();
        }
    });

    if let Some(binding) = badge.lock().as_mut() {
        binding.activate().unwrap();
    }

    store.dispatch(received(1)).unwrap();
    assert_eq!(store.get_state().points.total, 2);
    assert_eq!(log.entries(), vec!["activated", "state:0", "deactivated"]);
}

/// Quest list that re-renders only when its memoized view model changes.
struct QuestList {
    selectors: ViewSelectors,
    shown: Option<Arc<Vec<Quest>>>,
    renders: usize,
}

impl Component<HiveState> for QuestList {
    fn state_changed(&mut self, state: &HiveState) {
        let open = self.selectors.open_quests(state);
        if self.shown.as_ref().is_some_and(|shown| Arc::ptr_eq(shown, &open)) {
            return;
        }
        self.shown = Some(open);
        self.renders += 1;
    }
}

#[test]
fn memoized_selectors_let_components_skip_renders() {
    let store: HiveStore = new_store();
    let mut binding = Binding::new(
        store.clone(),
        QuestList {
            selectors: ViewSelectors::default(),
            shown: None,
            renders: 0,
        },
    );
    binding.activate().unwrap();

    store
        .dispatch(HiveAction::QuestsLoaded {
            quests: vec![quest("q1", false), quest("q2", false)],
        })
        .unwrap();
    store.dispatch(received(10)).unwrap();
    store.dispatch(received(10)).unwrap();

    let (renders, shown) =
        binding.inspect(|list| (list.renders, list.shown.as_ref().map(|quests| quests.len())));
    assert_eq!(renders, 2);
    assert_eq!(shown, Some(2));
}

/// Component that dispatches from its first hook call.
struct Greeter {
    store: HiveStore,
    greeted: bool,
}

impl Component<HiveState> for Greeter {
    fn state_changed(&mut self, state: &HiveState) {
        if !self.greeted {
            self.greeted = true;
            self.store.dispatch(received(1)).unwrap();
            // Queued until the first delivery returns.
            assert_eq!(self.store.get_state().points.total, state.points.total);
        }
    }
}

#[test]
fn dispatch_from_first_delivery_is_queued() {
    let store = new_store();
    let mut binding = Binding::new(
        store.clone(),
        Greeter {
            store: store.clone(),
            greeted: false,
        },
    );
    binding.activate().unwrap();
    assert_eq!(store.get_state().points.total, 1);
}

impl PointsBadge {
    fn on_claim(&mut self, outbox: &mut Outbox<HiveAction>) -> Option<u64> {
        self.log.push("claim");
        outbox.dispatch(received(1));
        self.shown
    }
}

#[test]
fn handler_actions_reach_the_same_component() {
    let store = new_store();
    let log = EventLog::default();
    let mut binding = Binding::new(store.clone(), PointsBadge::new(log.clone()));
    binding.activate().unwrap();

    let shown_during_handler = binding
        .with_component(|badge, outbox| badge.on_claim(outbox))
        .unwrap();

    assert_eq!(shown_during_handler, Some(0));
    assert_eq!(binding.inspect(|badge| badge.shown), Some(1));
    assert_eq!(
        log.entries(),
        vec!["activated", "state:0", "claim", "state:1"]
    );
}

#[test]
fn failed_handler_action_stops_the_outbox() {
    let store = new_store();
    let binding = Binding::new(store.clone(), PointsBadge::new(EventLog::default()));

    let err = binding
        .with_component(|_, outbox| {
            outbox.dispatch(HiveAction::PointsSpent { points: 5 });
            outbox.dispatch(received(1));
        })
        .unwrap_err();

    assert!(matches!(err, StoreError::Reducer { action: "POINTS_SPENT", .. }));
    assert_eq!(store.get_state().points.total, 0);
}
