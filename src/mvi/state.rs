//! Base trait for state slices.

/// Marker trait for state objects held by the store.
///
/// States should be:
/// - Immutable (a transition builds a new value, never edits in place)
/// - Self-contained (all data needed to derive view models)
/// - Comparable (PartialEq for purity checks in tests)
/// - Shareable across threads (snapshots are handed out as `Arc`)
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
