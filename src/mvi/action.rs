//! Base traits for actions.

use std::fmt::Debug;

use crate::error::StoreError;

/// Marker trait for action objects.
///
/// Actions represent:
/// - User interactions (button clicks, form input)
/// - Service completions (data loaded, request failed)
/// - Timer events (spinner ticks)
///
/// Actions are consumed exactly once by a reducer and never retained.
pub trait Action: Clone + Debug + Send + Sync + 'static {
    /// Stable type tag used for logging and in the wire form.
    fn name(&self) -> &'static str;
}

/// Actions that can be built from their untyped `{type, payload}` form.
pub trait ParseAction: Action + Sized {
    /// Validates and decodes a raw action value.
    ///
    /// # Errors
    /// Returns [`StoreError::MalformedAction`] when the value has no string
    /// `type`, [`StoreError::UnknownAction`] when the type is not recognised
    /// and [`StoreError::InvalidPayload`] when the payload does not fit.
    fn parse(value: serde_json::Value) -> Result<Self, StoreError>;
}
