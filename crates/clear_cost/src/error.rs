// ---------------------------------------------------------------------------
// ClearCostError: failures of cost evaluation and consumption
// ---------------------------------------------------------------------------

use std::fmt;

use bevy::prelude::Entity;

/// Errors raised by the clear-cost core.
///
/// Both variants indicate a logic or state bug rather than a transient
/// condition, so nothing in the crate retries on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearCostError {
    /// The selection references an entity the store no longer holds.
    EntityNotFound(Entity),
    /// A tracked cell was read before its first `set`.
    UninitializedState(&'static str),
}

impl fmt::Display for ClearCostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClearCostError::EntityNotFound(entity) => {
                write!(f, "Entity for clear action not found: {entity:?}")
            }
            ClearCostError::UninitializedState(name) => {
                write!(f, "Tracked state '{name}' read before it was set")
            }
        }
    }
}

impl std::error::Error for ClearCostError {}
