//! Seams between the clear-cost core and the systems it reads from.
//!
//! The core never reaches into the world on its own: every query it makes
//! goes through one of these traits, passed in explicitly by the caller.
//! `plugin` implements them on the game's resources and components; tests
//! implement them on plain structs.

use bevy::prelude::*;

/// Identity of a shared aggregation structure (a connected belt path).
///
/// Parts carrying equal keys belong to the same structure and are counted
/// once per evaluation, however many selected entities touch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AggregationGroupKey(pub Entity);

/// One cost-contributing part of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostPart {
    /// Items that would be destroyed along with this part.
    pub quantity: u64,
    pub group: Option<AggregationGroupKey>,
}

impl CostPart {
    /// A part that belongs only to its entity.
    pub fn standalone(quantity: u64) -> Self {
        Self {
            quantity,
            group: None,
        }
    }

    /// A part shared through an aggregation group.
    pub fn grouped(quantity: u64, group: AggregationGroupKey) -> Self {
        Self {
            quantity,
            group: Some(group),
        }
    }
}

/// The player's current clear selection.
pub trait SelectionSource {
    /// Snapshot of the selected ids. Order is not meaningful and repeated
    /// ids are treated as one.
    fn selected_ids(&self) -> Vec<Entity>;

    fn is_empty(&self) -> bool {
        self.selected_ids().is_empty()
    }
}

/// Game-mode rules that can waive the cost entirely.
pub trait ActionPolicy {
    fn has_free_action(&self) -> bool;
}

/// Lookup of the cost parts an entity carries.
pub trait EntityStore {
    /// `None` when the store holds no entity with this id.
    fn find_by_id(&self, id: Entity) -> Option<Vec<CostPart>>;
}

/// The resource stockpile that pays for clear actions.
pub trait ResourceLedger {
    fn balance(&self, key: &str) -> u64;
    fn withdraw(&mut self, key: &str, amount: u64);
}

/// Monotonic game time in seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

impl Clock for Time {
    fn now(&self) -> f64 {
        self.elapsed_secs_f64()
    }
}
