//! Cost aggregation over a clear selection.
//!
//! Belt tiles on the same path all report the path's full item count, so
//! the path is charged once per evaluation no matter how many of its tiles
//! are selected. An entity listed twice is likewise charged once.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::collaborators::{AggregationGroupKey, EntityStore};
use crate::config::UNIT_MULTIPLIER;
use crate::error::ClearCostError;

/// Total item quantity of `selection`, counting each aggregation group once.
///
/// Fails with [`ClearCostError::EntityNotFound`] on the first id the store
/// does not hold; undercounting a desynced selection is never acceptable.
pub fn total_quantity(
    selection: &[Entity],
    store: &dyn EntityStore,
) -> Result<u64, ClearCostError> {
    let mut total: u64 = 0;
    let mut seen_ids: HashSet<Entity> = HashSet::new();
    let mut seen_groups: HashSet<AggregationGroupKey> = HashSet::new();

    for &id in selection {
        if !seen_ids.insert(id) {
            continue;
        }
        let parts = store
            .find_by_id(id)
            .ok_or(ClearCostError::EntityNotFound(id))?;
        for part in parts {
            if let Some(group) = part.group {
                if !seen_groups.insert(group) {
                    continue;
                }
            }
            total = total.saturating_add(part.quantity);
        }
    }

    Ok(total)
}

/// Cost in stockpile units of clearing `selection`.
pub fn selection_cost(
    selection: &[Entity],
    store: &dyn EntityStore,
) -> Result<u64, ClearCostError> {
    Ok(quantity_to_cost(total_quantity(selection, store)?))
}

/// Largest cost representable as a whole number of items.
pub const MAX_COST: u64 = u64::MAX - u64::MAX % UNIT_MULTIPLIER;

/// Convert an item quantity into stockpile units, clamping at [`MAX_COST`].
pub fn quantity_to_cost(quantity: u64) -> u64 {
    quantity.checked_mul(UNIT_MULTIPLIER).unwrap_or(MAX_COST)
}
