//! Paying for a confirmed clear action.

use bevy::prelude::*;

use crate::collaborators::{ActionPolicy, ResourceLedger, SelectionSource};
use crate::error::ClearCostError;

/// Why a consumption did not touch the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptySelection,
    FreeAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumptionOutcome {
    Skipped(SkipReason),
    /// `withdrawn` is `min(cost, available)` and never exceeds the balance.
    Withdrawn { cost: u64, withdrawn: u64 },
}

impl ConsumptionOutcome {
    pub fn withdrawn(&self) -> u64 {
        match self {
            ConsumptionOutcome::Skipped(_) => 0,
            ConsumptionOutcome::Withdrawn { withdrawn, .. } => *withdrawn,
        }
    }
}

/// Debits the stockpile for one confirmed clear action.
#[derive(Debug, Clone)]
pub struct ConsumptionTransaction<'a> {
    pub resource_key: &'a str,
}

impl<'a> ConsumptionTransaction<'a> {
    pub fn new(resource_key: &'a str) -> Self {
        Self { resource_key }
    }

    /// Withdraw the last displayed cost, clamped to the available balance.
    ///
    /// `cached_cost` is only read once the bypass checks pass, so an
    /// empty or free selection never needs an evaluated cost. The cost is
    /// deliberately not recomputed here: the player pays what was shown.
    pub fn execute(
        &self,
        selection: &dyn SelectionSource,
        policy: &dyn ActionPolicy,
        cached_cost: impl FnOnce() -> Result<u64, ClearCostError>,
        ledger: &mut dyn ResourceLedger,
    ) -> Result<ConsumptionOutcome, ClearCostError> {
        if selection.is_empty() {
            return Ok(ConsumptionOutcome::Skipped(SkipReason::EmptySelection));
        }
        if policy.has_free_action() {
            return Ok(ConsumptionOutcome::Skipped(SkipReason::FreeAction));
        }

        let cost = cached_cost()?;
        let available = ledger.balance(self.resource_key);
        let withdrawn = cost.min(available);
        if withdrawn < cost {
            warn!(
                "clear action costs {} '{}' but only {} stored; withdrawing {}",
                cost, self.resource_key, available, withdrawn
            );
        }
        ledger.withdraw(self.resource_key, withdrawn);
        info!("clear action paid {} '{}'", withdrawn, self.resource_key);

        Ok(ConsumptionOutcome::Withdrawn { cost, withdrawn })
    }
}
