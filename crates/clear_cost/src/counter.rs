//! Per-tick orchestration of the clear-cost display.
//!
//! Hidden while the selection is empty or the game mode makes clearing
//! free. While visible, each tick samples the cost through the
//! [`SampledEvaluator`], re-derives affordability against the live balance,
//! and pushes both through change-tracked cells, whose handlers are the
//! only code that writes to the display.

use bevy::prelude::*;

use crate::collaborators::{ActionPolicy, Clock, EntityStore, ResourceLedger, SelectionSource};
use crate::config::ClearCostConfig;
use crate::consumption::{ConsumptionOutcome, ConsumptionTransaction};
use crate::error::ClearCostError;
use crate::evaluator::{EvalSource, SampledEvaluator};
use crate::gate;
use crate::tracked::ChangeTrackedCell;

/// Receiver of cost display updates.
pub trait CostDisplay {
    fn show_cost(&mut self, cost: u64);
    fn show_affordable(&mut self, can_afford: bool);
    fn set_visible(&mut self, visible: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterPhase {
    #[default]
    Hidden,
    Visible(EvalSource),
}

/// Read-only collaborators consulted on every tick.
#[derive(Clone, Copy)]
pub struct CounterInputs<'a> {
    pub selection: &'a dyn SelectionSource,
    pub policy: &'a dyn ActionPolicy,
    pub entities: &'a dyn EntityStore,
    pub clock: &'a dyn Clock,
}

/// Display sink the tracked cells notify.
pub type DisplaySink = dyn CostDisplay + 'static;

#[derive(Resource, Debug)]
pub struct ClearCostCounter {
    resource_key: String,
    evaluator: SampledEvaluator,
    cost: ChangeTrackedCell<u64, DisplaySink>,
    can_afford: ChangeTrackedCell<bool, DisplaySink>,
    phase: CounterPhase,
}

impl FromWorld for ClearCostCounter {
    fn from_world(world: &mut World) -> Self {
        let config = world
            .get_resource::<ClearCostConfig>()
            .cloned()
            .unwrap_or_default();
        Self::new(&config)
    }
}

impl ClearCostCounter {
    pub fn new(config: &ClearCostConfig) -> Self {
        Self {
            resource_key: config.resource_key.clone(),
            evaluator: SampledEvaluator::new(config.sample_interval_secs),
            cost: ChangeTrackedCell::<u64, DisplaySink>::new("cost", |display, cost| {
                display.show_cost(*cost)
            }),
            can_afford: ChangeTrackedCell::<bool, DisplaySink>::new(
                "can_afford",
                |display, can_afford| display.show_affordable(*can_afford),
            ),
            phase: CounterPhase::Hidden,
        }
    }

    /// Advance one frame.
    ///
    /// On error the display keeps its previous figures; the caller decides
    /// how loudly to fail.
    pub fn update(
        &mut self,
        inputs: CounterInputs<'_>,
        ledger: &dyn ResourceLedger,
        display: &mut DisplaySink,
    ) -> Result<CounterPhase, ClearCostError> {
        let selection = inputs.selection.selected_ids();
        if selection.is_empty() || inputs.policy.has_free_action() {
            self.set_phase(CounterPhase::Hidden, display);
            return Ok(self.phase);
        }

        let now = inputs.clock.now();
        let (cost, source) = self.evaluator.evaluate(&selection, now, inputs.entities)?;
        let can_afford = gate::can_afford(cost, ledger.balance(&self.resource_key));

        self.cost.set(cost, display);
        self.can_afford.set(can_afford, display);
        self.set_phase(CounterPhase::Visible(source), display);
        Ok(self.phase)
    }

    /// Pay for the confirmed clear action with the last displayed cost.
    ///
    /// The sampling cadence is left untouched: the next tick reuses the
    /// cached cost unless the interval elapsed or the selection changed.
    pub fn consume(
        &self,
        selection: &dyn SelectionSource,
        policy: &dyn ActionPolicy,
        ledger: &mut dyn ResourceLedger,
    ) -> Result<ConsumptionOutcome, ClearCostError> {
        ConsumptionTransaction::new(&self.resource_key).execute(
            selection,
            policy,
            || self.cost.get().copied(),
            ledger,
        )
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.phase, CounterPhase::Visible(_))
    }

    /// Last evaluated cost.
    pub fn cost(&self) -> Result<u64, ClearCostError> {
        self.cost.get().copied()
    }

    pub fn can_afford(&self) -> Result<bool, ClearCostError> {
        self.can_afford.get().copied()
    }

    pub fn resource_key(&self) -> &str {
        &self.resource_key
    }

    fn set_phase(&mut self, phase: CounterPhase, display: &mut DisplaySink) {
        let was_visible = self.is_visible();
        self.phase = phase;
        let visible = self.is_visible();
        if was_visible != visible {
            info!("clear cost display {}", if visible { "shown" } else { "hidden" });
            display.set_visible(visible);
        }
    }
}
