//! Throttled cost evaluation.
//!
//! Items keep moving along belts, so the cost of a selection drifts every
//! frame. Re-aggregating that often is wasted work: an unchanged selection is
//! re-sampled at most once per interval, while any change in membership is
//! evaluated immediately.

use bevy::prelude::*;

use crate::aggregator;
use crate::collaborators::EntityStore;
use crate::error::ClearCostError;

/// Canonical, order-independent identity of a selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SelectionFingerprint(String);

impl SelectionFingerprint {
    pub fn of(selection: &[Entity]) -> Self {
        let mut bits: Vec<u64> = selection.iter().map(|e| e.to_bits()).collect();
        bits.sort_unstable();
        bits.dedup();
        let joined = bits
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Result of the most recent aggregation. Replaced wholesale on recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedEvaluation {
    pub fingerprint: SelectionFingerprint,
    pub evaluated_at: f64,
    pub cost: u64,
}

/// Whether [`SampledEvaluator::evaluate`] reused or refreshed its cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalSource {
    Cached,
    Recomputed,
}

#[derive(Debug, Clone)]
pub struct SampledEvaluator {
    interval: f64,
    cached: Option<CachedEvaluation>,
}

impl SampledEvaluator {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            cached: None,
        }
    }

    /// Cost of `selection` at time `now`, recomputed only when the cache is
    /// missing, older than the interval, or for a different selection.
    pub fn evaluate(
        &mut self,
        selection: &[Entity],
        now: f64,
        store: &dyn EntityStore,
    ) -> Result<(u64, EvalSource), ClearCostError> {
        let fingerprint = SelectionFingerprint::of(selection);

        if let Some(cached) = &self.cached {
            if now < cached.evaluated_at + self.interval && cached.fingerprint == fingerprint {
                return Ok((cached.cost, EvalSource::Cached));
            }
        }

        let cost = aggregator::selection_cost(selection, store)?;
        debug!(
            "clear cost recomputed: {} entities -> {} units",
            selection.len(),
            cost
        );
        self.cached = Some(CachedEvaluation {
            fingerprint,
            evaluated_at: now,
            cost,
        });
        Ok((cost, EvalSource::Recomputed))
    }

    pub fn cached(&self) -> Option<&CachedEvaluation> {
        self.cached.as_ref()
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }
}
