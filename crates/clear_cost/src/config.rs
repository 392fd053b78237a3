use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Cost units charged per item held by a cleared entity.
///
/// Fixed policy: every evaluated cost is a multiple of this value, so it is
/// deliberately not part of [`ClearCostConfig`].
pub const UNIT_MULTIPLIER: u64 = 10;

/// Minimum seconds between two evaluations of an unchanged selection.
pub const SAMPLE_INTERVAL_SECS: f64 = 1.0;

/// Stockpile key of the resource that pays for clear actions.
pub const DEFAULT_RESOURCE_KEY: &str = "clear_token";

/// Tunable settings for the clear-cost counter.
///
/// Every field has a default, so a settings file only needs to name the
/// values it overrides.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClearCostConfig {
    /// Stockpile key queried for affordability and debited on consumption.
    pub resource_key: String,
    /// Throttle window for re-evaluating an unchanged selection.
    pub sample_interval_secs: f64,
}

impl Default for ClearCostConfig {
    fn default() -> Self {
        Self {
            resource_key: DEFAULT_RESOURCE_KEY.to_string(),
            sample_interval_secs: SAMPLE_INTERVAL_SECS,
        }
    }
}
