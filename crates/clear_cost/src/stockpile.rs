use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::collaborators::{ActionPolicy, ResourceLedger};

/// Stored units per resource key.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stockpile {
    stored: HashMap<String, u64>,
}

impl Stockpile {
    pub fn stored(&self, key: &str) -> u64 {
        self.stored.get(key).copied().unwrap_or(0)
    }

    pub fn deposit(&mut self, key: &str, amount: u64) {
        let entry = self.stored.entry(key.to_string()).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Remove up to `amount` units, returning how many were actually taken.
    pub fn take(&mut self, key: &str, amount: u64) -> u64 {
        let Some(entry) = self.stored.get_mut(key) else {
            return 0;
        };
        let taken = amount.min(*entry);
        *entry -= taken;
        taken
    }
}

impl ResourceLedger for Stockpile {
    fn balance(&self, key: &str) -> u64 {
        self.stored(key)
    }

    fn withdraw(&mut self, key: &str, amount: u64) {
        self.take(key, amount);
    }
}

/// Game-mode switches affecting clear actions.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClearPolicy {
    /// Sandbox-style mode where clearing costs nothing.
    pub free_action: bool,
}

impl ActionPolicy for ClearPolicy {
    fn has_free_action(&self) -> bool {
        self.free_action
    }
}
