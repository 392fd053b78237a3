use bevy::prelude::*;

use crate::counter::CostDisplay;

/// Display state of the clear-cost panel, bound by the HUD.
///
/// Written only by the counter's change handlers, so a field changes only
/// when the underlying value does.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ClearCostPanel {
    pub cost_text: String,
    pub can_afford: bool,
    pub visible: bool,
}

impl CostDisplay for ClearCostPanel {
    fn show_cost(&mut self, cost: u64) {
        self.cost_text = cost.to_string();
    }

    fn show_affordable(&mut self, can_afford: bool) {
        self.can_afford = can_afford;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
