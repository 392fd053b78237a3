//! ECS wiring for the clear-cost counter.
//!
//! `update_clear_cost` runs every frame; `consume_on_clear_confirmed` pays
//! for each [`ClearConfirmed`] event. They are chained so a selection made
//! and confirmed in the same frame is evaluated before it is paid for.

use bevy::prelude::*;

use crate::belts::WorldEntityStore;
use crate::config::ClearCostConfig;
use crate::counter::{ClearCostCounter, CounterInputs};
use crate::panel::ClearCostPanel;
use crate::selection::ClearSelection;
use crate::stockpile::{ClearPolicy, Stockpile};

/// Sent once per clear action the player confirms.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ClearConfirmed;

/// Sample the selection cost and refresh the panel.
pub fn update_clear_cost(
    time: Res<Time>,
    selection: Res<ClearSelection>,
    policy: Res<ClearPolicy>,
    stockpile: Res<Stockpile>,
    store: WorldEntityStore,
    mut counter: ResMut<ClearCostCounter>,
    mut panel: ResMut<ClearCostPanel>,
) {
    let inputs = CounterInputs {
        selection: &*selection,
        policy: &*policy,
        entities: &store,
        clock: &*time,
    };
    if let Err(err) = counter.update(inputs, &*stockpile, &mut *panel) {
        error!("clear cost evaluation failed: {err}");
        debug_assert!(false, "clear cost evaluation failed: {err}");
    }
}

/// Debit the stockpile for every confirmed clear action.
pub fn consume_on_clear_confirmed(
    mut confirmed: EventReader<ClearConfirmed>,
    selection: Res<ClearSelection>,
    policy: Res<ClearPolicy>,
    mut stockpile: ResMut<Stockpile>,
    counter: Res<ClearCostCounter>,
) {
    for _ in confirmed.read() {
        match counter.consume(&*selection, &*policy, &mut *stockpile) {
            Ok(outcome) => debug!("clear action consumption: {outcome:?}"),
            Err(err) => {
                error!("clear action consumption failed: {err}");
                debug_assert!(false, "clear action consumption failed: {err}");
            }
        }
    }
}

pub struct ClearCostPlugin;

impl Plugin for ClearCostPlugin {
    fn build(&self, app: &mut App) {
        // Config first: the counter reads it when it is created.
        app.init_resource::<ClearCostConfig>()
            .init_resource::<ClearSelection>()
            .init_resource::<ClearPolicy>()
            .init_resource::<Stockpile>()
            .init_resource::<ClearCostPanel>()
            .init_resource::<ClearCostCounter>()
            .add_event::<ClearConfirmed>()
            .add_systems(
                Update,
                (update_clear_cost, consume_on_clear_confirmed).chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::belts::{BeltLink, BeltPath, HeldItems};
    use crate::config::DEFAULT_RESOURCE_KEY;
    use std::time::Duration;

    fn test_app() -> App {
        let mut app = App::new();
        app.insert_resource(Time::<()>::default())
            .add_plugins(ClearCostPlugin);
        app
    }

    fn advance(app: &mut App, secs: f32) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(secs));
        app.update();
    }

    fn deposit(app: &mut App, amount: u64) {
        app.world_mut()
            .resource_mut::<Stockpile>()
            .deposit(DEFAULT_RESOURCE_KEY, amount);
    }

    fn select(app: &mut App, entities: &[Entity]) {
        app.world_mut()
            .resource_mut::<ClearSelection>()
            .replace(entities.iter().copied());
    }

    fn panel(app: &App) -> &ClearCostPanel {
        app.world().resource::<ClearCostPanel>()
    }

    fn stored(app: &App) -> u64 {
        app.world()
            .resource::<Stockpile>()
            .stored(DEFAULT_RESOURCE_KEY)
    }

    #[test]
    fn test_panel_hidden_without_selection() {
        let mut app = test_app();
        advance(&mut app, 0.1);
        assert_eq!(*panel(&app), ClearCostPanel::default());
        assert!(!app.world().resource::<ClearCostCounter>().is_visible());
    }

    #[test]
    fn test_panel_shows_cost_and_affordability() {
        let mut app = test_app();
        deposit(&mut app, 100);
        let building = app.world_mut().spawn(HeldItems { count: 6 }).id();
        select(&mut app, &[building]);
        advance(&mut app, 0.1);

        let panel = panel(&app);
        assert!(panel.visible);
        assert_eq!(panel.cost_text, "60");
        assert!(panel.can_afford);
    }

    #[test]
    fn test_belt_tiles_on_one_path_charged_once() {
        let mut app = test_app();
        let path = app.world_mut().spawn(BeltPath { items: 5 }).id();
        let a = app.world_mut().spawn(BeltLink { path }).id();
        let b = app.world_mut().spawn(BeltLink { path }).id();
        select(&mut app, &[a, b]);
        advance(&mut app, 0.1);

        assert_eq!(panel(&app).cost_text, "50");
    }

    #[test]
    fn test_cost_refreshes_only_after_interval() {
        let mut app = test_app();
        let building = app.world_mut().spawn(HeldItems { count: 1 }).id();
        select(&mut app, &[building]);
        advance(&mut app, 0.1);
        assert_eq!(panel(&app).cost_text, "10");

        app.world_mut()
            .entity_mut(building)
            .insert(HeldItems { count: 4 });
        advance(&mut app, 0.5);
        assert_eq!(panel(&app).cost_text, "10", "still inside the sample interval");

        advance(&mut app, 0.6);
        assert_eq!(panel(&app).cost_text, "40");
    }

    #[test]
    fn test_affordability_follows_stockpile_between_samples() {
        let mut app = test_app();
        deposit(&mut app, 10);
        let building = app.world_mut().spawn(HeldItems { count: 2 }).id();
        select(&mut app, &[building]);
        advance(&mut app, 0.1);
        assert!(!panel(&app).can_afford);

        deposit(&mut app, 10);
        advance(&mut app, 0.1);
        assert!(panel(&app).can_afford);
    }

    #[test]
    fn test_confirmed_clear_withdraws_cost() {
        let mut app = test_app();
        deposit(&mut app, 100);
        let building = app.world_mut().spawn(HeldItems { count: 7 }).id();
        select(&mut app, &[building]);
        advance(&mut app, 0.1);

        app.world_mut().send_event(ClearConfirmed);
        advance(&mut app, 0.1);
        assert_eq!(stored(&app), 30);
    }

    #[test]
    fn test_confirmed_clear_clamped_to_stockpile() {
        let mut app = test_app();
        deposit(&mut app, 30);
        let building = app.world_mut().spawn(HeldItems { count: 5 }).id();
        select(&mut app, &[building]);
        advance(&mut app, 0.1);
        assert_eq!(panel(&app).cost_text, "50");

        app.world_mut().send_event(ClearConfirmed);
        advance(&mut app, 0.1);
        assert_eq!(stored(&app), 0);
    }

    #[test]
    fn test_free_action_hides_and_skips_payment() {
        let mut app = test_app();
        deposit(&mut app, 100);
        let building = app.world_mut().spawn(HeldItems { count: 3 }).id();
        select(&mut app, &[building]);
        advance(&mut app, 0.1);
        assert!(panel(&app).visible);

        app.world_mut().resource_mut::<ClearPolicy>().free_action = true;
        app.world_mut().send_event(ClearConfirmed);
        advance(&mut app, 0.1);
        assert!(!panel(&app).visible);
        assert_eq!(stored(&app), 100);
    }

    #[test]
    fn test_empty_selection_confirm_is_noop() {
        let mut app = test_app();
        deposit(&mut app, 100);
        app.world_mut().send_event(ClearConfirmed);
        advance(&mut app, 0.1);
        assert_eq!(stored(&app), 100);
        assert!(!panel(&app).visible);
    }

    #[test]
    fn test_custom_config_is_used() {
        let mut app = App::new();
        app.insert_resource(Time::<()>::default())
            .insert_resource(ClearCostConfig {
                resource_key: "gold".to_string(),
                ..default()
            })
            .add_plugins(ClearCostPlugin);
        app.world_mut().resource_mut::<Stockpile>().deposit("gold", 25);
        let building = app.world_mut().spawn(HeldItems { count: 2 }).id();
        select(&mut app, &[building]);
        advance(&mut app, 0.1);

        assert_eq!(
            app.world().resource::<ClearCostCounter>().resource_key(),
            "gold"
        );
        assert!(panel(&app).can_afford);

        app.world_mut().send_event(ClearConfirmed);
        advance(&mut app, 0.1);
        assert_eq!(app.world().resource::<Stockpile>().stored("gold"), 5);
    }
}
