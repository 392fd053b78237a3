//! Cost of bulk clear actions.
//!
//! When the player marks a group of buildings and belt tiles for clearing,
//! every item they hold is lost; the clear action is charged for those items
//! out of the resource stockpile. This crate evaluates that cost (sampled,
//! not per frame), tells the HUD when the figure or its affordability
//! changes, and debits the stockpile when the clear is confirmed.
//!
//! The core (`aggregator`, `evaluator`, `gate`, `consumption`, `counter`)
//! talks to the game only through the traits in [`collaborators`]; the
//! [`ClearCostPlugin`] implements those traits on ECS resources and wires
//! the systems.

pub mod aggregator;
pub mod belts;
pub mod collaborators;
pub mod config;
pub mod consumption;
pub mod counter;
pub mod error;
pub mod evaluator;
pub mod gate;
pub mod panel;
pub mod plugin;
pub mod selection;
pub mod stockpile;
pub mod tracked;

pub use plugin::{ClearConfirmed, ClearCostPlugin};
