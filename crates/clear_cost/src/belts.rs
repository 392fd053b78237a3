//! Item-holding components and the world-backed [`EntityStore`].
//!
//! Buildings carry their buffered items directly ([`HeldItems`]). Belt
//! tiles instead point at the [`BeltPath`] entity that owns the items of
//! the whole connected run; that path entity is the aggregation key, so a
//! run is charged once however many of its tiles are selected.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::collaborators::{AggregationGroupKey, CostPart, EntityStore};

/// Items buffered inside a building.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldItems {
    pub count: u32,
}

/// A connected belt run and the items currently travelling on it.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeltPath {
    pub items: u32,
}

/// Marks a belt tile as part of the [`BeltPath`] on entity `path`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeltLink {
    pub path: Entity,
}

/// Reads cost parts straight from the ECS world.
#[derive(SystemParam)]
pub struct WorldEntityStore<'w, 's> {
    targets: Query<'w, 's, (Option<&'static HeldItems>, Option<&'static BeltLink>)>,
    paths: Query<'w, 's, &'static BeltPath>,
}

impl EntityStore for WorldEntityStore<'_, '_> {
    fn find_by_id(&self, id: Entity) -> Option<Vec<CostPart>> {
        let (held, link) = self.targets.get(id).ok()?;
        let mut parts = Vec::with_capacity(2);
        if let Some(held) = held {
            parts.push(CostPart::standalone(u64::from(held.count)));
        }
        if let Some(link) = link {
            // A tile whose path was already torn down carries nothing.
            let items = self.paths.get(link.path).map_or(0, |p| p.items);
            parts.push(CostPart::grouped(
                u64::from(items),
                AggregationGroupKey(link.path),
            ));
        }
        Some(parts)
    }
}
