//! The set of entities targeted by the pending clear action.
//!
//! Input handling (box-select, Ctrl+Click) lives outside this crate and
//! edits the [`ClearSelection`] resource; the counter only reads it.

use bevy::prelude::*;

use crate::collaborators::SelectionSource;

/// Resource holding the entities the player has marked for clearing.
///
/// Insertion order is kept for display purposes but carries no meaning for
/// cost evaluation.
#[derive(Resource, Debug, Clone, Default)]
pub struct ClearSelection {
    entities: Vec<Entity>,
}

impl ClearSelection {
    /// Add an entity if not already selected.
    pub fn add(&mut self, entity: Entity) {
        if !self.entities.contains(&entity) {
            self.entities.push(entity);
        }
    }

    pub fn remove(&mut self, entity: Entity) {
        self.entities.retain(|e| *e != entity);
    }

    /// Add the entity if absent, remove it if present.
    pub fn toggle(&mut self, entity: Entity) {
        if self.entities.contains(&entity) {
            self.remove(entity);
        } else {
            self.add(entity);
        }
    }

    /// Replace the whole selection, dropping duplicates.
    pub fn replace(&mut self, entities: impl IntoIterator<Item = Entity>) {
        self.entities.clear();
        for entity in entities {
            self.add(entity);
        }
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    pub fn count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }
}

impl SelectionSource for ClearSelection {
    fn selected_ids(&self) -> Vec<Entity> {
        self.entities.clone()
    }

    fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(raw: u32) -> Entity {
        Entity::from_raw(raw)
    }

    #[test]
    fn test_add_ignores_duplicates() {
        let mut selection = ClearSelection::default();
        selection.add(e(1));
        selection.add(e(1));
        selection.add(e(2));
        assert_eq!(selection.count(), 2);
        assert_eq!(selection.entities(), &[e(1), e(2)]);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = ClearSelection::default();
        selection.toggle(e(5));
        assert!(selection.contains(e(5)));
        selection.toggle(e(5));
        assert!(!selection.contains(e(5)));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_replace_dedups() {
        let mut selection = ClearSelection::default();
        selection.add(e(9));
        selection.replace([e(3), e(1), e(3)]);
        assert_eq!(selection.entities(), &[e(3), e(1)]);
    }

    #[test]
    fn test_selection_source_snapshot() {
        let mut selection = ClearSelection::default();
        selection.replace([e(2), e(4)]);
        let snapshot = selection.selected_ids();
        selection.clear();
        assert_eq!(snapshot, vec![e(2), e(4)]);
        assert!(SelectionSource::is_empty(&selection));
    }
}
