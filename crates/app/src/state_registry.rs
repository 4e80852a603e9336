//! In-process state registry backed by an ordered map.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::{PoisonError, RwLock};

use plughub_domain::entity::{Attributes, EntityState, State, now};
use plughub_domain::id::EntityId;

use crate::ports::StateRegistry;

/// [`StateRegistry`] kept in memory.
///
/// Entity ids are enumerated in lexical order.
#[derive(Debug, Default)]
pub struct InMemoryStateRegistry {
    states: RwLock<BTreeMap<EntityId, State>>,
}

impl InMemoryStateRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateRegistry for InMemoryStateRegistry {
    fn entity_ids(&self) -> Vec<EntityId> {
        self.states
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    fn get(&self, entity_id: &EntityId) -> Option<State> {
        self.states
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(entity_id)
            .cloned()
    }

    fn set(&self, entity_id: EntityId, state: EntityState, attributes: Attributes) -> State {
        let ts = now();
        let mut states = self.states.write().unwrap_or_else(PoisonError::into_inner);
        let record = match states.entry(entity_id) {
            Entry::Occupied(slot) => {
                let current = slot.into_mut();
                current.update(state, attributes, ts);
                current
            }
            Entry::Vacant(slot) => {
                let id = slot.key().clone();
                slot.insert(State::new(id, state, attributes, ts))
            }
        };
        tracing::trace!(entity_id = %record.entity_id, state = %record.state, "state written");
        record.clone()
    }

    fn remove(&self, entity_id: &EntityId) -> Option<State> {
        self.states
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(entity_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plughub_domain::entity::AttributeValue;

    fn id(raw: &str) -> EntityId {
        EntityId::parse(raw).unwrap()
    }

    #[test]
    fn should_start_empty() {
        let registry = InMemoryStateRegistry::new();
        assert!(registry.entity_ids().is_empty());
    }

    #[test]
    fn should_enumerate_ids_in_lexical_order() {
        let registry = InMemoryStateRegistry::new();
        registry.set(id("switch.pump"), EntityState::Off, Attributes::new());
        registry.set(id("light.kitchen"), EntityState::On, Attributes::new());

        let ids = registry.entity_ids();
        assert_eq!(ids, vec![id("light.kitchen"), id("switch.pump")]);
    }

    #[test]
    fn should_update_existing_record_in_place() {
        let registry = InMemoryStateRegistry::new();
        let created = registry.set(id("light.kitchen"), EntityState::Off, Attributes::new());

        let mut attributes = Attributes::new();
        attributes.insert("brightness".to_string(), AttributeValue::Int(200));
        let updated = registry.set(id("light.kitchen"), EntityState::On, attributes);

        assert_eq!(registry.entity_ids().len(), 1);
        assert_eq!(updated.state, EntityState::On);
        assert!(updated.last_changed >= created.last_changed);
        assert_eq!(
            registry
                .get(&id("light.kitchen"))
                .unwrap()
                .get_attribute("brightness"),
            Some(&AttributeValue::Int(200))
        );
    }

    #[test]
    fn should_answer_is_state() {
        let registry = InMemoryStateRegistry::new();
        registry.set(id("tracker.paulus"), EntityState::Home, Attributes::new());

        assert!(registry.is_state(&id("tracker.paulus"), EntityState::Home));
        assert!(!registry.is_state(&id("tracker.paulus"), EntityState::NotHome));
        assert!(!registry.is_state(&id("tracker.anne"), EntityState::Home));
    }

    #[test]
    fn should_remove_record() {
        let registry = InMemoryStateRegistry::new();
        registry.set(id("light.kitchen"), EntityState::Off, Attributes::new());

        let removed = registry.remove(&id("light.kitchen"));

        assert!(removed.is_some());
        assert!(registry.get(&id("light.kitchen")).is_none());
    }
}
