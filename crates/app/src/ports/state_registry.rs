//! State registry port — the set of known entities and their current state.

use plughub_domain::entity::{Attributes, EntityState, State};
use plughub_domain::id::EntityId;

/// Source of truth for which entities exist and what state they are in.
///
/// Components read it from their `is_on` capability and write it from their
/// service handlers.
pub trait StateRegistry: Send + Sync {
    /// Every entity id currently known, in a stable order.
    fn entity_ids(&self) -> Vec<EntityId>;

    /// Current state of `entity_id`, if the entity is known.
    fn get(&self, entity_id: &EntityId) -> Option<State>;

    /// Create or update the state of `entity_id`, returning the stored record.
    fn set(&self, entity_id: EntityId, state: EntityState, attributes: Attributes) -> State;

    /// Forget `entity_id`, returning its last state.
    fn remove(&self, entity_id: &EntityId) -> Option<State>;

    /// Whether `entity_id` is known and currently in `state`.
    fn is_state(&self, entity_id: &EntityId, state: EntityState) -> bool {
        self.get(entity_id).is_some_and(|current| current.state == state)
    }
}

impl<T: StateRegistry + ?Sized> StateRegistry for std::sync::Arc<T> {
    fn entity_ids(&self) -> Vec<EntityId> {
        (**self).entity_ids()
    }

    fn get(&self, entity_id: &EntityId) -> Option<State> {
        (**self).get(entity_id)
    }

    fn set(&self, entity_id: EntityId, state: EntityState, attributes: Attributes) -> State {
        (**self).set(entity_id, state, attributes)
    }

    fn remove(&self, entity_id: &EntityId) -> Option<State> {
        (**self).remove(entity_id)
    }
}
