//! Status aggregator — answers "is any of these entities on?".

use std::sync::Arc;

use plughub_domain::error::HubError;
use plughub_domain::id::EntityId;

use crate::ports::{ComponentLoader, StateRegistry};
use crate::services::capability::probe_is_on;
use crate::services::component_resolver::ComponentResolver;

/// Asks each entity's component whether the entity is on, stopping at the
/// first one that is.
pub struct StatusAggregator<L> {
    resolver: Arc<ComponentResolver<L>>,
    states: Arc<dyn StateRegistry>,
}

impl<L> Clone for StatusAggregator<L> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            states: Arc::clone(&self.states),
        }
    }
}

impl<L: ComponentLoader> StatusAggregator<L> {
    pub fn new(resolver: Arc<ComponentResolver<L>>, states: Arc<dyn StateRegistry>) -> Self {
        Self { resolver, states }
    }

    /// Whether any entity currently known to the state registry is on.
    ///
    /// # Errors
    ///
    /// Propagates an error raised by a component's `is_on`.
    pub fn any_on(&self) -> Result<bool, HubError> {
        self.is_any_on(self.states.entity_ids())
    }

    /// Whether `entity_id` is on. An empty id means every known entity,
    /// as in [`any_on`](Self::any_on).
    ///
    /// # Errors
    ///
    /// Propagates an error raised by a component's `is_on`.
    pub fn is_on(&self, entity_id: &str) -> Result<bool, HubError> {
        if entity_id.is_empty() {
            return self.any_on();
        }
        self.is_any_on([entity_id])
    }

    /// Whether any of `entity_ids` is on, checked in order.
    ///
    /// Ids that are malformed, belong to a domain without a component, or
    /// whose component has no `is_on` are skipped.
    ///
    /// # Errors
    ///
    /// Propagates an error raised by a component's `is_on`.
    pub fn is_any_on<I, S>(&self, entity_ids: I) -> Result<bool, HubError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in entity_ids {
            let raw = raw.as_ref();
            let entity_id = match EntityId::parse(raw) {
                Ok(entity_id) => entity_id,
                Err(err) => {
                    tracing::debug!(entity_id = raw, error = %err, "skipping malformed entity id");
                    continue;
                }
            };

            let handle = self.resolver.resolve(entity_id.domain());
            if probe_is_on(&handle, self.states.as_ref(), &entity_id)?.invoked() == Some(true) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
