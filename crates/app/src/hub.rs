//! Hub — one handle over resolver, state registry and service bus.
//!
//! The binary crate builds a single [`Hub`] at startup; every caller shares
//! it (and therefore the same component cache) for the rest of the process.

use std::sync::Arc;

use plughub_domain::error::HubError;

use crate::ports::{ComponentContext, ComponentLoader, ServiceBus, StateRegistry};
use crate::services::bootstrap;
use crate::services::component_resolver::{ComponentHandle, ComponentResolver};
use crate::services::dispatcher;
use crate::services::status::StatusAggregator;

/// Facade wiring the use-cases to one set of collaborators.
pub struct Hub<L> {
    resolver: Arc<ComponentResolver<L>>,
    status: StatusAggregator<L>,
    ctx: ComponentContext,
}

impl<L: ComponentLoader> Hub<L> {
    /// Create a hub with an empty component cache in front of `loader`.
    pub fn new(loader: L, states: Arc<dyn StateRegistry>, bus: Arc<dyn ServiceBus>) -> Self {
        let resolver = Arc::new(ComponentResolver::new(loader));
        let status = StatusAggregator::new(Arc::clone(&resolver), Arc::clone(&states));
        Self {
            resolver,
            status,
            ctx: ComponentContext::new(bus, states),
        }
    }

    /// Register the hub's global `turn_on` / `turn_off` services.
    pub fn setup(&self) {
        bootstrap::setup(self.ctx.bus.as_ref());
    }

    /// Load the component owning `domain` and let it set itself up.
    ///
    /// Returns `false` (and logs a warning) when the domain has no component.
    ///
    /// # Errors
    ///
    /// Whatever the component's own `setup` fails with.
    pub fn setup_component(&self, domain: &str) -> Result<bool, HubError> {
        match self.resolver.resolve(domain) {
            ComponentHandle::Loaded(component) => {
                component.setup(&self.ctx)?;
                tracing::info!(domain, "component set up");
                Ok(true)
            }
            ComponentHandle::Absent => {
                tracing::warn!(domain, "no component available, skipping setup");
                Ok(false)
            }
        }
    }

    /// See [`StatusAggregator::any_on`].
    ///
    /// # Errors
    ///
    /// Propagates an error raised by a component's `is_on`.
    pub fn any_on(&self) -> Result<bool, HubError> {
        self.status.any_on()
    }

    /// See [`StatusAggregator::is_on`].
    ///
    /// # Errors
    ///
    /// Propagates an error raised by a component's `is_on`.
    pub fn is_on(&self, entity_id: &str) -> Result<bool, HubError> {
        self.status.is_on(entity_id)
    }

    /// See [`StatusAggregator::is_any_on`].
    ///
    /// # Errors
    ///
    /// Propagates an error raised by a component's `is_on`.
    pub fn is_any_on<I, S>(&self, entity_ids: I) -> Result<bool, HubError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.status.is_any_on(entity_ids)
    }

    /// See [`dispatcher::turn_on`].
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed id, or whatever the
    /// domain's handler fails with.
    pub fn turn_on(&self, entity_id: Option<&str>) -> Result<(), HubError> {
        dispatcher::turn_on(self.ctx.bus.as_ref(), entity_id)
    }

    /// See [`dispatcher::turn_off`].
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed id, or whatever the
    /// domain's handler fails with.
    pub fn turn_off(&self, entity_id: Option<&str>) -> Result<(), HubError> {
        dispatcher::turn_off(self.ctx.bus.as_ref(), entity_id)
    }

    #[must_use]
    pub fn resolver(&self) -> &ComponentResolver<L> {
        &self.resolver
    }

    #[must_use]
    pub fn states(&self) -> &Arc<dyn StateRegistry> {
        &self.ctx.states
    }

    #[must_use]
    pub fn bus(&self) -> &Arc<dyn ServiceBus> {
        &self.ctx.bus
    }
}
