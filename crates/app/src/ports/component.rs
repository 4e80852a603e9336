//! Component port — pluggable per-domain implementations.
//!
//! A component owns one domain (`light`, `switch`, …). It may implement any
//! subset of the optional capabilities below; the ones it leaves out report
//! [`Probe::NotSupported`] instead of failing.

use std::sync::Arc;

use plughub_domain::error::HubError;
use plughub_domain::id::EntityId;

use crate::ports::{ServiceBus, StateRegistry};

/// Outcome of probing an optional capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe<T> {
    /// The capability exists and returned this value.
    Invoked(T),
    /// The component (or its absence) does not offer the capability.
    NotSupported,
}

impl<T> Probe<T> {
    /// The returned value, if the capability was invoked.
    pub fn invoked(self) -> Option<T> {
        match self {
            Self::Invoked(value) => Some(value),
            Self::NotSupported => None,
        }
    }
}

/// Collaborators handed to a component while it sets itself up.
///
/// Wraps `Arc`-ed ports so it is cheaply cloneable and `Send + Sync`;
/// service handlers registered during setup can keep a clone of `states`.
#[derive(Clone)]
pub struct ComponentContext {
    pub bus: Arc<dyn ServiceBus>,
    pub states: Arc<dyn StateRegistry>,
}

impl ComponentContext {
    pub fn new(bus: Arc<dyn ServiceBus>, states: Arc<dyn StateRegistry>) -> Self {
        Self { bus, states }
    }
}

/// A pluggable implementation for one domain.
pub trait Component: Send + Sync {
    /// The domain this component owns (e.g. `"light"`).
    fn domain(&self) -> &str;

    /// Whether `entity_id` is currently on.
    ///
    /// # Errors
    ///
    /// Whatever the component's own lookup fails with.
    fn is_on(
        &self,
        _states: &dyn StateRegistry,
        _entity_id: &EntityId,
    ) -> Result<Probe<bool>, HubError> {
        Ok(Probe::NotSupported)
    }

    /// Seed states and register the component's services.
    ///
    /// The default implementation does nothing.
    ///
    /// # Errors
    ///
    /// Whatever the component's initialisation fails with.
    fn setup(&self, _ctx: &ComponentContext) -> Result<(), HubError> {
        Ok(())
    }
}

/// Errors raised while loading a component.
#[derive(Debug, thiserror::Error)]
pub enum ComponentLoadError {
    /// No component is known for this domain.
    #[error("no component available for domain {0:?}")]
    Unknown(String),

    /// A component exists but could not be built.
    #[error("failed to load component for domain {domain:?}")]
    Failed {
        domain: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Seam behind which component implementations are found and built.
pub trait ComponentLoader: Send + Sync {
    /// Build the component owning `domain`.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentLoadError`] when no component exists for `domain`
    /// or building it fails.
    fn load(&self, domain: &str) -> Result<Arc<dyn Component>, ComponentLoadError>;
}

impl<T: ComponentLoader + ?Sized> ComponentLoader for Arc<T> {
    fn load(&self, domain: &str) -> Result<Arc<dyn Component>, ComponentLoadError> {
        (**self).load(domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl Component for Silent {
        fn domain(&self) -> &str {
            "silent"
        }
    }

    struct NoStates;

    impl StateRegistry for NoStates {
        fn entity_ids(&self) -> Vec<EntityId> {
            Vec::new()
        }

        fn get(&self, _entity_id: &EntityId) -> Option<plughub_domain::entity::State> {
            None
        }

        fn set(
            &self,
            entity_id: EntityId,
            state: plughub_domain::entity::EntityState,
            attributes: plughub_domain::entity::Attributes,
        ) -> plughub_domain::entity::State {
            plughub_domain::entity::State::new(
                entity_id,
                state,
                attributes,
                plughub_domain::entity::now(),
            )
        }

        fn remove(&self, _entity_id: &EntityId) -> Option<plughub_domain::entity::State> {
            None
        }
    }

    #[test]
    fn should_report_not_supported_for_default_is_on() {
        let id = EntityId::parse("silent.one").unwrap();
        let probe = Silent.is_on(&NoStates, &id).unwrap();
        assert_eq!(probe, Probe::NotSupported);
        assert_eq!(probe.invoked(), None);
    }

    #[test]
    fn should_unwrap_invoked_value() {
        assert_eq!(Probe::Invoked(true).invoked(), Some(true));
        assert_eq!(Probe::<bool>::NotSupported.invoked(), None);
    }

    #[test]
    fn should_display_unknown_domain() {
        let err = ComponentLoadError::Unknown("garage".to_string());
        assert_eq!(err.to_string(), "no component available for domain \"garage\"");
    }
}
