//! Capability probing — invoke an optional capability on a resolved handle.

use plughub_domain::error::HubError;
use plughub_domain::id::EntityId;
use plughub_domain::service::names;

use crate::ports::{Component, Probe, StateRegistry};
use crate::services::component_resolver::ComponentHandle;

/// Optional operations a component may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    IsOn,
    TurnOn,
    TurnOff,
}

impl Capability {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IsOn => "is_on",
            Self::TurnOn => names::TURN_ON,
            Self::TurnOff => names::TURN_OFF,
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run `invoke` against the component behind `handle`.
///
/// An absent component yields [`Probe::NotSupported`] without calling
/// `invoke`.
///
/// # Errors
///
/// Whatever `invoke` returns; errors raised by the capability itself are
/// never converted into [`Probe::NotSupported`].
pub fn probe<T, F>(handle: &ComponentHandle, invoke: F) -> Result<Probe<T>, HubError>
where
    F: FnOnce(&dyn Component) -> Result<Probe<T>, HubError>,
{
    match handle {
        ComponentHandle::Loaded(component) => invoke(component.as_ref()),
        ComponentHandle::Absent => Ok(Probe::NotSupported),
    }
}

/// Probe the `is_on` capability for `entity_id`.
///
/// # Errors
///
/// Whatever the component's `is_on` fails with.
pub fn probe_is_on(
    handle: &ComponentHandle,
    states: &dyn StateRegistry,
    entity_id: &EntityId,
) -> Result<Probe<bool>, HubError> {
    probe(handle, |component| component.is_on(states, entity_id))
}
