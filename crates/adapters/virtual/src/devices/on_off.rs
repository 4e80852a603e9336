//! Shared behaviour of simulated on/off devices (lights, switches).
//!
//! State lives in the hub's state registry; the device only remembers which
//! entity ids it owns.

use std::sync::Arc;

use plughub_app::ports::{
    ComponentContext, ComponentLoadError, Probe, ServiceBus, ServiceHandler, StateRegistry,
};
use plughub_domain::entity::{AttributeValue, Attributes, EntityState};
use plughub_domain::error::{HubError, NotFoundError};
use plughub_domain::id::EntityId;
use plughub_domain::service::{ServiceCall, names};

/// Attribute holding a human-readable name.
pub const ATTR_FRIENDLY_NAME: &str = "friendly_name";
/// Attribute (and `turn_on` payload key) holding a light's brightness.
pub const ATTR_BRIGHTNESS: &str = "brightness";

/// The entities of one on/off domain.
pub struct OnOffDevices {
    domain: &'static str,
    entity_ids: Arc<[EntityId]>,
    dimmable: bool,
}

impl OnOffDevices {
    /// Build the entity ids `domain.<object_id>` for each configured object.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentLoadError::Failed`] when an object id does not
    /// form a valid entity id.
    pub fn new(
        domain: &'static str,
        object_ids: &[String],
        dimmable: bool,
    ) -> Result<Self, ComponentLoadError> {
        let entity_ids = object_ids
            .iter()
            .map(|object_id| EntityId::from_parts(domain, object_id))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| ComponentLoadError::Failed {
                domain: domain.to_string(),
                source: Box::new(err),
            })?;
        Ok(Self {
            domain,
            entity_ids: entity_ids.into(),
            dimmable,
        })
    }

    pub fn domain(&self) -> &'static str {
        self.domain
    }

    pub fn entity_ids(&self) -> &[EntityId] {
        &self.entity_ids
    }

    /// Registry-backed `is_on`.
    pub fn is_on(states: &dyn StateRegistry, entity_id: &EntityId) -> Probe<bool> {
        Probe::Invoked(states.is_state(entity_id, EntityState::On))
    }

    /// Seed every owned entity as `off` (keeping any state already known)
    /// and register `turn_on`, `turn_off` and `toggle` for the domain.
    pub fn setup(&self, ctx: &ComponentContext, friendly_prefix: &str) {
        for entity_id in self.entity_ids.iter() {
            if ctx.states.get(entity_id).is_some() {
                continue;
            }
            let mut attributes = Attributes::new();
            attributes.insert(
                ATTR_FRIENDLY_NAME.to_string(),
                AttributeValue::String(format!("{friendly_prefix} {}", entity_id.object_id())),
            );
            ctx.states.set(entity_id.clone(), EntityState::Off, attributes);
        }

        for action in [Action::TurnOn, Action::TurnOff, Action::Toggle] {
            let handler = OnOffHandler {
                action,
                entity_ids: Arc::clone(&self.entity_ids),
                states: Arc::clone(&ctx.states),
                dimmable: self.dimmable,
            };
            ctx.bus
                .register_service(self.domain, action.service(), Arc::new(handler));
        }
        tracing::debug!(
            domain = self.domain,
            entities = self.entity_ids.len(),
            "virtual devices ready"
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    TurnOn,
    TurnOff,
    Toggle,
}

impl Action {
    fn service(self) -> &'static str {
        match self {
            Self::TurnOn => names::TURN_ON,
            Self::TurnOff => names::TURN_OFF,
            Self::Toggle => names::TOGGLE,
        }
    }
}

/// Applies one action to the targeted entity, or to every owned entity
/// when the call carries no `entity_id`.
struct OnOffHandler {
    action: Action,
    entity_ids: Arc<[EntityId]>,
    states: Arc<dyn StateRegistry>,
    dimmable: bool,
}

impl OnOffHandler {
    fn targets(&self, call: &ServiceCall) -> Result<Vec<EntityId>, HubError> {
        let Some(raw) = call.entity_id()? else {
            return Ok(self.entity_ids.to_vec());
        };
        let entity_id = EntityId::parse(raw)?;
        if !self.entity_ids.contains(&entity_id) {
            return Err(NotFoundError {
                entity: "Entity",
                id: entity_id.to_string(),
            }
            .into());
        }
        Ok(vec![entity_id])
    }
}

impl ServiceHandler for OnOffHandler {
    fn handle(&self, _bus: &dyn ServiceBus, call: &ServiceCall) -> Result<(), HubError> {
        for entity_id in self.targets(call)? {
            let current = self.states.get(&entity_id);
            let current_state = current.as_ref().map_or(EntityState::Off, |s| s.state);
            let mut attributes = current.map(|s| s.attributes).unwrap_or_default();

            let next = match self.action {
                Action::TurnOn => EntityState::On,
                Action::TurnOff => EntityState::Off,
                Action::Toggle => current_state.toggled(),
            };

            if self.dimmable {
                if next == EntityState::On {
                    if let Some(value) = call.data.get(ATTR_BRIGHTNESS) {
                        attributes.insert(
                            ATTR_BRIGHTNESS.to_string(),
                            AttributeValue::from_json(value),
                        );
                    }
                } else {
                    attributes.remove(ATTR_BRIGHTNESS);
                }
            }

            tracing::debug!(%entity_id, from = %current_state, to = %next, "virtual device switched");
            self.states.set(entity_id, next, attributes);
        }
        Ok(())
    }
}
