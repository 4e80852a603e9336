//! Virtual light — responds to `turn_on` (with optional `brightness`),
//! `turn_off`, `toggle`.

use plughub_app::ports::{Component, ComponentContext, ComponentLoadError, Probe, StateRegistry};
use plughub_domain::error::HubError;
use plughub_domain::id::EntityId;

use super::on_off::OnOffDevices;

/// Domain owned by [`VirtualLight`].
pub const DOMAIN: &str = "light";

/// Simulated dimmable lights.
pub struct VirtualLight {
    devices: OnOffDevices,
}

impl VirtualLight {
    /// Create one light per object id.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentLoadError::Failed`] for an invalid object id.
    pub fn new(object_ids: &[String]) -> Result<Self, ComponentLoadError> {
        Ok(Self {
            devices: OnOffDevices::new(DOMAIN, object_ids, true)?,
        })
    }

    #[must_use]
    pub fn entity_ids(&self) -> &[EntityId] {
        self.devices.entity_ids()
    }
}

impl Component for VirtualLight {
    fn domain(&self) -> &str {
        self.devices.domain()
    }

    fn is_on(
        &self,
        states: &dyn StateRegistry,
        entity_id: &EntityId,
    ) -> Result<Probe<bool>, HubError> {
        Ok(OnOffDevices::is_on(states, entity_id))
    }

    fn setup(&self, ctx: &ComponentContext) -> Result<(), HubError> {
        self.devices.setup(ctx, "Virtual Light");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use plughub_app::ports::ServiceBus;
    use plughub_app::service_bus::InProcessServiceBus;
    use plughub_app::state_registry::InMemoryStateRegistry;
    use plughub_domain::entity::{AttributeValue, EntityState};
    use plughub_domain::service::{ServiceCall, names};

    use crate::devices::on_off::{ATTR_BRIGHTNESS, ATTR_FRIENDLY_NAME};

    fn set_up() -> (VirtualLight, ComponentContext) {
        let light = VirtualLight::new(&["kitchen".to_string(), "porch".to_string()]).unwrap();
        let ctx = ComponentContext::new(
            Arc::new(InProcessServiceBus::default()),
            Arc::new(InMemoryStateRegistry::new()),
        );
        light.setup(&ctx).unwrap();
        (light, ctx)
    }

    fn kitchen() -> EntityId {
        EntityId::parse("light.kitchen").unwrap()
    }

    fn brightness_payload(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        let mut data = ServiceCall::entity_payload("light.kitchen");
        data.insert(ATTR_BRIGHTNESS.to_string(), value);
        data
    }

    #[test]
    fn should_default_to_off() {
        let (light, ctx) = set_up();
        let state = ctx.states.get(&kitchen()).unwrap();
        assert_eq!(state.state, EntityState::Off);
        assert_eq!(
            state.get_attribute(ATTR_FRIENDLY_NAME),
            Some(&AttributeValue::String("Virtual Light kitchen".to_string()))
        );
        assert_eq!(
            light.is_on(ctx.states.as_ref(), &kitchen()).unwrap(),
            Probe::Invoked(false)
        );
    }

    #[test]
    fn should_turn_on_with_brightness() {
        let (light, ctx) = set_up();

        ctx.bus
            .call_service(DOMAIN, names::TURN_ON, brightness_payload(serde_json::json!(180)))
            .unwrap();

        let state = ctx.states.get(&kitchen()).unwrap();
        assert_eq!(state.state, EntityState::On);
        assert_eq!(state.get_attribute(ATTR_BRIGHTNESS), Some(&AttributeValue::Int(180)));
        assert_eq!(
            light.is_on(ctx.states.as_ref(), &kitchen()).unwrap(),
            Probe::Invoked(true)
        );
    }

    #[test]
    fn should_drop_brightness_when_turned_off() {
        let (_light, ctx) = set_up();
        ctx.bus
            .call_service(DOMAIN, names::TURN_ON, brightness_payload(serde_json::json!(90)))
            .unwrap();

        ctx.bus
            .call_service(
                DOMAIN,
                names::TURN_OFF,
                ServiceCall::entity_payload("light.kitchen"),
            )
            .unwrap();

        let state = ctx.states.get(&kitchen()).unwrap();
        assert_eq!(state.state, EntityState::Off);
        assert!(state.get_attribute(ATTR_BRIGHTNESS).is_none());
    }

    #[test]
    fn should_toggle_every_light_when_no_entity_id_given() {
        let (_light, ctx) = set_up();

        ctx.bus
            .call_service(DOMAIN, names::TOGGLE, serde_json::Map::new())
            .unwrap();

        assert!(ctx.states.is_state(&kitchen(), EntityState::On));
        assert!(ctx.states.is_state(
            &EntityId::parse("light.porch").unwrap(),
            EntityState::On
        ));
    }

    #[test]
    fn should_reject_light_it_does_not_own() {
        let (_light, ctx) = set_up();

        let result = ctx.bus.call_service(
            DOMAIN,
            names::TURN_ON,
            ServiceCall::entity_payload("light.attic"),
        );

        assert!(matches!(result, Err(HubError::NotFound(_))));
    }

    #[test]
    fn should_reject_non_string_entity_id() {
        let (_light, ctx) = set_up();
        let mut data = serde_json::Map::new();
        data.insert("entity_id".to_string(), serde_json::json!(42));

        let result = ctx.bus.call_service(DOMAIN, names::TURN_ON, data);

        assert!(matches!(result, Err(HubError::Validation(_))));
        assert!(ctx.states.is_state(&kitchen(), EntityState::Off));
        assert!(ctx.states.is_state(
            &EntityId::parse("light.porch").unwrap(),
            EntityState::Off
        ));
    }

    #[test]
    fn should_fail_to_build_with_invalid_object_id() {
        let result = VirtualLight::new(&["desk.lamp".to_string()]);
        assert!(matches!(result, Err(ComponentLoadError::Failed { .. })));
    }
}
