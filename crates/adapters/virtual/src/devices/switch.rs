//! Virtual switch — responds to `turn_on`, `turn_off`, `toggle`.

use plughub_app::ports::{Component, ComponentContext, ComponentLoadError, Probe, StateRegistry};
use plughub_domain::error::HubError;
use plughub_domain::id::EntityId;

use super::on_off::OnOffDevices;

/// Domain owned by [`VirtualSwitch`].
pub const DOMAIN: &str = "switch";

/// Simulated switches (pumps, plugs, relays).
pub struct VirtualSwitch {
    devices: OnOffDevices,
}

impl VirtualSwitch {
    /// Create one switch per object id.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentLoadError::Failed`] for an invalid object id.
    pub fn new(object_ids: &[String]) -> Result<Self, ComponentLoadError> {
        Ok(Self {
            devices: OnOffDevices::new(DOMAIN, object_ids, false)?,
        })
    }

    #[must_use]
    pub fn entity_ids(&self) -> &[EntityId] {
        self.devices.entity_ids()
    }
}

impl Component for VirtualSwitch {
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
        self.devices.setup(ctx, "Virtual Switch");
        Ok(())
    }
}
