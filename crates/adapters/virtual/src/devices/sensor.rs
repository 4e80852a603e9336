//! Virtual temperature sensor — holds a numeric reading as an attribute.

use plughub_app::ports::{Component, ComponentContext, ComponentLoadError, StateRegistry};
use plughub_domain::entity::{AttributeValue, Attributes, EntityState};
use plughub_domain::error::HubError;
use plughub_domain::id::EntityId;

/// Domain owned by [`VirtualSensor`].
pub const DOMAIN: &str = "sensor";

/// Simulated temperature sensors.
///
/// Sensors do not respond to service calls and have no `is_on` — they only
/// expose read-only attributes (`temperature`, `unit`).
pub struct VirtualSensor {
    entity_ids: Vec<EntityId>,
}

impl VirtualSensor {
    /// Create one sensor per object id.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentLoadError::Failed`] for an invalid object id.
    pub fn new(object_ids: &[String]) -> Result<Self, ComponentLoadError> {
        let entity_ids = object_ids
            .iter()
            .map(|object_id| EntityId::from_parts(DOMAIN, object_id))
            .collect::<Result<_, _>>()
            .map_err(|err| ComponentLoadError::Failed {
                domain: DOMAIN.to_string(),
                source: Box::new(err),
            })?;
        Ok(Self { entity_ids })
    }
}

impl Component for VirtualSensor {
    fn domain(&self) -> &str {
        DOMAIN
    }

    fn setup(&self, ctx: &ComponentContext) -> Result<(), HubError> {
        for entity_id in &self.entity_ids {
            let mut attributes = Attributes::new();
            attributes.insert("temperature".to_string(), AttributeValue::Float(21.5));
            attributes.insert("unit".to_string(), AttributeValue::String("\u{b0}C".to_string()));
            ctx.states.set(entity_id.clone(), EntityState::Unknown, attributes);
        }
        Ok(())
    }
}
