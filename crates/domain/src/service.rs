//! Service — a named command routed by the service bus.
//!
//! Services live in a domain namespace: `light.turn_on`, `switch.toggle`,
//! or `plughub.turn_off` for the hub's own global services.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Namespace of the services the hub itself registers.
pub const CORE_DOMAIN: &str = "plughub";

/// Payload key carrying the target entity id.
pub const ATTR_ENTITY_ID: &str = "entity_id";

/// Well-known service names shared by components.
pub mod names {
    pub const TURN_ON: &str = "turn_on";
    pub const TURN_OFF: &str = "turn_off";
    pub const TOGGLE: &str = "toggle";

    pub const VOLUME_UP: &str = "volume_up";
    pub const VOLUME_DOWN: &str = "volume_down";
    pub const VOLUME_MUTE: &str = "volume_mute";
    pub const MEDIA_PLAY_PAUSE: &str = "media_play_pause";
    pub const MEDIA_NEXT_TRACK: &str = "media_next_track";
    pub const MEDIA_PREV_TRACK: &str = "media_prev_track";
}

/// Payload of a service call.
pub type ServiceData = serde_json::Map<String, serde_json::Value>;

/// A routed invocation of `domain.service` with its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCall {
    pub domain: String,
    pub service: String,
    #[serde(default)]
    pub data: ServiceData,
}

impl ServiceCall {
    #[must_use]
    pub fn new(domain: impl Into<String>, service: impl Into<String>, data: ServiceData) -> Self {
        Self {
            domain: domain.into(),
            service: service.into(),
            data,
        }
    }

    /// Payload holding only the target entity id.
    #[must_use]
    pub fn entity_payload(entity_id: &str) -> ServiceData {
        let mut data = ServiceData::new();
        data.insert(
            ATTR_ENTITY_ID.to_string(),
            serde_json::Value::String(entity_id.to_string()),
        );
        data
    }

    /// The entity id carried in the payload, `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonStringField`] when the key holds
    /// anything but a string.
    pub fn entity_id(&self) -> Result<Option<&str>, ValidationError> {
        match self.data.get(ATTR_ENTITY_ID) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or(ValidationError::NonStringField(ATTR_ENTITY_ID)),
        }
    }
}

impl std::fmt::Display for ServiceCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.domain, self.service)
    }
}
