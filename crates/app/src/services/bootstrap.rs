//! Bootstrap — register the hub's own global services.
//!
//! `plughub.turn_on` and `plughub.turn_off` accept an `entity_id` in their
//! payload and forward to the entity's own domain through the
//! [dispatcher](crate::services::dispatcher).

use std::sync::Arc;

use plughub_domain::error::HubError;
use plughub_domain::service::{CORE_DOMAIN, ServiceCall, names};

use crate::ports::{ServiceBus, ServiceHandler};
use crate::services::dispatcher;

/// Handler for one of the hub's global services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreServiceHandler {
    TurnOn,
    TurnOff,
}

impl CoreServiceHandler {
    #[must_use]
    pub fn service(self) -> &'static str {
        match self {
            Self::TurnOn => names::TURN_ON,
            Self::TurnOff => names::TURN_OFF,
        }
    }
}

impl ServiceHandler for CoreServiceHandler {
    fn handle(&self, bus: &dyn ServiceBus, call: &ServiceCall) -> Result<(), HubError> {
        match self {
            Self::TurnOn => dispatcher::turn_on(bus, call.entity_id()?),
            Self::TurnOff => dispatcher::turn_off(bus, call.entity_id()?),
        }
    }
}

/// Register `plughub.turn_on` and `plughub.turn_off` on `bus`.
pub fn setup(bus: &dyn ServiceBus) {
    for handler in [CoreServiceHandler::TurnOff, CoreServiceHandler::TurnOn] {
        bus.register_service(CORE_DOMAIN, handler.service(), Arc::new(handler));
    }
    tracing::info!(domain = CORE_DOMAIN, "core services registered");
}
