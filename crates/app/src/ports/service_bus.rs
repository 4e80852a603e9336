//! Service bus port — register and route named service calls.

use std::sync::Arc;

use plughub_domain::error::HubError;
use plughub_domain::service::{ServiceCall, ServiceData};

/// Handler invoked when the bus dispatches a service call.
///
/// The bus passes itself in, so a handler that needs to call further
/// services never has to hold a reference back to the bus.
pub trait ServiceHandler: Send + Sync {
    /// Handle one call.
    ///
    /// # Errors
    ///
    /// Whatever the handler's own work fails with; the bus forwards it to the
    /// caller unchanged.
    fn handle(&self, bus: &dyn ServiceBus, call: &ServiceCall) -> Result<(), HubError>;
}

impl<F> ServiceHandler for F
where
    F: Fn(&dyn ServiceBus, &ServiceCall) -> Result<(), HubError> + Send + Sync,
{
    fn handle(&self, bus: &dyn ServiceBus, call: &ServiceCall) -> Result<(), HubError> {
        self(bus, call)
    }
}

/// Routes service calls to the handler registered for `domain.service`.
pub trait ServiceBus: Send + Sync {
    /// Invoke `domain.service` with `data`.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::ServiceNotFound`] when nothing is registered for
    /// `domain.service`, or whatever the handler itself returns.
    fn call_service(&self, domain: &str, service: &str, data: ServiceData) -> Result<(), HubError>;

    /// Register `handler` for `domain.service`.
    fn register_service(&self, domain: &str, service: &str, handler: Arc<dyn ServiceHandler>);

    /// Whether a handler is registered for `domain.service`.
    fn has_service(&self, domain: &str, service: &str) -> bool;

    /// All registered `(domain, service)` pairs, sorted.
    fn services(&self) -> Vec<(String, String)>;
}

impl<T: ServiceBus + ?Sized> ServiceBus for Arc<T> {
    fn call_service(&self, domain: &str, service: &str, data: ServiceData) -> Result<(), HubError> {
        (**self).call_service(domain, service, data)
    }

    fn register_service(&self, domain: &str, service: &str, handler: Arc<dyn ServiceHandler>) {
        (**self).register_service(domain, service, handler);
    }

    fn has_service(&self, domain: &str, service: &str) -> bool {
        (**self).has_service(domain, service)
    }

    fn services(&self) -> Vec<(String, String)> {
        (**self).services()
    }
}
