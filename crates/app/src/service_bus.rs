//! In-process service bus with a tokio broadcast feed of dispatched calls.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::broadcast;

use plughub_domain::error::{HubError, ServiceNotFoundError};
use plughub_domain::service::{ServiceCall, ServiceData};

use crate::ports::{ServiceBus, ServiceHandler};

type ServiceKey = (String, String);

/// In-process [`ServiceBus`].
///
/// Handlers are looked up under a read lock and run after it is released,
/// so a handler may call back into the bus. Every call that reaches a
/// handler is also published on a [`broadcast`] channel; publishing
/// succeeds even when there are no active subscribers.
pub struct InProcessServiceBus {
    handlers: RwLock<HashMap<ServiceKey, Arc<dyn ServiceHandler>>>,
    sender: broadcast::Sender<ServiceCall>,
}

impl InProcessServiceBus {
    /// Create a new bus whose call feed keeps up to `capacity` calls.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            handlers: RwLock::new(HashMap::new()),
            sender,
        }
    }

    /// Subscribe to the calls dispatched on this bus.
    ///
    /// Returns a receiver that will get every call dispatched *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ServiceCall> {
        self.sender.subscribe()
    }

    fn handler(&self, domain: &str, service: &str) -> Option<Arc<dyn ServiceHandler>> {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(domain.to_string(), service.to_string()))
            .cloned()
    }
}

impl Default for InProcessServiceBus {
    fn default() -> Self {
        Self::new(256)
    }
}

impl ServiceBus for InProcessServiceBus {
    fn call_service(&self, domain: &str, service: &str, data: ServiceData) -> Result<(), HubError> {
        let Some(handler) = self.handler(domain, service) else {
            return Err(ServiceNotFoundError {
                domain: domain.to_string(),
                service: service.to_string(),
            }
            .into());
        };

        let call = ServiceCall::new(domain, service, data);
        tracing::debug!(service = %call, "dispatching service call");
        // Sending only fails when nobody is subscribed.
        let _ = self.sender.send(call.clone());
        handler.handle(self, &call)
    }

    fn register_service(&self, domain: &str, service: &str, handler: Arc<dyn ServiceHandler>) {
        let previous = self
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((domain.to_string(), service.to_string()), handler);
        if previous.is_some() {
            tracing::warn!(domain, service, "service handler replaced");
        } else {
            tracing::debug!(domain, service, "service registered");
        }
    }

    fn has_service(&self, domain: &str, service: &str) -> bool {
        self.handler(domain, service).is_some()
    }

    fn services(&self) -> Vec<(String, String)> {
        let mut services: Vec<_> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        services.sort();
        services
    }
}
