//! Service dispatcher — route `turn_on` / `turn_off` to the entity's domain.
//!
//! A missing entity id is a no-op and a domain that does not register the
//! service is silently skipped. Anything else the bus reports is the
//! caller's problem.

use plughub_domain::error::HubError;
use plughub_domain::id::split_entity_id;
use plughub_domain::service::ServiceCall;

use crate::ports::ServiceBus;
use crate::services::capability::Capability;

/// Turn `entity_id` on through its domain's `turn_on` service.
///
/// # Errors
///
/// Returns [`HubError::Validation`] for a malformed id, or whatever the
/// domain's handler fails with.
pub fn turn_on(bus: &dyn ServiceBus, entity_id: Option<&str>) -> Result<(), HubError> {
    dispatch(bus, Capability::TurnOn, entity_id)
}

/// Turn `entity_id` off through its domain's `turn_off` service.
///
/// # Errors
///
/// Returns [`HubError::Validation`] for a malformed id, or whatever the
/// domain's handler fails with.
pub fn turn_off(bus: &dyn ServiceBus, entity_id: Option<&str>) -> Result<(), HubError> {
    dispatch(bus, Capability::TurnOff, entity_id)
}

fn dispatch(
    bus: &dyn ServiceBus,
    capability: Capability,
    entity_id: Option<&str>,
) -> Result<(), HubError> {
    // Without an entity id there is no domain to target.
    let Some(entity_id) = entity_id.filter(|id| !id.is_empty()) else {
        return Ok(());
    };

    let (domain, _) = split_entity_id(entity_id)?;
    let service = capability.as_str();

    match bus.call_service(domain, service, ServiceCall::entity_payload(entity_id)) {
        Err(err) if err.is_service_not_found() => {
            tracing::debug!(domain, service, entity_id, "domain has no such service, skipping");
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::sync::{Arc, Mutex};

    use plughub_domain::error::{ServiceNotFoundError, ValidationError};
    use plughub_domain::service::{ServiceData, names};

    use crate::ports::ServiceHandler;

    /// Bus double that records every call and answers from a fixed set of
    /// registered services.
    #[derive(Default)]
    struct RecordingBus {
        registered: BTreeSet<(String, String)>,
        calls: Mutex<Vec<ServiceCall>>,
        fail_with: Option<&'static str>,
    }

    impl RecordingBus {
        fn with_service(mut self, domain: &str, service: &str) -> Self {
            self.registered
                .insert((domain.to_string(), service.to_string()));
            self
        }

        fn calls(&self) -> Vec<ServiceCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ServiceBus for RecordingBus {
        fn call_service(
            &self,
            domain: &str,
            service: &str,
            data: ServiceData,
        ) -> Result<(), HubError> {
            self.calls
                .lock()
                .unwrap()
                .push(ServiceCall::new(domain, service, data));
            if !self.has_service(domain, service) {
                return Err(ServiceNotFoundError {
                    domain: domain.to_string(),
                    service: service.to_string(),
                }
                .into());
            }
            match self.fail_with {
                Some(reason) => Err(HubError::component(reason)),
                None => Ok(()),
            }
        }

        fn register_service(&self, _: &str, _: &str, _: Arc<dyn ServiceHandler>) {
            unimplemented!("not used by the dispatcher")
        }

        fn has_service(&self, domain: &str, service: &str) -> bool {
            self.registered
                .contains(&(domain.to_string(), service.to_string()))
        }

        fn services(&self) -> Vec<(String, String)> {
            self.registered.iter().cloned().collect()
        }
    }

    #[test]
    fn should_not_call_bus_when_entity_id_is_missing() {
        let bus = RecordingBus::default();

        turn_on(&bus, None).unwrap();
        turn_off(&bus, None).unwrap();

        assert!(bus.calls().is_empty());
    }

    #[test]
    fn should_not_call_bus_when_entity_id_is_empty() {
        let bus = RecordingBus::default();

        turn_on(&bus, Some("")).unwrap();
        turn_off(&bus, Some("")).unwrap();

        assert!(bus.calls().is_empty());
    }

    #[test]
    fn should_call_domain_turn_on_with_entity_payload() {
        let bus = RecordingBus::default().with_service("switch", names::TURN_ON);

        turn_on(&bus, Some("switch.pump")).unwrap();

        let calls = bus.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].domain, "switch");
        assert_eq!(calls[0].service, names::TURN_ON);
        assert_eq!(calls[0].entity_id(), Ok(Some("switch.pump")));
        assert_eq!(calls[0].data.len(), 1);
    }

    #[test]
    fn should_call_domain_turn_off() {
        let bus = RecordingBus::default().with_service("light", names::TURN_OFF);

        turn_off(&bus, Some("light.kitchen")).unwrap();

        assert_eq!(bus.calls()[0].to_string(), "light.turn_off");
    }

    #[test]
    fn should_swallow_service_not_found() {
        let bus = RecordingBus::default();

        let result = turn_on(&bus, Some("switch.pump"));

        assert!(result.is_ok());
        assert_eq!(bus.calls().len(), 1);
    }

    #[test]
    fn should_propagate_handler_failure() {
        let bus = RecordingBus {
            fail_with: Some("relay stuck"),
            ..RecordingBus::default()
        }
        .with_service("switch", names::TURN_OFF);

        let result = turn_off(&bus, Some("switch.pump"));

        assert!(matches!(result, Err(HubError::Component(_))));
    }

    #[test]
    fn should_reject_malformed_entity_id_without_calling_bus() {
        let bus = RecordingBus::default();

        let result = turn_on(&bus, Some("pump"));

        assert!(matches!(
            result,
            Err(HubError::Validation(ValidationError::MalformedEntityId(_)))
        ));
        assert!(bus.calls().is_empty());
    }
}
