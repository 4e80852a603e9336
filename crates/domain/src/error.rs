//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HubError`]
//! via `#[from]` when crossing a port boundary.

/// Base error returned by every fallible operation of the hub.
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("service not found")]
    ServiceNotFound(#[from] ServiceNotFoundError),

    /// Failure raised by a component or a service handler while doing its
    /// own work. The hub never swallows these.
    #[error("component error")]
    Component(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl HubError {
    /// Wrap an arbitrary error raised inside a component.
    pub fn component<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Component(err.into())
    }

    /// Whether this error only signals that the targeted service is not
    /// registered on the bus.
    #[must_use]
    pub fn is_service_not_found(&self) -> bool {
        matches!(self, Self::ServiceNotFound(_))
    }
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("malformed entity id {0:?}, expected <domain>.<object_id>")]
    MalformedEntityId(String),

    #[error("payload field {0:?} must be a string")]
    NonStringField(&'static str),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// No handler is registered for `domain.service` on the bus.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("service {domain}.{service} is not registered")]
pub struct ServiceNotFoundError {
    pub domain: String,
    pub service: String,
}
