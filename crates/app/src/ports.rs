//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod component;
pub mod service_bus;
pub mod state_registry;

pub use component::{Component, ComponentContext, ComponentLoadError, ComponentLoader, Probe};
pub use service_bus::{ServiceBus, ServiceHandler};
pub use state_registry::StateRegistry;
