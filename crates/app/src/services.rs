//! Application services — use-case implementations.
//!
//! Each service accepts its collaborators through port traits (constructor
//! injection), keeping this layer decoupled from concrete adapters.

pub mod bootstrap;
pub mod capability;
pub mod component_resolver;
pub mod dispatcher;
pub mod status;
