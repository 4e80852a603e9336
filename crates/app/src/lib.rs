//! # plughub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** the rest of the system plugs into:
//!   - `StateRegistry` — enumerate entity ids and read/write their state
//!   - `ServiceBus` / `ServiceHandler` — register and route service calls
//!   - `Component` / `ComponentLoader` — pluggable per-domain components
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (state registry, service bus, component registry)
//! - Implement the use-cases:
//!   - `ComponentResolver` — load each domain's component once, cache the outcome
//!   - `StatusAggregator` — "is anything on?"
//!   - `dispatcher` — `turn_on` / `turn_off` routed through the bus
//!   - `bootstrap` — the hub's own global `turn_on` / `turn_off` services
//!   - `Hub` — facade bundling all of the above
//!
//! ## Dependency rule
//! Depends on `plughub-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod component_registry;
pub mod hub;
pub mod ports;
pub mod service_bus;
pub mod services;
pub mod state_registry;
