//! # plughub-domain
//!
//! Pure domain model for the plughub capability dispatcher.
//!
//! ## Responsibilities
//! - Foundational types: entity identifiers, error conventions, timestamps
//! - Define **States** (the registry record kept for every entity)
//! - Define **Service calls** (`turn_on`, `turn_off`, `toggle`, …) and the
//!   well-known payload keys they carry
//! - Contain all invariant enforcement (an entity id is always
//!   `<domain>.<object_id>`)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod entity;
pub mod service;
