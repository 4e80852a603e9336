//! Entity identifiers of the form `<domain>.<object_id>`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Separator between the domain and the object id.
pub const SEPARATOR: char = '.';

/// Split a raw entity id into `(domain, object_id)`.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedEntityId`] unless `raw` contains
/// exactly one [`SEPARATOR`] with non-empty text on both sides.
pub fn split_entity_id(raw: &str) -> Result<(&str, &str), ValidationError> {
    match raw.split_once(SEPARATOR) {
        Some((domain, object_id))
            if !domain.is_empty() && !object_id.is_empty() && !object_id.contains(SEPARATOR) =>
        {
            Ok((domain, object_id))
        }
        _ => Err(ValidationError::MalformedEntityId(raw.to_string())),
    }
}

/// Validated identifier of an addressable entity, e.g. `light.kitchen`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId {
    raw: String,
    split: usize,
}

impl EntityId {
    /// Parse and validate a raw entity id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedEntityId`] when `raw` is not of
    /// the form `<domain>.<object_id>`.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let split = split_entity_id(&raw)?.0.len();
        Ok(Self { raw, split })
    }

    /// Build an entity id from its two halves.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedEntityId`] when either half is
    /// empty or contains the separator.
    pub fn from_parts(domain: &str, object_id: &str) -> Result<Self, ValidationError> {
        Self::parse(format!("{domain}{SEPARATOR}{object_id}"))
    }

    /// The component namespace, e.g. `light`.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.raw[..self.split]
    }

    /// The object id within the domain, e.g. `kitchen`.
    #[must_use]
    pub fn object_id(&self) -> &str {
        &self.raw[self.split + SEPARATOR.len_utf8()..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for EntityId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EntityId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EntityId> for String {
    fn from(value: EntityId) -> Self {
        value.raw
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
