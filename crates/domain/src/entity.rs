//! State — what the registry knows about one entity.
//!
//! Every addressable entity (a light's on/off state, a switch, a presence
//! tracker, …) has exactly one [`State`] in the state registry, keyed by its
//! [`EntityId`].

mod attribute_value;
mod state;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::EntityId;

pub use attribute_value::AttributeValue;
pub use state::EntityState;

/// UTC timestamp used for `last_changed` and `last_updated`.
pub type Timestamp = DateTime<Utc>;

/// Free-form attributes attached to a state, ordered by name.
pub type Attributes = BTreeMap<String, AttributeValue>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Snapshot of one entity in the state registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub entity_id: EntityId,
    pub state: EntityState,
    #[serde(default)]
    pub attributes: Attributes,
    /// Last time `state` took a different value.
    pub last_changed: Timestamp,
    /// Last time the record was written, even without a state change.
    pub last_updated: Timestamp,
}

impl State {
    /// Create a fresh record stamped at `ts`.
    #[must_use]
    pub fn new(entity_id: EntityId, state: EntityState, attributes: Attributes, ts: Timestamp) -> Self {
        Self {
            entity_id,
            state,
            attributes,
            last_changed: ts,
            last_updated: ts,
        }
    }

    /// Apply a new state and attributes at `ts`.
    ///
    /// `last_changed` only moves when the state value itself changes.
    pub fn update(&mut self, state: EntityState, attributes: Attributes, ts: Timestamp) {
        if self.state != state {
            self.last_changed = ts;
        }
        self.state = state;
        self.attributes = attributes;
        self.last_updated = ts;
    }

    #[must_use]
    pub fn get_attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn kitchen() -> State {
        State::new(
            EntityId::parse("light.kitchen").unwrap(),
            EntityState::Off,
            Attributes::new(),
            now(),
        )
    }

    #[test]
    fn should_move_last_changed_when_state_changes() {
        let mut state = kitchen();
        let later = state.last_changed + Duration::seconds(5);

        state.update(EntityState::On, Attributes::new(), later);

        assert_eq!(state.last_changed, later);
        assert_eq!(state.last_updated, later);
        assert_eq!(state.state, EntityState::On);
    }

    #[test]
    fn should_keep_last_changed_when_only_attributes_change() {
        let mut state = kitchen();
        let created = state.last_changed;
        let later = created + Duration::seconds(5);

        let mut attributes = Attributes::new();
        attributes.insert("brightness".to_string(), AttributeValue::Int(40));
        state.update(EntityState::Off, attributes, later);

        assert_eq!(state.last_changed, created);
        assert_eq!(state.last_updated, later);
        assert_eq!(state.get_attribute("brightness"), Some(&AttributeValue::Int(40)));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let state = kitchen();
        let json = serde_json::to_string(&state).unwrap();
        let parsed: State = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }
}
