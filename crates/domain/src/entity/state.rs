//! Entity state — the current operational state of an entity.

use serde::{Deserialize, Serialize};

/// Discrete operational state of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityState {
    On,
    Off,
    /// Presence trackers: the tracked person or device is at home.
    Home,
    NotHome,
    #[default]
    Unknown,
    Unavailable,
}

impl EntityState {
    /// The state reached by a `toggle` service call.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            _ => Self::On,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Home => "home",
            Self::NotHome => "not_home",
            Self::Unknown => "unknown",
            Self::Unavailable => "unavailable",
        }
    }
}

impl std::fmt::Display for EntityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_unknown() {
        assert_eq!(EntityState::default(), EntityState::Unknown);
    }

    #[test]
    fn should_toggle_on_to_off_and_anything_else_to_on() {
        assert_eq!(EntityState::On.toggled(), EntityState::Off);
        assert_eq!(EntityState::Off.toggled(), EntityState::On);
        assert_eq!(EntityState::Unknown.toggled(), EntityState::On);
    }

    #[test]
    fn should_display_snake_case_variant_name() {
        assert_eq!(EntityState::On.to_string(), "on");
        assert_eq!(EntityState::NotHome.to_string(), "not_home");
    }

    #[test]
    fn should_serialize_like_display() {
        let json = serde_json::to_string(&EntityState::NotHome).unwrap();
        assert_eq!(json, "\"not_home\"");
        let parsed: EntityState = serde_json::from_str("\"home\"").unwrap();
        assert_eq!(parsed, EntityState::Home);
    }
}
