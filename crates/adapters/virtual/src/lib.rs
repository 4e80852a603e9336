//! # plughub-adapter-virtual
//!
//! Virtual/demo components that simulate devices for testing and
//! demonstration purposes.
//!
//! ## Provided domains
//!
//! | Domain | Default entity | Behaviour |
//! |--------|----------------|-----------|
//! | `light` | `light.virtual_light` | Responds to `turn_on` (with `brightness`) / `turn_off` / `toggle` |
//! | `sensor` | `sensor.virtual_temperature` | Holds a numeric temperature attribute |
//! | `switch` | `switch.virtual_switch` | Responds to `turn_on` / `turn_off` / `toggle` |
//!
//! ## Dependency rule
//!
//! Depends on `plughub-app` (port traits) and `plughub-domain` only.

mod devices;

use std::sync::Arc;

use plughub_app::component_registry::ComponentRegistry;
use plughub_app::ports::Component;
use serde::Deserialize;

pub use devices::{ATTR_BRIGHTNESS, ATTR_FRIENDLY_NAME, VirtualLight, VirtualSensor, VirtualSwitch};

/// Object ids of the simulated entities, per domain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VirtualConfig {
    pub lights: Vec<String>,
    pub switches: Vec<String>,
    pub sensors: Vec<String>,
}

impl Default for VirtualConfig {
    fn default() -> Self {
        Self {
            lights: vec!["virtual_light".to_string()],
            switches: vec!["virtual_switch".to_string()],
            sensors: vec!["virtual_temperature".to_string()],
        }
    }
}

/// Contributes the virtual `light`, `switch` and `sensor` components to a
/// [`ComponentRegistry`].
#[derive(Debug, Clone, Default)]
pub struct VirtualIntegration {
    config: Arc<VirtualConfig>,
}

impl VirtualIntegration {
    #[must_use]
    pub fn new(config: VirtualConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        "virtual"
    }

    /// Domains this integration provides components for.
    #[must_use]
    pub fn domains(&self) -> [&'static str; 3] {
        [
            devices::LIGHT_DOMAIN,
            devices::SENSOR_DOMAIN,
            devices::SWITCH_DOMAIN,
        ]
    }

    /// Add one factory per provided domain. Components are only built when
    /// the resolver first asks for their domain.
    #[must_use]
    pub fn register(self, registry: ComponentRegistry) -> ComponentRegistry {
        let lights = Arc::clone(&self.config);
        let switches = Arc::clone(&self.config);
        let sensors = self.config;
        registry
            .with_factory(devices::LIGHT_DOMAIN, move || {
                Ok(Arc::new(VirtualLight::new(&lights.lights)?) as Arc<dyn Component>)
            })
            .with_factory(devices::SWITCH_DOMAIN, move || {
                Ok(Arc::new(VirtualSwitch::new(&switches.switches)?) as Arc<dyn Component>)
            })
            .with_factory(devices::SENSOR_DOMAIN, move || {
                Ok(Arc::new(VirtualSensor::new(&sensors.sensors)?) as Arc<dyn Component>)
            })
    }
}
