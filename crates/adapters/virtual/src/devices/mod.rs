//! Virtual device implementations — light, sensor, switch.
//!
//! Lights and switches share the on/off behaviour in [`on_off`]; the sensor
//! only publishes attributes.

mod light;
mod on_off;
mod sensor;
mod switch;

pub use light::VirtualLight;
pub use on_off::{ATTR_BRIGHTNESS, ATTR_FRIENDLY_NAME};
pub use sensor::VirtualSensor;
pub use switch::VirtualSwitch;

pub(crate) use light::DOMAIN as LIGHT_DOMAIN;
pub(crate) use sensor::DOMAIN as SENSOR_DOMAIN;
pub(crate) use switch::DOMAIN as SWITCH_DOMAIN;
