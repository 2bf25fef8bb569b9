#![forbid(unsafe_code)]

//! Appliance receivers that commands operate on.
//!
//! Each device is a small stateful stub exposing an on/off operation pair.
//! Side effects are emitted as `tracing` events; the power state is
//! inspectable through [`Device::is_on`] so callers can assert
//! receiver-visible state.
//!
//! Devices are shared through [`SharedDevice`]: a command binds one
//! receiver for its whole lifetime, and several commands (and the caller)
//! may bind the same receiver.

use std::sync::{Arc, Mutex};

/// A stateful appliance with an on/off operation pair.
pub trait Device: Send {
    /// Human-readable label, e.g. "living room light".
    fn label(&self) -> &str;

    /// Turn the device on.
    fn power_on(&mut self);

    /// Turn the device off.
    fn power_off(&mut self);

    /// Current power state.
    fn is_on(&self) -> bool;
}

/// Shared handle to a device.
///
/// Commands hold one clone; the caller holds another to observe state.
pub type SharedDevice<D> = Arc<Mutex<D>>;

/// Wrap a device for sharing between commands.
#[must_use]
pub fn shared<D: Device>(device: D) -> SharedDevice<D> {
    Arc::new(Mutex::new(device))
}

/// A togglable light.
#[derive(Debug)]
pub struct Light {
    label: String,
    on: bool,
}

impl Light {
    /// Create a light with the given label, initially off.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on: false,
        }
    }
}

impl Device for Light {
    fn label(&self) -> &str {
        &self.label
    }

    fn power_on(&mut self) {
        self.on = true;
        tracing::info!(device = %self.label, "light on");
    }

    fn power_off(&mut self) {
        self.on = false;
        tracing::info!(device = %self.label, "light off");
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

/// An air conditioner with a fixed setpoint.
#[derive(Debug)]
pub struct AirConditioner {
    label: String,
    target_celsius: f32,
    on: bool,
}

impl AirConditioner {
    /// Default cooling setpoint in degrees Celsius.
    pub const DEFAULT_TARGET_CELSIUS: f32 = 26.0;

    /// Create an air conditioner with the default setpoint, initially off.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target_celsius: Self::DEFAULT_TARGET_CELSIUS,
            on: false,
        }
    }

    /// Create an air conditioner with a custom setpoint.
    #[must_use]
    pub fn with_target(label: impl Into<String>, target_celsius: f32) -> Self {
        Self {
            label: label.into(),
            target_celsius,
            on: false,
        }
    }

    /// Cooling setpoint in degrees Celsius.
    #[must_use]
    pub fn target_celsius(&self) -> f32 {
        self.target_celsius
    }
}

impl Device for AirConditioner {
    fn label(&self) -> &str {
        &self.label
    }

    fn power_on(&mut self) {
        self.on = true;
        tracing::info!(
            device = %self.label,
            target_celsius = self.target_celsius,
            "air conditioner on"
        );
    }

    fn power_off(&mut self) {
        self.on = false;
        tracing::info!(device = %self.label, "air conditioner off");
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

/// A speaker with an adjustable volume level.
#[derive(Debug)]
pub struct Speaker {
    label: String,
    volume: u8,
    on: bool,
}

impl Speaker {
    /// Default volume level on first power-on.
    pub const DEFAULT_VOLUME: u8 = 15;

    /// Create a speaker at the default volume, initially off.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            volume: Self::DEFAULT_VOLUME,
            on: false,
        }
    }

    /// Current volume level.
    #[must_use]
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Set the volume level.
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume;
        tracing::info!(device = %self.label, volume, "speaker volume");
    }
}

impl Device for Speaker {
    fn label(&self) -> &str {
        &self.label
    }

    fn power_on(&mut self) {
        self.on = true;
        tracing::info!(device = %self.label, volume = self.volume, "speaker on");
    }

    fn power_off(&mut self) {
        self.on = false;
        tracing::info!(device = %self.label, "speaker off");
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
