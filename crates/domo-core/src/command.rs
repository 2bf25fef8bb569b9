#![forbid(unsafe_code)]

//! Reversible command primitives.
//!
//! The [`Command`] trait models one reversible unit of work: `execute`
//! applies the forward effect on the bound receiver, `undo` applies the
//! exact inverse, and `description` returns a stable label used only for
//! journaling.
//!
//! # Invariants
//!
//! - `execute()` followed by `undo()` restores the receiver's prior
//!   observable state exactly.
//! - `undo()` followed by `redo()` restores the executed state exactly.
//! - `description()` is stable for the lifetime of the command and is never
//!   used for equality or dispatch.

use std::fmt;
use std::sync::MutexGuard;

use crate::device::{Device, SharedDevice, Speaker};

/// Errors that can occur while executing or reversing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The bound device could not be locked (poisoned by a panic elsewhere).
    DeviceUnavailable(String),
    /// The command cannot run in its current state.
    InvalidState(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceUnavailable(what) => write!(f, "device unavailable: {what}"),
            Self::InvalidState(msg) => write!(f, "invalid state: {msg}"),
        }
    }
}

impl std::error::Error for CommandError {}

/// Result of command execution or undo.
pub type CommandResult = Result<(), CommandError>;

/// A reversible command bound to one receiver.
///
/// Ownership is move-only: a command has exactly one owner at any time,
/// transferred explicitly at each handoff (construction, submission to the
/// invoker, migration between the invoker's stacks).
pub trait Command: Send + Sync {
    /// Execute the command, applying its effect.
    fn execute(&mut self) -> CommandResult;

    /// Undo the command, reverting its effect.
    fn undo(&mut self) -> CommandResult;

    /// Redo the command after it was undone.
    fn redo(&mut self) -> CommandResult {
        self.execute()
    }

    /// Human-readable description for journaling.
    fn description(&self) -> &str;

    /// Debug description of the command.
    fn debug_name(&self) -> &'static str {
        "Command"
    }
}

impl fmt::Debug for dyn Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(self.debug_name())
            .field("description", &self.description())
            .finish()
    }
}

/// Read a device's label, tolerating a poisoned lock.
fn device_label<D: Device>(device: &SharedDevice<D>) -> String {
    match device.lock() {
        Ok(guard) => guard.label().to_string(),
        Err(poisoned) => poisoned.into_inner().label().to_string(),
    }
}

/// Lock a device for a command operation.
fn lock_device<'a, D: Device>(
    device: &'a SharedDevice<D>,
    description: &str,
) -> Result<MutexGuard<'a, D>, CommandError> {
    device
        .lock()
        .map_err(|_| CommandError::DeviceUnavailable(description.to_string()))
}

/// Turn a device on; undo turns it back off.
pub struct PowerOnCmd<D: Device> {
    device: SharedDevice<D>,
    description: String,
}

impl<D: Device> PowerOnCmd<D> {
    /// Create a power-on command bound to the given device.
    #[must_use]
    pub fn new(device: SharedDevice<D>) -> Self {
        let description = format!("{} on", device_label(&device));
        Self {
            device,
            description,
        }
    }
}

impl<D: Device> Command for PowerOnCmd<D> {
    fn execute(&mut self) -> CommandResult {
        lock_device(&self.device, &self.description)?.power_on();
        Ok(())
    }

    fn undo(&mut self) -> CommandResult {
        lock_device(&self.device, &self.description)?.power_off();
        Ok(())
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn debug_name(&self) -> &'static str {
        "PowerOnCmd"
    }
}

/// Turn a device off; undo turns it back on.
pub struct PowerOffCmd<D: Device> {
    device: SharedDevice<D>,
    description: String,
}

impl<D: Device> PowerOffCmd<D> {
    /// Create a power-off command bound to the given device.
    #[must_use]
    pub fn new(device: SharedDevice<D>) -> Self {
        let description = format!("{} off", device_label(&device));
        Self {
            device,
            description,
        }
    }
}

impl<D: Device> Command for PowerOffCmd<D> {
    fn execute(&mut self) -> CommandResult {
        lock_device(&self.device, &self.description)?.power_off();
        Ok(())
    }

    fn undo(&mut self) -> CommandResult {
        lock_device(&self.device, &self.description)?.power_on();
        Ok(())
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn debug_name(&self) -> &'static str {
        "PowerOffCmd"
    }
}

/// Set a speaker's volume; undo restores the previous level.
///
/// The previous level is captured on `execute`, so undoing before the first
/// execution is an [`CommandError::InvalidState`] error.
pub struct SetVolumeCmd {
    speaker: SharedDevice<Speaker>,
    volume: u8,
    previous: Option<u8>,
    description: String,
}

impl SetVolumeCmd {
    /// Create a volume command bound to the given speaker.
    #[must_use]
    pub fn new(speaker: SharedDevice<Speaker>, volume: u8) -> Self {
        let description = format!("{} volume {volume}", device_label(&speaker));
        Self {
            speaker,
            volume,
            previous: None,
            description,
        }
    }
}

impl Command for SetVolumeCmd {
    fn execute(&mut self) -> CommandResult {
        let mut speaker = lock_device(&self.speaker, &self.description)?;
        self.previous = Some(speaker.volume());
        speaker.set_volume(self.volume);
        Ok(())
    }

    fn undo(&mut self) -> CommandResult {
        let previous = self.previous.take().ok_or_else(|| {
            CommandError::InvalidState(format!("{}: undo before execute", self.description))
        })?;
        lock_device(&self.speaker, &self.description)?.set_volume(previous);
        Ok(())
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn debug_name(&self) -> &'static str {
        "SetVolumeCmd"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{Light, shared};

    #[test]
    fn power_on_then_undo_restores_off() {
        let light = shared(Light::new("test light"));
        let mut cmd = PowerOnCmd::new(light.clone());

        cmd.execute().unwrap();
        assert!(light.lock().unwrap().is_on());

        cmd.undo().unwrap();
        assert!(!light.lock().unwrap().is_on());
    }

    #[test]
    fn power_off_then_undo_restores_on() {
        let light = shared(Light::new("test light"));
        light.lock().unwrap().power_on();

        let mut cmd = PowerOffCmd::new(light.clone());
        cmd.execute().unwrap();
        assert!(!light.lock().unwrap().is_on());

        cmd.undo().unwrap();
        assert!(light.lock().unwrap().is_on());
    }

    #[test]
    fn redo_defaults_to_execute() {
        let light = shared(Light::new("test light"));
        let mut cmd = PowerOnCmd::new(light.clone());

        cmd.execute().unwrap();
        cmd.undo().unwrap();
        cmd.redo().unwrap();
        assert!(light.lock().unwrap().is_on());
    }

    #[test]
    fn descriptions_derive_from_device_label() {
        let light = shared(Light::new("porch light"));
        assert_eq!(PowerOnCmd::new(light.clone()).description(), "porch light on");
        assert_eq!(PowerOffCmd::new(light).description(), "porch light off");
    }

    #[test]
    fn set_volume_captures_and_restores_previous() {
        let speaker = shared(Speaker::new("kitchen speaker"));
        let mut cmd = SetVolumeCmd::new(speaker.clone(), 40);

        cmd.execute().unwrap();
        assert_eq!(speaker.lock().unwrap().volume(), 40);

        cmd.undo().unwrap();
        assert_eq!(speaker.lock().unwrap().volume(), Speaker::DEFAULT_VOLUME);
    }

    #[test]
    fn set_volume_undo_before_execute_is_invalid() {
        let speaker = shared(Speaker::new("kitchen speaker"));
        let mut cmd = SetVolumeCmd::new(speaker, 40);

        let err = cmd.undo().unwrap_err();
        assert!(matches!(err, CommandError::InvalidState(_)));
    }

    #[test]
    fn set_volume_survives_undo_redo_cycles() {
        let speaker = shared(Speaker::new("kitchen speaker"));
        let mut cmd = SetVolumeCmd::new(speaker.clone(), 40);

        cmd.execute().unwrap();
        cmd.undo().unwrap();
        cmd.redo().unwrap();
        assert_eq!(speaker.lock().unwrap().volume(), 40);

        cmd.undo().unwrap();
        assert_eq!(speaker.lock().unwrap().volume(), Speaker::DEFAULT_VOLUME);
    }

    #[test]
    fn debug_impl_shows_description() {
        let light = shared(Light::new("test light"));
        let cmd: Box<dyn Command> = Box::new(PowerOnCmd::new(light));
        let debug = format!("{cmd:?}");
        assert!(debug.contains("PowerOnCmd"));
        assert!(debug.contains("test light on"));
    }
}
