#![forbid(unsafe_code)]

//! Device receivers and reversible command primitives for Domo.
//!
//! Provides the [`Command`] trait for reversible operations, the stock
//! appliance receivers commands operate on, and the [`Scene`] composite
//! that groups commands into a single reversible unit.
//!
//! # Role in Domo
//! `domo-core` defines the vocabulary shared by everything above it:
//! what a device is, what a command is, and how commands compose. It knows
//! nothing about history tracking or undo/redo orchestration.
//!
//! # How it fits in the system
//! `domo-remote` consumes this crate to execute commands and maintain
//! undo/redo stacks. Applications build commands against receivers from
//! this crate and hand them to a `RemoteControl`.

pub mod command;
pub mod device;
pub mod scene;

pub use command::{Command, CommandError, CommandResult, PowerOffCmd, PowerOnCmd, SetVolumeCmd};
pub use device::{AirConditioner, Device, Light, SharedDevice, Speaker, shared};
pub use scene::Scene;
