#![forbid(unsafe_code)]

//! Undo/redo command orchestration for Domo.
//!
//! This crate provides the [`RemoteControl`] invoker, which executes
//! commands from `domo-core` and maintains undo/redo history, and the
//! append-only [`Journal`] of every operation it performs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       RemoteControl                          │
//! │  ┌──────────────────┐          ┌──────────────────┐         │
//! │  │  Executed Stack  │  undo()  │   Undone Stack   │         │
//! │  │  [cmd1 .. cmdN]  │ ───────► │  [cmdN .. cmd1]  │         │
//! │  │                  │ ◄─────── │                  │         │
//! │  └──────────────────┘  redo()  └──────────────────┘         │
//! │  ┌─────────────────────────────────────────────────┐        │
//! │  │ Journal: 1. home mode  2. light off  3. UNDO:…  │        │
//! │  └─────────────────────────────────────────────────┘        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Role in Domo
//! `domo-remote` owns every live command after submission and decides when
//! one is dropped (evicted from both stacks). The journal is decoupled from
//! command lifetimes, so history survives command disposal.
//!
//! # How it fits in the system
//! Applications construct commands against `domo-core` receivers and hand
//! them to a [`RemoteControl`]; the demo showcase drives a fixed scenario
//! through this crate and prints the journal.

pub mod journal;
pub mod remote;

pub use journal::{Journal, OpKind, OperationRecord};
pub use remote::{RemoteConfig, RemoteControl};
