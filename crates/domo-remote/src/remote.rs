#![forbid(unsafe_code)]

//! The remote-control invoker.
//!
//! [`RemoteControl`] executes commands and maintains dual stacks for
//! undo/redo, journaling every operation it performs.
//!
//! # Invariants
//!
//! 1. A freshly executed command clears the undone stack: redo history does
//!    not survive a new action.
//! 2. `undo_depth() <= config.max_depth` after any operation.
//! 3. Every journal append increments the sequence by exactly one.
//! 4. A command is owned by exactly one stack at a time; a command evicted
//!    from both stacks is dropped, while its journal records remain.
//!
//! # Stack Model
//!
//! Commands are stored in `VecDeque`s (newest at the back) so the oldest
//! entry can be evicted from the front in O(1) when the depth limit is hit.
//!
//! ```text
//! execute(c4)
//! ┌───────────────────────────────────────────────┐
//! │ Executed: [c1, c2, c3, c4]    Undone: []      │
//! └───────────────────────────────────────────────┘
//!
//! undo() x2
//! ┌───────────────────────────────────────────────┐
//! │ Executed: [c1, c2]            Undone: [c4, c3]│
//! └───────────────────────────────────────────────┘
//!
//! execute(c5)  <-- new branch, undone stack cleared
//! ┌───────────────────────────────────────────────┐
//! │ Executed: [c1, c2, c5]        Undone: []      │
//! └───────────────────────────────────────────────┘
//! ```

use std::collections::VecDeque;
use std::fmt;

use domo_core::{Command, CommandError, CommandResult};

use crate::journal::{Journal, OpKind};

/// Configuration for the remote control.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Maximum number of commands kept on the executed stack.
    /// Oldest commands are evicted when the limit is exceeded.
    pub max_depth: usize,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self { max_depth: 100 }
    }
}

impl RemoteConfig {
    /// Create a configuration with the given depth limit.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Create an unlimited configuration (for testing).
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }
}

/// Controller that executes commands and tracks undo/redo history.
///
/// The remote takes ownership of every submitted command and migrates it
/// between the executed and undone stacks as operations are undone and
/// redone. The [`Journal`] outlives the commands it describes.
pub struct RemoteControl {
    /// Commands available for undo (newest at back).
    executed: VecDeque<Box<dyn Command>>,
    /// Commands available for redo (newest at back).
    undone: VecDeque<Box<dyn Command>>,
    /// Append-only record of every operation.
    journal: Journal,
    /// Configuration for limits.
    config: RemoteConfig,
}

impl fmt::Debug for RemoteControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteControl")
            .field("undo_depth", &self.executed.len())
            .field("redo_depth", &self.undone.len())
            .field("journal_len", &self.journal.len())
            .field("config", &self.config)
            .finish()
    }
}

impl Default for RemoteControl {
    fn default() -> Self {
        Self::new(RemoteConfig::default())
    }
}

impl RemoteControl {
    /// Create a remote control with the given configuration.
    #[must_use]
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            executed: VecDeque::new(),
            undone: VecDeque::new(),
            journal: Journal::new(),
            config,
        }
    }

    // ========================================================================
    // Core Operations
    // ========================================================================

    /// Execute a command, taking ownership of it.
    ///
    /// On success the command is journaled and pushed onto the executed
    /// stack, and the undone stack is cleared (a new action invalidates any
    /// previously undone branch). A failed command is dropped unrecorded.
    pub fn execute(&mut self, mut cmd: Box<dyn Command>) -> CommandResult {
        cmd.execute()?;

        let description = cmd.description().to_string();
        tracing::debug!(command = %description, "execute");

        self.journal.record(OpKind::Execute, &description);
        self.undone.clear();
        self.executed.push_back(cmd);
        self.enforce_depth();

        Ok(())
    }

    /// Undo the most recent command.
    ///
    /// Moves the command from the executed stack to the undone stack and
    /// journals a `UNDO:` record.
    ///
    /// # Returns
    ///
    /// - `Some(Ok(description))` if the undo succeeded
    /// - `Some(Err(error))` if the undo failed (command stays on the
    ///   executed stack, nothing journaled)
    /// - `None` if there is nothing to undo (silent no-op)
    pub fn undo(&mut self) -> Option<Result<String, CommandError>> {
        let mut cmd = self.executed.pop_back()?;
        let description = cmd.description().to_string();

        match cmd.undo() {
            Ok(()) => {
                tracing::debug!(command = %description, "undo");
                self.journal.record(OpKind::Undo, &description);
                self.undone.push_back(cmd);
                Some(Ok(description))
            }
            Err(e) => {
                self.executed.push_back(cmd);
                Some(Err(e))
            }
        }
    }

    /// Redo the most recently undone command.
    ///
    /// Moves the command from the undone stack back to the executed stack
    /// and journals a `REDO:` record. Redo does not go through
    /// [`execute`](Self::execute), so the undone stack it pops from is left
    /// otherwise intact.
    ///
    /// # Returns
    ///
    /// - `Some(Ok(description))` if the redo succeeded
    /// - `Some(Err(error))` if the redo failed (command stays on the undone
    ///   stack, nothing journaled)
    /// - `None` if there is nothing to redo (silent no-op)
    pub fn redo(&mut self) -> Option<Result<String, CommandError>> {
        let mut cmd = self.undone.pop_back()?;
        let description = cmd.description().to_string();

        match cmd.redo() {
            Ok(()) => {
                tracing::debug!(command = %description, "redo");
                self.journal.record(OpKind::Redo, &description);
                self.executed.push_back(cmd);
                Some(Ok(description))
            }
            Err(e) => {
                self.undone.push_back(cmd);
                Some(Err(e))
            }
        }
    }

    // ========================================================================
    // Info
    // ========================================================================

    /// Check if undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.executed.is_empty()
    }

    /// Check if redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Depth of the executed stack.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.executed.len()
    }

    /// Depth of the undone stack.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.undone.len()
    }

    /// Description of the next command to undo.
    #[must_use]
    pub fn next_undo_description(&self) -> Option<&str> {
        self.executed.back().map(|c| c.description())
    }

    /// Description of the next command to redo.
    #[must_use]
    pub fn next_redo_description(&self) -> Option<&str> {
        self.undone.back().map(|c| c.description())
    }

    /// The operation journal, oldest record first.
    #[must_use]
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    // ========================================================================
    // Maintenance
    // ========================================================================

    /// Evict oldest executed commands beyond the depth limit.
    ///
    /// Journal records for evicted commands remain.
    fn enforce_depth(&mut self) {
        while self.executed.len() > self.config.max_depth {
            if let Some(cmd) = self.executed.pop_front() {
                tracing::debug!(command = %cmd.description(), "evict");
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use domo_core::{Device, Light, PowerOffCmd, PowerOnCmd, SharedDevice, shared};

    fn light() -> SharedDevice<Light> {
        shared(Light::new("test light"))
    }

    fn on_cmd(light: &SharedDevice<Light>) -> Box<dyn Command> {
        Box::new(PowerOnCmd::new(light.clone()))
    }

    fn off_cmd(light: &SharedDevice<Light>) -> Box<dyn Command> {
        Box::new(PowerOffCmd::new(light.clone()))
    }

    fn is_on(light: &SharedDevice<Light>) -> bool {
        light.lock().unwrap().is_on()
    }

    #[test]
    fn new_remote_is_empty() {
        let remote = RemoteControl::default();
        assert!(!remote.can_undo());
        assert!(!remote.can_redo());
        assert_eq!(remote.undo_depth(), 0);
        assert_eq!(remote.redo_depth(), 0);
        assert!(remote.journal().is_empty());
    }

    #[test]
    fn execute_applies_effect_and_enables_undo() {
        let light = light();
        let mut remote = RemoteControl::default();

        remote.execute(on_cmd(&light)).unwrap();

        assert!(is_on(&light));
        assert!(remote.can_undo());
        assert!(!remote.can_redo());
        assert_eq!(remote.journal().len(), 1);
    }

    #[test]
    fn undo_reverses_effect_and_enables_redo() {
        let light = light();
        let mut remote = RemoteControl::default();
        remote.execute(on_cmd(&light)).unwrap();

        let undone = remote.undo().unwrap().unwrap();

        assert_eq!(undone, "test light on");
        assert!(!is_on(&light));
        assert!(!remote.can_undo());
        assert!(remote.can_redo());
    }

    #[test]
    fn redo_replays_forward_effect() {
        let light = light();
        let mut remote = RemoteControl::default();
        remote.execute(on_cmd(&light)).unwrap();
        remote.undo();

        let redone = remote.redo().unwrap().unwrap();

        assert_eq!(redone, "test light on");
        assert!(is_on(&light));
        assert!(remote.can_undo());
        assert!(!remote.can_redo());
    }

    #[test]
    fn execute_clears_redo_branch() {
        let light = light();
        let mut remote = RemoteControl::default();
        remote.execute(on_cmd(&light)).unwrap();
        remote.execute(off_cmd(&light)).unwrap();
        remote.undo();
        assert!(remote.can_redo());

        remote.execute(on_cmd(&light)).unwrap();

        assert!(!remote.can_redo());
        assert!(remote.redo().is_none());
    }

    #[test]
    fn undo_on_empty_is_silent_noop() {
        let mut remote = RemoteControl::default();
        assert!(remote.undo().is_none());
        assert!(remote.journal().is_empty());
    }

    #[test]
    fn redo_on_empty_is_silent_noop() {
        let mut remote = RemoteControl::default();
        assert!(remote.redo().is_none());
        assert!(remote.journal().is_empty());
    }

    #[test]
    fn journal_sequences_every_operation() {
        let light = light();
        let mut remote = RemoteControl::default();
        remote.execute(on_cmd(&light)).unwrap();
        remote.execute(off_cmd(&light)).unwrap();
        remote.undo();
        remote.redo();

        let records = remote.journal().records();
        assert_eq!(records.len(), 4);
        let seqs: Vec<u64> = records.iter().map(|r| r.seq).collect();
        assert_eq!(seqs, vec![1, 2, 3, 4]);
        assert_eq!(records[2].to_string(), "3. UNDO:test light off");
        assert_eq!(records[3].to_string(), "4. REDO:test light off");
    }

    #[test]
    fn depth_limit_evicts_oldest_but_journal_survives() {
        let light = light();
        let mut remote = RemoteControl::new(RemoteConfig::new(3));

        for _ in 0..5 {
            remote.execute(on_cmd(&light)).unwrap();
        }

        assert_eq!(remote.undo_depth(), 3);
        assert_eq!(remote.journal().len(), 5);
    }

    #[test]
    fn next_descriptions_track_stack_tops() {
        let light = light();
        let mut remote = RemoteControl::default();
        remote.execute(on_cmd(&light)).unwrap();

        assert_eq!(remote.next_undo_description(), Some("test light on"));
        assert_eq!(remote.next_redo_description(), None);

        remote.undo();

        assert_eq!(remote.next_undo_description(), None);
        assert_eq!(remote.next_redo_description(), Some("test light on"));
    }

    #[test]
    fn repeated_undo_beyond_depth_leaves_state_alone() {
        let light = light();
        let mut remote = RemoteControl::default();
        remote.execute(on_cmd(&light)).unwrap();
        remote.undo();

        assert!(remote.undo().is_none());
        assert!(remote.undo().is_none());
        assert!(!is_on(&light));
        assert_eq!(remote.journal().len(), 2);
    }

    #[test]
    fn config_constructors() {
        assert_eq!(RemoteConfig::default().max_depth, 100);
        assert_eq!(RemoteConfig::new(7).max_depth, 7);
        assert_eq!(RemoteConfig::unlimited().max_depth, usize::MAX);
    }

    #[test]
    fn debug_impl_summarizes_depths() {
        let remote = RemoteControl::default();
        let debug = format!("{remote:?}");
        assert!(debug.contains("RemoteControl"));
        assert!(debug.contains("undo_depth"));
        assert!(debug.contains("journal_len"));
    }
}
