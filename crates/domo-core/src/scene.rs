#![forbid(unsafe_code)]

//! Composite commands.
//!
//! A [`Scene`] owns an ordered sequence of child commands and satisfies the
//! command contract itself, so scenes nest arbitrarily. Execution applies
//! children front-to-back; undo peels effects off in exact reverse order,
//! mirroring a stack-based rollback. Later children may depend on state
//! established by earlier ones, which is why the order must reverse.

use std::fmt;

use crate::command::{Command, CommandResult};

/// A command built from an ordered list of sub-commands.
pub struct Scene {
    /// Children in execution order.
    commands: Vec<Box<dyn Command>>,
    description: String,
    /// Index one past the last successfully executed child.
    executed_to: usize,
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("description", &self.description)
            .field("commands_count", &self.commands.len())
            .field("executed_to", &self.executed_to)
            .finish()
    }
}

impl Scene {
    /// Create an empty scene with the given description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            commands: Vec::new(),
            description: description.into(),
            executed_to: 0,
        }
    }

    /// Transfer ownership of a child command into the scene.
    pub fn push(&mut self, cmd: Box<dyn Command>) {
        self.commands.push(cmd);
    }

    /// Number of child commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the scene has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Command for Scene {
    fn execute(&mut self) -> CommandResult {
        for (i, cmd) in self.commands.iter_mut().enumerate() {
            if let Err(e) = cmd.execute() {
                // Roll back the executed prefix in reverse order.
                for j in (0..i).rev() {
                    let _ = self.commands[j].undo();
                }
                self.executed_to = 0;
                return Err(e);
            }
            self.executed_to = i + 1;
        }
        Ok(())
    }

    fn undo(&mut self) -> CommandResult {
        for i in (0..self.executed_to).rev() {
            self.commands[i].undo()?;
        }
        self.executed_to = 0;
        Ok(())
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn debug_name(&self) -> &'static str {
        "Scene"
    }
}
