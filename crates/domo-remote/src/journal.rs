#![forbid(unsafe_code)]

//! Append-only operation journal.
//!
//! The journal records one [`OperationRecord`] for every execute, undo, and
//! redo performed by an invoker. Records are plain data, independent of the
//! live command objects they describe: evicting a command from the undo or
//! redo stacks never touches the journal.
//!
//! # Invariants
//!
//! 1. Sequence numbers are strictly increasing from 1 and never reused.
//! 2. Records are only ever appended; the journal is never truncated or
//!    rewritten in place.
//! 3. The sequence counter is scoped to one journal instance, not the
//!    process.

use std::fmt;

/// Kind of journaled operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpKind {
    /// A command was executed.
    Execute,
    /// A command was undone.
    Undo,
    /// A previously undone command was redone.
    Redo,
}

impl OpKind {
    /// Prefix rendered before the command description.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Execute => "",
            Self::Undo => "UNDO:",
            Self::Redo => "REDO:",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// One immutable entry in the operation journal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperationRecord {
    /// Position in the journal, starting at 1.
    pub seq: u64,
    /// What happened.
    pub kind: OpKind,
    /// Description of the command at the time of the operation.
    pub description: String,
}

impl fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}{}", self.seq, self.kind.prefix(), self.description)
    }
}

/// Append-only log of executed, undone, and redone operations.
#[derive(Debug, Default)]
pub struct Journal {
    records: Vec<OperationRecord>,
    last_seq: u64,
}

impl Journal {
    /// Create an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record with the next sequence number.
    pub(crate) fn record(&mut self, kind: OpKind, description: impl Into<String>) {
        self.last_seq += 1;
        self.records.push(OperationRecord {
            seq: self.last_seq,
            kind,
            description: description.into(),
        });
    }

    /// All records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[OperationRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the journal is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&OperationRecord> {
        self.records.last()
    }
}
