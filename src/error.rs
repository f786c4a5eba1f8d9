//! Domain-specific error types for the recursion toolkit.
//!
//! Core modules return typed errors ([`ToolError`], [`MoveError`]) while the
//! command handlers at the CLI boundary convert them to [`anyhow::Error`] via
//! the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! ToolError
//! ├── InvalidInput(String)  : bad arguments, missing source, bad counts
//! ├── InvalidMove(MoveError): Hanoi rule violations
//! └── Io { path, source }   : filesystem failures
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::hanoi::Peg;

/// Top-level error type shared by the three utilities.
#[derive(Error, Debug)]
pub enum ToolError {
    /// An argument or precondition was rejected before any work started.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A disk move broke the Hanoi stacking rules.
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),

    /// A filesystem operation failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path the failing operation was acting on.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl ToolError {
    /// Build an [`ToolError::InvalidInput`] from anything printable.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Wrap an I/O error together with the path it concerns.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Rule violations raised by [`Towers::move_disk`](crate::hanoi::Towers::move_disk).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The source peg holds no disks.
    #[error("empty source: peg {peg} has no disk to move")]
    EmptySource {
        /// Peg that was empty.
        peg: Peg,
    },

    /// The moved disk would rest on a smaller one.
    #[error("size violation: cannot place disk {disk} on smaller disk {onto} (peg {peg})")]
    SizeViolation {
        /// Disk taken from the source peg.
        disk: u32,
        /// Top disk of the destination peg.
        onto: u32,
        /// Destination peg.
        peg: Peg,
    },
}
