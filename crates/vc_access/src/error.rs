use alloc::boxed::Box;
use core::fmt;

use thiserror::Error;
use vc_value::ops::AssignError;

use crate::{AccessorStep, StepMiss};

// -----------------------------------------------------------------------------
// Syntax errors

/// The kind of [`NotationSyntaxError`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SyntaxErrorKind {
    #[error("the notation is empty")]
    Empty,

    #[error("`[` is never closed")]
    UnclosedBracket,

    #[error("unexpected `]`")]
    UnexpectedBracket,

    #[error("bracket content must be an index or a quoted key")]
    InvalidBracket,

    #[error("index does not fit in `usize`")]
    IndexOverflow,
}

/// An error returned for structurally invalid notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Encountered an error at offset {offset} while parsing `{notation}`: {kind}")]
pub struct NotationSyntaxError {
    /// Byte position in `notation`.
    pub offset: usize,
    /// The notation that the error occurred in.
    pub notation: Box<str>,
    pub kind: SyntaxErrorKind,
}

impl NotationSyntaxError {
    #[inline]
    pub(crate) fn new(notation: &str, offset: usize, kind: SyntaxErrorKind) -> Self {
        Self {
            offset,
            notation: Box::from(notation),
            kind,
        }
    }
}

// -----------------------------------------------------------------------------
// Path not found

/// An error returned when a step of a path could not be resolved.
///
/// Raised by strict reads and by the prefix walk of every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNotFoundError {
    /// The step that failed.
    pub step: AccessorStep<'static>,
    /// Byte position of the step in its notation, if it was parsed.
    pub offset: Option<usize>,
    /// Index of the step in its path.
    pub depth: usize,
    /// Type name of the root value of the walk.
    pub root_type: &'static str,
    /// The value the step was applied to.
    pub miss: StepMiss,
}

impl fmt::Display for PathNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.step {
            AccessorStep::Named(name) => write!(f, "Node `{name}` not found")?,
            AccessorStep::Keyed(key) => write!(f, "Node `{key}` not found")?,
        }
        if let Some(offset) = self.offset {
            write!(f, " (offset {offset})")?;
        }
        write!(
            f,
            " at depth {} of `{}`: {}",
            self.depth, self.root_type, self.miss
        )
    }
}

impl core::error::Error for PathNotFoundError {}

// -----------------------------------------------------------------------------
// AccessError

/// An error returned from a failed notation read or write.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    /// The notation could not be parsed.
    #[error(transparent)]
    Syntax(#[from] NotationSyntaxError),

    /// A step could not be resolved.
    #[error(transparent)]
    PathNotFound(#[from] PathNotFoundError),

    /// A write was requested through a path without steps.
    #[error("cannot assign through an empty path")]
    EmptyPath,

    /// The final assignment was rejected by the target.
    #[error(transparent)]
    Assign(#[from] AssignError),

    /// The located value has another type than the requested one.
    #[error("can't downcast result of access: expected `{expected}`, found `{found}`")]
    InvalidDowncast {
        expected: &'static str,
        found: &'static str,
    },
}

// -----------------------------------------------------------------------------
// Tests
