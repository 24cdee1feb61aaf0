use alloc::boxed::Box;

use thiserror::Error;

/// An error returned when a value could not be written into a container or field.
///
/// These come straight from the target's [`Fields`] or [`Keyed`] implementation.
///
/// [`Fields`]: crate::ops::Fields
/// [`Keyed`]: crate::ops::Keyed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssignError {
    #[error("index {index} is out of bounds for `{type_name}` of length {len}")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
        type_name: &'static str,
    },

    #[error("key `{key}` is not valid for `{type_name}`")]
    InvalidKey {
        key: Box<str>,
        type_name: &'static str,
    },

    #[error("`{type_name}` does not support item assignment")]
    NotKeyed { type_name: &'static str },

    #[error("`{type_name}` has no named fields")]
    NoFields { type_name: &'static str },

    #[error("`{type_name}` has no field named `{field}`")]
    UnknownField {
        field: Box<str>,
        type_name: &'static str,
    },

    #[error("mismatched types: expected `{expected}`, found `{found}`")]
    MismatchedTypes {
        expected: &'static str,
        found: &'static str,
    },
}

impl AssignError {
    /// Builds a [`AssignError::MismatchedTypes`] from the rejected value.
    #[inline]
    pub fn mismatched(expected: &'static str, rejected: &dyn crate::Node) -> Self {
        Self::MismatchedTypes {
            expected,
            found: rejected.type_name(),
        }
    }
}
