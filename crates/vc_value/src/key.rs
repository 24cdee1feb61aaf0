use alloc::borrow::Cow;
use core::fmt;

/// A key for [`Keyed`](crate::ops::Keyed) lookup and assignment.
///
/// - `Index` addresses a position in a sequence, e.g. `[3]`.
/// - `Name` addresses an entry of a string-keyed container, e.g. `['foo']`.
///
/// A container simply does not resolve keys of the wrong flavor:
/// a list has no `Name` entries and a map has no `Index` entries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key<'a> {
    /// A sequence position.
    Index(usize),
    /// A mapping key.
    Name(Cow<'a, str>),
}

impl<'a> Key<'a> {
    /// Converts this into an "owned" key.
    #[inline]
    pub fn into_owned(self) -> Key<'static> {
        match self {
            Self::Index(index) => Key::Index(index),
            Self::Name(name) => Key::Name(Cow::Owned(name.into_owned())),
        }
    }

    /// Borrows this key without copying the name.
    #[inline]
    pub fn reborrow(&self) -> Key<'_> {
        match self {
            Self::Index(index) => Key::Index(*index),
            Self::Name(name) => Key::Name(Cow::Borrowed(&**name)),
        }
    }

    /// Returns the index, if this is an `Index` key.
    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }

    /// Returns the name, if this is a `Name` key.
    #[inline]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(&**name),
        }
    }
}

impl From<usize> for Key<'_> {
    #[inline]
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl<'a> From<&'a str> for Key<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Self::Name(Cow::Borrowed(value))
    }
}

impl From<alloc::string::String> for Key<'_> {
    #[inline]
    fn from(value: alloc::string::String) -> Self {
        Self::Name(Cow::Owned(value))
    }
}

/// Renders `[0]` or `['name']`, switching to `["name"]` when the name contains `']`.
///
/// An empty name, or one containing both `']` and `"]`, has no bracket notation;
/// its rendering does not parse back to the same key.
impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "[{index}]"),
            Self::Name(name) if name.contains("']") => write!(f, "[\"{name}\"]"),
            Self::Name(name) => write!(f, "['{name}']"),
        }
    }
}
