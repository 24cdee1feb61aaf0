//! Provide single-step resolution and assignment.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use core::fmt;

use vc_value::ops::AssignError;
use vc_value::{Key, Node, NodeKind};

// -----------------------------------------------------------------------------
// Step kind

/// Whether a step came from dotted or bracket syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// From bracket syntax, `[0]` or `['foo']`. Resolved by key lookup only.
    Keyed,
    /// From dotted syntax, `foo`. Resolved by field lookup, then key lookup.
    Named,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StepKind::Keyed => "keyed",
            StepKind::Named => "named",
        })
    }
}

// -----------------------------------------------------------------------------
// Miss

/// Why a step could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissReason {
    /// The value is keyed, but the key is absent or out of range.
    NoSuchKey,
    /// A keyed step met a value without the keyed capability.
    NotKeyed,
    /// A named step found neither a field nor a key.
    NoSuchField,
}

/// Description of the value a step failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepMiss {
    pub reason: MissReason,
    /// Kind of the value the step was applied to.
    pub kind: NodeKind,
    /// Type name of the value the step was applied to.
    pub type_name: &'static str,
}

impl StepMiss {
    #[inline]
    fn new(reason: MissReason, base: &dyn Node) -> Self {
        Self {
            reason,
            kind: base.node_kind(),
            type_name: base.type_name(),
        }
    }
}

impl fmt::Display for StepMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            reason,
            kind,
            type_name,
        } = self;
        match reason {
            MissReason::NoSuchKey => write!(f, "the {kind} `{type_name}` has no such key"),
            MissReason::NotKeyed => write!(f, "the {kind} `{type_name}` cannot be indexed"),
            MissReason::NoSuchField => {
                write!(f, "the {kind} `{type_name}` has no such field or key")
            }
        }
    }
}

impl core::error::Error for StepMiss {}

// -----------------------------------------------------------------------------
// Single step

/// A **singular** step of a parsed notation.
///
/// # Rules
///
/// - `Keyed`: container lookup only. An `Index` key addresses a sequence position,
///   a `Name` key addresses a map entry.
/// - `Named`: named-field lookup first. If the value has no such field,
///   falls back to a container lookup with the same name.
///
/// Writes are asymmetric: a `Named` step only assigns through the
/// named-field capability and never falls back to key assignment.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_access::AccessorStep;
/// use vc_value::Key;
///
/// let map = BTreeMap::from([(String::from("a"), vec![1_i32, 2])]);
///
/// let list = AccessorStep::Named("a".into()).resolve(&map).unwrap();
/// let item = AccessorStep::Keyed(Key::Index(1)).resolve(list).unwrap();
/// assert_eq!(item.downcast_ref::<i32>(), Some(&2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccessorStep<'a> {
    /// A field name, e.g. the `foo` of `foo.bar`.
    Named(Cow<'a, str>),
    /// A key or index, e.g. the `0` of `[0]` or the `foo` of `['foo']`.
    Keyed(Key<'a>),
}

impl<'a> AccessorStep<'a> {
    /// Converts this into an "owned" value.
    #[inline]
    pub fn into_owned(self) -> AccessorStep<'static> {
        match self {
            Self::Named(name) => AccessorStep::Named(Cow::Owned(name.into_owned())),
            Self::Keyed(key) => AccessorStep::Keyed(key.into_owned()),
        }
    }

    /// Returns the [`StepKind`] of this step.
    #[inline]
    pub fn kind(&self) -> StepKind {
        match self {
            Self::Named(_) => StepKind::Named,
            Self::Keyed(_) => StepKind::Keyed,
        }
    }

    /// Returns the key carried by this step.
    ///
    /// A named step always carries a `Name` key.
    #[inline]
    pub fn key(&self) -> Key<'_> {
        match self {
            Self::Named(name) => Key::Name(Cow::Borrowed(&**name)),
            Self::Keyed(key) => key.reborrow(),
        }
    }

    /// Resolves this step against `base`; on success returns a shared reference.
    pub fn resolve<'r>(&self, base: &'r dyn Node) -> Result<&'r dyn Node, StepMiss> {
        match self {
            Self::Keyed(key) => {
                let Some(keyed) = base.as_keyed() else {
                    return Err(StepMiss::new(MissReason::NotKeyed, base));
                };
                keyed
                    .get_key(key)
                    .ok_or_else(|| StepMiss::new(MissReason::NoSuchKey, base))
            }
            Self::Named(name) => {
                if let Some(fields) = base.as_fields()
                    && let Some(value) = fields.field(name)
                {
                    return Ok(value);
                }
                base.as_keyed()
                    .and_then(|keyed| keyed.get_key(&Key::Name(Cow::Borrowed(&**name))))
                    .ok_or_else(|| StepMiss::new(MissReason::NoSuchField, base))
            }
        }
    }

    /// Resolves this step against `base`; on success returns a mutable reference.
    pub fn resolve_mut<'r>(&self, base: &'r mut dyn Node) -> Result<&'r mut dyn Node, StepMiss> {
        match self {
            Self::Keyed(key) => {
                let no_such_key = StepMiss::new(MissReason::NoSuchKey, base);
                let not_keyed = StepMiss::new(MissReason::NotKeyed, base);
                match base.as_keyed_mut() {
                    Some(keyed) => keyed.get_key_mut(key).ok_or(no_such_key),
                    None => Err(not_keyed),
                }
            }
            Self::Named(name) => {
                let miss = StepMiss::new(MissReason::NoSuchField, base);
                // Probe immutably first, the mutable borrow can't be released on a miss.
                let has_field = base
                    .as_fields()
                    .is_some_and(|fields| fields.field(name).is_some());
                if has_field {
                    return base
                        .as_fields_mut()
                        .and_then(|fields| fields.field_mut(name))
                        .ok_or(miss);
                }
                base.as_keyed_mut()
                    .and_then(|keyed| keyed.get_key_mut(&Key::Name(Cow::Borrowed(&**name))))
                    .ok_or(miss)
            }
        }
    }

    /// Assigns `value` through this step into `target`.
    ///
    /// Errors come unchanged from the target's capability.
    pub fn assign(&self, target: &mut dyn Node, value: Box<dyn Node>) -> Result<(), AssignError> {
        let type_name = target.type_name();
        match self {
            Self::Keyed(key) => target
                .as_keyed_mut()
                .ok_or(AssignError::NotKeyed { type_name })?
                .set_key(key, value),
            Self::Named(name) => target
                .as_fields_mut()
                .ok_or(AssignError::NoFields { type_name })?
                .set_field(name, value),
        }
    }
}

impl fmt::Display for AccessorStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, ".{name}"),
            Self::Keyed(key) => fmt::Display::fmt(key, f),
        }
    }
}

impl From<Key<'static>> for AccessorStep<'static> {
    #[inline]
    fn from(key: Key<'static>) -> Self {
        Self::Keyed(key)
    }
}

// -----------------------------------------------------------------------------
// Single step with offset

/// An [`AccessorStep`] combined with an `offset` for more helpful error reporting.
///
/// `offset` is the byte position of the step in its notation,
/// only used to display error messages.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetStep<'a> {
    pub step: AccessorStep<'a>,
    pub offset: Option<usize>,
}

impl<'a> From<AccessorStep<'a>> for OffsetStep<'a> {
    #[inline]
    fn from(step: AccessorStep<'a>) -> Self {
        Self { step, offset: None }
    }
}

impl<'a> OffsetStep<'a> {
    /// Creates a step located at `offset`.
    #[inline]
    pub const fn new(step: AccessorStep<'a>, offset: usize) -> Self {
        Self {
            step,
            offset: Some(offset),
        }
    }

    /// Converts this into an "owned" value.
    #[inline]
    pub fn into_owned(self) -> OffsetStep<'static> {
        OffsetStep {
            step: self.step.into_owned(),
            offset: self.offset,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
