//! Provide the reusable, multi-step accessor plan.

use alloc::boxed::Box;
use core::fmt;
use core::str::FromStr;

use fastvec::FastVec;
use vc_value::Node;

use crate::{AccessError, AccessorStep, BracketMode, Notation};
use crate::{NotationSyntaxError, OffsetStep, PathNotFoundError, StepMiss};

// -----------------------------------------------------------------------------
// Walking

fn not_found(
    step: &OffsetStep<'_>,
    depth: usize,
    root_type: &'static str,
    miss: StepMiss,
) -> PathNotFoundError {
    log::trace!("step `{}` at depth {depth} of `{root_type}` missed: {miss}", step.step);
    PathNotFoundError {
        step: step.step.clone().into_owned(),
        offset: step.offset,
        depth,
        root_type,
        miss,
    }
}

/// Resolves every step of `steps` in order, starting at `root`.
pub(crate) fn walk<'r>(
    steps: &[OffsetStep<'_>],
    root: &'r dyn Node,
) -> Result<&'r dyn Node, PathNotFoundError> {
    let mut it = root;
    for (depth, step) in steps.iter().enumerate() {
        it = match step.step.resolve(it) {
            Ok(value) => value,
            Err(miss) => return Err(not_found(step, depth, root.type_name(), miss)),
        };
    }
    Ok(it)
}

/// Mutable version of [`walk`].
pub(crate) fn walk_mut<'r>(
    steps: &[OffsetStep<'_>],
    root: &'r mut dyn Node,
) -> Result<&'r mut dyn Node, PathNotFoundError> {
    let root_type = root.type_name();
    let mut it = root;
    for (depth, step) in steps.iter().enumerate() {
        it = match step.step.resolve_mut(it) {
            Ok(value) => value,
            Err(miss) => return Err(not_found(step, depth, root_type, miss)),
        };
    }
    Ok(it)
}

/// Resolves all but the last step, then assigns through the last one.
///
/// Intermediate values are never created.
pub(crate) fn assign_through(
    steps: &[OffsetStep<'_>],
    root: &mut dyn Node,
    value: Box<dyn Node>,
) -> Result<(), AccessError> {
    let Some((target, prefix)) = steps.split_last() else {
        return Err(AccessError::EmptyPath);
    };
    let container = walk_mut(prefix, root)?;
    target.step.assign(container, value)?;
    Ok(())
}

/// Downcasts a located value, reporting both types on failure.
pub(crate) fn downcast<T: Node>(value: &dyn Node) -> Result<&T, AccessError> {
    match value.downcast_ref::<T>() {
        Some(value) => Ok(value),
        None => Err(AccessError::InvalidDowncast {
            expected: core::any::type_name::<T>(),
            found: value.type_name(),
        }),
    }
}

/// Mutable version of [`downcast`].
pub(crate) fn downcast_mut<T: Node>(value: &mut dyn Node) -> Result<&mut T, AccessError> {
    let found = value.type_name();
    match value.downcast_mut::<T>() {
        Some(value) => Ok(value),
        None => Err(AccessError::InvalidDowncast {
            expected: core::any::type_name::<T>(),
            found,
        }),
    }
}

// -----------------------------------------------------------------------------
// Reusable plan

/// Reusable parsed notation, a thin wrapper over `Box<[OffsetStep]>`.
///
/// [`OffsetStep`] and [`AccessorStep`] only resolve a single level,
/// while this type walks a complete path.
///
/// A plan is immutable once parsed, so one plan can be applied
/// any number of times, from any number of threads, to different roots.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_access::AccessorPlan;
///
/// let mut root = BTreeMap::from([(String::from("scores"), vec![1_u32, 2, 3])]);
/// let plan = AccessorPlan::parse("scores[2]").unwrap();
///
/// let val = plan.resolve(&root).unwrap();
/// assert_eq!(val.downcast_ref::<u32>(), Some(&3));
///
/// plan.assign(&mut root, Box::new(30_u32)).unwrap();
/// assert_eq!(root["scores"], [1, 2, 30]);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccessorPlan(Box<[OffsetStep<'static>]>);

impl From<Box<[OffsetStep<'static>]>> for AccessorPlan {
    #[inline]
    fn from(value: Box<[OffsetStep<'static>]>) -> Self {
        Self(value)
    }
}

impl FromIterator<AccessorStep<'static>> for AccessorPlan {
    fn from_iter<I: IntoIterator<Item = AccessorStep<'static>>>(iter: I) -> Self {
        Self(iter.into_iter().map(OffsetStep::from).collect())
    }
}

impl AccessorPlan {
    /// Parses the notation with [`BracketMode::Strict`].
    ///
    /// This copies each named segment and key into an owned string.
    /// For `&'static str`, consider [`parse_static`](Self::parse_static).
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_access::AccessorPlan;
    /// let s = String::from("foo.bar[1]['baz']");
    /// let plan = AccessorPlan::parse(&s).unwrap();
    /// assert_eq!(plan.len(), 4);
    /// ```
    #[inline]
    pub fn parse<'a>(notation: impl Notation<'a>) -> Result<Self, NotationSyntaxError> {
        Self::parse_with(notation, BracketMode::Strict)
    }

    /// Parses the notation with the given [`BracketMode`].
    ///
    /// A syntax error anywhere in the notation fails the whole parse.
    pub fn parse_with<'a>(
        notation: impl Notation<'a>,
        mode: BracketMode,
    ) -> Result<Self, NotationSyntaxError> {
        let mut vec: FastVec<OffsetStep, 8> = FastVec::new();
        let data = vec.get();

        for res in notation.to_steps(mode) {
            data.push(res?.into_owned());
        }

        Ok(Self(vec.into_boxed_slice()))
    }

    /// Parses the notation with [`BracketMode::Strict`],
    /// storing string references without creating additional `String`s.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_access::AccessorPlan;
    /// let plan = AccessorPlan::parse_static("foo[0]").unwrap();
    /// assert_eq!(plan.len(), 2);
    /// ```
    pub fn parse_static(notation: impl Notation<'static>) -> Result<Self, NotationSyntaxError> {
        let mut vec: FastVec<OffsetStep, 8> = FastVec::new();
        let data = vec.get();

        for res in notation.to_steps(BracketMode::Strict) {
            data.push(res?);
        }

        Ok(Self(vec.into_boxed_slice()))
    }

    /// Returns the number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the plan has no steps.
    ///
    /// Reading an empty plan yields the root, writing through it fails.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the steps of this plan.
    #[inline]
    pub fn steps(&self) -> &[OffsetStep<'static>] {
        &self.0
    }

    /// Returns the last step and the prefix before it,
    /// or `None` if the plan is empty.
    #[inline]
    pub fn split_last(&self) -> Option<(&OffsetStep<'static>, &[OffsetStep<'static>])> {
        self.0.split_last()
    }

    /// Returns a reference to the value the plan points at.
    ///
    /// Never mutates `root`. The plan itself can be reused.
    #[inline]
    pub fn resolve<'r>(&self, root: &'r dyn Node) -> Result<&'r dyn Node, PathNotFoundError> {
        walk(&self.0, root)
    }

    /// Returns a mutable reference to the value the plan points at.
    #[inline]
    pub fn resolve_mut<'r>(
        &self,
        root: &'r mut dyn Node,
    ) -> Result<&'r mut dyn Node, PathNotFoundError> {
        walk_mut(&self.0, root)
    }

    /// Returns a typed reference to the value the plan points at.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_access::AccessorPlan;
    /// let root = vec![vec![1_i32, 2], vec![3]];
    /// let plan = AccessorPlan::parse("[1][0]").unwrap();
    ///
    /// assert_eq!(*plan.resolve_as::<i32>(&root).unwrap(), 3);
    /// assert!(plan.resolve_as::<u8>(&root).is_err());
    /// ```
    #[inline]
    pub fn resolve_as<'r, T: Node>(&self, root: &'r dyn Node) -> Result<&'r T, AccessError> {
        downcast(self.resolve(root)?)
    }

    /// Assigns `value` at the location the plan points at.
    ///
    /// All steps but the last must resolve; the last one is assigned
    /// through the container key or named field it denotes.
    ///
    /// # Errors
    ///
    /// - [`AccessError::EmptyPath`] if the plan has no steps.
    /// - [`AccessError::PathNotFound`] if an intermediate step is missing.
    /// - [`AccessError::Assign`] if the target rejects the value.
    #[inline]
    pub fn assign(&self, root: &mut dyn Node, value: Box<dyn Node>) -> Result<(), AccessError> {
        assign_through(&self.0, root, value)
    }

    /// Concat two `AccessorPlan`.
    ///
    /// Note that this will not modify the `offset`,
    /// so the error message may not be as expected.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_access::AccessorPlan;
    /// let a1 = AccessorPlan::parse("foo[1]").unwrap();
    /// let a2 = AccessorPlan::parse("bar").unwrap();
    /// let a = a1.concat(a2);
    /// assert_eq!(a.len(), 3);
    /// assert_eq!(a.to_string(), "foo[1].bar");
    /// ```
    pub fn concat(self, other: AccessorPlan) -> Self {
        let mut vec: FastVec<OffsetStep, 12> = FastVec::new();
        let data = vec.get();
        data.extend(self.0);
        data.extend(other.0);
        Self(vec.into_boxed_slice())
    }
}

/// Renders the canonical notation, e.g. `foo.bar[1]['baz']`.
///
/// Plans produced by [`parse`](AccessorPlan::parse) re-parse to an equal plan.
/// Loose-mode plans and plans built from hand-made steps carry no such guarantee:
/// a demoted bracket, an empty key, or a name holding `.`, `[` or `]` renders
/// text that parses differently or not at all.
impl fmt::Display for AccessorPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, it) in self.0.iter().enumerate() {
            match &it.step {
                AccessorStep::Named(name) if index == 0 => f.write_str(name)?,
                step => fmt::Display::fmt(step, f)?,
            }
        }
        Ok(())
    }
}

impl FromStr for AccessorPlan {
    type Err = NotationSyntaxError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// -----------------------------------------------------------------------------
// Tests
