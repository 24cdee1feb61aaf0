//! Provide the configurable [`Accessor`].

use alloc::boxed::Box;
use core::fmt;

use vc_value::Node;

use crate::plan::{assign_through, downcast_mut, walk, walk_mut};
use crate::{AccessError, AccessOptions, AccessorPlan, NotationSyntaxError, SyntaxErrorKind};

// -----------------------------------------------------------------------------
// Defaults

/// The default captured by an [`Accessor`] at construction.
#[derive(Default)]
pub enum DefaultValue {
    /// No default was given.
    #[default]
    Missing,
    /// An explicit null default, read as `None`.
    Null,
    /// A value returned in place of a missing node.
    Value(Box<dyn Node>),
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("Missing"),
            Self::Null => f.write_str("Null"),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

/// A default passed at call time.
///
/// `Inherit` is the "nothing passed" marker: it defers to the
/// [`DefaultValue`] of the accessor, which is distinct from an explicit `Null`.
#[derive(Debug, Default, Clone, Copy)]
pub enum Fallback<'d> {
    /// Use the default of the accessor.
    #[default]
    Inherit,
    /// Read a missing node as `None`.
    Null,
    /// Return this value in place of a missing node.
    Value(&'d dyn Node),
}

/// Call time overrides for [`Accessor::apply_with`].
///
/// Every field left unset falls back to the accessor's own setting.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApplyArgs<'n, 'd> {
    /// Notation parsed and walked instead of the accessor's plan.
    pub notation: Option<&'n str>,
    pub default: Fallback<'d>,
    pub strict: Option<bool>,
}

impl<'n, 'd> ApplyArgs<'n, 'd> {
    /// Creates arguments overriding nothing.
    #[inline]
    pub const fn new() -> Self {
        Self {
            notation: None,
            default: Fallback::Inherit,
            strict: None,
        }
    }

    #[inline]
    pub const fn notation(mut self, notation: &'n str) -> Self {
        self.notation = Some(notation);
        self
    }

    #[inline]
    pub const fn fallback(mut self, default: Fallback<'d>) -> Self {
        self.default = default;
        self
    }

    #[inline]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }
}

// -----------------------------------------------------------------------------
// Accessor

/// A parsed notation bundled with a default value and options.
///
/// Two read regimes are provided:
///
/// - [`apply`](Self::apply): a miss returns the default, or `None` without one.
///   In strict mode a miss fails instead.
/// - [`get`](Self::get): a miss returns the default, and fails without one.
///   An explicit null default counts as a default.
///
/// Writes go through [`set`](Self::set), which never creates
/// intermediate values and has no non-strict mode.
///
/// An accessor built by [`new`](Self::new) has no notation. Every operation on
/// it fails with [`SyntaxErrorKind::Empty`] unless a notation is passed at call time.
///
/// # Examples
///
/// ```
/// use vc_access::Accessor;
/// use serde_json::json;
///
/// let root = json!({ "foo": { "bar": [{ "baz": "wee" }, { "baz": "woo" }] } });
///
/// let accessor = Accessor::parse("foo.bar[1].baz").unwrap();
/// let value = accessor.apply(&root).unwrap().unwrap();
/// assert_eq!(value.downcast_ref(), Some(&json!("woo")));
///
/// let accessor = Accessor::parse("a.b.c").unwrap().with_default("X");
/// let empty = json!({});
/// let value = accessor.apply(&empty).unwrap().unwrap();
/// assert_eq!(value.downcast_ref(), Some(&"X"));
/// ```
#[derive(Default)]
pub struct Accessor {
    notation: Option<Box<str>>,
    plan: Option<AccessorPlan>,
    default: DefaultValue,
    options: AccessOptions,
}

impl Accessor {
    /// Creates an accessor without notation.
    ///
    /// Reads and writes fail unless a notation is passed at call time.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `notation` with default options.
    #[inline]
    pub fn parse(notation: &str) -> Result<Self, NotationSyntaxError> {
        Self::parse_with_options(notation, AccessOptions::default())
    }

    /// Parses `notation` with the given options.
    pub fn parse_with_options(
        notation: &str,
        options: AccessOptions,
    ) -> Result<Self, NotationSyntaxError> {
        let plan = AccessorPlan::parse_with(notation, options.brackets)?;
        Ok(Self {
            notation: Some(Box::from(notation)),
            plan: Some(plan),
            default: DefaultValue::Missing,
            options,
        })
    }

    /// Sets the default returned for missing nodes.
    #[inline]
    pub fn with_default(mut self, value: impl Node) -> Self {
        self.default = DefaultValue::Value(Box::new(value));
        self
    }

    /// Sets an explicit null default.
    #[inline]
    pub fn with_null_default(mut self) -> Self {
        self.default = DefaultValue::Null;
        self
    }

    /// Sets strict mode for [`apply`](Self::apply).
    #[inline]
    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    /// Returns the source notation, if the accessor was parsed from one.
    #[inline]
    pub fn notation(&self) -> Option<&str> {
        self.notation.as_deref()
    }

    /// Returns the parsed plan, or `None` for an accessor without notation.
    #[inline]
    pub fn plan(&self) -> Option<&AccessorPlan> {
        self.plan.as_ref()
    }

    #[inline]
    pub fn default_value(&self) -> &DefaultValue {
        &self.default
    }

    #[inline]
    pub fn options(&self) -> AccessOptions {
        self.options
    }

    /// Returns the accessor's own plan, failing if it has none.
    fn own_plan(&self) -> Result<&AccessorPlan, NotationSyntaxError> {
        self.plan
            .as_ref()
            .ok_or_else(|| NotationSyntaxError::new("", 0, SyntaxErrorKind::Empty))
    }

    /// Parses a call time notation with this accessor's bracket mode.
    fn parse_override(&self, notation: &str) -> Result<AccessorPlan, NotationSyntaxError> {
        AccessorPlan::parse_with(notation, self.options.brackets)
    }

    /// Resolves `default` against the accessor default.
    ///
    /// The outer `None` means no default is available at all.
    fn fallback<'a>(&'a self, default: Fallback<'a>) -> Option<Option<&'a dyn Node>> {
        match default {
            Fallback::Value(value) => Some(Some(value)),
            Fallback::Null => Some(None),
            Fallback::Inherit => match &self.default {
                DefaultValue::Value(value) => Some(Some(&**value)),
                DefaultValue::Null => Some(None),
                DefaultValue::Missing => None,
            },
        }
    }

    /// Reads the node at the accessor's notation.
    ///
    /// See [`apply_with`](Self::apply_with).
    #[inline]
    pub fn apply<'a>(&'a self, root: &'a dyn Node) -> Result<Option<&'a dyn Node>, AccessError> {
        self.apply_with(root, ApplyArgs::new())
    }

    /// Reads the node at the notation, with call time overrides.
    ///
    /// On a miss:
    /// - strict mode fails with [`AccessError::PathNotFound`];
    /// - otherwise the call default, else the accessor default is returned;
    ///   without any default this is `Ok(None)`.
    ///
    /// A call time notation is parsed completely before the walk,
    /// so a syntax error is reported even if an earlier step would miss.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_access::{Accessor, ApplyArgs, Fallback};
    /// use std::collections::BTreeMap;
    ///
    /// let root = BTreeMap::from([(String::from("a"), 1_i32)]);
    /// let accessor = Accessor::new();
    ///
    /// let args = ApplyArgs::new().notation("a");
    /// let value = accessor.apply_with(&root, args).unwrap().unwrap();
    /// assert_eq!(value.downcast_ref::<i32>(), Some(&1));
    ///
    /// let args = ApplyArgs::new().notation("b").fallback(Fallback::Value(&0_i32));
    /// let value = accessor.apply_with(&root, args).unwrap().unwrap();
    /// assert_eq!(value.downcast_ref::<i32>(), Some(&0));
    ///
    /// let args = ApplyArgs::new().notation("b").strict(true);
    /// assert!(accessor.apply_with(&root, args).is_err());
    /// ```
    pub fn apply_with<'a>(
        &'a self,
        root: &'a dyn Node,
        args: ApplyArgs<'_, 'a>,
    ) -> Result<Option<&'a dyn Node>, AccessError> {
        let strict = args.strict.unwrap_or(self.options.strict);

        let res = match args.notation {
            Some(notation) => walk(self.parse_override(notation)?.steps(), root),
            None => self.own_plan()?.resolve(root),
        };

        match res {
            Ok(value) => Ok(Some(value)),
            Err(err) if strict => Err(err.into()),
            Err(err) => {
                let value = self.fallback(args.default).flatten();
                log::debug!("{err}; falling back to {value:?}");
                Ok(value)
            }
        }
    }

    /// Reads the node at the accessor's notation, failing without a default.
    ///
    /// See [`get_with`](Self::get_with).
    #[inline]
    pub fn get<'a>(&'a self, root: &'a dyn Node) -> Result<Option<&'a dyn Node>, AccessError> {
        self.get_with(root, None, Fallback::Inherit)
    }

    /// Reads the node at `notation`, or at the accessor's notation if `None`.
    ///
    /// On a miss, the call default, else the accessor default is returned.
    /// If neither exists this fails with [`AccessError::PathNotFound`].
    /// The strict option is not consulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_access::{Accessor, AccessError, Fallback};
    /// use std::collections::BTreeMap;
    ///
    /// let root = BTreeMap::<String, i32>::new();
    /// let accessor = Accessor::parse("a.b.c").unwrap();
    ///
    /// let err = accessor.get(&root).unwrap_err();
    /// assert!(matches!(err, AccessError::PathNotFound(_)));
    ///
    /// assert!(accessor.get_with(&root, None, Fallback::Null).unwrap().is_none());
    /// ```
    pub fn get_with<'a>(
        &'a self,
        root: &'a dyn Node,
        notation: Option<&str>,
        default: Fallback<'a>,
    ) -> Result<Option<&'a dyn Node>, AccessError> {
        let res = match notation {
            Some(notation) => walk(self.parse_override(notation)?.steps(), root),
            None => self.own_plan()?.resolve(root),
        };

        match res {
            Ok(value) => Ok(Some(value)),
            Err(err) => match self.fallback(default) {
                Some(value) => {
                    log::debug!("{err}; falling back to {value:?}");
                    Ok(value)
                }
                None => Err(err.into()),
            },
        }
    }

    /// Returns a typed reference to the node at the accessor's notation.
    ///
    /// Defaults are not consulted: a miss always fails.
    #[inline]
    pub fn get_as<'r, T: Node>(&self, root: &'r dyn Node) -> Result<&'r T, AccessError> {
        self.own_plan()?.resolve_as(root)
    }

    /// Returns a mutable reference to the node at the accessor's notation.
    ///
    /// Defaults are not consulted: a miss always fails.
    #[inline]
    pub fn get_mut<'r>(&self, root: &'r mut dyn Node) -> Result<&'r mut dyn Node, AccessError> {
        Ok(walk_mut(self.own_plan()?.steps(), root)?)
    }

    /// Returns a mutable typed reference to the node at the accessor's notation.
    #[inline]
    pub fn get_mut_as<'r, T: Node>(
        &self,
        root: &'r mut dyn Node,
    ) -> Result<&'r mut T, AccessError> {
        downcast_mut(walk_mut(self.own_plan()?.steps(), root)?)
    }

    /// Assigns `value` at the accessor's notation.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_access::{Accessor, AccessError};
    /// use std::collections::BTreeMap;
    ///
    /// let mut root = BTreeMap::from([(String::from("a"), vec![0_u8; 2])]);
    ///
    /// Accessor::parse("a[1]").unwrap().set(&mut root, 7_u8).unwrap();
    /// assert_eq!(root["a"], [0, 7]);
    ///
    /// // Intermediate nodes are never created.
    /// let err = Accessor::parse("b[0]").unwrap().set(&mut root, 7_u8).unwrap_err();
    /// assert!(matches!(err, AccessError::PathNotFound(_)));
    /// ```
    #[inline]
    pub fn set(&self, root: &mut dyn Node, value: impl Node) -> Result<(), AccessError> {
        self.own_plan()?.assign(root, Box::new(value))
    }

    /// Assigns `value` at `notation` instead of the accessor's notation.
    pub fn set_with(
        &self,
        root: &mut dyn Node,
        notation: &str,
        value: impl Node,
    ) -> Result<(), AccessError> {
        let plan = self.parse_override(notation)?;
        assign_through(plan.steps(), root, Box::new(value))
    }

    /// Assigns an already boxed `value` at the accessor's notation.
    #[inline]
    pub fn set_boxed(&self, root: &mut dyn Node, value: Box<dyn Node>) -> Result<(), AccessError> {
        self.own_plan()?.assign(root, value)
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.notation, &self.plan) {
            (Some(notation), _) => f.write_str(notation),
            (None, Some(plan)) => fmt::Display::fmt(plan, f),
            (None, None) => Ok(()),
        }
    }
}

impl fmt::Debug for Accessor {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Accessor('{self}')")
    }
}

impl From<AccessorPlan> for Accessor {
    #[inline]
    fn from(plan: AccessorPlan) -> Self {
        Self {
            plan: Some(plan),
            ..Self::default()
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use vc_value::DynamicObject;

    use super::{Accessor, ApplyArgs, DefaultValue, Fallback};
    use crate::{AccessError, AccessOptions, AccessorPlan, BracketMode, SyntaxErrorKind};

    type Tree = BTreeMap<String, BTreeMap<String, Vec<i32>>>;

    fn tree() -> Tree {
        let inner = BTreeMap::from([(String::from("b"), Vec::from([1, 2, 3]))]);
        BTreeMap::from([(String::from("a"), inner)])
    }

    #[test]
    fn default_fallback() {
        let empty = BTreeMap::<String, i32>::new();

        let accessor = Accessor::parse("a.b.c").unwrap();
        assert!(accessor.apply(&empty).unwrap().is_none());

        let args = ApplyArgs::new().fallback(Fallback::Value(&"X"));
        let value = accessor.apply_with(&empty, args).unwrap().unwrap();
        assert_eq!(value.downcast_ref::<&str>(), Some(&"X"));

        let accessor = Accessor::parse("a.b.c").unwrap().with_default(String::from("Y"));
        let value = accessor.apply(&empty).unwrap().unwrap();
        assert_eq!(value.downcast_ref::<String>().unwrap(), "Y");

        // A call default takes precedence over the instance default.
        let args = ApplyArgs::new().fallback(Fallback::Null);
        assert!(accessor.apply_with(&empty, args).unwrap().is_none());
    }

    #[test]
    fn strict_failure() {
        let empty = BTreeMap::<String, i32>::new();

        let accessor = Accessor::parse("a.b.c").unwrap().strict(true).with_default(1_i32);
        let AccessError::PathNotFound(err) = accessor.apply(&empty).unwrap_err() else {
            panic!("expected PathNotFound");
        };
        assert_eq!(err.depth, 0);
        assert_eq!(err.to_string().split(' ').nth(1), Some("`a`"));

        let accessor = Accessor::parse("a.b.c").unwrap();
        let args = ApplyArgs::new().strict(true);
        assert!(accessor.apply_with(&empty, args).is_err());

        let accessor = Accessor::parse_with_options("a", AccessOptions::default().with_strict(true))
            .unwrap();
        let args = ApplyArgs::new().strict(false);
        assert!(accessor.apply_with(&empty, args).unwrap().is_none());
    }

    #[test]
    fn get_requires_a_default() {
        let root = tree();

        let accessor = Accessor::parse("a.x").unwrap();
        assert!(matches!(
            accessor.get(&root).unwrap_err(),
            AccessError::PathNotFound(_)
        ));

        let accessor = accessor.with_null_default();
        assert!(accessor.get(&root).unwrap().is_none());

        let accessor = Accessor::parse("a.x").unwrap();
        let value = accessor.get_with(&root, None, Fallback::Value(&0_i32)).unwrap().unwrap();
        assert_eq!(value.downcast_ref::<i32>(), Some(&0));

        // Strictness plays no part in `get`.
        let accessor = Accessor::parse("a.x").unwrap().strict(true).with_default(5_i32);
        let value = accessor.get(&root).unwrap().unwrap();
        assert_eq!(value.downcast_ref::<i32>(), Some(&5));
    }

    #[test]
    fn call_time_notation() {
        let mut root = tree();
        let accessor = Accessor::parse("a.b[0]").unwrap();

        let value = accessor.get_with(&root, Some("a.b[2]"), Fallback::Inherit).unwrap();
        assert_eq!(value.unwrap().downcast_ref::<i32>(), Some(&3));

        let args = ApplyArgs::new().notation("a[");
        let err = accessor.apply_with(&root, args).unwrap_err();
        assert!(matches!(err, AccessError::Syntax(_)));

        accessor.set_with(&mut root, "a.b[1]", 20_i32).unwrap();
        assert_eq!(root["a"]["b"], [1, 20, 3]);
        assert_eq!(accessor.notation(), Some("a.b[0]"));
    }

    #[test]
    fn round_trip_and_idempotence() {
        let mut root = tree();

        for notation in ["a.b[1]", "a['b'][2]", "['a'].b[0]"] {
            let accessor = Accessor::parse(notation).unwrap();
            accessor.set(&mut root, 42_i32).unwrap();

            let first = accessor.get(&root).unwrap().unwrap();
            let second = accessor.get(&root).unwrap().unwrap();
            assert!(core::ptr::addr_eq(first, second));
            assert_eq!(*accessor.get_as::<i32>(&root).unwrap(), 42);
        }

        let accessor = Accessor::parse("a['c']").unwrap();
        accessor.set(&mut root, Vec::<i32>::new()).unwrap();
        assert!(accessor.get_as::<Vec<i32>>(&root).unwrap().is_empty());
    }

    #[test]
    fn write_requires_existing_prefix() {
        let mut empty = BTreeMap::<String, BTreeMap<String, i32>>::new();

        let err = Accessor::parse("a.b").unwrap().set(&mut empty, 1_i32).unwrap_err();
        assert!(matches!(err, AccessError::PathNotFound(_)));
        assert!(empty.is_empty());

        let err = Accessor::parse("..").unwrap().set(&mut empty, 1_i32).unwrap_err();
        assert_eq!(err, AccessError::EmptyPath);
    }

    #[test]
    fn accessor_without_notation() {
        let mut root = tree();
        let accessor = Accessor::new().with_default(0_i32);

        let is_empty = |err: AccessError| {
            matches!(err, AccessError::Syntax(err) if err.kind == SyntaxErrorKind::Empty)
        };

        assert!(is_empty(accessor.apply(&root).unwrap_err()));
        assert!(is_empty(accessor.get(&root).unwrap_err()));
        assert!(is_empty(accessor.get_as::<Tree>(&root).unwrap_err()));
        assert!(is_empty(accessor.get_mut(&mut root).unwrap_err()));
        assert!(is_empty(accessor.set(&mut root, 1_i32).unwrap_err()));
        assert!(accessor.plan().is_none());

        let value = accessor.get_with(&root, Some("a.b[0]"), Fallback::Inherit).unwrap();
        assert_eq!(value.unwrap().downcast_ref::<i32>(), Some(&1));
        accessor.set_with(&mut root, "a.b[0]", 9_i32).unwrap();
        assert_eq!(root["a"]["b"], [9, 2, 3]);
    }

    #[test]
    fn fixed_sequences_never_grow() {
        let mut root = [0_u8; 2];
        let err = Accessor::parse("[2]").unwrap().set(&mut root, 1_u8).unwrap_err();
        assert!(matches!(err, AccessError::Assign(_)));
    }

    #[test]
    fn named_field_precedence() {
        let object = DynamicObject::new()
            .with_attr("x", "attribute")
            .with_item("x", "item");

        let accessor = Accessor::parse("x").unwrap();
        let value = accessor.get(&object).unwrap().unwrap();
        assert_eq!(value.downcast_ref::<&str>(), Some(&"attribute"));

        let accessor = Accessor::parse("['x']").unwrap();
        let value = accessor.get(&object).unwrap().unwrap();
        assert_eq!(value.downcast_ref::<&str>(), Some(&"item"));
    }

    #[test]
    fn mutable_reads() {
        let mut root = tree();
        let accessor = Accessor::parse("a.b[0]").unwrap();

        *accessor.get_mut_as::<i32>(&mut root).unwrap() = -1;
        let value = accessor.get_mut(&mut root).unwrap();
        assert_eq!(value.downcast_ref::<i32>(), Some(&-1));

        let err = accessor.get_mut_as::<u8>(&mut root).unwrap_err();
        assert!(matches!(err, AccessError::InvalidDowncast { .. }));
    }

    #[test]
    fn bracket_modes() {
        let err = Accessor::parse("a[b]").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::InvalidBracket);

        let options = AccessOptions::default().with_brackets(BracketMode::Loose);
        let accessor = Accessor::parse_with_options("a[b]", options).unwrap();
        assert_eq!(accessor.plan().map(AccessorPlan::len), Some(2));

        let root = BTreeMap::from([(
            String::from("a"),
            BTreeMap::from([(String::from("[b]"), 1_i32)]),
        )]);
        let value = accessor.apply(&root).unwrap().unwrap();
        assert_eq!(value.downcast_ref::<i32>(), Some(&1));
    }

    #[test]
    fn display_and_debug() {
        let accessor = Accessor::parse("foo.bar[1]").unwrap();
        assert_eq!(accessor.to_string(), "foo.bar[1]");
        assert_eq!(format!("{accessor:?}"), "Accessor('foo.bar[1]')");

        let accessor = Accessor::from(AccessorPlan::parse(".foo..bar").unwrap());
        assert_eq!(accessor.to_string(), "foo.bar");
        assert!(accessor.notation().is_none());

        assert_eq!(format!("{:?}", Accessor::new()), "Accessor('')");

        let default = DefaultValue::Value(Box::new(3_u8));
        assert_eq!(format!("{default:?}"), "Value(3)");
    }

    #[test]
    fn accessors_are_shareable() {
        let root = tree();
        let accessor = Accessor::parse("a.b[2]").unwrap();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let value = accessor.get_as::<i32>(&root).unwrap();
                    assert_eq!(*value, 3);
                });
            }
        });
    }

    #[cfg(feature = "json")]
    #[test]
    fn mixed_json_resolution() {
        use serde_json::{Value, json};
        use vc_value::ops::AssignError;

        let mut root = json!({
            "foo": { "bar": [{ "baz": "wee" }, { "baz": "woo" }] }
        });

        let get = |root: &Value, notation: &str| -> Option<Value> {
            let accessor = Accessor::parse(notation).unwrap();
            accessor
                .apply(root)
                .unwrap()
                .and_then(|value| value.downcast_ref::<Value>().cloned())
        };

        assert_eq!(get(&root, "foo.bar[1].baz"), Some(json!("woo")));
        assert_eq!(get(&root, "foo.bar[0].baz"), Some(json!("wee")));
        assert_eq!(get(&root, r#"["foo"]['bar'][0]"#), Some(json!({ "baz": "wee" })));
        assert_eq!(get(&root, "foo.bar[2].baz"), None);
        assert_eq!(get(&root, "foo.bar.baz"), None);
        assert_eq!(get(&root, "foo.bar[0].baz[0]"), None);

        // Named writes never fall back to item assignment.
        let err = Accessor::parse("foo.bar[1].baz")
            .unwrap()
            .set(&mut root, json!("wow"))
            .unwrap_err();
        assert!(matches!(err, AccessError::Assign(AssignError::NoFields { .. })));

        let accessor = Accessor::parse("foo.bar[1]['baz']").unwrap();
        accessor.set(&mut root, json!("wow")).unwrap();
        assert_eq!(get(&root, "foo.bar[1].baz"), Some(json!("wow")));

        let err = accessor.set(&mut root, String::from("plain")).unwrap_err();
        assert!(matches!(err, AccessError::Assign(AssignError::MismatchedTypes { .. })));
    }
}
