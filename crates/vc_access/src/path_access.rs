//! Provide one-off path access without keeping a plan.

use alloc::boxed::Box;

use fastvec::FastVec;
use vc_value::Node;

use crate::plan::{assign_through, downcast, walk, walk_mut};
use crate::{AccessError, BracketMode, Notation, OffsetStep};

// -----------------------------------------------------------------------------
// Trait for once multi-step accessing

/// Provide a single full path access method.
///
/// The notation is tokenized on each call into a small stack buffer,
/// so borrowed segments are never copied into `String`s. The whole
/// notation is tokenized before the walk begins.
///
/// If a notation needs to be reused, consider [`AccessorPlan`],
/// which only needs to be parsed once.
///
/// # Examples
///
/// ```
/// use vc_access::NodePathAccess;
/// use vc_value::derive::Node;
///
/// #[derive(Node)]
/// struct Foo {
///     id: u32,
///     data: Vec<Vec<u8>>,
/// }
///
/// let mut foo = Foo { id: 1, data: vec![vec![1, 2], vec![3, 4]] };
///
/// let val = foo.access_as::<u8>("data[1][0]").unwrap();
/// assert_eq!(*val, 3);
///
/// foo.assign_at("id", 7_u32).unwrap();
/// assert_eq!(foo.id, 7);
/// ```
///
/// [`AccessorPlan`]: crate::AccessorPlan
pub trait NodePathAccess {
    /// Returns a reference to the value specified by `notation`.
    fn access<'a, 'b>(&'a self, notation: impl Notation<'b>) -> Result<&'a dyn Node, AccessError>;

    /// Returns a mutable reference to the value specified by `notation`.
    fn access_mut<'a, 'b>(
        &'a mut self,
        notation: impl Notation<'b>,
    ) -> Result<&'a mut dyn Node, AccessError>;

    /// Returns a typed reference to the value specified by `notation`.
    fn access_as<'a, 'b, T: Node>(
        &'a self,
        notation: impl Notation<'b>,
    ) -> Result<&'a T, AccessError>;

    /// Assigns `value` at `notation`.
    ///
    /// All steps but the last must already resolve.
    fn assign_at<'b>(
        &mut self,
        notation: impl Notation<'b>,
        value: impl Node,
    ) -> Result<(), AccessError>;
}

#[inline]
fn tokenize<'b>(notation: impl Notation<'b>) -> Result<FastVec<OffsetStep<'b>, 8>, AccessError> {
    Ok(notation
        .to_steps(BracketMode::Strict)
        .collect::<Result<FastVec<_, 8>, _>>()?)
}

impl NodePathAccess for dyn Node {
    #[inline(never)]
    fn access<'a, 'b>(&'a self, notation: impl Notation<'b>) -> Result<&'a dyn Node, AccessError> {
        let steps = tokenize(notation)?;
        Ok(walk(steps.as_slice(), self)?)
    }

    #[inline(never)]
    fn access_mut<'a, 'b>(
        &'a mut self,
        notation: impl Notation<'b>,
    ) -> Result<&'a mut dyn Node, AccessError> {
        let steps = tokenize(notation)?;
        Ok(walk_mut(steps.as_slice(), self)?)
    }

    #[inline]
    fn access_as<'a, 'b, T: Node>(
        &'a self,
        notation: impl Notation<'b>,
    ) -> Result<&'a T, AccessError> {
        // `access` is compiled once per notation type, independent of T.
        downcast(NodePathAccess::access(self, notation)?)
    }

    #[inline(never)]
    fn assign_at<'b>(
        &mut self,
        notation: impl Notation<'b>,
        value: impl Node,
    ) -> Result<(), AccessError> {
        let steps = tokenize(notation)?;
        assign_through(steps.as_slice(), self, Box::new(value))
    }
}

impl<N: Node> NodePathAccess for N {
    #[inline(always)]
    fn access<'a, 'b>(&'a self, notation: impl Notation<'b>) -> Result<&'a dyn Node, AccessError> {
        <dyn Node as NodePathAccess>::access(self, notation)
    }

    #[inline(always)]
    fn access_mut<'a, 'b>(
        &'a mut self,
        notation: impl Notation<'b>,
    ) -> Result<&'a mut dyn Node, AccessError> {
        <dyn Node as NodePathAccess>::access_mut(self, notation)
    }

    #[inline(always)]
    fn access_as<'a, 'b, T: Node>(
        &'a self,
        notation: impl Notation<'b>,
    ) -> Result<&'a T, AccessError> {
        <dyn Node as NodePathAccess>::access_as::<T>(self, notation)
    }

    #[inline(always)]
    fn assign_at<'b>(
        &mut self,
        notation: impl Notation<'b>,
        value: impl Node,
    ) -> Result<(), AccessError> {
        <dyn Node as NodePathAccess>::assign_at(self, notation, value)
    }
}

// -----------------------------------------------------------------------------
// Free functions

/// Reads the node at `notation`, or `Ok(None)` if some step is missing.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// let root = BTreeMap::from([(String::from("a"), vec![1_i32])]);
///
/// let value = vc_access::get_path(&root, "a[0]").unwrap().unwrap();
/// assert_eq!(value.downcast_ref::<i32>(), Some(&1));
///
/// assert!(vc_access::get_path(&root, "a[1]").unwrap().is_none());
/// assert!(vc_access::get_path(&root, "a[").is_err());
/// ```
pub fn get_path<'r, 'b>(
    root: &'r dyn Node,
    notation: impl Notation<'b>,
) -> Result<Option<&'r dyn Node>, AccessError> {
    match root.access(notation) {
        Ok(value) => Ok(Some(value)),
        Err(AccessError::PathNotFound(err)) => {
            log::debug!("{err}; falling back to None");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Reads the node at `notation`, or `default` if some step is missing.
pub fn get_path_or<'r, 'b>(
    root: &'r dyn Node,
    notation: impl Notation<'b>,
    default: &'r dyn Node,
) -> Result<&'r dyn Node, AccessError> {
    Ok(get_path(root, notation)?.unwrap_or(default))
}

/// Assigns `value` at `notation`. Intermediate nodes must already exist.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// let mut root = BTreeMap::<String, BTreeMap<String, i32>>::new();
/// assert!(vc_access::set_path(&mut root, "a.b", 1_i32).is_err());
///
/// vc_access::set_path(&mut root, "['a']", BTreeMap::<String, i32>::new()).unwrap();
/// vc_access::set_path(&mut root, "a['b']", 1_i32).unwrap();
/// assert_eq!(root["a"]["b"], 1);
/// ```
#[inline]
pub fn set_path<'b>(
    root: &mut dyn Node,
    notation: impl Notation<'b>,
    value: impl Node,
) -> Result<(), AccessError> {
    root.assign_at(notation, value)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use vc_value::derive::Node;
    use vc_value::DynamicObject;

    use super::{NodePathAccess, get_path, get_path_or, set_path};
    use crate::AccessError;

    #[derive(Node)]
    struct Inventory {
        slots: Vec<Option<String>>,
        #[node(rename = "gold")]
        coins: u32,
    }

    #[derive(Node)]
    struct Player {
        name: String,
        inventory: Inventory,
        tags: BTreeMap<String, bool>,
    }

    fn player() -> Player {
        Player {
            name: String::from("ada"),
            inventory: Inventory {
                slots: vec![Some(String::from("sword")), None],
                coins: 12,
            },
            tags: BTreeMap::from([(String::from("admin"), true)]),
        }
    }

    #[test]
    fn access_derived_structs() {
        let player = player();

        let slot = player
            .access_as::<Option<String>>("inventory.slots[0]")
            .unwrap();
        assert_eq!(slot.as_deref(), Some("sword"));
        assert_eq!(*player.access_as::<u32>("inventory.gold").unwrap(), 12);
        assert!(*player.access_as::<bool>("tags.admin").unwrap());
        assert!(*player.access_as::<bool>("tags['admin']").unwrap());

        let err = player.access("inventory.coins").unwrap_err();
        assert!(matches!(err, AccessError::PathNotFound(_)));

        let err = player.access_as::<u64>("inventory.gold").unwrap_err();
        assert!(matches!(err, AccessError::InvalidDowncast { found: "u32", .. }));
    }

    #[test]
    fn keyed_steps_skip_fields() {
        let player = player();
        let err = player.access("['name']").unwrap_err();
        assert!(matches!(err, AccessError::PathNotFound(_)));
    }

    #[test]
    fn assign_derived_structs() {
        let mut player = player();

        player.assign_at("inventory.slots[1]", Some(String::from("shield"))).unwrap();
        player.assign_at("tags['muted']", false).unwrap();
        player.assign_at("name", String::from("grace")).unwrap();

        assert_eq!(player.inventory.slots[1].as_deref(), Some("shield"));
        assert_eq!(player.tags.get("muted"), Some(&false));
        assert_eq!(player.name, "grace");

        let err = player.assign_at("inventory.slots[2]", None::<String>).unwrap_err();
        assert!(matches!(err, AccessError::Assign(_)));

        let err = player.assign_at("tags.muted", true).unwrap_err();
        assert!(matches!(err, AccessError::Assign(_)));

        let err = player.assign_at("name", 3_i32).unwrap_err();
        assert!(matches!(err, AccessError::Assign(_)));
        assert_eq!(player.name, "grace");

        *player.access_mut("inventory.gold").unwrap().downcast_mut::<u32>().unwrap() += 1;
        assert_eq!(player.inventory.coins, 13);
    }

    #[test]
    fn syntax_errors_win_over_misses() {
        let player = player();
        let err = player.access("missing.x[").unwrap_err();
        assert!(matches!(err, AccessError::Syntax(_)));
    }

    #[test]
    fn free_functions() {
        let mut object = DynamicObject::new().with_attr("x", 1_i32);

        let value = get_path(&object, "x").unwrap().unwrap();
        assert_eq!(value.downcast_ref::<i32>(), Some(&1));
        assert!(get_path(&object, "y.z").unwrap().is_none());

        let value = get_path_or(&object, "y", &"fallback").unwrap();
        assert_eq!(value.downcast_ref::<&str>(), Some(&"fallback"));

        set_path(&mut object, "y", 2_u8).unwrap();
        let err = set_path(&mut object, ".", 2_u8).unwrap_err();
        assert_eq!(err, AccessError::EmptyPath);
        assert_eq!(
            get_path(&object, "y").unwrap().unwrap().downcast_ref::<u8>(),
            Some(&2)
        );
    }

    #[test]
    fn dyn_receivers() {
        let player = player();
        let node: &dyn vc_value::Node = &player;
        assert_eq!(node.access_as::<String>("name").unwrap(), "ada");
        assert_eq!(node.type_name(), core::any::type_name::<Player>());
    }
}
