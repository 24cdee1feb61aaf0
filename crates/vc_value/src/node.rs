use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::ops::{Fields, Keyed};

// -----------------------------------------------------------------------------
// NodeKind

/// A pure enumeration of the shapes a [`Node`] can take.
///
/// Only used for diagnostics; traversal is driven by the
/// capabilities a node exposes, not by its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A struct with named fields, usually from `#[derive(Node)]`.
    Struct,
    /// A runtime object with named attributes and keyed items.
    Object,
    /// A string-keyed map.
    Map,
    /// A growable sequence.
    List,
    /// A fixed-size sequence.
    Array,
    /// A leaf value without any capability.
    Opaque,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NodeKind::Struct => "Struct",
            NodeKind::Object => "Object",
            NodeKind::Map => "Map",
            NodeKind::List => "List",
            NodeKind::Array => "Array",
            NodeKind::Opaque => "Opaque",
        })
    }
}

// -----------------------------------------------------------------------------
// Node

/// A value that can live inside a tree addressed by notation.
///
/// A node advertises what it can do through two narrow capabilities:
///
/// - [`Fields`]: named-field lookup and assignment, e.g. `foo.bar`.
/// - [`Keyed`]: key or index lookup and assignment, e.g. `foo[0]`, `foo['bar']`.
///
/// Both default to `None`. A node may expose either, both, or neither
/// (an opaque leaf).
///
/// # Implementation Guide
///
/// Prefer [`#[derive(Node)]`](crate::derive::Node) for structs with named fields.
/// Manual implementations usually look like:
///
/// ```rust
/// use vc_value::{Node, NodeKind};
///
/// struct Meters(f32);
///
/// impl Node for Meters {
///     fn node_kind(&self) -> NodeKind {
///         NodeKind::Opaque
///     }
///
///     fn assign(&mut self, value: Box<dyn Node>) -> Result<(), Box<dyn Node>> {
///         *self = value.take::<Self>()?;
///         Ok(())
///     }
///
///     fn node_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
///         write!(f, "{}m", self.0)
///     }
/// }
/// ```
pub trait Node: Send + Sync + Any {
    /// Returns the name of the concrete type, used in error messages.
    #[inline]
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Returns the [`NodeKind`] of this value.
    fn node_kind(&self) -> NodeKind;

    /// Returns the named-field capability, if any.
    #[inline]
    fn as_fields(&self) -> Option<&dyn Fields> {
        None
    }

    /// Returns the mutable named-field capability, if any.
    #[inline]
    fn as_fields_mut(&mut self) -> Option<&mut dyn Fields> {
        None
    }

    /// Returns the keyed capability, if any.
    #[inline]
    fn as_keyed(&self) -> Option<&dyn Keyed> {
        None
    }

    /// Returns the mutable keyed capability, if any.
    #[inline]
    fn as_keyed_mut(&mut self) -> Option<&mut dyn Keyed> {
        None
    }

    /// Replaces this value with `value`.
    ///
    /// This is type strict: the boxed value must have exactly the type of
    /// `self`, otherwise it is handed back unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_value::Node;
    /// let mut x = 1_i32;
    /// x.assign(Box::new(5_i32)).unwrap();
    /// assert_eq!(x, 5);
    ///
    /// assert!(x.assign(Box::new(5_u8)).is_err());
    /// ```
    fn assign(&mut self, value: Box<dyn Node>) -> Result<(), Box<dyn Node>>;

    /// Debug formatting, backs `impl Debug for dyn Node`.
    fn node_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(..)", self.type_name())
    }

    /// Casts this value to a `&dyn Node`.
    #[inline(always)]
    fn as_node(&self) -> &dyn Node
    where
        Self: Sized,
    {
        self
    }

    /// Casts this value to a `&mut dyn Node`.
    #[inline(always)]
    fn as_node_mut(&mut self) -> &mut dyn Node
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a `Box<dyn Node>`, ready to be assigned somewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_value::Node;
    ///
    /// let r = 32.into_boxed_node();
    /// // Equal to this:
    /// // let r = Box::new(32) as Box<dyn Node>;
    /// ```
    #[inline(always)]
    fn into_boxed_node(self) -> Box<dyn Node>
    where
        Self: Sized,
    {
        Box::new(self)
    }
}

// -----------------------------------------------------------------------------
// Cast helpers

impl dyn Node {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        <dyn Any>::is::<T>(self)
    }

    /// Returns the [`TypeId`] of the underlying value.
    ///
    /// `Box<dyn Node>::type_id` would return the id of the box itself.
    #[inline]
    pub fn ty_id(&self) -> TypeId {
        <dyn Any>::type_id(self)
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_value::Node;
    /// let x: Box<dyn Node> = 10.into_boxed_node();
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<u32>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    pub fn downcast<T: Any>(self: Box<dyn Node>) -> Result<Box<T>, Box<dyn Node>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type is already checked"),
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_value::Node;
    /// let x: Box<dyn Node> = String::from("hi").into_boxed_node();
    /// assert_eq!(x.take::<String>().unwrap(), "hi");
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Node>) -> Result<T, Box<dyn Node>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Node {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;

    use super::{Node, NodeKind};

    #[test]
    fn downcast_and_take() {
        let value: Box<dyn Node> = 7_u16.into_boxed_node();
        assert!(value.is::<u16>());
        assert!(!value.is::<u32>());
        assert_eq!(value.downcast_ref::<u16>(), Some(&7));

        let value = value.take::<String>().unwrap_err();
        assert_eq!(value.take::<u16>().unwrap(), 7);
    }

    #[test]
    fn assign_is_type_strict() {
        let mut text = String::from("old");
        text.assign(String::from("new").into_boxed_node()).unwrap();
        assert_eq!(text, "new");

        let rejected = text.assign(3_i64.into_boxed_node()).unwrap_err();
        assert_eq!(rejected.downcast_ref::<i64>(), Some(&3));
        assert_eq!(text, "new");
    }

    #[test]
    fn debug_and_kind() {
        let value: &dyn Node = &42_i32;
        assert_eq!(format!("{value:?}"), "42");
        assert_eq!(value.node_kind(), NodeKind::Opaque);
        assert_eq!(format!("{}", NodeKind::Map), "Map");
        assert!(value.as_fields().is_none());
        assert!(value.as_keyed().is_none());
    }
}
