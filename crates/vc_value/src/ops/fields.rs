use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Node;
use crate::ops::AssignError;

/// The named-field capability.
///
/// Implemented by structs (usually through [`#[derive(Node)]`](crate::derive::Node))
/// and by [`DynamicObject`](crate::DynamicObject).
///
/// # Examples
///
/// ```
/// use vc_value::{Node, derive::Node, ops::Fields};
///
/// #[derive(Node)]
/// struct Foo { a: i32, b: bool }
///
/// let mut foo = Foo { a: 1, b: true };
///
/// assert!(foo.field("a").is_some());
/// assert!(foo.field("c").is_none());
///
/// foo.set_field("a", 42_i32.into_boxed_node()).unwrap();
/// assert_eq!(foo.a, 42);
/// ```
pub trait Fields: Node {
    /// Returns the field named `name`, or `None` if there is no such field.
    fn field(&self, name: &str) -> Option<&dyn Node>;

    /// Returns the field named `name` mutably, or `None` if there is no such field.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Node>;

    /// Returns the names of all visible fields, in declaration order.
    fn field_names(&self) -> Vec<&str>;

    /// Assigns `value` to the field named `name`.
    ///
    /// The default implementation replaces an existing field through
    /// [`Node::assign`] and rejects unknown names.
    fn set_field(&mut self, name: &str, value: Box<dyn Node>) -> Result<(), AssignError> {
        let type_name = self.type_name();
        let Some(field) = self.field_mut(name) else {
            return Err(AssignError::UnknownField {
                field: Box::from(name),
                type_name,
            });
        };
        let expected = field.type_name();
        field
            .assign(value)
            .map_err(|rejected| AssignError::mismatched(expected, &*rejected))
    }
}
