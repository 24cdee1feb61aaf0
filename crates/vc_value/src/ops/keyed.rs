use alloc::boxed::Box;
use alloc::string::ToString;

use crate::ops::AssignError;
use crate::{Key, Node};

/// The keyed capability: lookup and assignment by [`Key`].
///
/// Sequences answer [`Key::Index`], string-keyed maps answer [`Key::Name`].
/// A key of the wrong flavor is simply not found on lookup.
///
/// # Examples
///
/// ```
/// use vc_value::{Key, Node, ops::Keyed};
///
/// let mut list = vec![10_u8, 20, 30];
///
/// assert!(list.get_key(&Key::Index(1)).is_some());
/// assert!(list.get_key(&Key::Index(3)).is_none());
/// assert!(list.get_key(&Key::from("len")).is_none());
///
/// list.set_key(&Key::Index(0), 5_u8.into_boxed_node()).unwrap();
/// assert_eq!(list, [5, 20, 30]);
/// ```
pub trait Keyed: Node {
    /// Returns the entry at `key`, or `None` if it does not exist.
    fn get_key(&self, key: &Key<'_>) -> Option<&dyn Node>;

    /// Returns the entry at `key` mutably, or `None` if it does not exist.
    fn get_key_mut(&mut self, key: &Key<'_>) -> Option<&mut dyn Node>;

    /// Returns the number of entries.
    fn key_len(&self) -> usize;

    /// Assigns `value` at `key`.
    ///
    /// Maps insert or replace; sequences only replace existing positions.
    fn set_key(&mut self, key: &Key<'_>, value: Box<dyn Node>) -> Result<(), AssignError>;
}

// -----------------------------------------------------------------------------
// Helpers shared by container impls

/// Replaces the existing entry `slot` located with `key`, or reports why it can't.
pub(crate) fn replace_in_sequence(
    slot: Option<&mut dyn Node>,
    key: &Key<'_>,
    len: usize,
    type_name: &'static str,
    value: Box<dyn Node>,
) -> Result<(), AssignError> {
    let index = match key {
        Key::Index(index) => *index,
        Key::Name(_) => {
            return Err(AssignError::InvalidKey {
                key: key.to_string().into_boxed_str(),
                type_name,
            });
        }
    };
    let Some(slot) = slot else {
        return Err(AssignError::IndexOutOfBounds {
            index,
            len,
            type_name,
        });
    };
    let expected = slot.type_name();
    slot.assign(value)
        .map_err(|rejected| AssignError::mismatched(expected, &*rejected))
}

/// Takes `value` as a `V` for insertion into a map.
pub(crate) fn take_entry<V: Node>(value: Box<dyn Node>) -> Result<V, AssignError> {
    value
        .take::<V>()
        .map_err(|rejected| AssignError::mismatched(core::any::type_name::<V>(), &*rejected))
}

/// Rejects an `Index` key on a string-keyed map.
pub(crate) fn name_of<'k>(
    key: &'k Key<'_>,
    type_name: &'static str,
) -> Result<&'k str, AssignError> {
    match key {
        Key::Name(name) => Ok(&**name),
        Key::Index(_) => Err(AssignError::InvalidKey {
            key: key.to_string().into_boxed_str(),
            type_name,
        }),
    }
}
