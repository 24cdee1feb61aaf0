use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::hash::{HashMap, new_map};
use crate::ops::{AssignError, Fields, Keyed, name_of};
use crate::{Key, Node, NodeKind};

// -----------------------------------------------------------------------------
// Dynamic Object

/// A runtime object holding named attributes and keyed items side by side.
///
/// Attributes answer [`Fields`] and items answer [`Keyed`], so the same name
/// can exist in both. Both are dynamically typed: assigning replaces the
/// stored value whatever its type, and assigning an unknown attribute or
/// item creates it.
///
/// # Examples
///
/// ```
/// use vc_value::{DynamicObject, Key, Node, ops::{Fields, Keyed}};
///
/// let mut object = DynamicObject::new();
/// object.insert_attr("x", 1_i32);
/// object.insert_item("x", "item");
///
/// let attr = object.field("x").unwrap();
/// assert_eq!(attr.downcast_ref::<i32>(), Some(&1));
///
/// let item = object.get_key(&Key::from("x")).unwrap();
/// assert_eq!(item.downcast_ref::<&str>(), Some(&"item"));
/// ```
#[derive(Default)]
pub struct DynamicObject {
    attrs: Vec<Box<dyn Node>>,
    attr_names: Vec<Cow<'static, str>>,
    attr_indices: HashMap<Cow<'static, str>, usize>,
    items: BTreeMap<String, Box<dyn Node>>,
}

impl DynamicObject {
    /// Creates an empty `DynamicObject`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            attrs: Vec::new(),
            attr_names: Vec::new(),
            attr_indices: new_map(),
            items: BTreeMap::new(),
        }
    }

    /// Inserts or replaces an attribute.
    #[inline]
    pub fn insert_attr(&mut self, name: impl Into<Cow<'static, str>>, value: impl Node) {
        self.insert_attr_boxed(name, Box::new(value));
    }

    /// Inserts or replaces an attribute with a boxed value.
    pub fn insert_attr_boxed(&mut self, name: impl Into<Cow<'static, str>>, value: Box<dyn Node>) {
        let name = name.into();
        match self.attr_indices.get(&name) {
            Some(&index) => self.attrs[index] = value,
            None => {
                self.attr_indices.insert(name.clone(), self.attrs.len());
                self.attr_names.push(name);
                self.attrs.push(value);
            }
        }
    }

    /// Inserts or replaces an item.
    #[inline]
    pub fn insert_item(&mut self, key: impl Into<String>, value: impl Node) {
        self.items.insert(key.into(), Box::new(value));
    }

    /// Inserts or replaces an item with a boxed value.
    #[inline]
    pub fn insert_item_boxed(&mut self, key: impl Into<String>, value: Box<dyn Node>) {
        self.items.insert(key.into(), value);
    }

    /// Builder form of [`insert_attr`](Self::insert_attr).
    #[inline]
    pub fn with_attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Node) -> Self {
        self.insert_attr(name, value);
        self
    }

    /// Builder form of [`insert_item`](Self::insert_item).
    #[inline]
    pub fn with_item(mut self, key: impl Into<String>, value: impl Node) -> Self {
        self.insert_item(key, value);
        self
    }

    /// Returns the number of attributes.
    #[inline]
    pub fn attr_len(&self) -> usize {
        self.attrs.len()
    }
}

impl Node for DynamicObject {
    #[inline]
    fn node_kind(&self) -> NodeKind {
        NodeKind::Object
    }

    #[inline]
    fn as_fields(&self) -> Option<&dyn Fields> {
        Some(self)
    }

    #[inline]
    fn as_fields_mut(&mut self) -> Option<&mut dyn Fields> {
        Some(self)
    }

    #[inline]
    fn as_keyed(&self) -> Option<&dyn Keyed> {
        Some(self)
    }

    #[inline]
    fn as_keyed_mut(&mut self) -> Option<&mut dyn Keyed> {
        Some(self)
    }

    fn assign(&mut self, value: Box<dyn Node>) -> Result<(), Box<dyn Node>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    fn node_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("DynamicObject");
        for (name, value) in self.attr_names.iter().zip(&self.attrs) {
            out.field(name, value);
        }
        if !self.items.is_empty() {
            out.field("items", &self.items);
        }
        out.finish()
    }
}

impl Fields for DynamicObject {
    fn field(&self, name: &str) -> Option<&dyn Node> {
        self.attr_indices
            .get(name)
            .map(|&index| &*self.attrs[index])
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Node> {
        self.attr_indices
            .get(name)
            .map(|&index| &mut *self.attrs[index] as &mut dyn Node)
    }

    fn field_names(&self) -> Vec<&str> {
        self.attr_names.iter().map(|name| &**name).collect()
    }

    fn set_field(&mut self, name: &str, value: Box<dyn Node>) -> Result<(), AssignError> {
        self.insert_attr_boxed(Cow::Owned(String::from(name)), value);
        Ok(())
    }
}

impl Keyed for DynamicObject {
    fn get_key(&self, key: &Key<'_>) -> Option<&dyn Node> {
        self.items.get(key.as_name()?).map(|value| &**value)
    }

    fn get_key_mut(&mut self, key: &Key<'_>) -> Option<&mut dyn Node> {
        self.items.get_mut(key.as_name()?).map(|value| &mut **value as &mut dyn Node)
    }

    #[inline]
    fn key_len(&self) -> usize {
        self.items.len()
    }

    fn set_key(&mut self, key: &Key<'_>, value: Box<dyn Node>) -> Result<(), AssignError> {
        let name = name_of(key, self.type_name())?;
        self.items.insert(String::from(name), value);
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::DynamicObject;
    use crate::ops::{AssignError, Fields, Keyed};
    use crate::{Key, Node};

    #[test]
    fn attributes_and_items_are_separate() {
        let mut object = DynamicObject::new().with_attr("x", 1_u8).with_item("x", 2_u8);

        assert_eq!(object.field("x").unwrap().downcast_ref::<u8>(), Some(&1));
        assert_eq!(
            object.get_key(&Key::from("x")).unwrap().downcast_ref::<u8>(),
            Some(&2)
        );

        object.set_field("x", 10_u8.into_boxed_node()).unwrap();
        assert_eq!(object.field("x").unwrap().downcast_ref::<u8>(), Some(&10));
        assert_eq!(
            object.get_key(&Key::from("x")).unwrap().downcast_ref::<u8>(),
            Some(&2)
        );
    }

    #[test]
    fn unknown_names_are_created() {
        let mut object = DynamicObject::new();
        object.set_field("fresh", true.into_boxed_node()).unwrap();
        object
            .set_key(&Key::from("entry"), 'c'.into_boxed_node())
            .unwrap();

        assert_eq!(object.attr_len(), 1);
        assert_eq!(object.key_len(), 1);
        assert_eq!(object.field_names(), ["fresh"]);
    }

    #[test]
    fn index_keys_are_rejected() {
        let mut object = DynamicObject::new();
        assert!(object.get_key(&Key::Index(0)).is_none());

        let err = object
            .set_key(&Key::Index(0), 1_i32.into_boxed_node())
            .unwrap_err();
        assert!(matches!(err, AssignError::InvalidKey { .. }));
    }

    #[test]
    fn debug_output() {
        let object = DynamicObject::new().with_attr("a", 1_i32).with_item("k", 2_i32);
        let node: &dyn Node = &object;
        assert_eq!(format!("{node:?}"), r#"DynamicObject { a: 1, items: {"k": 2} }"#);
    }
}
