use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt;

use crate::ops::{AssignError, Keyed, name_of, take_entry};
use crate::{Key, Node, NodeKind};

// -----------------------------------------------------------------------------
// String-keyed maps

macro_rules! impl_map_node {
    ([$($generics:tt)*] $ty:ty) => {
        impl<$($generics)*> Node for $ty {
            #[inline]
            fn node_kind(&self) -> NodeKind {
                NodeKind::Map
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
                f.debug_map()
                    .entries(self.iter().map(|(key, value)| (key, value as &dyn Node)))
                    .finish()
            }
        }

        impl<$($generics)*> Keyed for $ty {
            #[inline]
            fn get_key(&self, key: &Key<'_>) -> Option<&dyn Node> {
                self.get(key.as_name()?).map(|value| value as &dyn Node)
            }

            #[inline]
            fn get_key_mut(&mut self, key: &Key<'_>) -> Option<&mut dyn Node> {
                self.get_mut(key.as_name()?).map(|value| value as &mut dyn Node)
            }

            #[inline]
            fn key_len(&self) -> usize {
                self.len()
            }

            fn set_key(&mut self, key: &Key<'_>, value: Box<dyn Node>) -> Result<(), AssignError> {
                let name = name_of(key, self.type_name())?;
                let value = take_entry::<V>(value)?;
                self.insert(String::from(name), value);
                Ok(())
            }
        }
    };
}

impl_map_node!([V: Node] BTreeMap<String, V>);

impl_map_node!(
    [V: Node, S: core::hash::BuildHasher + Send + Sync + 'static]
    hashbrown::HashMap<String, V, S>
);

#[cfg(feature = "std")]
impl_map_node!(
    [V: Node, S: core::hash::BuildHasher + Send + Sync + 'static]
    std::collections::HashMap<String, V, S>
);

// -----------------------------------------------------------------------------
// Tests
