use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use crate::ops::{AssignError, Keyed, replace_in_sequence};
use crate::{Key, Node, NodeKind};

// -----------------------------------------------------------------------------
// Sequences

macro_rules! impl_sequence_node {
    ($kind:ident, [$($generics:tt)*] $ty:ty) => {
        impl<$($generics)*> Node for $ty {
            #[inline]
            fn node_kind(&self) -> NodeKind {
                NodeKind::$kind
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
                f.debug_list()
                    .entries(self.iter().map(|item| item as &dyn Node))
                    .finish()
            }
        }

        impl<$($generics)*> Keyed for $ty {
            #[inline]
            fn get_key(&self, key: &Key<'_>) -> Option<&dyn Node> {
                self.get(key.as_index()?).map(|item| item as &dyn Node)
            }

            #[inline]
            fn get_key_mut(&mut self, key: &Key<'_>) -> Option<&mut dyn Node> {
                self.get_mut(key.as_index()?).map(|item| item as &mut dyn Node)
            }

            #[inline]
            fn key_len(&self) -> usize {
                self.len()
            }

            fn set_key(&mut self, key: &Key<'_>, value: Box<dyn Node>) -> Result<(), AssignError> {
                let len = self.len();
                let type_name = self.type_name();
                let slot = key
                    .as_index()
                    .and_then(|index| self.get_mut(index))
                    .map(|item| item as &mut dyn Node);
                replace_in_sequence(slot, key, len, type_name, value)
            }
        }
    };
}

impl_sequence_node!(List, [T: Node] Vec<T>);
impl_sequence_node!(List, [T: Node] VecDeque<T>);
impl_sequence_node!(Array, [T: Node, const N: usize] [T; N]);

// -----------------------------------------------------------------------------
// Tests
