use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::{Node, NodeKind};

// -----------------------------------------------------------------------------
// Leaf values

macro_rules! impl_opaque_node {
    ($($ty:ty),* $(,)?) => {$(
        impl Node for $ty {
            #[inline]
            fn node_kind(&self) -> NodeKind {
                NodeKind::Opaque
            }

            fn assign(&mut self, value: Box<dyn Node>) -> Result<(), Box<dyn Node>> {
                *self = value.take::<Self>()?;
                Ok(())
            }

            #[inline]
            fn node_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    )*};
}

impl_opaque_node!(
    bool, char, (),
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    String, &'static str,
);

impl<T: Node> Node for Option<T> {
    #[inline]
    fn node_kind(&self) -> NodeKind {
        NodeKind::Opaque
    }

    fn assign(&mut self, value: Box<dyn Node>) -> Result<(), Box<dyn Node>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    fn node_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => f.debug_tuple("Some").field(&value.as_node()).finish(),
            None => f.write_str("None"),
        }
    }
}
