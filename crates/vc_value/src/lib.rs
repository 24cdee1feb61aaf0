#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::vc_value` paths, which must also resolve inside
// this crate's own unit tests.
extern crate self as vc_value;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod dynamic;
mod impls;
mod key;
mod node;

pub mod hash;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use dynamic::DynamicObject;
pub use key::Key;
pub use node::{Node, NodeKind};
pub use vc_value_derive as derive;

#[doc(hidden)]
pub mod __macro_exports {
    pub use alloc::boxed::Box;
    pub use alloc::vec::Vec;
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::derive::Node;
    use crate::ops::{AssignError, Fields};
    use crate::{Key, Node as _, NodeKind};

    #[derive(Node)]
    struct Player {
        name: String,
        #[node(rename = "hp")]
        health: u32,
        #[node(skip)]
        #[allow(dead_code, reason = "hidden from traversal")]
        secret: u64,
        inventory: Vec<String>,
    }

    #[derive(Node)]
    struct Wrapper<T> {
        inner: T,
    }

    fn player() -> Player {
        Player {
            name: String::from("ada"),
            health: 10,
            secret: 7,
            inventory: Vec::from([String::from("sword")]),
        }
    }

    #[test]
    fn derived_fields() {
        let player = player();

        assert_eq!(player.node_kind(), NodeKind::Struct);
        assert_eq!(player.field_names(), ["name", "hp", "inventory"]);
        assert_eq!(
            player.field("hp").unwrap().downcast_ref::<u32>(),
            Some(&10)
        );
        assert!(player.field("health").is_none());
        assert!(player.field("secret").is_none());
        assert!(player.as_keyed().is_none());
    }

    #[test]
    fn derived_assignment() {
        let mut player = player();

        player.set_field("hp", 3_u32.into_boxed_node()).unwrap();
        assert_eq!(player.health, 3);

        let err = player
            .set_field("hp", 3_i32.into_boxed_node())
            .unwrap_err();
        assert!(matches!(err, AssignError::MismatchedTypes { .. }));

        let err = player
            .set_field("level", 3_u32.into_boxed_node())
            .unwrap_err();
        assert!(matches!(err, AssignError::UnknownField { .. }));

        let inventory = player.field_mut("inventory").unwrap();
        inventory
            .as_keyed_mut()
            .unwrap()
            .set_key(&Key::Index(0), String::from("shield").into_boxed_node())
            .unwrap();
        assert_eq!(player.inventory, ["shield"]);
    }

    #[test]
    fn derived_generics_and_debug() {
        let wrapper = Wrapper { inner: 5_u8 };
        assert_eq!(
            wrapper.field("inner").unwrap().downcast_ref::<u8>(),
            Some(&5)
        );

        let node: &dyn crate::Node = &player();
        assert_eq!(
            format!("{node:?}"),
            r#"Player { name: "ada", hp: 10, inventory: ["sword"] }"#
        );
    }
}
