use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt;

use serde_json::Value;

use crate::ops::{AssignError, Keyed, name_of, take_entry};
use crate::{Key, Node, NodeKind};

// -----------------------------------------------------------------------------
// serde_json::Value

impl Node for Value {
    fn node_kind(&self) -> NodeKind {
        match self {
            Value::Object(_) => NodeKind::Map,
            Value::Array(_) => NodeKind::List,
            _ => NodeKind::Opaque,
        }
    }

    #[inline]
    fn as_keyed(&self) -> Option<&dyn Keyed> {
        match self {
            Value::Object(_) | Value::Array(_) => Some(self),
            _ => None,
        }
    }

    #[inline]
    fn as_keyed_mut(&mut self) -> Option<&mut dyn Keyed> {
        match self {
            Value::Object(_) | Value::Array(_) => Some(self),
            _ => None,
        }
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

impl Keyed for Value {
    fn get_key(&self, key: &Key<'_>) -> Option<&dyn Node> {
        let value = match (self, key) {
            (Value::Object(map), Key::Name(name)) => map.get(&**name),
            (Value::Array(list), Key::Index(index)) => list.get(*index),
            _ => None,
        };
        value.map(|value| value as &dyn Node)
    }

    fn get_key_mut(&mut self, key: &Key<'_>) -> Option<&mut dyn Node> {
        let value = match (self, key) {
            (Value::Object(map), Key::Name(name)) => map.get_mut(&**name),
            (Value::Array(list), Key::Index(index)) => list.get_mut(*index),
            _ => None,
        };
        value.map(|value| value as &mut dyn Node)
    }

    fn key_len(&self) -> usize {
        match self {
            Value::Object(map) => map.len(),
            Value::Array(list) => list.len(),
            _ => 0,
        }
    }

    fn set_key(&mut self, key: &Key<'_>, value: Box<dyn Node>) -> Result<(), AssignError> {
        let type_name = self.type_name();
        let value = take_entry::<Value>(value)?;

        match self {
            Value::Object(map) => {
                let name = name_of(key, type_name)?;
                map.insert(String::from(name), value);
                Ok(())
            }
            Value::Array(list) => match key {
                Key::Index(index) if *index < list.len() => {
                    list[*index] = value;
                    Ok(())
                }
                Key::Index(index) => Err(AssignError::IndexOutOfBounds {
                    index: *index,
                    len: list.len(),
                    type_name,
                }),
                Key::Name(_) => Err(AssignError::InvalidKey {
                    key: key.to_string().into_boxed_str(),
                    type_name,
                }),
            },
            _ => Err(AssignError::NotKeyed { type_name }),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::ops::{AssignError, Keyed};
    use crate::{Key, Node, NodeKind};

    #[test]
    fn objects_and_arrays_are_keyed() {
        let value = json!({ "list": [1, 2], "flag": true });

        assert_eq!(value.node_kind(), NodeKind::Map);
        let list = value.get_key(&Key::from("list")).unwrap();
        assert_eq!(list.node_kind(), NodeKind::List);

        let second = list.as_keyed().unwrap().get_key(&Key::Index(1)).unwrap();
        assert_eq!(second.downcast_ref::<Value>(), Some(&json!(2)));

        let flag = value.get_key(&Key::from("flag")).unwrap();
        assert!(flag.as_keyed().is_none());
    }

    #[test]
    fn assignment() {
        let mut value = json!({ "list": [1, 2] });
        value
            .set_key(&Key::from("extra"), json!("x").into_boxed_node())
            .unwrap();
        assert_eq!(value["extra"], json!("x"));

        let list = value.get_key_mut(&Key::from("list")).unwrap();
        let list = list.as_keyed_mut().unwrap();
        list.set_key(&Key::Index(0), json!(10).into_boxed_node())
            .unwrap();
        let err = list
            .set_key(&Key::Index(5), json!(10).into_boxed_node())
            .unwrap_err();
        assert!(matches!(err, AssignError::IndexOutOfBounds { index: 5, len: 2, .. }));
        assert_eq!(value["list"], json!([10, 2]));

        let err = value
            .set_key(&Key::from("list"), 3_i32.into_boxed_node())
            .unwrap_err();
        assert!(matches!(err, AssignError::MismatchedTypes { .. }));
    }
}
