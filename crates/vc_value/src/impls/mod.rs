//! Provide [`Node`](crate::Node) implementations for common types.
//!
//! - Leaf values (numbers, `bool`, `char`, strings, `()`, `Option<T>`) are opaque.
//! - `Vec<T>`, `VecDeque<T>` and `[T; N]` are keyed by index.
//! - `BTreeMap<String, V>` and `HashMap<String, V, S>` are keyed by name.
//! - `serde_json::Value` (feature `json`) is keyed like the map or array it holds.

mod map;
mod opaque;
mod sequence;

#[cfg(feature = "json")]
mod json;
