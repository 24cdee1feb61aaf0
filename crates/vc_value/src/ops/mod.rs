//! Provide the capability interfaces a [`Node`] can expose.
//!
//! - [`Fields`]: named-field access, e.g. `foo.bar`.
//! - [`Keyed`]: key or index access, e.g. `foo[0]` or `foo['bar']`.
//!
//! [`Node`]: crate::Node

// -----------------------------------------------------------------------------
// Modules

mod assign_error;
mod fields;
mod keyed;

// -----------------------------------------------------------------------------
// Exports

pub use assign_error::AssignError;
pub use fields::Fields;
pub use keyed::Keyed;

pub(crate) use keyed::{name_of, replace_in_sequence, take_entry};
