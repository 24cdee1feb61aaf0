//! See following macros:
//!
//! - [`Node`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static NODE_ATTRIBUTE_NAME: &str = "node";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Node Derivation
///
/// `#[derive(Node)]` implements `Node` and `Fields` for structs with named fields.
///
/// Every generic type parameter receives a `Node` bound.
///
/// ## Container attributes
///
/// - `#[node(keyed)]`: also expose the `Keyed` capability.
///   The type must then implement `Keyed` by hand.
///
/// ## Field attributes
///
/// - `#[node(skip)]`: hide the field from traversal.
/// - `#[node(rename = "name")]`: expose the field under another name.
///
/// ## Example
///
/// ```rust, ignore
/// use vc_value::derive::Node;
///
/// #[derive(Node)]
/// struct Player {
///     name: String,
///     #[node(rename = "hp")]
///     health: u32,
///     #[node(skip)]
///     session: u64,
/// }
/// ```
#[proc_macro_derive(Node, attributes(node))]
pub fn derive_node(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::NodeStruct::parse(&ast) {
        Ok(info) => impls::impl_node(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
