//! Paths emitted by the generated code.
//!
//! Kept in one place so that moving items inside `vc_value`
//! only requires changes here.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `vc_value` crate.
///
/// 1. For crates that depend on `vc_value`, `::vc_value` is returned.
/// 2. For crates that depend on `vc_notation`, `::vc_notation::value` is returned.
/// 3. For other situations, `::vc_value` is returned, but this may be incorrect.
///
/// This reads the builder's `Cargo.toml`, so the path is passed around
/// rather than looked up again.
pub(crate) fn vc_value() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_value"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn node_(vc_value_path: &syn::Path) -> TokenStream {
    quote! { #vc_value_path::Node }
}

#[inline(always)]
pub(crate) fn node_kind_(vc_value_path: &syn::Path) -> TokenStream {
    quote! { #vc_value_path::NodeKind }
}

#[inline(always)]
pub(crate) fn fields_(vc_value_path: &syn::Path) -> TokenStream {
    quote! { #vc_value_path::ops::Fields }
}

#[inline(always)]
pub(crate) fn keyed_(vc_value_path: &syn::Path) -> TokenStream {
    quote! { #vc_value_path::ops::Keyed }
}

#[inline(always)]
pub(crate) fn box_(vc_value_path: &syn::Path) -> TokenStream {
    quote! { #vc_value_path::__macro_exports::Box }
}

#[inline(always)]
pub(crate) fn vec_(vc_value_path: &syn::Path) -> TokenStream {
    quote! { #vc_value_path::__macro_exports::Vec }
}
