use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::NodeStruct;

/// Implement `Node` and `Fields` for a struct with named fields.
pub(crate) fn impl_node(info: &NodeStruct) -> TokenStream {
    let node_tokens = impl_trait_node(info);
    let fields_tokens = impl_trait_fields(info);

    quote! {
        #node_tokens

        #fields_tokens
    }
}

/// Add a `Node` bound to every type parameter.
fn bounded_generics(info: &NodeStruct) -> syn::Generics {
    let node_ = crate::path::node_(&info.vc_value_path);
    let mut generics = info.generics.clone();

    let params: Vec<syn::Ident> = generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();

    if !params.is_empty() {
        let where_clause = generics.make_where_clause();
        for param in params {
            where_clause.predicates.push(syn::parse_quote!(#param: #node_));
        }
    }

    generics
}

fn impl_trait_node(info: &NodeStruct) -> TokenStream {
    let vc_value_path = &info.vc_value_path;
    let node_ = crate::path::node_(vc_value_path);
    let node_kind_ = crate::path::node_kind_(vc_value_path);
    let fields_ = crate::path::fields_(vc_value_path);
    let box_ = crate::path::box_(vc_value_path);

    let ident = info.ident;
    let generics = bounded_generics(info);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let keyed_tokens = if info.attrs.keyed {
        let keyed_ = crate::path::keyed_(vc_value_path);
        quote! {
            #[inline]
            fn as_keyed(&self) -> ::core::option::Option<&dyn #keyed_> {
                ::core::option::Option::Some(self)
            }

            #[inline]
            fn as_keyed_mut(&mut self) -> ::core::option::Option<&mut dyn #keyed_> {
                ::core::option::Option::Some(self)
            }
        }
    } else {
        TokenStream::new()
    };

    let struct_name = ident.to_string();
    let debug_fields = info.fields.iter().map(|field| {
        let member = &field.member;
        let name = &field.name;
        quote! { .field(#name, &(&self.#member as &dyn #node_)) }
    });

    quote! {
        impl #impl_generics #node_ for #ident #ty_generics #where_clause {
            #[inline]
            fn node_kind(&self) -> #node_kind_ {
                #node_kind_::Struct
            }

            #[inline]
            fn as_fields(&self) -> ::core::option::Option<&dyn #fields_> {
                ::core::option::Option::Some(self)
            }

            #[inline]
            fn as_fields_mut(&mut self) -> ::core::option::Option<&mut dyn #fields_> {
                ::core::option::Option::Some(self)
            }

            #keyed_tokens

            fn assign(
                &mut self,
                value: #box_<dyn #node_>,
            ) -> ::core::result::Result<(), #box_<dyn #node_>> {
                *self = <dyn #node_>::take::<Self>(value)?;
                ::core::result::Result::Ok(())
            }

            fn node_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(#struct_name)
                    #(#debug_fields)*
                    .finish()
            }
        }
    }
}

fn impl_trait_fields(info: &NodeStruct) -> TokenStream {
    let vc_value_path = &info.vc_value_path;
    let node_ = crate::path::node_(vc_value_path);
    let fields_ = crate::path::fields_(vc_value_path);
    let vec_ = crate::path::vec_(vc_value_path);

    let ident = info.ident;
    let generics = bounded_generics(info);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let names: Vec<&str> = info.fields.iter().map(|field| field.name.as_str()).collect();
    let members: Vec<&syn::Member> = info.fields.iter().map(|field| &field.member).collect();

    quote! {
        impl #impl_generics #fields_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn #node_> {
                match name {
                    #(#names => ::core::option::Option::Some(&self.#members as &dyn #node_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> ::core::option::Option<&mut dyn #node_> {
                match name {
                    #(#names => ::core::option::Option::Some(&mut self.#members as &mut dyn #node_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_names(&self) -> #vec_<&str> {
                #vec_::from([#(#names),*])
            }
        }
    }
}
