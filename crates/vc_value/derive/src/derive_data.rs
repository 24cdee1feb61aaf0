use syn::{Data, DeriveInput, Fields, Generics, Ident, LitStr, Member, spanned::Spanned};

use crate::NODE_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Attributes

/// Container level `#[node(...)]` options.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[node(keyed)]`
    pub keyed: bool,
}

impl TypeAttributes {
    fn parse_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(NODE_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("keyed") {
                    out.keyed = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported container attribute, expected `keyed`"))
                }
            })?;
        }

        Ok(out)
    }
}

/// Field level `#[node(...)]` options.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[node(skip)]`
    pub skip: bool,
    /// `#[node(rename = "...")]`
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    fn parse_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(NODE_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    out.skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let name: LitStr = meta.value()?.parse()?;
                    if name.value().is_empty() {
                        return Err(syn::Error::new(name.span(), "field name cannot be empty"));
                    }
                    if out.rename.replace(name).is_some() {
                        return Err(meta.error("duplicate `rename` attribute"));
                    }
                    Ok(())
                } else {
                    Err(meta.error("unsupported field attribute, expected `skip` or `rename`"))
                }
            })?;
        }

        if out.skip && out.rename.is_some() {
            let span = out.rename.as_ref().map_or_else(proc_macro2::Span::call_site, LitStr::span);
            return Err(syn::Error::new(span, "`skip` and `rename` cannot be combined"));
        }

        Ok(out)
    }
}

// -----------------------------------------------------------------------------
// Parsed struct

/// A visible field of the derived struct.
pub(crate) struct NodeField {
    /// The Rust member, used to access the field.
    pub member: Member,
    /// The name the field is exposed under.
    pub name: String,
}

/// Everything the code generator needs to know about the input.
pub(crate) struct NodeStruct<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub attrs: TypeAttributes,
    pub fields: Vec<NodeField>,
    pub vc_value_path: syn::Path,
}

impl<'a> NodeStruct<'a> {
    pub(crate) fn parse(ast: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new(
                ast.ident.span(),
                "`Node` can only be derived for structs with named fields",
            ));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new(
                data.fields.span(),
                "`Node` can only be derived for structs with named fields",
            ));
        };

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let mut fields: Vec<NodeField> = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if field_attrs.skip {
                continue;
            }
            let Some(ident) = field.ident.clone() else {
                continue;
            };
            let name = match &field_attrs.rename {
                Some(lit) => lit.value(),
                None => ident.to_string().trim_start_matches("r#").to_owned(),
            };
            if fields.iter().any(|other| other.name == name) {
                return Err(syn::Error::new(
                    field.span(),
                    format!("duplicate field name `{name}`"),
                ));
            }
            fields.push(NodeField {
                member: Member::Named(ident),
                name,
            });
        }

        Ok(Self {
            ident: &ast.ident,
            generics: &ast.generics,
            attrs,
            fields,
            vc_value_path: crate::path::vc_value(),
        })
    }
}
