use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Expr, Fields, LitStr, Type, parse_macro_input};

/// Derives `shadow_engine::traits::Schema` and `Default` for a struct of
/// `f32` parameters.
///
/// Field attributes:
/// - `#[label("Blur Radius")]` text shown next to the slider, defaults to the field name
/// - `#[meta(FloatRange { .. })]` range metadata, also supplies the default value
/// - `#[tooltip("..")]` hover text
#[proc_macro_derive(ParamSchema, attributes(label, meta, tooltip))]
pub fn derive_param_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_schema_impl(input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error().into(),
    }
}

struct FieldAttrs {
    label: Option<LitStr>,
    meta: Option<Expr>,
    tooltip: Option<LitStr>,
}

fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs {
        label: None,
        meta: None,
        tooltip: None,
    };

    for attr in &field.attrs {
        if attr.path().is_ident("label") {
            out.label = Some(attr.parse_args()?);
        } else if attr.path().is_ident("meta") {
            out.meta = Some(attr.parse_args()?);
        } else if attr.path().is_ident("tooltip") {
            out.tooltip = Some(attr.parse_args()?);
        }
    }

    Ok(out)
}

fn is_f32(ty: &Type) -> bool {
    matches!(ty, Type::Path(p) if p.qself.is_none() && p.path.is_ident("f32"))
}

fn derive_schema_impl(input: DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    const NAMED_ONLY: &str = "ParamSchema can only be derived for structs with named fields";

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unnamed(fields) => return Err(syn::Error::new_spanned(fields, NAMED_ONLY)),
            Fields::Unit => return Err(syn::Error::new_spanned(name, NAMED_ONLY)),
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "ParamSchema can only be derived for structs",
            ));
        }
    };

    let mut field_names = Vec::new();
    let mut slot_defs = Vec::new();
    let mut defaults = Vec::new();

    for field in fields {
        if !is_f32(&field.ty) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "ParamSchema fields must be f32",
            ));
        }

        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let name_str = ident.to_string();
        let attrs = parse_field_attrs(field)?;

        let label = attrs
            .label
            .map(|l| l.value())
            .unwrap_or_else(|| name_str.clone());
        let tooltip = attrs.tooltip.map(|t| t.value()).unwrap_or_default();
        let meta = match attrs.meta {
            Some(expr) => quote! { ::shadow_engine::ExtendedMetadata::from(#expr) },
            None => quote! { ::shadow_engine::ExtendedMetadata::None },
        };

        slot_defs.push(quote! {
            {
                let mut slot = ::shadow_engine::SlotDef::with_metadata(#name_str, #meta);
                slot.set_label(#label);
                slot.set_tooltip(#tooltip);
                slot
            }
        });
        defaults.push(quote! { #meta.default_value() });
        field_names.push(ident);
    }

    let indices: Vec<usize> = (0..field_names.len()).collect();

    let schema_impl = quote! {
        impl ::shadow_engine::traits::Schema for #name {
            fn fields() -> ::std::vec::Vec<::shadow_engine::SlotDef> {
                ::std::vec![
                    #( #slot_defs, )*
                ]
            }

            fn get(&self, index: usize) -> ::std::option::Option<f32> {
                match index {
                    #( #indices => ::std::option::Option::Some(self.#field_names), )*
                    _ => ::std::option::Option::None,
                }
            }

            fn get_mut(&mut self, index: usize) -> ::std::option::Option<&mut f32> {
                match index {
                    #( #indices => ::std::option::Option::Some(&mut self.#field_names), )*
                    _ => ::std::option::Option::None,
                }
            }
        }
    };

    let default_impl = quote! {
        impl ::std::default::Default for #name {
            fn default() -> Self {
                Self {
                    #( #field_names: #defaults, )*
                }
            }
        }
    };

    Ok(quote! {
        #schema_impl
        #default_impl
    }
    .into())
}
