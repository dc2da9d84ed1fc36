//! Proc-macros for flowkit.
//!
//! - `#[derive(WithBuilders)]`: generates `with_<field>(...)` builder methods for
//!   configuration records (`SizerConfig`, `ChildConfig`, `TextStyle`, ...).
//!
//! ## Field attributes
//! - `#[with_builders(skip)]`: no builder is generated for the field.
//! - `#[with_builders(into)]`: the builder takes `impl Into<FieldType>`.
//!
//! ### Example
//! ```ignore
//! use flowkit_macros::WithBuilders;
//!
//! #[derive(Clone, Debug, Default, WithBuilders)]
//! pub struct ChildConfig {
//!     #[with_builders(into)]
//!     pub padding: Spacing,
//!     pub align: Align,
//!     #[with_builders(skip)]
//!     pub generation: u32,
//! }
//!
//! let config = ChildConfig::default()
//!     .with_padding(Spacing::all(4.0))
//!     .with_align(Align::Center);
//! ```

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Fields};

/// Per-field options parsed from `#[with_builders(...)]`.
#[derive(Default)]
struct FieldOptions {
    skip: bool,
    into: bool,
}

/// Derive that generates `with_<field>` builder methods for structs with named fields.
///
/// Generated methods take `self` by value and return `Self`.
#[proc_macro_derive(WithBuilders, attributes(with_builders))]
pub fn derive_with_builders(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let ident = &input.ident;
    let generics = &input.generics;

    let Data::Struct(data_struct) = &input.data else {
        return syn::Error::new(
            input.span(),
            "#[derive(WithBuilders)] only supports structs",
        )
        .to_compile_error()
        .into();
    };

    let Fields::Named(fields_named) = &data_struct.fields else {
        return syn::Error::new(
            data_struct.fields.span(),
            "#[derive(WithBuilders)] only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut methods = Vec::with_capacity(fields_named.named.len());
    for field in fields_named.named.iter() {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };

        let options = match field_options(field) {
            Ok(options) => options,
            Err(err) => return err.to_compile_error().into(),
        };
        if options.skip {
            continue;
        }

        let field_ty = &field.ty;
        let method_ident = format_ident!("with_{}", field_ident);

        if options.into {
            methods.push(quote! {
                #[inline]
                pub fn #method_ident(mut self, value: impl ::core::convert::Into<#field_ty>) -> Self {
                    self.#field_ident = value.into();
                    self
                }
            });
        } else {
            methods.push(quote! {
                #[inline]
                pub fn #method_ident(mut self, value: #field_ty) -> Self {
                    self.#field_ident = value;
                    self
                }
            });
        }
    }

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    }
    .into()
}

fn field_options(field: &syn::Field) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("with_builders") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else if meta.path.is_ident("into") {
                options.into = true;
                Ok(())
            } else {
                Err(meta.error("expected `skip` or `into`"))
            }
        })?;
    }

    if options.skip && options.into {
        return Err(syn::Error::new(
            field.span(),
            "`skip` and `into` cannot be combined",
        ));
    }

    Ok(options)
}
