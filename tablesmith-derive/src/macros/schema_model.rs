//! Derive macro for the `SchemaModel` trait
//!
//! Generates `SchemaModel::model_def()` returning the declaration-ordered `ModelDef` of a
//! struct with named fields.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

use crate::attributes;

/// Generate the `SchemaModel` implementation
pub fn derive_schema_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let type_name = struct_name.unraw().to_string();

    let fields = match &input.data {
        Data::Struct(syn::DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => &fields.named,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "SchemaModel can only be derived for structs with named fields",
            ));
        }
    };

    let table_name = attributes::extract_table_name(&input.attrs)?.map(|name| {
        quote! { def = def.with_table_name(#name); }
    });

    let mut pushes: Vec<TokenStream2> = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let name = ident.unraw().to_string();
        let native_type = type_text(&field.ty);
        let tag = match attributes::extract_db_tag(field)? {
            Some(tag) => quote! { ::core::option::Option::Some(#tag) },
            None => quote! { ::core::option::Option::None },
        };
        pushes.push(quote! {
            def.push_field(::tablesmith::FieldDef::new(#name, #native_type, #tag));
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::tablesmith::SchemaModel for #struct_name #ty_generics #where_clause {
            fn model_def() -> ::tablesmith::ModelDef {
                let mut def = ::tablesmith::ModelDef::new(#type_name);
                #table_name
                #(#pushes)*
                def
            }
        }
    })
}

/// Type as compact source text: `Option<chrono::NaiveDateTime>`
fn type_text(ty: &syn::Type) -> String {
    ty.to_token_stream()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}
