//! Attribute parsing utilities

use syn::{Attribute, Expr, ExprLit, Field, Lit};

/// Extract table name from struct attributes
///
/// `#[table_name = "..."]` must be a string literal and appear at most once.
pub fn extract_table_name(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    extract_single_string(attrs, "table_name")
}

/// Extract the raw `#[db = "..."]` annotation of a field
pub fn extract_db_tag(field: &Field) -> syn::Result<Option<String>> {
    extract_single_string(&field.attrs, "db")
}

fn extract_single_string(attrs: &[Attribute], name: &str) -> syn::Result<Option<String>> {
    let mut found: Option<String> = None;

    for attr in attrs {
        if !attr.path().is_ident(name) {
            continue;
        }
        let meta = attr.meta.require_name_value()?;
        let value = match &meta.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(s), ..
            }) => s.value(),
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    format!("expected string literal: #[{name} = \"...\"]"),
                ))
            }
        };
        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                format!("duplicate #[{name}] attribute"),
            ));
        }
        found = Some(value);
    }

    Ok(found)
}
