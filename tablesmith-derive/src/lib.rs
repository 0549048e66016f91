//! Procedural macros for Tablesmith
//!
//! This crate provides the `SchemaModel` derive macro, re-exported by `tablesmith`.

mod attributes;
mod macros;

use proc_macro::TokenStream;

/// Derive macro for `SchemaModel` - generates the model's `ModelDef`
///
/// Every named field becomes a `FieldDef` carrying its identifier, its type as source text
/// and the string of its `#[db = "..."]` attribute (if any). `#[table_name = "..."]` on the
/// struct overrides the derived table name.
///
/// # Example
///
/// ```ignore
/// use tablesmith::SchemaModel;
///
/// #[derive(SchemaModel)]
/// #[table_name = "blog_posts"]
/// pub struct Post {
///     #[db = "id,primary_key,auto"]
///     pub id: i64,
///     #[db = "user_id,notnull,references:users(id),on_delete:cascade,index"]
///     pub user_id: i64,
///     #[db = "-"]
///     pub cached_html: Option<String>,
/// }
/// ```
#[proc_macro_derive(SchemaModel, attributes(db, table_name))]
pub fn derive_schema_model(input: TokenStream) -> TokenStream {
    macros::derive_schema_model(input)
}
