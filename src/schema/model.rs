//! Model declarations
//!
//! A [`ModelDef`] is the ahead-of-time description of a record type: its identifier,
//! an optional explicit table name, and every field with its Rust type and annotation.
//! It is usually generated by `#[derive(SchemaModel)]`, but can be built by hand or
//! deserialized from a schema file.

use serde::{Deserialize, Serialize};

/// One field of a declared record type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field identifier as declared (`user_id`, `UserID`, ...)
    pub name: String,
    /// Rust type as source text (`i64`, `Option<String>`, `chrono::NaiveDateTime`)
    pub native_type: String,
    /// Raw annotation; `None` when the field carries none
    #[serde(default)]
    pub tag: Option<String>,
}

impl FieldDef {
    pub fn new(
        name: impl Into<String>,
        native_type: impl Into<String>,
        tag: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            native_type: native_type.into(),
            tag: tag.map(str::to_string),
        }
    }
}

/// Description of a declared record type
///
/// # Example
///
/// ```
/// use tablesmith::{introspect, ModelDef};
///
/// let post = ModelDef::new("Post")
///     .field("ID", "i64", "id,primary_key,auto")
///     .field("UserID", "i64", "user_id,notnull,references:users(id),index");
///
/// let table = introspect(&post);
/// assert_eq!(table.name, "posts");
/// assert_eq!(table.columns.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDef {
    /// Type identifier, used to derive the table name and in validation messages
    pub type_name: String,
    /// Explicit table name; overrides the derived one verbatim
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl ModelDef {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            table_name: None,
            fields: Vec::new(),
        }
    }

    /// Description of a type implementing [`SchemaModel`]
    pub fn of<M: SchemaModel + ?Sized>() -> Self {
        M::model_def()
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Append an annotated field
    pub fn field(
        mut self,
        name: impl Into<String>,
        native_type: impl Into<String>,
        tag: &str,
    ) -> Self {
        self.fields.push(FieldDef::new(name, native_type, Some(tag)));
        self
    }

    /// Append a field without annotation (excluded from the schema, rejected by validation)
    pub fn untagged_field(mut self, name: impl Into<String>, native_type: impl Into<String>) -> Self {
        self.fields.push(FieldDef::new(name, native_type, None));
        self
    }

    pub fn push_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }
}

/// Record types that can describe themselves for schema provisioning
///
/// Implement with `#[derive(SchemaModel)]`:
///
/// ```
/// use tablesmith::SchemaModel;
///
/// #[derive(SchemaModel)]
/// #[table_name = "people"]
/// struct Person {
///     #[db = "id,primary_key,auto"]
///     id: i32,
///     #[db = "name,notnull"]
///     name: String,
/// }
///
/// let def = Person::model_def();
/// assert_eq!(def.table_name.as_deref(), Some("people"));
/// assert_eq!(def.fields.len(), 2);
/// ```
pub trait SchemaModel {
    fn model_def() -> ModelDef;
}
