//! Table, column, foreign key and index descriptors.
//!
//! Produced fresh by [`introspect`](super::introspect) on every call. Pure data: every
//! dialect decision happens when a [`Dialect`](crate::Dialect) renders them.

use super::tag::ReferentialAction;
use super::types::ColumnType;
use serde::Serialize;

/// One column of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub column_type: ColumnType,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub not_null: bool,
    pub unique: bool,
    /// Default as a ready-to-emit SQL literal (`'draft'`, `CURRENT_TIMESTAMP`, `10`)
    pub default: Option<String>,
}

impl ColumnDescriptor {
    /// Plain nullable column of the given type
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            primary_key: false,
            auto_increment: false,
            not_null: false,
            unique: false,
            default: None,
        }
    }
}

/// A foreign key owned by a column of the introspected table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKeyDescriptor {
    pub column: String,
    pub ref_table: String,
    pub ref_column: String,
    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
}

/// An index on the introspected table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexDescriptor {
    pub table: String,
    pub name: String,
    pub columns: Vec<String>,
    pub unique: bool,
}

/// Everything introspection learns about one model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDescriptor {
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
    pub foreign_keys: Vec<ForeignKeyDescriptor>,
    pub indexes: Vec<IndexDescriptor>,
}
