//! Model introspection
//!
//! Walks a [`ModelDef`] in declaration order and produces its [`TableDescriptor`].
//! Malformed annotations degrade gracefully; structural checks belong to
//! [`validate_models`](super::validate_models).

use super::descriptor::{ColumnDescriptor, ForeignKeyDescriptor, IndexDescriptor, TableDescriptor};
use super::model::ModelDef;
use super::naming::{snake_case, table_name_for};
use super::tag::parse_tag;
use super::types::{map_native_type, ColumnType};

/// Resolve the table name of a model: explicit name verbatim, otherwise derived
pub fn resolve_table_name(model: &ModelDef) -> String {
    match &model.table_name {
        Some(name) => name.clone(),
        None => table_name_for(&model.type_name),
    }
}

/// Build the table descriptor of a model
///
/// Fields without annotation and fields annotated `-` are left out.
pub fn introspect(model: &ModelDef) -> TableDescriptor {
    let table = resolve_table_name(model);

    let mut columns = Vec::new();
    let mut foreign_keys = Vec::new();
    let mut indexes = Vec::new();

    for field in &model.fields {
        let Some(tag) = field.tag.as_deref() else {
            continue;
        };
        let info = parse_tag(tag);
        if info.skip {
            continue;
        }

        let name = if info.name.is_empty() {
            snake_case(&field.name)
        } else {
            info.name
        };
        let column_type = map_native_type(&field.native_type);

        columns.push(ColumnDescriptor {
            name: name.clone(),
            column_type,
            primary_key: info.primary_key,
            auto_increment: info.auto_increment,
            not_null: info.not_null,
            unique: info.unique,
            default: info
                .default
                .as_deref()
                .and_then(|raw| default_sql(raw, column_type)),
        });

        if let Some(reference) = info.reference {
            foreign_keys.push(ForeignKeyDescriptor {
                column: name.clone(),
                ref_table: reference.table,
                ref_column: reference.column,
                on_delete: info.on_delete,
                on_update: info.on_update,
            });
        }

        if info.index {
            indexes.push(IndexDescriptor {
                table: table.clone(),
                name: info
                    .index_name
                    .unwrap_or_else(|| format!("{table}_{name}_idx")),
                columns: vec![name],
                unique: info.unique,
            });
        }
    }

    TableDescriptor {
        name: table,
        columns,
        foreign_keys,
        indexes,
    }
}

/// Render a raw `default:` value as a SQL literal
///
/// Only `string` and `time` values are quoted; numeric and boolean defaults pass
/// through unchanged.
pub fn default_sql(raw: &str, column_type: ColumnType) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    match column_type {
        ColumnType::Time if raw.eq_ignore_ascii_case("current_timestamp") => {
            Some("CURRENT_TIMESTAMP".to_string())
        }
        ColumnType::String | ColumnType::Time => Some(quote_literal(raw)),
        _ => Some(raw.to_string()),
    }
}

fn quote_literal(raw: &str) -> String {
    format!("'{}'", raw.replace('\'', "''"))
}
