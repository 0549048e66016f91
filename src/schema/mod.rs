//! Model description, introspection and DDL rendering.
//!
//! - [`tag`]: field annotation parsing
//! - [`types`]: Rust type → canonical column type
//! - [`introspect()`]: `ModelDef` → `TableDescriptor`
//! - [`ddl`]: statement text
//! - [`validate_models`]: structural pre-flight

pub mod ddl;
pub mod descriptor;
pub mod introspect;
pub mod model;
pub mod naming;
pub mod tag;
pub mod types;
pub mod validate;

pub use descriptor::{ColumnDescriptor, ForeignKeyDescriptor, IndexDescriptor, TableDescriptor};
pub use introspect::{default_sql, introspect, resolve_table_name};
pub use model::{FieldDef, ModelDef, SchemaModel};
pub use naming::{snake_case, table_name_for};
pub use tag::{parse_tag, Reference, ReferentialAction, TagDescriptor};
pub use types::{map_native_type, ColumnType};
pub use validate::validate_models;
