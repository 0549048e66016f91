//! # Tablesmith
//!
//! Declare persistent types once, provision their schema on SQLite, PostgreSQL or MySQL.
//!
//! Models are described by a [`ModelDef`] (usually generated by `#[derive(SchemaModel)]`),
//! introspected into pure descriptors, rendered by a [`Dialect`] and applied through a
//! [`SchemaExecutor`] by the [`SchemaManager`].
//!
//! ```no_run
//! use tablesmith::{Dialect, DryRunExecutor, SchemaManager, SchemaModel};
//!
//! #[derive(SchemaModel)]
//! struct User {
//!     #[db = "id,primary_key,auto"]
//!     id: i64,
//!     #[db = "email,notnull,unique,index"]
//!     email: String,
//! }
//!
//! # fn main() -> Result<(), tablesmith::SchemaError> {
//! let manager = SchemaManager::new(DryRunExecutor::new(), Dialect::Postgres);
//! manager.create_schema(&[User::model_def()])?;
//! for statement in manager.executor().statements() {
//!     println!("{statement}");
//! }
//! # Ok(())
//! # }
//! ```

// Lets `#[derive(SchemaModel)]` expand to `::tablesmith::...` paths inside this crate's own tests.
extern crate self as tablesmith;

pub mod config;
pub mod connection;
pub mod dialect;
pub mod error;
pub mod executor;
pub mod manager;
pub mod schema;
#[cfg(feature = "tracing")]
pub mod tracing_helpers;

pub use dialect::{DdlDialect, Dialect, MySql, Postgres, Sqlite};
pub use error::{SchemaError, ValidationError, ValidationIssue};
pub use executor::{DryRunExecutor, ExecError, Scalar, SchemaExecutor};
#[cfg(feature = "postgres")]
pub use executor::MayPostgresExecutor;
pub use manager::SchemaManager;
pub use schema::{
    introspect, map_native_type, parse_tag, snake_case, table_name_for, validate_models,
    ColumnDescriptor, ColumnType, FieldDef, ForeignKeyDescriptor, IndexDescriptor, ModelDef,
    Reference, ReferentialAction, SchemaModel, TableDescriptor, TagDescriptor,
};

pub use tablesmith_derive::SchemaModel;
