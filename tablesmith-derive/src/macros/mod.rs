//! Macro implementations

pub mod schema_model;

pub use schema_model::derive_schema_model;
