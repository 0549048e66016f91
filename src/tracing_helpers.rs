//! `tracing` spans for schema provisioning (feature `tracing`).

use tracing::{debug_span, info_span, Span};

/// Span around one DDL statement or catalog query
pub fn ddl_statement_span(sql: &str) -> Span {
    debug_span!("tablesmith.statement", sql = %sql)
}

/// Span around a foreign key existence probe
pub fn fk_probe_span(table: &str, constraint: &str) -> Span {
    debug_span!("tablesmith.fk_probe", table = %table, constraint = %constraint)
}

/// Span around a whole `create_schema` call
pub fn create_schema_span(dialect: &str, models: usize) -> Span {
    info_span!("tablesmith.create_schema", dialect = %dialect, models = models)
}

/// Span around establishing a database connection
pub fn connect_span() -> Span {
    debug_span!("tablesmith.connect")
}
