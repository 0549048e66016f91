//! `SchemaExecutor` Module
//!
//! Provides the `SchemaExecutor` trait, the only way schema provisioning talks to a database.
//!
//! DDL statements are issued as plain SQL text without parameters. Catalog probes (does a
//! foreign key constraint exist?) are parameterized and return a single scalar value.

#[cfg(feature = "postgres")]
use may_postgres::{types::ToSql, Client, Error as PostgresError};
use std::sync::{Mutex, PoisonError};

#[cfg(feature = "tracing")]
use crate::tracing_helpers;

/// `SchemaExecutor` error type
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// `PostgreSQL` error from `may_postgres`
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] PostgresError),
    /// Query execution error
    #[error("Query error: {0}")]
    QueryError(String),
    /// Scalar result could not be interpreted
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Other execution errors
    #[error("Execution error: {0}")]
    Other(String),
}

/// Single value returned by a scalar query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
}

impl Scalar {
    /// Interpret the value as a boolean (`SELECT EXISTS (...)`)
    pub fn as_bool(&self) -> Result<bool, ExecError> {
        match self {
            Scalar::Bool(b) => Ok(*b),
            Scalar::Int(n) => Ok(*n != 0),
            Scalar::Text(s) => match s.as_str() {
                "t" | "true" | "1" => Ok(true),
                "f" | "false" | "0" => Ok(false),
                other => Err(ExecError::ParseError(format!(
                    "expected boolean scalar, got '{other}'"
                ))),
            },
            Scalar::Null => Err(ExecError::ParseError(
                "expected boolean scalar, got NULL".to_string(),
            )),
        }
    }

    /// Interpret the value as an integer (`SELECT COUNT(*) ...`)
    pub fn as_i64(&self) -> Result<i64, ExecError> {
        match self {
            Scalar::Int(n) => Ok(*n),
            Scalar::Bool(b) => Ok(i64::from(*b)),
            Scalar::Text(s) => s.trim().parse().map_err(|_| {
                ExecError::ParseError(format!("expected integer scalar, got '{s}'"))
            }),
            Scalar::Null => Err(ExecError::ParseError(
                "expected integer scalar, got NULL".to_string(),
            )),
        }
    }
}

/// Trait for issuing schema statements against a database
///
/// Implementations decide how statements reach the store (direct client, pooled connection,
/// recorder, ...). Calls are synchronous and may block on I/O; timeouts and cancellation are
/// the implementation's business.
///
/// # Examples
///
/// ```
/// use tablesmith::{DryRunExecutor, SchemaExecutor};
///
/// let executor = DryRunExecutor::new();
/// executor.execute("CREATE TABLE IF NOT EXISTS users (id INTEGER PRIMARY KEY);", &[])?;
/// assert_eq!(executor.statements().len(), 1);
/// # Ok::<(), tablesmith::ExecError>(())
/// ```
pub trait SchemaExecutor {
    /// Execute a SQL statement and return the number of rows affected
    ///
    /// # Errors
    ///
    /// Returns `ExecError` if the statement fails.
    fn execute(&self, sql: &str, params: &[&str]) -> Result<u64, ExecError>;

    /// Execute a query returning exactly one row with one column
    ///
    /// # Errors
    ///
    /// Returns `ExecError` if the query fails or does not yield a single scalar.
    fn query_scalar(&self, sql: &str, params: &[&str]) -> Result<Scalar, ExecError>;
}

impl<E: SchemaExecutor + ?Sized> SchemaExecutor for &E {
    fn execute(&self, sql: &str, params: &[&str]) -> Result<u64, ExecError> {
        (**self).execute(sql, params)
    }

    fn query_scalar(&self, sql: &str, params: &[&str]) -> Result<Scalar, ExecError> {
        (**self).query_scalar(sql, params)
    }
}

impl<E: SchemaExecutor + ?Sized> SchemaExecutor for Box<E> {
    fn execute(&self, sql: &str, params: &[&str]) -> Result<u64, ExecError> {
        (**self).execute(sql, params)
    }

    fn query_scalar(&self, sql: &str, params: &[&str]) -> Result<Scalar, ExecError> {
        (**self).query_scalar(sql, params)
    }
}

/// Executor that records statements instead of running them
///
/// Every catalog probe answers "not found" (`false` / `0`), so a dry run against a
/// dialect with deferred foreign keys shows every `ALTER TABLE` that a fresh database
/// would receive.
#[derive(Debug, Default)]
pub struct DryRunExecutor {
    statements: Mutex<Vec<String>>,
}

impl DryRunExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statements recorded so far, in issue order
    pub fn statements(&self) -> Vec<String> {
        self.statements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn into_statements(self) -> Vec<String> {
        self.statements
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl SchemaExecutor for DryRunExecutor {
    fn execute(&self, sql: &str, _params: &[&str]) -> Result<u64, ExecError> {
        self.statements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sql.to_string());
        Ok(0)
    }

    fn query_scalar(&self, _sql: &str, _params: &[&str]) -> Result<Scalar, ExecError> {
        Ok(Scalar::Bool(false))
    }
}

/// Implementation of `SchemaExecutor` for `may_postgres::Client`
#[cfg(feature = "postgres")]
pub struct MayPostgresExecutor {
    client: Client,
}

#[cfg(feature = "postgres")]
impl MayPostgresExecutor {
    /// Create a new executor from a `may_postgres::Client`
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Consume the executor and return the underlying client
    pub fn into_client(self) -> Client {
        self.client
    }
}

#[cfg(feature = "postgres")]
impl SchemaExecutor for MayPostgresExecutor {
    fn execute(&self, sql: &str, params: &[&str]) -> Result<u64, ExecError> {
        #[cfg(feature = "tracing")]
        let _span = tracing_helpers::ddl_statement_span(sql).entered();

        let bound: Vec<&dyn ToSql> = params.iter().map(|p| p as &dyn ToSql).collect();
        Ok(self.client.execute(sql, &bound)?)
    }

    fn query_scalar(&self, sql: &str, params: &[&str]) -> Result<Scalar, ExecError> {
        #[cfg(feature = "tracing")]
        let _span = tracing_helpers::ddl_statement_span(sql).entered();

        let bound: Vec<&dyn ToSql> = params.iter().map(|p| p as &dyn ToSql).collect();
        let row = self.client.query_one(sql, &bound)?;

        if let Ok(value) = row.try_get::<_, Option<bool>>(0) {
            return Ok(value.map_or(Scalar::Null, Scalar::Bool));
        }
        if let Ok(value) = row.try_get::<_, Option<i64>>(0) {
            return Ok(value.map_or(Scalar::Null, Scalar::Int));
        }
        if let Ok(value) = row.try_get::<_, Option<String>>(0) {
            return Ok(value.map_or(Scalar::Null, Scalar::Text));
        }
        Err(ExecError::ParseError(format!(
            "unsupported scalar column type returned by: {sql}"
        )))
    }
}
