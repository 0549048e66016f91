//! SchemaManager - provisions tables, foreign keys and indexes for a set of models

use crate::dialect::{DdlDialect, Dialect};
use crate::error::SchemaError;
use crate::executor::SchemaExecutor;
use crate::schema::ddl::{
    add_foreign_key_statement, create_index_statement, create_table_statement, foreign_key_name,
};
use crate::schema::{introspect, validate_models, ForeignKeyDescriptor, IndexDescriptor, ModelDef};
use log::{debug, info};

#[cfg(feature = "tracing")]
use crate::tracing_helpers;

/// SchemaManager issues the DDL for a set of models through an executor
///
/// Statements are issued in three phases: every `CREATE TABLE`, then the deferred
/// foreign keys (each guarded by an existence probe), then every index. The first
/// failing statement or probe aborts the call; statements already issued are not
/// rolled back. Re-running the call is safe.
pub struct SchemaManager<E: SchemaExecutor> {
    executor: E,
    dialect: Dialect,
}

impl<E: SchemaExecutor> SchemaManager<E> {
    /// Create a new SchemaManager with the given executor and dialect
    pub fn new(executor: E, dialect: Dialect) -> Self {
        Self { executor, dialect }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn into_executor(self) -> E {
        self.executor
    }

    /// Create tables, foreign keys and indexes for the given models
    ///
    /// Models are processed in the given order. Dialects that cannot add foreign keys after
    /// creation get them inline in `CREATE TABLE`; the others receive one
    /// `ALTER TABLE ... ADD CONSTRAINT` per foreign key not already present.
    ///
    /// # Example
    /// ```
    /// use tablesmith::{Dialect, DryRunExecutor, ModelDef, SchemaManager};
    ///
    /// let user = ModelDef::new("User").field("ID", "i64", "id,primary_key,auto");
    /// let manager = SchemaManager::new(DryRunExecutor::new(), Dialect::Sqlite);
    /// manager.create_schema(&[user])?;
    /// assert_eq!(
    ///     manager.executor().statements(),
    ///     vec!["CREATE TABLE IF NOT EXISTS users (id INTEGER PRIMARY KEY);".to_string()]
    /// );
    /// # Ok::<(), tablesmith::SchemaError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Execution` for the first statement or probe that fails.
    pub fn create_schema(&self, models: &[ModelDef]) -> Result<(), SchemaError> {
        #[cfg(feature = "tracing")]
        let _span = tracing_helpers::create_schema_span(self.dialect.name(), models.len()).entered();

        let mut deferred: Vec<(String, ForeignKeyDescriptor)> = Vec::new();
        let mut indexes: Vec<IndexDescriptor> = Vec::new();

        for model in models {
            let table = introspect(model);
            let sql = create_table_statement(&self.dialect, &table);
            self.run(&sql)?;
            info!("Created table {} ({} columns)", table.name, table.columns.len());

            if self.dialect.supports_alter_fk() {
                deferred.extend(
                    table
                        .foreign_keys
                        .into_iter()
                        .map(|fk| (table.name.clone(), fk)),
                );
            }
            indexes.extend(table.indexes);
        }

        for (table, fk) in &deferred {
            self.add_foreign_key(table, fk)?;
        }

        self.create_indexes(&indexes)
    }

    /// Run the validation pre-flight, then [`create_schema`](Self::create_schema)
    ///
    /// Nothing is issued when validation fails.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Validation` listing every offending field, or
    /// `SchemaError::Execution` as `create_schema` does.
    pub fn validate_and_create(&self, models: &[ModelDef]) -> Result<(), SchemaError> {
        validate_models(models)?;
        self.create_schema(models)
    }

    /// Create the given indexes, one statement each
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Execution` for the first statement that fails.
    pub fn create_indexes(&self, indexes: &[IndexDescriptor]) -> Result<(), SchemaError> {
        for index in indexes {
            self.run(&create_index_statement(index))?;
        }
        if !indexes.is_empty() {
            info!("Created {} index(es)", indexes.len());
        }
        Ok(())
    }

    fn add_foreign_key(&self, table: &str, fk: &ForeignKeyDescriptor) -> Result<(), SchemaError> {
        let constraint = foreign_key_name(fk);

        let exists = {
            #[cfg(feature = "tracing")]
            let _span = tracing_helpers::fk_probe_span(table, &constraint).entered();

            debug!("Probing foreign key {constraint} on {table}");
            self.dialect
                .foreign_key_exists(&self.executor, table, &constraint)?
        };

        if exists {
            debug!("Foreign key {constraint} already exists on {table}, skipping");
            return Ok(());
        }

        self.run(&add_foreign_key_statement(&self.dialect, table, fk))?;
        info!("Added foreign key {constraint} on {table}");
        Ok(())
    }

    fn run(&self, sql: &str) -> Result<(), SchemaError> {
        debug!("Executing: {sql}");
        self.executor.execute(sql, &[])?;
        Ok(())
    }
}
