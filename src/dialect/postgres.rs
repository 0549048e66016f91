//! PostgreSQL dialect

use super::{render_column, render_foreign_key, DdlDialect};
use crate::executor::{ExecError, SchemaExecutor};
use crate::schema::ddl::foreign_key_name;
use crate::schema::{ColumnDescriptor, ColumnType, ForeignKeyDescriptor};

const FOREIGN_KEY_EXISTS: &str = "SELECT EXISTS (SELECT 1 FROM information_schema.table_constraints \
     WHERE table_name = $1 AND constraint_name = $2 AND constraint_type = 'FOREIGN KEY')";

/// PostgreSQL: `SERIAL` keys, foreign keys added with `ALTER TABLE`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Postgres;

impl Postgres {
    fn type_keyword(column_type: ColumnType) -> &'static str {
        match column_type {
            ColumnType::Int => "INTEGER",
            ColumnType::BigInt => "BIGINT",
            ColumnType::Bool => "BOOLEAN",
            ColumnType::Float => "DOUBLE PRECISION",
            ColumnType::String => "TEXT",
            ColumnType::Time => "TIMESTAMP",
        }
    }
}

impl DdlDialect for Postgres {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn column(&self, column: &ColumnDescriptor) -> String {
        if column.primary_key && column.auto_increment {
            return render_column("SERIAL PRIMARY KEY", false, None, column);
        }
        render_column(
            Self::type_keyword(column.column_type),
            column.primary_key,
            None,
            column,
        )
    }

    fn foreign_key(&self, fk: &ForeignKeyDescriptor) -> String {
        render_foreign_key(Some(&foreign_key_name(fk)), fk)
    }

    fn supports_alter_fk(&self) -> bool {
        true
    }

    fn foreign_key_exists(
        &self,
        executor: &dyn SchemaExecutor,
        table: &str,
        constraint: &str,
    ) -> Result<bool, ExecError> {
        executor
            .query_scalar(FOREIGN_KEY_EXISTS, &[table, constraint])?
            .as_bool()
    }
}
