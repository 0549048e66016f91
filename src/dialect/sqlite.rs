//! SQLite dialect

use super::{render_column, render_foreign_key, DdlDialect};
use crate::executor::{ExecError, SchemaExecutor};
use crate::schema::{ColumnDescriptor, ColumnType, ForeignKeyDescriptor};

/// SQLite: storage-class types, foreign keys inline in `CREATE TABLE`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sqlite;

impl Sqlite {
    fn type_keyword(column_type: ColumnType) -> &'static str {
        match column_type {
            ColumnType::Int | ColumnType::BigInt | ColumnType::Bool => "INTEGER",
            ColumnType::Float => "REAL",
            ColumnType::String => "TEXT",
            ColumnType::Time => "DATETIME",
        }
    }
}

impl DdlDialect for Sqlite {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn column(&self, column: &ColumnDescriptor) -> String {
        // rowid alias
        if column.primary_key && column.auto_increment {
            return render_column("INTEGER PRIMARY KEY", false, None, column);
        }
        render_column(
            Self::type_keyword(column.column_type),
            column.primary_key,
            None,
            column,
        )
    }

    fn foreign_key(&self, fk: &ForeignKeyDescriptor) -> String {
        render_foreign_key(None, fk)
    }

    fn supports_alter_fk(&self) -> bool {
        false
    }

    fn foreign_key_exists(
        &self,
        _executor: &dyn SchemaExecutor,
        _table: &str,
        _constraint: &str,
    ) -> Result<bool, ExecError> {
        Ok(false)
    }
}
