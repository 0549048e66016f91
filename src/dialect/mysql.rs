//! MySQL dialect

use super::{render_column, render_foreign_key, DdlDialect};
use crate::executor::{ExecError, SchemaExecutor};
use crate::schema::ddl::foreign_key_name;
use crate::schema::{ColumnDescriptor, ColumnType, ForeignKeyDescriptor};

const FOREIGN_KEY_EXISTS: &str = "SELECT COUNT(*) FROM information_schema.table_constraints \
     WHERE table_name = ? AND constraint_name = ? AND constraint_type = 'FOREIGN KEY' \
     AND table_schema = DATABASE()";

/// MySQL: `AUTO_INCREMENT` keys, foreign keys added with `ALTER TABLE`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MySql;

impl MySql {
    fn type_keyword(column_type: ColumnType) -> &'static str {
        match column_type {
            ColumnType::Int => "INT",
            ColumnType::BigInt => "BIGINT",
            ColumnType::Bool => "TINYINT(1)",
            ColumnType::Float => "DOUBLE",
            ColumnType::String => "VARCHAR(255)",
            ColumnType::Time => "DATETIME",
        }
    }
}

impl DdlDialect for MySql {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn column(&self, column: &ColumnDescriptor) -> String {
        render_column(
            Self::type_keyword(column.column_type),
            column.primary_key,
            column.auto_increment.then_some("AUTO_INCREMENT"),
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
        let count = executor
            .query_scalar(FOREIGN_KEY_EXISTS, &[table, constraint])?
            .as_i64()?;
        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::tests::ProbeExecutor;
    use crate::executor::Scalar;

    #[test]
    fn test_type_keywords() {
        let keyword = |t| MySql.column(&ColumnDescriptor::new("c", t));
        assert_eq!(keyword(ColumnType::Int), "INT");
        assert_eq!(keyword(ColumnType::BigInt), "BIGINT");
        assert_eq!(keyword(ColumnType::Bool), "TINYINT(1)");
        assert_eq!(keyword(ColumnType::Float), "DOUBLE");
        assert_eq!(keyword(ColumnType::String), "VARCHAR(255)");
        assert_eq!(keyword(ColumnType::Time), "DATETIME");
    }

    #[test]
    fn test_auto_increment_follows_primary_key() {
        let mut id = ColumnDescriptor::new("id", ColumnType::Int);
        id.primary_key = true;
        id.auto_increment = true;
        assert_eq!(MySql.column(&id), "INT PRIMARY KEY AUTO_INCREMENT");

        id.not_null = true;
        assert_eq!(MySql.column(&id), "INT PRIMARY KEY AUTO_INCREMENT NOT NULL");
    }

    #[test]
    fn test_bool_default() {
        let mut active = ColumnDescriptor::new("active", ColumnType::Bool);
        active.default = Some("1".to_string());
        assert_eq!(MySql.column(&active), "TINYINT(1) DEFAULT 1");
    }

    #[test]
    fn test_probe_counts() {
        let found = ProbeExecutor::new(Scalar::Int(1));
        assert!(MySql.foreign_key_exists(&found, "posts", "fk_users_user_id").unwrap());
        let seen = found.seen();
        assert!(seen[0].0.starts_with("SELECT COUNT(*)"));
        assert!(seen[0].0.contains("table_schema = DATABASE()"));
        assert_eq!(seen[0].1, vec!["posts".to_string(), "fk_users_user_id".to_string()]);

        let missing = ProbeExecutor::new(Scalar::Int(0));
        assert!(!MySql.foreign_key_exists(&missing, "posts", "fk_users_user_id").unwrap());
    }
}
