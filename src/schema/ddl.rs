//! DDL statement rendering
//!
//! Pure functions producing the exact statement text issued by the
//! [`SchemaManager`](crate::SchemaManager). Identifiers are interpolated as-is: model and
//! field names must not come from untrusted input.

use super::descriptor::{ForeignKeyDescriptor, IndexDescriptor, TableDescriptor};
use crate::dialect::DdlDialect;

/// Canonical constraint name of a foreign key: `fk_<ref_table>_<column>`
pub fn foreign_key_name(fk: &ForeignKeyDescriptor) -> String {
    format!("fk_{}_{}", fk.ref_table, fk.column)
}

/// `CREATE TABLE IF NOT EXISTS <table> (<col defs>);`
///
/// Foreign keys are appended inline only when the dialect cannot add them later.
pub fn create_table_statement<D: DdlDialect + ?Sized>(dialect: &D, table: &TableDescriptor) -> String {
    let mut defs: Vec<String> = table
        .columns
        .iter()
        .map(|col| format!("{} {}", col.name, dialect.column(col)))
        .collect();

    if !dialect.supports_alter_fk() {
        defs.extend(table.foreign_keys.iter().map(|fk| dialect.foreign_key(fk)));
    }

    format!(
        "CREATE TABLE IF NOT EXISTS {} ({});",
        table.name,
        defs.join(", ")
    )
}

/// `ALTER TABLE <table> ADD <fk clause>;`
pub fn add_foreign_key_statement<D: DdlDialect + ?Sized>(
    dialect: &D,
    table: &str,
    fk: &ForeignKeyDescriptor,
) -> String {
    format!("ALTER TABLE {} ADD {};", table, dialect.foreign_key(fk))
}

/// `CREATE [UNIQUE ]INDEX IF NOT EXISTS <name> ON <table> (<cols>);`
pub fn create_index_statement(index: &IndexDescriptor) -> String {
    let unique = if index.unique { "UNIQUE " } else { "" };
    format!(
        "CREATE {}INDEX IF NOT EXISTS {} ON {} ({});",
        unique,
        index.name,
        index.table,
        index.columns.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{MySql, Postgres, Sqlite};
    use crate::schema::{introspect, ModelDef, ReferentialAction};

    fn post() -> TableDescriptor {
        introspect(
            &ModelDef::new("Post")
                .field("ID", "i64", "id,primary_key,auto")
                .field("UserID", "i64", "user_id,notnull,references:users(id),on_delete:cascade"),
        )
    }

    #[test]
    fn test_foreign_key_name() {
        let fk = ForeignKeyDescriptor {
            column: "user_id".to_string(),
            ref_table: "users".to_string(),
            ref_column: "id".to_string(),
            on_delete: Some(ReferentialAction::Cascade),
            on_update: None,
        };
        assert_eq!(foreign_key_name(&fk), "fk_users_user_id");
    }

    #[test]
    fn test_create_table_sqlite_inlines_foreign_keys() {
        assert_eq!(
            create_table_statement(&Sqlite, &post()),
            "CREATE TABLE IF NOT EXISTS posts (id INTEGER PRIMARY KEY, user_id INTEGER NOT NULL, \
             FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE);"
        );
    }

    #[test]
    fn test_create_table_postgres_defers_foreign_keys() {
        assert_eq!(
            create_table_statement(&Postgres, &post()),
            "CREATE TABLE IF NOT EXISTS posts (id SERIAL PRIMARY KEY, user_id BIGINT NOT NULL);"
        );
    }

    #[test]
    fn test_add_foreign_key_statement() {
        let table = post();
        assert_eq!(
            add_foreign_key_statement(&MySql, &table.name, &table.foreign_keys[0]),
            "ALTER TABLE posts ADD CONSTRAINT fk_users_user_id FOREIGN KEY (user_id) \
             REFERENCES users(id) ON DELETE CASCADE;"
        );
    }

    #[test]
    fn test_create_index_statement() {
        let mut index = IndexDescriptor {
            table: "users".to_string(),
            name: "users_email_idx".to_string(),
            columns: vec!["email".to_string()],
            unique: false,
        };
        assert_eq!(
            create_index_statement(&index),
            "CREATE INDEX IF NOT EXISTS users_email_idx ON users (email);"
        );

        index.unique = true;
        index.columns.push("tenant_id".to_string());
        assert_eq!(
            create_index_statement(&index),
            "CREATE UNIQUE INDEX IF NOT EXISTS users_email_idx ON users (email, tenant_id);"
        );
    }
}
