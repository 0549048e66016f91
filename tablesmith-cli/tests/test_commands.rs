//! Tests for the database-free commands

use tablesmith::{Dialect, ModelDef, SchemaError};
use tablesmith_cli::commands;

fn blog() -> Vec<ModelDef> {
    vec![
        ModelDef::new("User")
            .field("ID", "i64", "id,primary_key,auto")
            .field("Email", "String", "email,notnull,unique,index"),
        ModelDef::new("Post")
            .field("ID", "i64", "id,primary_key,auto")
            .field(
                "UserID",
                "i64",
                "user_id,notnull,references:users(id),on_delete:cascade",
            ),
    ]
}

#[test]
fn test_plan_sqlite() {
    let statements = commands::plan(&blog(), Dialect::Sqlite).unwrap();
    assert_eq!(
        statements,
        vec![
            "CREATE TABLE IF NOT EXISTS users (id INTEGER PRIMARY KEY, email TEXT NOT NULL UNIQUE);",
            "CREATE TABLE IF NOT EXISTS posts (id INTEGER PRIMARY KEY, user_id INTEGER NOT NULL, \
             FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE);",
            "CREATE UNIQUE INDEX IF NOT EXISTS users_email_idx ON users (email);",
        ]
    );
}

#[test]
fn test_plan_mysql_defers_foreign_keys() {
    let statements = commands::plan(&blog(), Dialect::MySql).unwrap();
    assert_eq!(statements.len(), 4);
    assert_eq!(
        statements[0],
        "CREATE TABLE IF NOT EXISTS users (id BIGINT PRIMARY KEY AUTO_INCREMENT, \
         email VARCHAR(255) NOT NULL UNIQUE);"
    );
    assert_eq!(
        statements[2],
        "ALTER TABLE posts ADD CONSTRAINT fk_users_user_id FOREIGN KEY (user_id) \
         REFERENCES users(id) ON DELETE CASCADE;"
    );
    assert!(statements[3].starts_with("CREATE UNIQUE INDEX"));
}

#[test]
fn test_plan_rejects_invalid_models() {
    let models = vec![ModelDef::new("Post").untagged_field("Title", "String")];
    let err = commands::plan(&models, Dialect::Postgres).unwrap_err();
    assert!(matches!(err, SchemaError::Validation(_)));
}

#[test]
fn test_validation_report() {
    assert!(commands::validation_report(&blog()).is_empty());

    let models = vec![ModelDef::new("Post")
        .untagged_field("Title", "String")
        .field("UserID", "i64", "user_id,references:users")];
    let report = commands::validation_report(&models);
    assert_eq!(report.len(), 2);
    assert!(report[0].contains("Title"));
    assert!(report[1].contains("UserID"));
}

#[test]
fn test_inspect_emits_descriptors() {
    let json = commands::inspect(&blog()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let tables = value.as_array().unwrap();
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0]["name"], "users");
    assert_eq!(tables[1]["foreign_keys"][0]["ref_table"], "users");
    assert_eq!(tables[1]["columns"][1]["column_type"], "bigint");
}
