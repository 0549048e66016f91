//! SQL dialects (Strategy pattern).
//!
//! [`DdlDialect`] is the rendering contract; [`Sqlite`], [`Postgres`] and [`MySql`] implement
//! it, and the closed [`Dialect`] enum dispatches over the three.

mod mysql;
mod postgres;
mod sqlite;

pub use mysql::MySql;
pub use postgres::Postgres;
pub use sqlite::Sqlite;

use crate::executor::{ExecError, SchemaExecutor};
use crate::schema::{ColumnDescriptor, ForeignKeyDescriptor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Dialect-specific DDL rendering and catalog probing
pub trait DdlDialect {
    /// Short lower-case name (`sqlite`, `postgres`, `mysql`)
    fn name(&self) -> &'static str;

    /// Column fragment without the column name: type, `PRIMARY KEY`, auto-increment,
    /// `NOT NULL`, `UNIQUE`, `DEFAULT <literal>`, in that order
    fn column(&self, column: &ColumnDescriptor) -> String;

    /// `[CONSTRAINT <name>] FOREIGN KEY (<col>) REFERENCES <table>(<col>) [ON DELETE ..] [ON UPDATE ..]`
    fn foreign_key(&self, fk: &ForeignKeyDescriptor) -> String;

    /// Whether foreign keys can be added with `ALTER TABLE` after creation
    fn supports_alter_fk(&self) -> bool;

    /// Look up a named foreign key constraint on a table
    ///
    /// # Errors
    ///
    /// Returns `ExecError` if the catalog query fails or its result cannot be interpreted.
    fn foreign_key_exists(
        &self,
        executor: &dyn SchemaExecutor,
        table: &str,
        constraint: &str,
    ) -> Result<bool, ExecError>;
}

/// The supported dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    Sqlite,
    #[default]
    Postgres,
    MySql,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Sqlite, Dialect::Postgres, Dialect::MySql];

    /// Short lower-case name (`sqlite`, `postgres`, `mysql`)
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Sqlite => "sqlite",
            Dialect::Postgres => "postgres",
            Dialect::MySql => "mysql",
        }
    }

    fn variant(&self) -> &'static dyn DdlDialect {
        match self {
            Dialect::Sqlite => &Sqlite,
            Dialect::Postgres => &Postgres,
            Dialect::MySql => &MySql,
        }
    }
}

impl DdlDialect for Dialect {
    fn name(&self) -> &'static str {
        Dialect::name(*self)
    }

    fn column(&self, column: &ColumnDescriptor) -> String {
        self.variant().column(column)
    }

    fn foreign_key(&self, fk: &ForeignKeyDescriptor) -> String {
        self.variant().foreign_key(fk)
    }

    fn supports_alter_fk(&self) -> bool {
        self.variant().supports_alter_fk()
    }

    fn foreign_key_exists(
        &self,
        executor: &dyn SchemaExecutor,
        table: &str,
        constraint: &str,
    ) -> Result<bool, ExecError> {
        self.variant().foreign_key_exists(executor, table, constraint)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "mysql" | "mariadb" => Ok(Dialect::MySql),
            other => Err(format!(
                "unknown dialect '{other}' (expected sqlite, postgres or mysql)"
            )),
        }
    }
}

impl Serialize for Dialect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Dialect {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Shared column rendering: `<type>[ PRIMARY KEY][ <auto>][ NOT NULL][ UNIQUE][ DEFAULT <v>]`
///
/// `head` replaces the type keyword; callers pass a combined fragment
/// (`INTEGER PRIMARY KEY`, `SERIAL PRIMARY KEY`) with `primary_key = false` and `auto = None`.
fn render_column(
    head: &str,
    primary_key: bool,
    auto: Option<&str>,
    column: &ColumnDescriptor,
) -> String {
    let mut sql = head.to_string();
    if primary_key {
        sql.push_str(" PRIMARY KEY");
    }
    if let Some(keyword) = auto {
        sql.push(' ');
        sql.push_str(keyword);
    }
    if column.not_null {
        sql.push_str(" NOT NULL");
    }
    if column.unique {
        sql.push_str(" UNIQUE");
    }
    if let Some(default) = &column.default {
        sql.push_str(" DEFAULT ");
        sql.push_str(default);
    }
    sql
}

/// Shared foreign key clause; `constraint` prefixes `CONSTRAINT <name> ` when present
fn render_foreign_key(constraint: Option<&str>, fk: &ForeignKeyDescriptor) -> String {
    let mut sql = match constraint {
        Some(name) => format!("CONSTRAINT {name} "),
        None => String::new(),
    };
    sql.push_str(&format!(
        "FOREIGN KEY ({}) REFERENCES {}({})",
        fk.column, fk.ref_table, fk.ref_column
    ));
    if let Some(action) = fk.on_delete {
        sql.push_str(" ON DELETE ");
        sql.push_str(action.as_sql());
    }
    if let Some(action) = fk.on_update {
        sql.push_str(" ON UPDATE ");
        sql.push_str(action.as_sql());
    }
    sql
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::Scalar;
    use crate::schema::ColumnType;

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("sqlite".parse::<Dialect>().unwrap(), Dialect::Sqlite);
        assert_eq!("PostgreSQL".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!(" pg ".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("MariaDB".parse::<Dialect>().unwrap(), Dialect::MySql);
        assert!("oracle".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_dialect_display_round_trips() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.to_string().parse::<Dialect>().unwrap(), dialect);
        }
    }

    #[test]
    fn test_inherent_name_matches_variant() {
        for dialect in Dialect::ALL {
            assert_eq!(Dialect::name(dialect), dialect.variant().name());
        }
    }

    #[test]
    fn test_supports_alter_fk() {
        assert!(!Dialect::Sqlite.supports_alter_fk());
        assert!(Dialect::Postgres.supports_alter_fk());
        assert!(Dialect::MySql.supports_alter_fk());
    }

    #[test]
    fn test_enum_dispatches_to_variant() {
        let mut col = ColumnDescriptor::new("id", ColumnType::Int);
        col.primary_key = true;
        col.auto_increment = true;

        assert_eq!(Dialect::Sqlite.column(&col), Sqlite.column(&col));
        assert_eq!(Dialect::Postgres.column(&col), Postgres.column(&col));
        assert_eq!(Dialect::MySql.column(&col), MySql.column(&col));
    }

    #[test]
    fn test_dialect_deserialize() {
        #[derive(Deserialize)]
        struct Holder {
            dialect: Dialect,
        }
        let holder: Holder = serde_json::from_str(r#"{"dialect": "mysql"}"#).unwrap();
        assert_eq!(holder.dialect, Dialect::MySql);
        assert!(serde_json::from_str::<Holder>(r#"{"dialect": "db2"}"#).is_err());
        assert_eq!(serde_json::to_string(&Dialect::Sqlite).unwrap(), "\"sqlite\"");
    }

    /// Answers every probe with a fixed value and records what was asked
    pub(super) struct ProbeExecutor {
        pub answer: Scalar,
        pub seen: std::sync::Mutex<Vec<(String, Vec<String>)>>,
    }

    impl ProbeExecutor {
        pub fn new(answer: Scalar) -> Self {
            Self {
                answer,
                seen: std::sync::Mutex::new(Vec::new()),
            }
        }

        pub fn seen(&self) -> Vec<(String, Vec<String>)> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl SchemaExecutor for ProbeExecutor {
        fn execute(&self, _sql: &str, _params: &[&str]) -> Result<u64, ExecError> {
            Err(ExecError::Other("probe executor does not execute".to_string()))
        }

        fn query_scalar(&self, sql: &str, params: &[&str]) -> Result<Scalar, ExecError> {
            self.seen.lock().unwrap().push((
                sql.to_string(),
                params.iter().map(|p| p.to_string()).collect(),
            ));
            Ok(self.answer.clone())
        }
    }
}
