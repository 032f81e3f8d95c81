// File: src/database/statement.rs
// Purpose: Statement builders for SELECT, INSERT, UPDATE and DELETE
//
// Builders are pure: they produce SQL fragments plus an ordered binding list
// and never touch a connection. Values are always bound; table and column
// names are written into the SQL text verbatim and must be trusted.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::DbError;
use super::fields::Fields;
use crate::value::Value;

/// Placeholder prefix for UPDATE's SET clause
const SET_NAMESPACE: &str = "set_";
/// Placeholder prefix for UPDATE's WHERE clause
const WHERE_NAMESPACE: &str = "where_";

// ============================================================================
// DIALECTS
// ============================================================================

/// SQL flavour of the backing store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    MySql,
    Postgres,
    Sqlite,
}

impl Dialect {
    /// Detect the dialect from a connection URL
    ///
    /// # Examples
    /// ```
    /// use proton::database::Dialect;
    ///
    /// assert_eq!(Dialect::from_url("postgres://localhost/db").unwrap(), Dialect::Postgres);
    /// assert_eq!(Dialect::from_url("mysql://root@localhost/app").unwrap(), Dialect::MySql);
    /// assert_eq!(Dialect::from_url("sqlite::memory:").unwrap(), Dialect::Sqlite);
    /// assert!(Dialect::from_url("postgress://localhost/db").is_err());
    /// ```
    pub fn from_url(database_url: &str) -> Result<Self, DbError> {
        if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
            Ok(Dialect::Postgres)
        } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
            Ok(Dialect::MySql)
        } else if database_url.starts_with("sqlite:") {
            Ok(Dialect::Sqlite)
        } else {
            Err(DbError::Config(format!(
                "unsupported database url scheme: {}",
                database_url.split(':').next().unwrap_or_default()
            )))
        }
    }

    pub fn scheme(self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
        }
    }

    pub fn default_port(self) -> Option<u16> {
        match self {
            Dialect::MySql => Some(3306),
            Dialect::Postgres => Some(5432),
            Dialect::Sqlite => None,
        }
    }

    /// Driver placeholder for the binding at `index` (zero based)
    fn placeholder(self, index: usize) -> String {
        match self {
            Dialect::Postgres => format!("${}", index + 1),
            Dialect::MySql | Dialect::Sqlite => "?".to_string(),
        }
    }

    /// SQLite has no TRUNCATE; an unconditional DELETE empties the table.
    fn truncate_keyword(self) -> &'static str {
        match self {
            Dialect::Sqlite => "DELETE FROM ",
            Dialect::MySql | Dialect::Postgres => "TRUNCATE TABLE ",
        }
    }
}

// ============================================================================
// STATEMENTS
// ============================================================================

/// A value bound to a named parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    Truncate,
}

#[derive(Debug, Clone, PartialEq)]
enum Fragment {
    Sql(String),
    Param(usize),
    Truncate,
}

/// SQL text split around its parameters, plus the values to bind
///
/// Rendering is per target: [`Statement::sql`] for a driver dialect,
/// [`Statement::named_sql`] (also `Display`) for `:name` placeholders.
///
/// # Examples
/// ```
/// use proton::database::{Dialect, Fields, Statement};
///
/// let statement = Statement::select(&["id", "name"], "users", &Fields::new().with("id", 1)).unwrap();
/// assert_eq!(statement.named_sql(), "SELECT id, name FROM users WHERE id = :id");
/// assert_eq!(statement.sql(Dialect::Postgres), "SELECT id, name FROM users WHERE id = $1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    kind: StatementKind,
    fragments: Vec<Fragment>,
    bindings: Vec<Binding>,
    conditional: bool,
}

impl Statement {
    /// `SELECT f1, f2 FROM table [WHERE c1 = :c1 AND ...]`
    pub fn select(fields: &[&str], table: &str, conditions: &Fields) -> Result<Self, DbError> {
        require_identifier("table", table)?;
        if fields.is_empty() {
            return Err(DbError::Prepare(format!("SELECT from '{}' names no fields", table)));
        }
        fields
            .iter()
            .try_for_each(|field| require_identifier("field", field))?;
        require_columns(conditions)?;

        let mut statement = Statement::new(StatementKind::Select);
        statement.push_sql(&format!("SELECT {} FROM {}", fields.join(", "), table));
        statement.push_where(conditions, "");
        Ok(statement)
    }

    /// `INSERT INTO table(k1, k2) VALUES(:k1, :k2)`
    pub fn insert(table: &str, fields: &Fields) -> Result<Self, DbError> {
        require_identifier("table", table)?;
        if fields.is_empty() {
            return Err(DbError::Prepare(format!("INSERT into '{}' has no fields", table)));
        }
        require_columns(fields)?;

        let columns: Vec<&str> = fields.columns().collect();

        let mut statement = Statement::new(StatementKind::Insert);
        statement.push_sql(&format!("INSERT INTO {}({}) VALUES(", table, columns.join(", ")));
        for (index, (column, value)) in fields.iter().enumerate() {
            if index > 0 {
                statement.push_sql(", ");
            }
            statement.push_param(column.to_string(), value.clone());
        }
        statement.push_sql(")");
        Ok(statement)
    }

    /// `UPDATE table SET k1 = :set_k1 [WHERE c1 = :where_c1 AND ...]`
    ///
    /// SET and WHERE parameters use separate namespaces so a column may
    /// appear in both. Without conditions every row is updated.
    pub fn update(table: &str, fields: &Fields, conditions: &Fields) -> Result<Self, DbError> {
        require_identifier("table", table)?;
        if fields.is_empty() {
            return Err(DbError::Prepare(format!("UPDATE of '{}' sets no fields", table)));
        }
        require_columns(fields)?;
        require_columns(conditions)?;

        let mut statement = Statement::new(StatementKind::Update);
        statement.push_sql(&format!("UPDATE {} SET ", table));
        statement.push_assignments(fields, ", ", SET_NAMESPACE);
        statement.push_where(conditions, WHERE_NAMESPACE);
        Ok(statement)
    }

    /// `DELETE FROM table WHERE c1 = :c1 AND ...`
    ///
    /// Without conditions this is a truncate of the whole table.
    pub fn delete(table: &str, conditions: &Fields) -> Result<Self, DbError> {
        require_identifier("table", table)?;
        require_columns(conditions)?;

        if conditions.is_empty() {
            let mut statement = Statement::new(StatementKind::Truncate);
            statement.fragments.push(Fragment::Truncate);
            statement.push_sql(table);
            return Ok(statement);
        }

        let mut statement = Statement::new(StatementKind::Delete);
        statement.push_sql(&format!("DELETE FROM {}", table));
        statement.push_where(conditions, "");
        Ok(statement)
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Looks up a bound value by parameter name (without the leading `:`)
    pub fn binding(&self, name: &str) -> Option<&Value> {
        self.bindings
            .iter()
            .find(|binding| binding.name == name)
            .map(|binding| &binding.value)
    }

    /// True for UPDATE and truncate statements that touch every row
    pub fn is_unconditional(&self) -> bool {
        matches!(self.kind, StatementKind::Update | StatementKind::Truncate) && !self.conditional
    }

    /// SQL text with the driver placeholders of `dialect`
    pub fn sql(&self, dialect: Dialect) -> String {
        self.render(|index, _| dialect.placeholder(index), dialect.truncate_keyword())
    }

    /// SQL text with `:name` placeholders
    pub fn named_sql(&self) -> String {
        self.render(|_, binding| format!(":{}", binding.name), "TRUNCATE TABLE ")
    }

    fn new(kind: StatementKind) -> Self {
        Self {
            kind,
            fragments: Vec::new(),
            bindings: Vec::new(),
            conditional: false,
        }
    }

    fn push_sql(&mut self, sql: &str) {
        match self.fragments.last_mut() {
            Some(Fragment::Sql(last)) => last.push_str(sql),
            _ => self.fragments.push(Fragment::Sql(sql.to_string())),
        }
    }

    fn push_param(&mut self, name: String, value: Value) {
        self.fragments.push(Fragment::Param(self.bindings.len()));
        self.bindings.push(Binding { name, value });
    }

    /// `col = :ns_col` fragments joined by `separator`
    fn push_assignments(&mut self, fields: &Fields, separator: &str, namespace: &str) {
        for (index, (column, value)) in fields.iter().enumerate() {
            if index > 0 {
                self.push_sql(separator);
            }
            self.push_sql(column);
            self.push_sql(" = ");
            self.push_param(format!("{}{}", namespace, column), value.clone());
        }
    }

    fn push_where(&mut self, conditions: &Fields, namespace: &str) {
        if conditions.is_empty() {
            return;
        }
        self.conditional = true;
        self.push_sql(" WHERE ");
        self.push_assignments(conditions, " AND ", namespace);
    }

    fn render(&self, placeholder: impl Fn(usize, &Binding) -> String, truncate: &str) -> String {
        self.fragments
            .iter()
            .map(|fragment| match fragment {
                Fragment::Sql(sql) => sql.clone(),
                Fragment::Param(index) => placeholder(*index, &self.bindings[*index]),
                Fragment::Truncate => truncate.to_string(),
            })
            .collect()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.named_sql())
    }
}

fn require_identifier(what: &str, name: &str) -> Result<(), DbError> {
    if name.trim().is_empty() {
        return Err(DbError::Prepare(format!("{} name is empty", what)));
    }
    Ok(())
}

fn require_columns(fields: &Fields) -> Result<(), DbError> {
    fields
        .columns()
        .try_for_each(|column| require_identifier("column", column))
}

// ============================================================================
// TESTS
// ============================================================================
