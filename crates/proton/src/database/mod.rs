// File: src/database/mod.rs
// Purpose: Table-level data access over a single connection
//
// Architecture: statement building is pure (see `statement`), execution goes
// through the `Connection` capability. Every failure is logged and returned,
// so an empty result always means "no rows", never "query failed".

mod connection;
mod error;
mod fields;
pub mod statement;

use std::collections::HashMap;
use tracing::{debug, error, warn};

use crate::config::DatabaseConfig;
use crate::value::Value;

pub use connection::{Connection, SqlxConnection};
pub use error::DbError;
pub use fields::Fields;
pub use statement::{Binding, Dialect, Statement, StatementKind};

/// A fetched row: column name → value
pub type Row = HashMap<String, Value>;

/// Data access layer owning one connection
///
/// Operations take `&mut self`: the connection is not shared between
/// callers. Table and column names are written into SQL verbatim and must
/// never come from end-user input; values are always bound.
#[derive(Debug)]
pub struct Database<C = SqlxConnection> {
    conn: C,
}

impl Database<SqlxConnection> {
    /// Validates `config` and connects, failing fast on either step
    pub fn connect(config: &DatabaseConfig) -> Result<Self, DbError> {
        let url = config.url().map_err(|err| {
            error!(error = %err, "invalid database configuration");
            err
        })?;
        Self::connect_url(&url)
    }

    /// Connects with a raw URL (`mysql://...`, `postgres://...`, `sqlite:...`)
    pub fn connect_url(database_url: &str) -> Result<Self, DbError> {
        SqlxConnection::connect(database_url).map(Self::new)
    }
}

impl<C: Connection> Database<C> {
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    pub fn dialect(&self) -> Dialect {
        self.conn.dialect()
    }

    pub fn connection(&self) -> &C {
        &self.conn
    }

    pub fn into_inner(self) -> C {
        self.conn
    }

    /// Selects `fields` from `table`, AND-ing every entry of `conditions`
    ///
    /// Returns an empty vector when nothing matches.
    pub fn select(
        &mut self,
        fields: &[&str],
        table: &str,
        conditions: &Fields,
    ) -> Result<Vec<Row>, DbError> {
        let statement = Statement::select(fields, table, conditions)?;
        self.fetch(&statement)
    }

    /// Inserts one row; returns the affected row count
    pub fn insert(&mut self, table: &str, fields: &Fields) -> Result<u64, DbError> {
        let statement = Statement::insert(table, fields)?;
        self.execute(&statement)
    }

    /// Updates rows matching every entry of `conditions`
    ///
    /// **Empty `conditions` update every row of the table.**
    pub fn update(
        &mut self,
        table: &str,
        fields: &Fields,
        conditions: &Fields,
    ) -> Result<u64, DbError> {
        let statement = Statement::update(table, fields, conditions)?;
        self.execute(&statement)
    }

    /// Deletes rows matching every entry of `conditions`
    ///
    /// **Empty `conditions` truncate the table.**
    pub fn delete(&mut self, table: &str, conditions: &Fields) -> Result<u64, DbError> {
        let statement = Statement::delete(table, conditions)?;
        self.execute(&statement)
    }

    /// Runs a prebuilt statement that returns no rows
    pub fn execute(&mut self, statement: &Statement) -> Result<u64, DbError> {
        if statement.is_unconditional() {
            warn!(sql = %statement, "statement affects every row of the table");
        }
        debug!(sql = %statement, params = statement.bindings().len(), "executing statement");

        self.conn.execute(statement).map_err(|err| {
            error!(sql = %statement, error = %err, "statement failed");
            err
        })
    }

    /// Runs trusted, parameterless SQL such as `CREATE TABLE`
    ///
    /// Nothing is bound or escaped: never pass end-user input.
    pub fn run_sql(&mut self, sql: &str) -> Result<u64, DbError> {
        debug!(sql, "running raw sql");
        self.conn.run_sql(sql).map_err(|err| {
            error!(sql, error = %err, "raw sql failed");
            err
        })
    }

    /// Runs a prebuilt query and collects its rows
    pub fn fetch(&mut self, statement: &Statement) -> Result<Vec<Row>, DbError> {
        debug!(sql = %statement, params = statement.bindings().len(), "running query");

        let rows = self.conn.fetch_all(statement).map_err(|err| {
            error!(sql = %statement, error = %err, "query failed");
            err
        })?;

        debug!(rows = rows.len(), "query returned");
        Ok(rows)
    }
}

// ============================================================================
// TESTS
// ============================================================================
