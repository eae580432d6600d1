use crate::sql::{
    base::{adapter::SqlAdapter, error::DbError},
    sqlite::params::{SqliteParamStore, value_from_sql},
};
use model::core::value::Value;
use rusqlite::{Connection, params_from_iter};
use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::debug;

const QUERY_TABLE_EXISTS_SQL: &str = include_str!("sql/table_exists.sql");

/// Where a new database lives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DatabasePath {
    #[default]
    InMemory,
    File(PathBuf),
}

impl FromStr for DatabasePath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | ":memory:" => Ok(DatabasePath::InMemory),
            path => Ok(DatabasePath::File(PathBuf::from(path))),
        }
    }
}

impl fmt::Display for DatabasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabasePath::InMemory => f.write_str(":memory:"),
            DatabasePath::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Single connection to an embedded SQLite database.
#[derive(Debug)]
pub struct SqliteAdapter {
    conn: Connection,
}

impl SqliteAdapter {
    pub fn open_in_memory() -> Result<Self, DbError> {
        debug!("Opening in-memory SQLite database");
        Ok(SqliteAdapter {
            conn: Connection::open_in_memory()?,
        })
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let path = path.as_ref();
        debug!("Opening SQLite database at {}", path.display());
        Ok(SqliteAdapter {
            conn: Connection::open(path)?,
        })
    }

    pub fn open_at(path: &DatabasePath) -> Result<Self, DbError> {
        match path {
            DatabasePath::InMemory => Self::open_in_memory(),
            DatabasePath::File(path) => Self::open(path),
        }
    }

    pub fn close(self) -> Result<(), DbError> {
        self.conn.close().map_err(|(_, err)| DbError::from(err))
    }
}

impl SqlAdapter for SqliteAdapter {
    fn exec(&self, sql: &str) -> Result<(), DbError> {
        debug!("Executing: {}", sql);
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    fn exec_params(&self, sql: &str, params: &[Value]) -> Result<usize, DbError> {
        let bindings = SqliteParamStore::from_values(params);
        let mut stmt = self.conn.prepare_cached(sql)?;
        Ok(stmt.execute(params_from_iter(bindings.params.iter()))?)
    }

    fn query_rows(&self, sql: &str, params: &[Value]) -> Result<Vec<Vec<Value>>, DbError> {
        let bindings = SqliteParamStore::from_values(params);
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = stmt.query(params_from_iter(bindings.params.iter()))?;
        let mut result = Vec::new();
        while let Some(row) = rows.next()? {
            let values = columns
                .iter()
                .enumerate()
                .map(|(idx, name)| value_from_sql(name, row.get_ref(idx)?))
                .collect::<Result<Vec<_>, DbError>>()?;
            result.push(values);
        }
        Ok(result)
    }

    fn begin(&self) -> Result<(), DbError> {
        self.exec("BEGIN TRANSACTION;")
    }

    fn commit(&self) -> Result<(), DbError> {
        self.exec("COMMIT;")
    }

    fn rollback(&self) -> Result<(), DbError> {
        self.exec("ROLLBACK;")
    }

    fn table_exists(&self, table: &str) -> Result<bool, DbError> {
        let exists = self
            .conn
            .query_row(QUERY_TABLE_EXISTS_SQL, [table], |row| row.get::<_, bool>(0))?;
        Ok(exists)
    }
}
