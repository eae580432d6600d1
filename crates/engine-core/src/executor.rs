//! Creates one table and fills it from a CSV stream.
//!
//! The table and its indexes are created in their own transaction, committed
//! before the insert transaction is opened: a failing CREATE INDEX leaves no
//! table behind, while a load that fails while inserting still leaves the
//! empty table. All rows go in through one transaction and the first failing
//! row rolls every row back.

use crate::error::LoadError;
use connectors::{
    file::csv::source::{CsvSource, RawRow},
    sql::base::{adapter::SqlAdapter, coercion::coerce_value, error::DbError},
};
use model::{core::value::Value, schema::table::TableSchema};
use planner::generator::QueryGenerator;
use std::{io::Read, time::Duration};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub table: String,
    pub rows_inserted: u64,
    pub duration: Duration,
}

pub struct LoadExecutor<'a, A: SqlAdapter + ?Sized> {
    adapter: &'a A,
    schema: TableSchema,
    insert_sql: String,
}

impl<'a, A: SqlAdapter + ?Sized> LoadExecutor<'a, A> {
    pub fn new(adapter: &'a A, schema: TableSchema) -> Self {
        let insert_sql = QueryGenerator::sqlite().insert_row(&schema);
        LoadExecutor {
            adapter,
            schema,
            insert_sql,
        }
    }

    /// Executes the CREATE TABLE statement followed by any CREATE INDEX
    /// statements, all in one transaction.
    pub fn create_schema(&self) -> Result<(), LoadError> {
        let ddl = QueryGenerator::sqlite().create_table(&self.schema);
        info!(table = %self.schema.name, "Creating table");
        self.adapter.begin()?;

        let result = ddl
            .statements()
            .try_for_each(|statement| {
                debug!(table = %self.schema.name, sql = %statement, "Executing DDL");
                self.adapter
                    .exec(statement)
                    .map_err(|err| self.map_ddl_error(err))
            })
            .and_then(|()| self.adapter.commit().map_err(LoadError::from));

        if let Err(err) = result {
            warn!(table = %self.schema.name, error = %err, "DDL failed, rolling back");
            self.rollback();
            return Err(err);
        }
        Ok(())
    }

    /// Inserts every row of `source` inside a single transaction.
    pub fn insert_rows<R: Read>(&self, source: CsvSource<R>) -> Result<LoadSummary, LoadError> {
        let start = std::time::Instant::now();
        self.adapter.begin()?;

        let result = self.insert_all(source).and_then(|rows| {
            self.adapter.commit()?;
            Ok(rows)
        });

        let rows_inserted = match result {
            Ok(rows) => rows,
            Err(err) => {
                warn!(table = %self.schema.name, error = %err, "Load failed, rolling back");
                self.rollback();
                return Err(err);
            }
        };

        let duration = start.elapsed();
        info!(
            table = %self.schema.name,
            rows = rows_inserted,
            duration_ms = duration.as_millis(),
            "Load committed"
        );

        Ok(LoadSummary {
            table: self.schema.name.clone(),
            rows_inserted,
            duration,
        })
    }

    fn insert_all<R: Read>(&self, source: CsvSource<R>) -> Result<u64, LoadError> {
        let mut inserted = 0;
        for row in source {
            let values = self.coerce_row(&row?)?;
            self.adapter.exec_params(&self.insert_sql, &values)?;
            inserted += 1;
        }
        Ok(inserted)
    }

    fn coerce_row(&self, row: &RawRow) -> Result<Vec<Value>, LoadError> {
        if row.len() != self.schema.width() {
            return Err(LoadError::RowWidthMismatch {
                row: row.number,
                line: row.line,
                expected: self.schema.width(),
                actual: row.len(),
            });
        }

        self.schema
            .columns
            .iter()
            .zip(row.iter())
            .map(|(column, raw)| {
                coerce_value(raw, column).map_err(|err| LoadError::conversion(row.number, err))
            })
            .collect()
    }

    fn rollback(&self) {
        if let Err(err) = self.adapter.rollback() {
            warn!(table = %self.schema.name, error = %err, "Rollback failed");
        }
    }

    fn map_ddl_error(&self, err: DbError) -> LoadError {
        if err.is_table_already_exists() {
            LoadError::TableAlreadyExists(self.schema.name.clone())
        } else {
            LoadError::Database(err)
        }
    }
}
