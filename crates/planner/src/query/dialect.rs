//! Defines the `Dialect` trait for database-specific SQL syntax.

use model::core::data_type::DataType;

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    ///
    /// - SQLite accepts single quotes where an identifier is expected: `'my_column'`
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for a parameterized query.
    ///
    /// - SQLite uses `?`
    fn get_placeholder(&self, index: usize) -> String;

    /// Renders a column kind into a database-specific SQL type string.
    fn render_data_type(&self, data_type: &DataType) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("'{}'", ident.replace('\'', "''"))
    }

    fn get_placeholder(&self, _index: usize) -> String {
        "?".into()
    }

    fn render_data_type(&self, data_type: &DataType) -> String {
        data_type.sqlite_name().into_owned()
    }
}
