//! Defines the AST for a single-row, parameterized INSERT statement.

use crate::query::ast::common::TableRef;

/// `INSERT INTO <table> (<columns>) VALUES (<one placeholder per column>)`.
///
/// Values are bound positionally at execution time, so one statement serves
/// every row of a load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insert {
    pub table: TableRef,
    pub columns: Vec<String>,
}
