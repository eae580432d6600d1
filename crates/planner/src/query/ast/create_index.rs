//! Defines the AST for a CREATE INDEX statement.

use crate::query::ast::common::TableRef;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateIndex {
    pub name: String,
    pub table: TableRef,
    pub column: String,
}
