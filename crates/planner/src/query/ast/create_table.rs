//! Defines the AST for a CREATE TABLE statement.

use crate::query::ast::common::TableRef;
use model::core::data_type::DataType;

/// Represents a complete CREATE TABLE statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateTable {
    pub table: TableRef,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<TableConstraint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
    pub is_nullable: bool,
    pub check: Option<CheckConstraint>,
}

/// Column-level CHECK clause.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckConstraint {
    /// `CHECK('<column>' IN (v1,v2,...))`
    InList { column: String, values: Vec<i64> },
}

/// Named table-level constraint over a single column.
#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraint {
    PrimaryKey { name: String, column: String },
    Unique { name: String, column: String },
}
