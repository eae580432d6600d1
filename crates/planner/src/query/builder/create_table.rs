//! Provides a fluent builder for constructing `CreateTable` ASTs.

use crate::query::ast::{
    common::TableRef,
    create_table::{CheckConstraint, ColumnDef, CreateTable, TableConstraint},
};
use model::core::data_type::DataType;

#[derive(Debug, Clone)]
pub struct CreateTableBuilder {
    ast: CreateTable,
}

impl CreateTableBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: CreateTable {
                table,
                ..Default::default()
            },
        }
    }

    pub fn column(self, name: &str, data_type: DataType) -> ColumnBuilder {
        ColumnBuilder::new(self, name, data_type)
    }

    /// Adds `CONSTRAINT PK_<table>_<column> PRIMARY KEY('<column>')`.
    pub fn primary_key(mut self, column: &str) -> Self {
        let name = format!("PK_{}_{}", self.ast.table.name, column);
        self.ast.constraints.push(TableConstraint::PrimaryKey {
            name,
            column: column.to_string(),
        });
        self
    }

    /// Adds `CONSTRAINT Unique_<table>_<column> UNIQUE('<column>')`.
    pub fn unique(mut self, column: &str) -> Self {
        let name = format!("Unique_{}_{}", self.ast.table.name, column);
        self.ast.constraints.push(TableConstraint::Unique {
            name,
            column: column.to_string(),
        });
        self
    }

    pub fn build(self) -> CreateTable {
        self.ast
    }
}

pub struct ColumnBuilder {
    table_builder: CreateTableBuilder,
    column: ColumnDef,
}

impl ColumnBuilder {
    pub fn new(table_builder: CreateTableBuilder, name: &str, data_type: DataType) -> Self {
        Self {
            table_builder,
            column: ColumnDef {
                name: name.to_string(),
                data_type,
                is_nullable: false, // Columns are NOT NULL by default
                check: None,
            },
        }
    }

    pub fn nullable(mut self) -> Self {
        self.column.is_nullable = true;
        self
    }

    pub fn check_in(mut self, values: &[i64]) -> Self {
        self.column.check = Some(CheckConstraint::InList {
            column: self.column.name.clone(),
            values: values.to_vec(),
        });
        self
    }

    pub fn add(mut self) -> CreateTableBuilder {
        self.table_builder.ast.columns.push(self.column);
        self.table_builder
    }
}
