//! Provides a builder for constructing `CreateIndex` ASTs.

use crate::query::ast::{common::TableRef, create_index::CreateIndex};

#[derive(Debug, Clone)]
pub struct CreateIndexBuilder {
    ast: CreateIndex,
}

impl CreateIndexBuilder {
    /// Starts a single-column index named `NonClustered_<table>_<column>`.
    pub fn new(table: TableRef, column: &str) -> Self {
        let name = format!("NonClustered_{}_{}", table.name, column);
        Self {
            ast: CreateIndex {
                name,
                table,
                column: column.to_string(),
            },
        }
    }

    pub fn build(self) -> CreateIndex {
        self.ast
    }
}
