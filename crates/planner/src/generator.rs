//! Emits the statements that create and populate a resolved table.

use crate::query::{
    builder::{
        create_index::CreateIndexBuilder, create_table::CreateTableBuilder,
        insert::InsertBuilder,
    },
    dialect::{Dialect, Sqlite},
    renderer::{Render, Renderer},
};
use crate::table_ref;
use model::{
    core::data_type::DataType,
    schema::{column::Constraint, table::TableSchema},
};

/// DDL for one table: the CREATE TABLE statement followed by its CREATE INDEX
/// statements, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ddl {
    pub create_table: String,
    pub create_indexes: Vec<String>,
}

impl Ddl {
    /// All statements in execution order.
    pub fn statements(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.create_table.as_str())
            .chain(self.create_indexes.iter().map(String::as_str))
    }
}

pub struct QueryGenerator<'a> {
    dialect: &'a dyn Dialect,
}

impl QueryGenerator<'static> {
    pub fn sqlite() -> Self {
        Self::new(&Sqlite)
    }
}

impl<'a> QueryGenerator<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self { dialect }
    }

    /// Generates the table DDL. Deterministic for a given schema.
    pub fn create_table(&self, schema: &TableSchema) -> Ddl {
        let initial_builder = CreateTableBuilder::new(table_ref!(schema.name));

        let builder_with_cols = schema.columns.iter().fold(initial_builder, |builder, col| {
            let mut col_builder = builder.column(&col.name, col.data_type);
            if col.is_nullable {
                col_builder = col_builder.nullable();
            }
            if col.data_type == DataType::Boolean {
                col_builder = col_builder.check_in(&[0, 1]);
            }
            col_builder.add() // .add() returns the CreateTableBuilder for the next fold iteration
        });

        // Named constraints follow the column list, in column order
        let final_builder =
            schema
                .columns
                .iter()
                .fold(builder_with_cols, |builder, col| match col.constraint {
                    Constraint::PrimaryKey => builder.primary_key(&col.name),
                    Constraint::Unique => builder.unique(&col.name),
                    Constraint::Index | Constraint::None => builder,
                });

        let create_indexes = schema
            .columns
            .iter()
            .filter(|col| col.constraint == Constraint::Index)
            .map(|col| {
                let ast = CreateIndexBuilder::new(table_ref!(schema.name), &col.name).build();
                self.render_ast(ast)
            })
            .collect();

        Ddl {
            create_table: self.render_ast(final_builder.build()),
            create_indexes,
        }
    }

    /// Generates the parameterized single-row insert for the table, one
    /// placeholder per column in schema order.
    pub fn insert_row(&self, schema: &TableSchema) -> String {
        let ast = InsertBuilder::new(table_ref!(schema.name))
            .columns(&schema.column_names())
            .build();
        self.render_ast(ast)
    }

    fn render_ast(&self, ast: impl Render) -> String {
        let mut renderer = Renderer::new(self.dialect);
        ast.render(&mut renderer);
        renderer.finish()
    }
}

/// Generates the SQLite DDL for a schema.
pub fn generate(schema: &TableSchema) -> Ddl {
    QueryGenerator::sqlite().create_table(schema)
}
