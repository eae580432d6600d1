//! Defines common, reusable AST nodes for building SQL statements.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRef {
    pub name: String,
}
