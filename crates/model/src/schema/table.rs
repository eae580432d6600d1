use crate::schema::column::ColumnDescriptor;
use serde::{Deserialize, Serialize};

/// Resolved table layout. Column order is record field order, which is also
/// the expected CSV field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
}

impl TableSchema {
    pub fn new(name: &str, columns: Vec<ColumnDescriptor>) -> Self {
        TableSchema {
            name: name.to_string(),
            columns,
        }
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
