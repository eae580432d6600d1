use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt};

/// Storage class of a table column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DataType {
    Boolean,
    Integer,
    Real,
    Text,
}

impl DataType {
    /// Type name used in SQLite column definitions. Booleans are stored as
    /// integers constrained to 0/1.
    pub fn sqlite_name(&self) -> Cow<'_, str> {
        match self {
            DataType::Boolean | DataType::Integer => Cow::Borrowed("INTEGER"),
            DataType::Real => Cow::Borrowed("REAL"),
            DataType::Text => Cow::Borrowed("TEXT"),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Boolean => "Boolean",
            DataType::Integer => "Integer",
            DataType::Real => "Real",
            DataType::Text => "Text",
        };
        f.write_str(name)
    }
}
