use crate::core::data_type::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-column constraint derived from a field annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Constraint {
    #[default]
    None,
    PrimaryKey,
    Unique,
    Index,
}

impl Constraint {
    /// Annotation token for this constraint, as written on a record field.
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Constraint::None => None,
            Constraint::PrimaryKey => Some("primaryKey"),
            Constraint::Unique => Some("unique"),
            Constraint::Index => Some("index"),
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "primaryKey" => Some(Constraint::PrimaryKey),
            "unique" => Some(Constraint::Unique),
            "index" => Some(Constraint::Index),
            _ => None,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token().unwrap_or("none"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub data_type: DataType,
    pub is_nullable: bool,
    pub constraint: Constraint,
}

impl ColumnDescriptor {
    pub fn new(name: &str, data_type: DataType) -> Self {
        ColumnDescriptor {
            name: name.to_string(),
            data_type,
            is_nullable: false,
            constraint: Constraint::None,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = constraint;
        self
    }
}
