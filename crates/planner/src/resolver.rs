//! Resolves a record description into an ordered table schema.

use crate::error::SchemaError;
use model::{
    core::data_type::DataType,
    records::{
        field::DeclaredType,
        record::{FieldSpec, RecordType},
    },
    schema::{
        column::{ColumnDescriptor, Constraint},
        table::TableSchema,
    },
};
use std::collections::HashSet;

/// Produces one column descriptor per field, in declaration order.
///
/// Every field must map onto a column: an unclassifiable type is an error,
/// never a skipped column.
pub fn resolve(record: &RecordType) -> Result<TableSchema, SchemaError> {
    if record.is_empty() {
        return Err(SchemaError::EmptyRecord(record.name.clone()));
    }

    let mut columns = Vec::with_capacity(record.len());
    let mut seen = HashSet::with_capacity(record.len());
    let mut primary_key: Option<&str> = None;

    for field in &record.fields {
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateColumn(field.name.clone()));
        }

        let (data_type, is_nullable) =
            classify(&field.declared).ok_or_else(|| SchemaError::UnsupportedFieldKind {
                field: field.name.clone(),
                declared: field.declared.clone(),
            })?;

        let constraint = annotation(field)?;
        if constraint == Constraint::PrimaryKey {
            if let Some(first) = primary_key {
                return Err(SchemaError::DuplicateConstraint {
                    first: first.to_string(),
                    second: field.name.clone(),
                });
            }
            primary_key = Some(&field.name);
        }

        columns.push(ColumnDescriptor {
            name: field.name.clone(),
            data_type,
            is_nullable,
            constraint,
        });
    }

    Ok(TableSchema::new(record.table_name(), columns))
}

/// Returns the column kind of a declared type and whether it is the nullable
/// variant. Only one level of `Option` is accepted.
pub fn classify(declared: &DeclaredType) -> Option<(DataType, bool)> {
    match declared {
        DeclaredType::Optional(inner) => base_kind(inner).map(|kind| (kind, true)),
        other => base_kind(other).map(|kind| (kind, false)),
    }
}

fn base_kind(declared: &DeclaredType) -> Option<DataType> {
    match declared {
        DeclaredType::Bool => Some(DataType::Boolean),
        DeclaredType::String => Some(DataType::Text),
        d if d.is_integer() => Some(DataType::Integer),
        d if d.is_float() => Some(DataType::Real),
        _ => None,
    }
}

fn annotation(field: &FieldSpec) -> Result<Constraint, SchemaError> {
    match field.annotation.as_deref() {
        None => Ok(Constraint::None),
        Some(token) => {
            Constraint::from_token(token).ok_or_else(|| SchemaError::InvalidAnnotation {
                field: field.name.clone(),
                annotation: token.to_string(),
            })
        }
    }
}
