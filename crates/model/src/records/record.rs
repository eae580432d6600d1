use crate::records::field::{DeclaredType, FieldType};
use serde::{Deserialize, Serialize};

/// One field of a record description, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub declared: DeclaredType,
    /// Raw annotation token (`primaryKey`, `unique` or `index`). Validated when
    /// the record is resolved into a schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl FieldSpec {
    pub fn new(name: &str, declared: DeclaredType) -> Self {
        FieldSpec {
            name: name.to_string(),
            declared,
            annotation: None,
        }
    }

    pub fn with_annotation(mut self, annotation: &str) -> Self {
        self.annotation = Some(annotation.to_string());
        self
    }
}

/// Ordered description of a record type. Field order is the expected CSV
/// column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordType {
    pub name: String,
    /// Overrides the table name, which otherwise defaults to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    pub fields: Vec<FieldSpec>,
}

impl RecordType {
    pub fn new(name: &str, fields: Vec<FieldSpec>) -> Self {
        RecordType {
            name: name.to_string(),
            table: None,
            fields,
        }
    }

    pub fn builder(name: &str) -> RecordTypeBuilder {
        RecordTypeBuilder::new(name)
    }

    pub fn with_table_name(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    pub fn table_name(&self) -> &str {
        self.table.as_deref().unwrap_or(&self.name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Accepts field descriptors one at a time, in declaration order.
#[derive(Debug, Clone)]
pub struct RecordTypeBuilder {
    record: RecordType,
}

impl RecordTypeBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            record: RecordType::new(name, Vec::new()),
        }
    }

    pub fn field<T: FieldType>(self, name: &str) -> Self {
        self.declared(name, T::declared_type(), None)
    }

    pub fn annotated<T: FieldType>(self, name: &str, annotation: &str) -> Self {
        self.declared(name, T::declared_type(), Some(annotation))
    }

    pub fn declared(mut self, name: &str, declared: DeclaredType, annotation: Option<&str>) -> Self {
        let mut field = FieldSpec::new(name, declared);
        if let Some(annotation) = annotation {
            field = field.with_annotation(annotation);
        }
        self.record.fields.push(field);
        self
    }

    pub fn table_name(mut self, table: &str) -> Self {
        self.record.table = Some(table.to_string());
        self
    }

    pub fn build(self) -> RecordType {
        self.record
    }
}

/// Implemented by row structs that describe their own record type, so a load
/// can be driven by the type alone.
pub trait Record {
    fn record_type() -> RecordType;
}
