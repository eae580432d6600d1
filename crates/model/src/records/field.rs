//! Declared field types of a record description.
//!
//! A `DeclaredType` is the host-side type of a record field, before it is
//! classified into a column kind. Rust types map onto it through
//! [`FieldType`], so a record description built with
//! `RecordTypeBuilder::field::<T>` is checked at compile time.

use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeclaredType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    String,
    Optional(Box<DeclaredType>),
    Composite(String),
    List(Box<DeclaredType>),
    Other(String),
}

impl DeclaredType {
    pub fn optional(inner: DeclaredType) -> Self {
        DeclaredType::Optional(Box::new(inner))
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            DeclaredType::I8
                | DeclaredType::I16
                | DeclaredType::I32
                | DeclaredType::I64
                | DeclaredType::Isize
                | DeclaredType::U8
                | DeclaredType::U16
                | DeclaredType::U32
                | DeclaredType::U64
                | DeclaredType::Usize
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, DeclaredType::F32 | DeclaredType::F64)
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredType::Bool => f.write_str("bool"),
            DeclaredType::I8 => f.write_str("i8"),
            DeclaredType::I16 => f.write_str("i16"),
            DeclaredType::I32 => f.write_str("i32"),
            DeclaredType::I64 => f.write_str("i64"),
            DeclaredType::Isize => f.write_str("isize"),
            DeclaredType::U8 => f.write_str("u8"),
            DeclaredType::U16 => f.write_str("u16"),
            DeclaredType::U32 => f.write_str("u32"),
            DeclaredType::U64 => f.write_str("u64"),
            DeclaredType::Usize => f.write_str("usize"),
            DeclaredType::F32 => f.write_str("f32"),
            DeclaredType::F64 => f.write_str("f64"),
            DeclaredType::String => f.write_str("String"),
            DeclaredType::Optional(inner) => write!(f, "Option<{inner}>"),
            DeclaredType::Composite(name) => f.write_str(name),
            DeclaredType::List(inner) => write!(f, "Vec<{inner}>"),
            DeclaredType::Other(name) => f.write_str(name),
        }
    }
}

impl FromStr for DeclaredType {
    type Err = Infallible;

    /// Parses a type name such as `i64`, `String` or `Option<f64>`.
    /// Names that are not recognised become `Other` and are rejected later,
    /// when the record is resolved into a schema.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        if let Some(inner) = strip_generic(name, "Option") {
            return Ok(DeclaredType::optional(inner.parse()?));
        }
        if let Some(inner) = strip_generic(name, "Vec") {
            return Ok(DeclaredType::List(Box::new(inner.parse()?)));
        }

        let declared = match name {
            "bool" => DeclaredType::Bool,
            "i8" => DeclaredType::I8,
            "i16" => DeclaredType::I16,
            "i32" => DeclaredType::I32,
            "i64" => DeclaredType::I64,
            "isize" => DeclaredType::Isize,
            "u8" => DeclaredType::U8,
            "u16" => DeclaredType::U16,
            "u32" => DeclaredType::U32,
            "u64" => DeclaredType::U64,
            "usize" => DeclaredType::Usize,
            "f32" => DeclaredType::F32,
            "f64" => DeclaredType::F64,
            "String" | "string" | "str" | "&str" => DeclaredType::String,
            other => DeclaredType::Other(other.to_string()),
        };
        Ok(declared)
    }
}

impl From<String> for DeclaredType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(declared) => declared,
            Err(never) => match never {},
        }
    }
}

impl From<DeclaredType> for String {
    fn from(declared: DeclaredType) -> Self {
        declared.to_string()
    }
}

fn strip_generic<'a>(name: &'a str, wrapper: &str) -> Option<&'a str> {
    name.strip_prefix(wrapper)?
        .trim_start()
        .strip_prefix('<')?
        .strip_suffix('>')
}

/// Maps a Rust type onto the field type it declares in a record description.
pub trait FieldType {
    fn declared_type() -> DeclaredType;
}

macro_rules! impl_field_type {
    ($($ty:ty => $declared:ident),* $(,)?) => {
        $(
            impl FieldType for $ty {
                fn declared_type() -> DeclaredType {
                    DeclaredType::$declared
                }
            }
        )*
    };
}

impl_field_type! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => String,
    &str => String,
}

impl<T: FieldType> FieldType for Option<T> {
    fn declared_type() -> DeclaredType {
        DeclaredType::optional(T::declared_type())
    }
}

impl<T: FieldType> FieldType for Vec<T> {
    fn declared_type() -> DeclaredType {
        DeclaredType::List(Box::new(T::declared_type()))
    }
}
