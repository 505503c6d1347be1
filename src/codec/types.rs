// Runtime value tree for the Fulmen data format

use bytes::Bytes;

use crate::internal::error::{Error, Result};

/// Concrete in-memory representation of a string payload.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StringKind {
    /// Directly usable native string
    Native,
    /// Opaque byte-backed wrapper
    Opaque,
}

/// A string payload in one of two in-memory representations.
///
/// `Native` is usable directly through general-purpose string APIs.
/// `Opaque` holds raw bytes and requires an explicit, fallible conversion
/// before use as a native string; its payload is not validated until then.
/// Structural equality distinguishes the two kinds; use [`content_eq`]
/// to compare payloads only.
///
/// [`content_eq`]: StringValue::content_eq
#[derive(Debug, PartialEq, Clone)]
pub enum StringValue {
    Native(String),
    Opaque(Bytes),
}

impl StringValue {
    /// Creates a native string value.
    pub fn native(s: impl Into<String>) -> Self {
        StringValue::Native(s.into())
    }

    /// Creates an opaque string value from raw bytes.
    pub fn opaque(bytes: impl Into<Bytes>) -> Self {
        StringValue::Opaque(bytes.into())
    }

    /// Returns which representation this payload uses.
    pub fn kind(&self) -> StringKind {
        match self {
            StringValue::Native(_) => StringKind::Native,
            StringValue::Opaque(_) => StringKind::Opaque,
        }
    }

    /// Returns the raw payload bytes, whatever the representation.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            StringValue::Native(s) => s.as_bytes(),
            StringValue::Opaque(b) => b.as_ref(),
        }
    }

    /// Converts to a native string slice.
    ///
    /// For the opaque representation this is where UTF-8 validation
    /// happens, and it can fail.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            StringValue::Native(s) => Ok(s.as_str()),
            StringValue::Opaque(b) => std::str::from_utf8(b)
                .map_err(|e| Error::InvalidEncoding(format!("Invalid UTF-8 string: {}", e))),
        }
    }

    /// Compares payload bytes, ignoring the representation.
    pub fn content_eq(&self, other: &StringValue) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

/// A runtime value mirroring a schema node shape.
///
/// Each subtree is exclusively owned by its parent. Record field values
/// are kept in the record's declared field order.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Null,
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Bytes(Bytes),
    String(StringValue),
    Array(Vec<Value>),
    Record(Vec<Value>),
}

impl Value {
    /// Returns a short name for this value's variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Int32(_) => "int",
            Value::Int64(_) => "long",
            Value::Float32(_) => "float",
            Value::Float64(_) => "double",
            Value::Bytes(_) => "bytes",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Record(_) => "record",
        }
    }

    /// Compares two values field by field, ignoring the in-memory
    /// representation of string payloads.
    pub fn content_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a.content_eq(b),
            (Value::Array(a), Value::Array(b)) | (Value::Record(a), Value::Record(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.content_eq(y))
            }
            (a, b) => a == b,
        }
    }
}
