// Schema to value mapping rules for Fulmen
//
// This module owns the representation decision for decoded string payloads
// and provides schema-directed conversions between JSON values and Fulmen
// runtime values, used by the command line tools and tests.

use bytes::Bytes;
use serde_json::Value as Json;

use crate::codec::types::{StringKind, StringValue, Value};
use crate::internal::error::{Error, Result};
use crate::schema::types::{PrimitiveType, SchemaNode, StringRepresentation};

/// Decides the in-memory string representation for a schema hint.
///
/// This is the single decision point the decoder consults when it
/// instantiates a string payload. The encoder never calls it: encoding
/// only needs bytes and a length, whatever the source representation.
pub fn representation_for(hint: &StringRepresentation) -> StringKind {
    match hint {
        StringRepresentation::Native => StringKind::Native,
        StringRepresentation::Default => StringKind::Opaque,
    }
}

/// Converts a JSON value to a Fulmen value, directed by the schema node.
///
/// String payloads are materialized in the representation the schema hint
/// selects, so values built from the same JSON against differently-hinted
/// schemas start out different. Binary fields take base64 text.
pub fn json_to_value(schema: &SchemaNode, json: &Json) -> Result<Value> {
    match (schema, json) {
        (SchemaNode::Primitive(PrimitiveType::Null), Json::Null) => Ok(Value::Null),
        (SchemaNode::Primitive(PrimitiveType::Boolean), Json::Bool(b)) => Ok(Value::Boolean(*b)),
        (SchemaNode::Primitive(PrimitiveType::Int32), Json::Number(n)) => {
            match n.as_i64() {
                Some(i) if i >= i32::MIN as i64 && i <= i32::MAX as i64 => Ok(Value::Int32(i as i32)),
                Some(i) => Err(Error::SchemaMismatch(format!("Value {} is out of range for int", i))),
                None => Err(Error::SchemaMismatch(format!("Cannot convert {} to int", n))),
            }
        }
        (SchemaNode::Primitive(PrimitiveType::Int64), Json::Number(n)) => match n.as_i64() {
            Some(i) => Ok(Value::Int64(i)),
            None => Err(Error::SchemaMismatch(format!("Cannot convert {} to long", n))),
        },
        (SchemaNode::Primitive(PrimitiveType::Float32), Json::Number(n)) => match n.as_f64() {
            Some(f) => Ok(Value::Float32(f as f32)),
            None => Err(Error::SchemaMismatch(format!("Cannot convert {} to float", n))),
        },
        (SchemaNode::Primitive(PrimitiveType::Float64), Json::Number(n)) => match n.as_f64() {
            Some(f) => Ok(Value::Float64(f)),
            None => Err(Error::SchemaMismatch(format!("Cannot convert {} to double", n))),
        },
        (SchemaNode::Primitive(PrimitiveType::Binary), Json::String(s)) => {
            // Binary data travels base64-encoded in JSON data files
            match base64::decode(s) {
                Ok(bytes) => Ok(Value::Bytes(Bytes::from(bytes))),
                Err(e) => Err(Error::SchemaMismatch(format!("Invalid base64 data: {}", e))),
            }
        }
        (SchemaNode::String(hint), Json::String(s)) => {
            let value = match representation_for(hint) {
                StringKind::Native => StringValue::Native(s.clone()),
                StringKind::Opaque => StringValue::Opaque(Bytes::from(s.clone().into_bytes())),
            };
            Ok(Value::String(value))
        }
        (SchemaNode::Array(item_schema), Json::Array(items)) => {
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                values.push(json_to_value(item_schema, item)?);
            }
            Ok(Value::Array(values))
        }
        (SchemaNode::Record(record), Json::Object(obj)) => {
            let mut values = Vec::with_capacity(record.fields.len());
            for field in &record.fields {
                let field_json = obj.get(&field.name).ok_or_else(|| {
                    Error::SchemaMismatch(format!(
                        "JSON object is missing field '{}' of record '{}'",
                        field.name, record.name
                    ))
                })?;
                values.push(json_to_value(&field.node, field_json)?);
            }
            Ok(Value::Record(values))
        }
        (expected, actual) => Err(Error::SchemaMismatch(format!(
            "JSON value {:?} does not match schema type '{}'",
            actual,
            expected.type_name()
        ))),
    }
}

/// Converts a Fulmen value back to JSON, directed by the schema node.
///
/// Opaque string payloads are converted through their fallible UTF-8
/// check; binary fields come back as base64 text.
pub fn value_to_json(schema: &SchemaNode, value: &Value) -> Result<Json> {
    match (schema, value) {
        (SchemaNode::Primitive(PrimitiveType::Null), Value::Null) => Ok(Json::Null),
        (SchemaNode::Primitive(PrimitiveType::Boolean), Value::Boolean(b)) => Ok(Json::Bool(*b)),
        (SchemaNode::Primitive(PrimitiveType::Int32), Value::Int32(i)) => Ok(Json::from(*i)),
        (SchemaNode::Primitive(PrimitiveType::Int64), Value::Int64(i)) => Ok(Json::from(*i)),
        (SchemaNode::Primitive(PrimitiveType::Float32), Value::Float32(f)) => Ok(Json::from(*f)),
        (SchemaNode::Primitive(PrimitiveType::Float64), Value::Float64(f)) => Ok(Json::from(*f)),
        (SchemaNode::Primitive(PrimitiveType::Binary), Value::Bytes(bytes)) => {
            Ok(Json::String(base64::encode(bytes)))
        }
        (SchemaNode::String(_), Value::String(s)) => Ok(Json::String(s.as_str()?.to_owned())),
        (SchemaNode::Array(item_schema), Value::Array(items)) => {
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                values.push(value_to_json(item_schema, item)?);
            }
            Ok(Json::Array(values))
        }
        (SchemaNode::Record(record), Value::Record(values)) => {
            if record.fields.len() != values.len() {
                return Err(Error::SchemaMismatch(format!(
                    "Record '{}' has {} fields, value has {}",
                    record.name,
                    record.fields.len(),
                    values.len()
                )));
            }
            let mut obj = serde_json::Map::with_capacity(values.len());
            for (field, value) in record.fields.iter().zip(values) {
                obj.insert(field.name.clone(), value_to_json(&field.node, value)?);
            }
            Ok(Json::Object(obj))
        }
        (expected, actual) => Err(Error::SchemaMismatch(format!(
            "Value {} does not match schema type '{}'",
            actual.kind_name(),
            expected.type_name()
        ))),
    }
}
