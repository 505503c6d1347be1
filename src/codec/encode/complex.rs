use crate::codec::encode::basic::write_length;
use crate::codec::encode::encode_value;
use crate::codec::types::Value;
use crate::internal::error::{Error, Result};
use crate::schema::types::{RecordSchema, SchemaNode};

/// Encodes an array as a 4-byte element count followed by each element.
pub fn encode_array(value: &Value, item_schema: &SchemaNode, buf: &mut Vec<u8>) -> Result<()> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(Error::SchemaMismatch(format!(
                "Expected array value, got {}",
                other.kind_name()
            )))
        }
    };

    write_length(items.len(), buf)?;
    for item in items {
        encode_value(item, item_schema, buf)?;
    }
    Ok(())
}

/// Encodes a record as the concatenation of its field encodings, in the
/// schema's declared field order, with no separators.
pub fn encode_record(value: &Value, record: &RecordSchema, buf: &mut Vec<u8>) -> Result<()> {
    let values = match value {
        Value::Record(values) => values,
        other => {
            return Err(Error::SchemaMismatch(format!(
                "Expected record value for '{}', got {}",
                record.name,
                other.kind_name()
            )))
        }
    };

    if values.len() != record.fields.len() {
        return Err(Error::SchemaMismatch(format!(
            "Record '{}' has {} fields, value has {}",
            record.name,
            record.fields.len(),
            values.len()
        )));
    }

    for (field, field_value) in record.fields.iter().zip(values) {
        encode_value(field_value, &field.node, buf).map_err(|e| match e {
            Error::SchemaMismatch(msg) => Error::SchemaMismatch(format!(
                "Field '{}' of record '{}': {}",
                field.name, record.name, msg
            )),
            other => other,
        })?;
    }
    Ok(())
}
