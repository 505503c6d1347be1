use crate::codec::decode::{decode_value, Reader};
use crate::codec::types::Value;
use crate::internal::error::Result;
use crate::schema::types::{RecordSchema, SchemaNode};

/// Decodes a count-prefixed array of one element type.
pub fn decode_array(reader: &mut Reader<'_>, item_schema: &SchemaNode) -> Result<Value> {
    let count = reader.read_length()?;
    let mut items = Vec::new();
    for _ in 0..count {
        items.push(decode_value(reader, item_schema)?);
    }
    Ok(Value::Array(items))
}

/// Decodes a record's fields in declared order.
pub fn decode_record(reader: &mut Reader<'_>, record: &RecordSchema) -> Result<Value> {
    let mut values = Vec::with_capacity(record.fields.len());
    for field in &record.fields {
        values.push(decode_value(reader, &field.node)?);
    }
    Ok(Value::Record(values))
}
