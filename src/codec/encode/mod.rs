// Encode module for the Fulmen data format

pub mod basic;
pub mod complex;

use tracing::trace;

use crate::codec::types::Value;
use crate::internal::error::Result;
use crate::schema::types::SchemaNode;

/// Encodes a value against a schema node into a fresh buffer.
///
/// The walk is lock-step: every schema node consumes exactly one value of
/// the matching shape, and a mismatch fails with `Error::SchemaMismatch`.
/// The output carries no type tags; the schema alone determines the layout.
pub fn encode(value: &Value, schema: &SchemaNode) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    encode_value(value, schema, &mut buf)?;
    trace!(encoded_len = buf.len(), "encoded value");
    Ok(buf)
}

/// Dispatches one value/schema pair to the basic or complex encoder.
pub(crate) fn encode_value(value: &Value, schema: &SchemaNode, buf: &mut Vec<u8>) -> Result<()> {
    match schema {
        SchemaNode::Primitive(primitive) => basic::encode_primitive(value, *primitive, buf),
        // The encoder is representation-agnostic: the hint is for the decoder
        SchemaNode::String(_) => basic::encode_string(value, buf),
        SchemaNode::Array(item_schema) => complex::encode_array(value, item_schema, buf),
        SchemaNode::Record(record) => complex::encode_record(value, record, buf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::types::StringValue;
    use crate::schema::types::{PrimitiveType, StringRepresentation};

    #[test]
    fn test_encode_is_representation_agnostic() {
        // Native and opaque payloads with the same content produce the
        // same bytes under any string hint
        let native = Value::String(StringValue::native("test"));
        let opaque = Value::String(StringValue::opaque(bytes::Bytes::from_static(b"test")));

        let hinted = SchemaNode::String(StringRepresentation::Native);
        let unhinted = SchemaNode::String(StringRepresentation::Default);

        let reference = encode(&native, &hinted).unwrap();
        assert_eq!(encode(&native, &unhinted).unwrap(), reference);
        assert_eq!(encode(&opaque, &hinted).unwrap(), reference);
        assert_eq!(encode(&opaque, &unhinted).unwrap(), reference);
    }

    #[test]
    fn test_encode_shape_mismatch() {
        let result = encode(&Value::Int32(1), &SchemaNode::Primitive(PrimitiveType::Int64));
        assert!(matches!(result, Err(crate::internal::error::Error::SchemaMismatch(_))));
    }
}
