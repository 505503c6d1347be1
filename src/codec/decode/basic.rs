use byteorder::{ByteOrder, LittleEndian};
use bytes::Bytes;

use crate::codec::decode::Reader;
use crate::codec::types::{StringKind, StringValue, Value};
use crate::internal::error::{Error, Result};
use crate::schema::mapper;
use crate::schema::types::{PrimitiveType, StringRepresentation};

/// Decodes a primitive value from its fixed little-endian layout.
pub fn decode_primitive(reader: &mut Reader<'_>, primitive: PrimitiveType) -> Result<Value> {
    match primitive {
        PrimitiveType::Null => Ok(Value::Null),
        PrimitiveType::Boolean => match reader.take(1)?[0] {
            0 => Ok(Value::Boolean(false)),
            1 => Ok(Value::Boolean(true)),
            other => Err(Error::InvalidEncoding(format!(
                "Invalid boolean byte {:#04x}",
                other
            ))),
        },
        PrimitiveType::Int32 => Ok(Value::Int32(LittleEndian::read_i32(reader.take(4)?))),
        PrimitiveType::Int64 => Ok(Value::Int64(LittleEndian::read_i64(reader.take(8)?))),
        PrimitiveType::Float32 => Ok(Value::Float32(LittleEndian::read_f32(reader.take(4)?))),
        PrimitiveType::Float64 => Ok(Value::Float64(LittleEndian::read_f64(reader.take(8)?))),
        PrimitiveType::Binary => {
            let len = reader.read_length()?;
            Ok(Value::Bytes(Bytes::copy_from_slice(reader.take(len)?)))
        }
    }
}

/// Decodes a string payload, instantiating it in the representation the
/// decoding schema's hint selects.
///
/// This is the single decision point for the representation divergence the
/// library makes observable: the same bytes decoded under differently
/// hinted schema instances come back in different in-memory forms. Native
/// payloads are UTF-8 validated here; opaque payloads keep their raw bytes
/// and validate only on explicit conversion.
pub fn decode_string(reader: &mut Reader<'_>, hint: &StringRepresentation) -> Result<Value> {
    let len = reader.read_length()?;
    let raw = reader.take(len)?;

    let payload = match mapper::representation_for(hint) {
        StringKind::Native => {
            let s = std::str::from_utf8(raw)
                .map_err(|e| Error::InvalidEncoding(format!("Invalid UTF-8 string: {}", e)))?;
            StringValue::Native(s.to_owned())
        }
        StringKind::Opaque => StringValue::Opaque(Bytes::copy_from_slice(raw)),
    };
    Ok(Value::String(payload))
}
