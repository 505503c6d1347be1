use crate::codec::types::Value;
use crate::internal::error::{Error, Result};
use crate::schema::types::PrimitiveType;

/// Writes a 4-byte unsigned little-endian length or count prefix.
///
/// Lengths above the prefix range are an encoding error, not a silent
/// truncation.
pub(crate) fn write_length(len: usize, buf: &mut Vec<u8>) -> Result<()> {
    let len = u32::try_from(len).map_err(|_| {
        Error::InvalidEncoding(format!("Length {} does not fit the 4-byte wire prefix", len))
    })?;
    buf.extend_from_slice(&len.to_le_bytes());
    Ok(())
}

/// Encodes a primitive value in its fixed little-endian layout.
pub fn encode_primitive(value: &Value, primitive: PrimitiveType, buf: &mut Vec<u8>) -> Result<()> {
    match (primitive, value) {
        (PrimitiveType::Null, Value::Null) => Ok(()),
        (PrimitiveType::Boolean, Value::Boolean(v)) => {
            buf.push(*v as u8);
            Ok(())
        }
        (PrimitiveType::Int32, Value::Int32(v)) => {
            buf.extend_from_slice(&v.to_le_bytes());
            Ok(())
        }
        (PrimitiveType::Int64, Value::Int64(v)) => {
            buf.extend_from_slice(&v.to_le_bytes());
            Ok(())
        }
        (PrimitiveType::Float32, Value::Float32(v)) => {
            buf.extend_from_slice(&v.to_le_bytes());
            Ok(())
        }
        (PrimitiveType::Float64, Value::Float64(v)) => {
            buf.extend_from_slice(&v.to_le_bytes());
            Ok(())
        }
        (PrimitiveType::Binary, Value::Bytes(v)) => {
            write_length(v.len(), buf)?;
            buf.extend_from_slice(v);
            Ok(())
        }
        (expected, actual) => Err(Error::SchemaMismatch(format!(
            "Expected {} value, got {}",
            expected.type_name(),
            actual.kind_name()
        ))),
    }
}

/// Encodes a string payload as a length prefix plus raw UTF-8 bytes.
///
/// Opaque payloads are validated here, since nothing has checked them
/// before; non-UTF-8 bytes fail with `Error::InvalidEncoding`.
pub fn encode_string(value: &Value, buf: &mut Vec<u8>) -> Result<()> {
    let payload = match value {
        Value::String(s) => s,
        other => {
            return Err(Error::SchemaMismatch(format!(
                "Expected string value, got {}",
                other.kind_name()
            )))
        }
    };

    let raw = payload.as_bytes();
    std::str::from_utf8(raw)
        .map_err(|e| Error::InvalidEncoding(format!("Invalid UTF-8 string: {}", e)))?;

    write_length(raw.len(), buf)?;
    buf.extend_from_slice(raw);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::types::StringValue;
    use bytes::Bytes;

    #[test]
    fn test_encode_primitive_layouts() {
        let mut buf = Vec::new();
        encode_primitive(&Value::Null, PrimitiveType::Null, &mut buf).unwrap();
        assert!(buf.is_empty());

        let mut buf = Vec::new();
        encode_primitive(&Value::Boolean(true), PrimitiveType::Boolean, &mut buf).unwrap();
        assert_eq!(buf, vec![1]);

        let mut buf = Vec::new();
        encode_primitive(&Value::Int32(-1), PrimitiveType::Int32, &mut buf).unwrap();
        assert_eq!(buf, vec![0xff, 0xff, 0xff, 0xff]);

        let mut buf = Vec::new();
        encode_primitive(&Value::Int64(1234567890), PrimitiveType::Int64, &mut buf).unwrap();
        assert_eq!(buf, vec![0xd2, 0x02, 0x96, 0x49, 0x00, 0x00, 0x00, 0x00]);

        let mut buf = Vec::new();
        encode_primitive(&Value::Float32(3.14f32), PrimitiveType::Float32, &mut buf).unwrap();
        assert_eq!(buf, vec![0xc3, 0xf5, 0x48, 0x40]);

        let mut buf = Vec::new();
        encode_primitive(&Value::Float64(3.14), PrimitiveType::Float64, &mut buf).unwrap();
        assert_eq!(buf, vec![0x1f, 0x85, 0xeb, 0x51, 0xb8, 0x1e, 0x09, 0x40]);
    }

    #[test]
    fn test_encode_binary_length_prefixed() {
        let mut buf = Vec::new();
        encode_primitive(
            &Value::Bytes(Bytes::from_static(b"raw data")),
            PrimitiveType::Binary,
            &mut buf,
        )
        .unwrap();
        assert_eq!(&buf[..4], &[0x08, 0x00, 0x00, 0x00]);
        assert_eq!(&buf[4..], b"raw data");
    }

    #[test]
    fn test_encode_string_length_prefixed() {
        let mut buf = Vec::new();
        encode_string(&Value::String(StringValue::native("hello")), &mut buf).unwrap();
        assert_eq!(buf, vec![0x05, 0x00, 0x00, 0x00, 0x68, 0x65, 0x6c, 0x6c, 0x6f]);

        // Multi-byte UTF-8 counts bytes, not characters
        let mut buf = Vec::new();
        encode_string(
            &Value::String(StringValue::opaque(Bytes::from_static("你好".as_bytes()))),
            &mut buf,
        )
        .unwrap();
        assert_eq!(&buf[..4], &[0x06, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_encode_string_invalid_utf8() {
        let mut buf = Vec::new();
        let result = encode_string(
            &Value::String(StringValue::opaque(Bytes::from_static(&[0xff, 0xfe]))),
            &mut buf,
        );
        assert!(matches!(result, Err(Error::InvalidEncoding(_))));
    }

    #[test]
    fn test_encode_primitive_mismatch() {
        let mut buf = Vec::new();
        let result = encode_primitive(&Value::Boolean(true), PrimitiveType::Int32, &mut buf);
        assert!(matches!(result, Err(Error::SchemaMismatch(_))));
    }
}
