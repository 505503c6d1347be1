// Decode module for the Fulmen data format

pub mod basic;
pub mod complex;

use tracing::trace;

use crate::codec::types::Value;
use crate::internal::error::{Error, Result};
use crate::schema::types::SchemaNode;

/// Byte cursor over the input buffer with explicit bounds checks.
///
/// Every read goes through `take`, so a short buffer always surfaces as
/// `Error::Truncated` with the offset where the read failed.
pub(crate) struct Reader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Returns the number of unread bytes.
    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Current position in the buffer, for diagnostics.
    pub(crate) fn position(&self) -> usize {
        self.offset
    }

    /// Consumes and returns the next `len` bytes.
    pub(crate) fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(Error::Truncated(format!(
                "Need {} bytes at offset {}, only {} remain",
                len,
                self.offset,
                self.remaining()
            )));
        }
        let slice = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    /// Reads a 4-byte unsigned little-endian length or count prefix.
    pub(crate) fn read_length(&mut self) -> Result<usize> {
        use byteorder::{ByteOrder, LittleEndian};
        Ok(LittleEndian::read_u32(self.take(4)?) as usize)
    }
}

/// Decodes a buffer against a schema node.
///
/// Decoding is schema-driven and single-pass: the schema prescribes every
/// read, so the only failure modes are a buffer that ends too early and a
/// buffer that is not exactly consumed, both reported as `Error::Truncated`
/// (plus `Error::InvalidEncoding` for byte-level payload violations). The
/// representation of every decoded string payload is taken from *this*
/// schema's hints, never from whatever produced the bytes.
pub fn decode(data: &[u8], schema: &SchemaNode) -> Result<Value> {
    let mut reader = Reader::new(data);
    let value = decode_value(&mut reader, schema)?;
    if reader.remaining() != 0 {
        return Err(Error::Truncated(format!(
            "Decoding stopped at offset {} with {} trailing bytes unread",
            reader.position(),
            reader.remaining()
        )));
    }
    trace!(decoded_len = data.len(), "decoded value");
    Ok(value)
}

/// Dispatches one schema node to the basic or complex decoder.
pub(crate) fn decode_value(reader: &mut Reader<'_>, schema: &SchemaNode) -> Result<Value> {
    match schema {
        SchemaNode::Primitive(primitive) => basic::decode_primitive(reader, *primitive),
        SchemaNode::String(hint) => basic::decode_string(reader, hint),
        SchemaNode::Array(item_schema) => complex::decode_array(reader, item_schema),
        SchemaNode::Record(record) => complex::decode_record(reader, record),
    }
}
