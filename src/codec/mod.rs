// Codec module for the Fulmen data format
//
// Wire format, fixed for the whole library: all multi-byte scalars are
// little-endian. `null` occupies zero bytes; `boolean` is one byte (0 or
// 1); `int` four bytes; `long` eight; `float` four; `double` eight.
// Strings and `bytes` are a 4-byte unsigned little-endian length prefix
// followed by the raw bytes. Arrays are a 4-byte unsigned little-endian
// element count followed by each element's encoding. Records are the
// concatenation of their fields' encodings in declared order, with no
// separators, no type tags, no magic bytes, and no version header: the
// schema is pre-agreed out of band and alone determines the layout.

pub mod decode;
pub mod encode;
pub mod types;

pub use decode::decode;
pub use encode::encode;

use crate::internal::error::Result;
use crate::schema::types::SchemaNode;
use types::Value;

/// Encodes `value` against `schema`, then immediately decodes the
/// resulting buffer with the same schema.
///
/// The harness always uses its single `schema` argument for both halves,
/// so a round trip through it preserves content and applies the schema's
/// own hints. Representation divergence arises only when callers run
/// encode and decode themselves against differently-annotated schema
/// instances they believe to be "the same" schema.
pub fn round_trip(value: &Value, schema: &SchemaNode) -> Result<Value> {
    let encoded = encode(value, schema)?;
    decode(&encoded, schema)
}
