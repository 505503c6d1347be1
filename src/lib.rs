// Fulmen library entry point
//
// Fulmen is a schema-driven tagless binary codec. Schema definition texts
// are parsed into immutable typed trees, and runtime values are encoded to
// and decoded from a compact binary form against those trees. The decoder
// materializes string payloads in the representation the decoding schema's
// hints select, which makes representation divergence between schema
// instances observable rather than hidden.

pub mod codec;
pub mod internal;
pub mod schema;

pub use codec::types::{StringKind, StringValue, Value};
pub use codec::{decode, encode, round_trip};
pub use internal::error::{Error, Result};
pub use schema::parser::SchemaParser;
pub use schema::types::{Field, PrimitiveType, RecordSchema, SchemaNode, StringRepresentation};
