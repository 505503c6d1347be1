// Schema module for the Fulmen data format
//
// This module provides the schema type system, the JSON schema parser, and
// the mapping rules between schema nodes and runtime values:
//
// 1. Typed schema tree with ordered record fields and string hints
// 2. JSON schema text parser with named-type references
// 3. Representation decision for decoded string payloads
// 4. Schema-directed JSON <-> value conversions

// Re-export public types and functions
pub use self::mapper::{json_to_value, representation_for, value_to_json};
pub use self::parser::SchemaParser;
pub use self::types::{Field, PrimitiveType, RecordSchema, SchemaNode, StringRepresentation};

// Sub-modules
pub mod mapper;
pub mod parser;
pub mod types;
