// JSON schema parser for Fulmen
//
// This module parses JSON schema definition texts into SchemaNode trees.
// Records defined earlier in a parse may be referenced by name from later
// fields. String representation hints are read from the text alone, so
// each parse carries its own hint assignment; two parses are never unified
// even when their field layouts agree.

use std::collections::HashMap;
use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;

use crate::internal::error::{Error, Result};
use crate::schema::types::{Field, PrimitiveType, RecordSchema, SchemaNode, StringRepresentation};

/// Schema-text key carrying the string representation hint.
pub const REPRESENTATION_KEY: &str = "representation";

/// Hint value selecting the native representation.
pub const REPRESENTATION_NATIVE: &str = "native";

/// Hint value selecting the default (opaque wrapper) representation.
pub const REPRESENTATION_DEFAULT: &str = "default";

/// Parser for JSON schema definition texts.
///
/// A parser instance accumulates the record types defined during its
/// parses, making them referenceable by name. No partial tree is ever
/// returned: any malformed input fails the whole parse.
#[derive(Debug, Default)]
pub struct SchemaParser {
    /// Record types defined so far, by name
    named_types: HashMap<String, SchemaNode>,
}

impl SchemaParser {
    /// Creates a new schema parser.
    pub fn new() -> Self {
        Self {
            named_types: HashMap::new(),
        }
    }

    /// Parses a schema definition text into a SchemaNode.
    pub fn parse_str(&mut self, text: &str) -> Result<SchemaNode> {
        let json: Value = serde_json::from_str(text)
            .map_err(|e| Error::Parse(format!("Schema text is not valid JSON: {}", e)))?;
        self.parse_value(&json)
    }

    /// Parses an already-deserialized JSON schema definition.
    pub fn parse_value(&mut self, json: &Value) -> Result<SchemaNode> {
        match json {
            Value::String(name) => self.parse_type_name(name),
            Value::Object(obj) => self.parse_object(obj),
            _ => Err(Error::Parse(format!(
                "Schema definition must be a type name or an object, got {:?}",
                json
            ))),
        }
    }

    /// Resolves a bare type name: a primitive, "string", or a previously
    /// defined record.
    fn parse_type_name(&self, name: &str) -> Result<SchemaNode> {
        match name {
            "null" => Ok(SchemaNode::Primitive(PrimitiveType::Null)),
            "boolean" => Ok(SchemaNode::Primitive(PrimitiveType::Boolean)),
            "int" => Ok(SchemaNode::Primitive(PrimitiveType::Int32)),
            "long" => Ok(SchemaNode::Primitive(PrimitiveType::Int64)),
            "float" => Ok(SchemaNode::Primitive(PrimitiveType::Float32)),
            "double" => Ok(SchemaNode::Primitive(PrimitiveType::Float64)),
            "bytes" => Ok(SchemaNode::Primitive(PrimitiveType::Binary)),
            // A bare "string" carries no hint, so the default applies
            "string" => Ok(SchemaNode::String(StringRepresentation::Default)),
            "record" | "array" => Err(Error::Parse(format!(
                "'{}' must be declared as an object with its own attributes",
                name
            ))),
            other => self.named_types.get(other).cloned().ok_or_else(|| {
                Error::Parse(format!("Schema references undefined type '{}'", other))
            }),
        }
    }

    /// Parses an object-form type definition.
    fn parse_object(&mut self, obj: &serde_json::Map<String, Value>) -> Result<SchemaNode> {
        let type_name = match obj.get("type") {
            Some(Value::String(name)) => name.as_str(),
            Some(other) => {
                return Err(Error::Parse(format!(
                    "Schema \"type\" must be a string, got {:?}",
                    other
                )))
            }
            None => return Err(Error::Parse("Schema object must specify a \"type\"".to_string())),
        };

        match type_name {
            "record" => self.parse_record(obj),
            "array" => self.parse_array(obj),
            "string" => self.parse_string(obj),
            other => self.parse_type_name(other),
        }
    }

    /// Parses a record definition and registers it for later references.
    fn parse_record(&mut self, obj: &serde_json::Map<String, Value>) -> Result<SchemaNode> {
        let name = match obj.get("name") {
            Some(Value::String(name)) if !name.is_empty() => name.clone(),
            Some(_) => {
                return Err(Error::Parse("Record \"name\" must be a non-empty string".to_string()))
            }
            None => return Err(Error::Parse("Record schema must specify a \"name\"".to_string())),
        };

        if self.named_types.contains_key(&name) {
            return Err(Error::Parse(format!("Record type '{}' is already defined", name)));
        }

        let field_defs = match obj.get("fields") {
            Some(Value::Array(fields)) => fields,
            Some(_) => return Err(Error::Parse("Record \"fields\" must be an array".to_string())),
            None => return Err(Error::Parse("Record schema must specify \"fields\"".to_string())),
        };

        let mut fields = Vec::with_capacity(field_defs.len());
        let mut seen_names = HashSet::new();

        for field_def in field_defs {
            let field_obj = match field_def {
                Value::Object(obj) => obj,
                _ => return Err(Error::Parse("Record field must be an object".to_string())),
            };

            let field_name = match field_obj.get("name") {
                Some(Value::String(name)) if !name.is_empty() => name.clone(),
                _ => {
                    return Err(Error::Parse(format!(
                        "Field of record '{}' must specify a non-empty \"name\"",
                        name
                    )))
                }
            };

            if !seen_names.insert(field_name.clone()) {
                return Err(Error::Parse(format!(
                    "Duplicate field name '{}' in record '{}'",
                    field_name, name
                )));
            }

            let field_type = match field_obj.get("type") {
                Some(type_value) => self.parse_value(type_value)?,
                None => {
                    return Err(Error::Parse(format!(
                        "Field '{}' of record '{}' must specify a \"type\"",
                        field_name, name
                    )))
                }
            };

            fields.push(Field::new(field_name, field_type));
        }

        let node = SchemaNode::Record(RecordSchema::new(name.clone(), fields));
        self.named_types.insert(name.clone(), node.clone());
        debug!(record = %name, "registered named record type");
        Ok(node)
    }

    /// Parses an array definition.
    fn parse_array(&mut self, obj: &serde_json::Map<String, Value>) -> Result<SchemaNode> {
        match obj.get("items") {
            Some(items) => {
                let item_type = self.parse_value(items)?;
                Ok(SchemaNode::Array(Box::new(item_type)))
            }
            None => Err(Error::Parse("Array schema must specify \"items\"".to_string())),
        }
    }

    /// Parses a string definition, reading the optional representation hint.
    fn parse_string(&self, obj: &serde_json::Map<String, Value>) -> Result<SchemaNode> {
        let hint = match obj.get(REPRESENTATION_KEY) {
            None => StringRepresentation::Default,
            Some(Value::String(value)) => match value.as_str() {
                REPRESENTATION_NATIVE => StringRepresentation::Native,
                REPRESENTATION_DEFAULT => StringRepresentation::Default,
                other => {
                    return Err(Error::Parse(format!(
                        "Unknown \"{}\" value '{}', expected '{}' or '{}'",
                        REPRESENTATION_KEY, other, REPRESENTATION_NATIVE, REPRESENTATION_DEFAULT
                    )))
                }
            },
            Some(other) => {
                return Err(Error::Parse(format!(
                    "String \"{}\" must be a string, got {:?}",
                    REPRESENTATION_KEY, other
                )))
            }
        };
        Ok(SchemaNode::String(hint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primitive_names() {
        let mut parser = SchemaParser::new();
        assert_eq!(
            parser.parse_str("\"int\"").unwrap(),
            SchemaNode::Primitive(PrimitiveType::Int32)
        );
        assert_eq!(
            parser.parse_str("\"double\"").unwrap(),
            SchemaNode::Primitive(PrimitiveType::Float64)
        );
        assert_eq!(
            parser.parse_str("\"string\"").unwrap(),
            SchemaNode::String(StringRepresentation::Default)
        );
    }

    #[test]
    fn test_parse_string_hint() {
        let mut parser = SchemaParser::new();
        let native = parser
            .parse_str(r#"{"type":"string","representation":"native"}"#)
            .unwrap();
        assert_eq!(native, SchemaNode::String(StringRepresentation::Native));

        // Explicit "default" and absence of the key are equivalent
        let explicit = parser
            .parse_str(r#"{"type":"string","representation":"default"}"#)
            .unwrap();
        let absent = parser.parse_str(r#"{"type":"string"}"#).unwrap();
        assert_eq!(explicit, absent);
    }

    #[test]
    fn test_parse_string_hint_unknown_value() {
        let mut parser = SchemaParser::new();
        let result = parser.parse_str(r#"{"type":"string","representation":"boxed"}"#);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_record_with_array() {
        let mut parser = SchemaParser::new();
        let schema = parser
            .parse_str(
                r#"{
                    "type": "record",
                    "name": "Example",
                    "fields": [
                        {"name": "simpleString", "type": {"type": "string", "representation": "native"}},
                        {"name": "stringList", "type": {"type": "array", "items": {"type": "string", "representation": "native"}}}
                    ]
                }"#,
            )
            .unwrap();

        let record = match schema {
            SchemaNode::Record(record) => record,
            other => panic!("Expected record, got {:?}", other),
        };
        assert_eq!(record.name, "Example");
        assert_eq!(record.fields.len(), 2);
        assert_eq!(record.fields[0].name, "simpleString");
        assert_eq!(record.fields[0].node, SchemaNode::String(StringRepresentation::Native));
        assert_eq!(
            record.fields[1].node,
            SchemaNode::Array(Box::new(SchemaNode::String(StringRepresentation::Native)))
        );
    }

    #[test]
    fn test_parse_missing_type_key() {
        let mut parser = SchemaParser::new();
        let result = parser.parse_str(r#"{"name": "Example", "fields": []}"#);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_invalid_json() {
        let mut parser = SchemaParser::new();
        assert!(matches!(parser.parse_str("{\"type\":"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_named_type_reference() {
        let mut parser = SchemaParser::new();
        let schema = parser
            .parse_str(
                r#"{
                    "type": "record",
                    "name": "Outer",
                    "fields": [
                        {"name": "inner", "type": {
                            "type": "record",
                            "name": "Inner",
                            "fields": [{"name": "label", "type": "string"}]
                        }},
                        {"name": "more", "type": {"type": "array", "items": "Inner"}}
                    ]
                }"#,
            )
            .unwrap();

        let record = match schema {
            SchemaNode::Record(record) => record,
            other => panic!("Expected record, got {:?}", other),
        };
        let inner = &record.fields[0].node;
        assert_eq!(record.fields[1].node, SchemaNode::Array(Box::new(inner.clone())));
    }

    #[test]
    fn test_parse_undefined_type_reference() {
        let mut parser = SchemaParser::new();
        let result = parser.parse_str(
            r#"{
                "type": "record",
                "name": "Broken",
                "fields": [{"name": "missing", "type": "Nowhere"}]
            }"#,
        );
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_duplicate_field_name() {
        let mut parser = SchemaParser::new();
        let result = parser.parse_str(
            r#"{
                "type": "record",
                "name": "Doubled",
                "fields": [
                    {"name": "x", "type": "int"},
                    {"name": "x", "type": "long"}
                ]
            }"#,
        );
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_independent_parses_keep_their_own_hints() {
        // The same field layout parsed from two texts with different hints
        // yields two distinct schema instances
        let mut parser_a = SchemaParser::new();
        let mut parser_b = SchemaParser::new();
        let hinted = parser_a
            .parse_str(r#"{"type":"array","items":{"type":"string","representation":"native"}}"#)
            .unwrap();
        let unhinted = parser_b
            .parse_str(r#"{"type":"array","items":"string"}"#)
            .unwrap();
        assert_ne!(hinted, unhinted);
    }
}
