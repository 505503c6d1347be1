// Inspector tool for the Fulmen data format
//
// Decodes a binary file against a schema and prints a hex dump of the
// buffer plus the decoded value tree, annotating every string payload
// with the concrete in-memory representation the decoding schema's hints
// produced.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use fulmen::{decode, Result, SchemaNode, SchemaParser, StringValue, Value};

#[derive(Parser)]
#[command(name = "fulmen-inspector", about = "Inspect Fulmen binary buffers against a schema")]
struct Cli {
    /// Path to the schema definition text
    #[arg(long)]
    schema: PathBuf,
    /// Path to the encoded binary file
    #[arg(long)]
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let schema = load_schema(&cli.schema)?;
    let data = fs::read(&cli.input)?;

    println!("buffer: {} bytes", data.len());
    print_hex_dump(&data);

    let value = decode(&data, &schema)?;
    println!();
    print_value(&value, &schema, 0);
    Ok(())
}

fn load_schema(path: &Path) -> Result<SchemaNode> {
    let text = fs::read_to_string(path)?;
    SchemaParser::new().parse_str(&text)
}

/// Prints the buffer in 16-byte hex rows with offsets.
fn print_hex_dump(data: &[u8]) {
    for (row, chunk) in data.chunks(16).enumerate() {
        let hex_bytes: Vec<String> = chunk.iter().map(|b| hex::encode([*b])).collect();
        println!("{:08x}  {}", row * 16, hex_bytes.join(" "));
    }
}

/// Prints the value tree in lock-step with the schema, so record fields
/// appear under their declared names.
fn print_value(value: &Value, schema: &SchemaNode, indent: usize) {
    let pad = "  ".repeat(indent);
    match (value, schema) {
        (Value::String(payload), SchemaNode::String(_)) => {
            println!("{}{}", pad, describe_string(payload));
        }
        (Value::Array(items), SchemaNode::Array(item_schema)) => {
            println!("{}array ({} elements)", pad, items.len());
            for item in items {
                print_value(item, item_schema, indent + 1);
            }
        }
        (Value::Record(values), SchemaNode::Record(record)) => {
            println!("{}record {}", pad, record.name);
            for (field, field_value) in record.fields.iter().zip(values) {
                println!("{}  {}:", pad, field.name);
                print_value(field_value, &field.node, indent + 2);
            }
        }
        (Value::Bytes(bytes), _) => {
            println!("{}bytes ({}) {}", pad, bytes.len(), hex::encode(bytes));
        }
        (other, _) => {
            println!("{}{:?}", pad, other);
        }
    }
}

fn describe_string(payload: &StringValue) -> String {
    match payload {
        StringValue::Native(s) => format!("\"{}\" (native string)", s),
        StringValue::Opaque(b) => format!(
            "\"{}\" (opaque wrapper, {} bytes)",
            String::from_utf8_lossy(b),
            b.len()
        ),
    }
}
