// Command line tool for the Fulmen data format
//
// Loads schema texts and JSON data files from disk and runs them through
// the library's encoder and decoder. File I/O lives here; the library
// itself only ever sees schema text and in-memory buffers.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use fulmen::schema::{json_to_value, value_to_json, SchemaParser};
use fulmen::{decode, encode, round_trip, Error, Result, SchemaNode, StringValue, Value};

#[derive(Parser)]
#[command(name = "fulmen-cli", about = "Encode and decode Fulmen binary data against JSON schemas")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a JSON data file against a schema
    Encode {
        /// Path to the schema definition text
        #[arg(long)]
        schema: PathBuf,
        /// Path to the JSON data file
        #[arg(long)]
        input: PathBuf,
        /// Path for the encoded binary output
        #[arg(long)]
        output: PathBuf,
    },
    /// Decode a binary file against a schema and print it as JSON
    Decode {
        #[arg(long)]
        schema: PathBuf,
        #[arg(long)]
        input: PathBuf,
    },
    /// Encode then decode a JSON data file and report the result
    Roundtrip {
        #[arg(long)]
        schema: PathBuf,
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Encode { schema, input, output } => {
            let schema = load_schema(&schema)?;
            let value = load_value(&input, &schema)?;
            let encoded = encode(&value, &schema)?;
            fs::write(&output, &encoded)?;
            println!("Encoded {} bytes to {}", encoded.len(), output.display());
        }
        Command::Decode { schema, input } => {
            let schema = load_schema(&schema)?;
            let data = fs::read(&input)?;
            let value = decode(&data, &schema)?;
            println!("{}", serde_json::to_string_pretty(&value_to_json(&schema, &value)?)
                .map_err(|e| Error::Parse(format!("Cannot render decoded value: {}", e)))?);
        }
        Command::Roundtrip { schema, input } => {
            let schema = load_schema(&schema)?;
            let value = load_value(&input, &schema)?;
            let result = round_trip(&value, &schema)?;
            println!("{}", serde_json::to_string_pretty(&value_to_json(&schema, &result)?)
                .map_err(|e| Error::Parse(format!("Cannot render decoded value: {}", e)))?);
            report_strings(&result, "$");
        }
    }
    Ok(())
}

/// Reads a schema definition text from disk and parses it.
fn load_schema(path: &Path) -> Result<SchemaNode> {
    let text = fs::read_to_string(path)?;
    SchemaParser::new().parse_str(&text)
}

/// Reads a JSON data file and converts it to a value, directed by the schema.
fn load_value(path: &Path, schema: &SchemaNode) -> Result<Value> {
    let text = fs::read_to_string(path)?;
    let json: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| Error::Parse(format!("Data file is not valid JSON: {}", e)))?;
    json_to_value(schema, &json)
}

/// Prints the concrete representation of every string payload in the value.
fn report_strings(value: &Value, path: &str) {
    match value {
        Value::String(s) => {
            let kind = match s {
                StringValue::Native(_) => "native string",
                StringValue::Opaque(_) => "opaque wrapper",
            };
            println!("{} = {} ({}, {} bytes)", path, String::from_utf8_lossy(s.as_bytes()), kind, s.as_bytes().len());
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                report_strings(item, &format!("{}[{}]", path, i));
            }
        }
        Value::Record(fields) => {
            for (i, field) in fields.iter().enumerate() {
                report_strings(field, &format!("{}.{}", path, i));
            }
        }
        _ => {}
    }
}
