use clap::{Parser, ValueEnum};
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate loosely encoded generation-service responses for seiri
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_response.json")]
    output: String,

    /// Number of operations in the generated structure
    #[arg(long, default_value_t = 3)]
    operations: usize,

    /// Maximum number of work units per operation
    #[arg(long, default_value_t = 6)]
    max_units: usize,

    /// How many times the structure is encoded as a JSON string (0 keeps it as an object)
    #[arg(long, default_value_t = 2)]
    depth: usize,

    /// Leave literal newlines inside string values of the innermost encoding
    #[arg(long)]
    newlines: bool,

    /// Use single quotes instead of double quotes in the innermost encoding
    #[arg(long)]
    single_quotes: bool,

    /// Reuse the same upstream identifier for every operation and work unit
    #[arg(long)]
    repeat_ids: bool,

    /// Envelope key holding the payload
    #[arg(long, value_enum, default_value_t = EnvelopeKey::Output)]
    key: EnvelopeKey,

    /// Wrap the envelope in a single-element array
    #[arg(long)]
    batch: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EnvelopeKey {
    Output,
    Result,
    Data,
}

impl EnvelopeKey {
    fn as_str(&self) -> &'static str {
        match self {
            EnvelopeKey::Output => "output",
            EnvelopeKey::Result => "result",
            EnvelopeKey::Data => "data",
        }
    }
}

const EQUIPMENT: [&str; 6] = [
    "Armoire electrique",
    "Extincteur",
    "Porte coupe-feu",
    "Eclairage de secours",
    "Chaudiere",
    "Toiture",
];

const CHECKS: [&str; 8] = [
    "Etat general",
    "Date de controle",
    "Pression",
    "Signaletique",
    "Fixation",
    "Proprete",
    "Note globale",
    "Conformite",
];

const CHOICES: [&str; 3] = ["Bon, Moyen, Mauvais", "Oui,Non", " A , B ,, C "];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!(
        "Generating a structure with {} operation(s), encoded {} time(s)...",
        cli.operations, cli.depth
    );

    let structure = generate_structure(&mut rng, &cli);
    let payload = encode_payload(&structure, &cli)?;

    let mut envelope = serde_json::Map::new();
    envelope.insert(cli.key.as_str().to_string(), payload);
    let envelope = if cli.batch {
        Value::Array(vec![Value::Object(envelope)])
    } else {
        Value::Object(envelope)
    };

    fs::write(&cli.output, serde_json::to_string_pretty(&envelope)?)?;
    println!("Successfully saved generated response to '{}'", cli.output);

    Ok(())
}

fn generate_structure(rng: &mut ThreadRng, cli: &Cli) -> Value {
    let operations: Vec<Value> = (0..cli.operations)
        .map(|i| {
            let unit_count = rng.random_range(1..=cli.max_units.max(1));
            let units: Vec<Value> = (0..unit_count)
                .map(|j| generate_work_unit(rng, cli, j))
                .collect();
            let id = if cli.repeat_ids {
                "OP".to_string()
            } else {
                format!("OP{}", i + 1)
            };
            json!({
                "operationId": id,
                "operationLabel": EQUIPMENT.choose(rng).copied().unwrap_or("Equipement"),
                "operationDescription": "Verification annuelle\nselon la reglementation",
                "listUnitWorks": units,
            })
        })
        .collect();

    json!({
        "label": "Fiche de visite",
        "identifiant": format!("FV-{}", rng.random_range(100..1000)),
        "duration": "45",
        "active": rng.random_bool(0.8),
        "listOperations": operations,
    })
}

fn generate_work_unit(rng: &mut ThreadRng, cli: &Cli, index: usize) -> Value {
    let id = if cli.repeat_ids {
        "WU".to_string()
    } else {
        format!("WU{}", index + 1)
    };
    // Mostly valid codes, with the occasional unknown one.
    let work_unit_type = if rng.random_bool(0.3) { "0" } else { "1" };
    let response_type = rng.random_range(1..=9).to_string();

    let mut unit = json!({
        "workUnitId": id,
        "workUnitLabel": CHECKS.choose(rng).copied().unwrap_or("Controle"),
        "workUnitType": work_unit_type,
        "responseType": response_type,
        "required": rng.random_bool(0.5),
    });
    if response_type == "3" || response_type == "6" {
        unit["responseValues"] = json!(CHOICES.choose(rng).copied().unwrap_or("Oui,Non"));
    }
    unit
}

/// Encode `structure` `depth` times, damaging the innermost layer as requested.
fn encode_payload(structure: &Value, cli: &Cli) -> Result<Value, serde_json::Error> {
    if cli.depth == 0 {
        return Ok(structure.clone());
    }

    let mut text = serde_json::to_string(structure)?;
    if cli.newlines {
        text = text.replace("\\n", "\n");
    }
    if cli.single_quotes {
        text = text.replace('"', "'");
    }
    for _ in 1..cli.depth {
        text = serde_json::to_string(&Value::String(text))?;
    }
    Ok(Value::String(text))
}
