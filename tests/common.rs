//! Common test utilities for building generation payloads and envelopes.
use async_trait::async_trait;
use seiri::prelude::*;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// Timestamp used by every fixed-clock pipeline in the tests.
#[allow(dead_code)]
pub const STAMP: i64 = 1_700_000_000_000;

/// One operation "Armoire" with a single checkpoint work unit "Etat".
#[allow(dead_code)]
pub const ARMOIRE_JSON: &str = r#"{"listOperations":[{"operationLabel":"Armoire","listUnitWorks":[{"workUnitLabel":"Etat","workUnitType":"0"}]}]}"#;

/// Encode text as a JSON string literal, i.e. add one encoding layer.
#[allow(dead_code)]
pub fn encode(text: &str) -> String {
    serde_json::to_string(&Value::String(text.to_string())).expect("strings always serialize")
}

/// Encode text `depth` times.
#[allow(dead_code)]
pub fn encode_times(text: &str, depth: usize) -> String {
    (0..depth).fold(text.to_string(), |acc, _| encode(&acc))
}

#[allow(dead_code)]
pub fn envelope(key: &str, payload: &str) -> Value {
    let mut record = serde_json::Map::new();
    record.insert(key.to_string(), Value::String(payload.to_string()));
    Value::Object(record)
}

/// A pipeline with default settings and a frozen clock.
#[allow(dead_code)]
pub fn fixed_pipeline() -> Pipeline {
    Pipeline::builder().clock(Arc::new(FixedClock(STAMP))).build()
}

/// A three-operation inspection structure whose descriptions contain newlines.
#[allow(dead_code)]
pub fn inspection_structure() -> Value {
    json!({
        "label": "Visite annuelle",
        "identifiant": "VA-2024",
        "duration": "60",
        "active": true,
        "listOperations": [
            {
                "operationId": "OP1",
                "operationLabel": "Armoire electrique",
                "operationDescription": "Ligne 1\nLigne 2",
                "listUnitWorks": [
                    { "workUnitId": "WU1", "workUnitLabel": "Etat", "workUnitType": "0" },
                    {
                        "workUnitId": "WU2",
                        "workUnitLabel": "Calibre",
                        "workUnitType": "1",
                        "responseType": "3",
                        "responseValues": "16A, 20A, 32A",
                        "required": true
                    }
                ]
            },
            {
                "operationId": "OP2",
                "operationLabel": "Extincteur",
                "listUnitWorks": [
                    { "workUnitId": "WU1", "workUnitLabel": "Pression\nnominale", "workUnitType": "1", "responseType": "2" }
                ]
            },
            {
                "operationId": "OP3",
                "operationLabel": "Toiture",
                "listUnitWorks": []
            }
        ]
    })
}

/// Serialize a structure and leave its escaped newlines as literal line breaks,
/// the way a careless generation service does.
#[allow(dead_code)]
pub fn with_literal_newlines(structure: &Value) -> String {
    serde_json::to_string(structure)
        .expect("values always serialize")
        .replace("\\n", "\n")
}

/// A generation client answering every call with the same canned response.
#[allow(dead_code)]
pub struct CannedClient {
    response: std::result::Result<Value, TransportError>,
    prompts: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl CannedClient {
    pub fn answering(response: Value) -> Self {
        Self {
            response: Ok(response),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: TransportError) -> Self {
        Self {
            response: Err(error),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt log poisoned").clone()
    }
}

#[async_trait]
impl GenerationClient for CannedClient {
    async fn send(&self, prompt: &str, _context: &Value) -> std::result::Result<Value, TransportError> {
        self.prompts
            .lock()
            .expect("prompt log poisoned")
            .push(prompt.to_string());
        self.response.clone()
    }
}
