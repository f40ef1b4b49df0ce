use serde_json::{Map, Value};
use tracing::debug;

/// Keys that may carry the generated payload, in priority order.
pub const PAYLOAD_KEYS: [&str; 3] = ["output", "result", "data"];

/// The shapes a generation service response body is known to take.
#[derive(Debug, Clone, Copy)]
pub enum ResponseEnvelope<'a> {
    /// A single record, e.g. `{ "output": "..." }`.
    Record(&'a Map<String, Value>),
    /// A non-empty sequence of records; only the first one is inspected.
    Batch(&'a [Value]),
    /// Anything else: scalars, empty arrays, arrays not starting with a record.
    Unknown(&'a Value),
}

impl<'a> ResponseEnvelope<'a> {
    pub fn classify(raw: &'a Value) -> Self {
        match raw {
            Value::Object(map) => ResponseEnvelope::Record(map),
            Value::Array(items) if !items.is_empty() => ResponseEnvelope::Batch(items),
            other => ResponseEnvelope::Unknown(other),
        }
    }

    /// The record holding the payload keys, if the envelope has one.
    pub fn record(&self) -> Option<&'a Map<String, Value>> {
        match *self {
            ResponseEnvelope::Record(map) => Some(map),
            ResponseEnvelope::Batch(items) => items.first().and_then(Value::as_object),
            ResponseEnvelope::Unknown(_) => None,
        }
    }

    /// Locate the payload text: the first of `output`, `result`, `data` that is present.
    ///
    /// `null` and empty strings count as absent. Non-string values are handed
    /// back as compact JSON text so the unwrapper can parse them again.
    pub fn payload(&self) -> Option<String> {
        let record = self.record()?;
        PAYLOAD_KEYS.iter().find_map(|key| {
            let text = match record.get(*key)? {
                Value::Null => return None,
                Value::String(s) if s.is_empty() => return None,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            debug!(key = *key, payload_len = text.len(), "Located response payload");
            Some(text)
        })
    }
}

/// Extract the payload string from a raw response body.
pub fn extract(raw: &Value) -> Option<String> {
    ResponseEnvelope::classify(raw).payload()
}
