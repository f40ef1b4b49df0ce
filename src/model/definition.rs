use serde::{Deserialize, Serialize};
use std::fmt;

/// The validated, render-ready form structure produced by one pipeline invocation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_details: Option<RecordDetails>,
    pub operations: Vec<Operation>,
}

impl GeneratedResult {
    /// The result a malformed payload degrades to.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Total number of fields across all operations.
    pub fn field_count(&self) -> usize {
        self.operations.iter().map(|op| op.fields.len()).sum()
    }
}

/// Free-form metadata describing the generated form as a whole.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordDetails {
    pub name: String,
    pub functional_id: String,
    pub duration: String,
    pub active: bool,
}

/// A named grouping of fields, e.g. one inspected piece of equipment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Operation {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<Field>,
}

/// A single data-entry point within an operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Field {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
}

/// One choice of a `select` field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub id: String,
    pub label: String,
}

/// The closed set of field types the form editor can render.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Conforming / non-conforming / non-applicable assessment.
    Checkpoint,
    #[default]
    Text,
    Number,
    Select,
    Checkbox,
    Date,
    Rating,
}

impl FieldType {
    pub const ALL: [FieldType; 7] = [
        FieldType::Checkpoint,
        FieldType::Text,
        FieldType::Number,
        FieldType::Select,
        FieldType::Checkbox,
        FieldType::Date,
        FieldType::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Checkpoint => "checkpoint",
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Date => "date",
            FieldType::Rating => "rating",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
