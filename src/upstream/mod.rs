//! Read-only views over the structure emitted by the generation service.
//!
//! The service vocabulary (`listOperations`, `listUnitWorks`, `workUnitType`, ...)
//! is not contractually fixed, so nothing here assumes a key is present or has
//! the expected type. Every accessor returns an `Option` and the transformer
//! decides the defaults.

use serde_json::{Map, Value};

pub mod lenient;

use lenient::{code, flag, records, string, text};

/// Key holding the operation list of a generated structure.
pub const OPERATIONS_KEY: &str = "listOperations";

/// Top level of a generated structure.
#[derive(Debug, Clone, Copy)]
pub struct UpstreamStructure<'a> {
    record: &'a Map<String, Value>,
}

impl<'a> UpstreamStructure<'a> {
    /// Recognizes a value as a generated structure when it is an object whose
    /// `listOperations` is an array.
    pub fn detect(value: &'a Value) -> Option<Self> {
        let record = value.as_object()?;
        record.get(OPERATIONS_KEY)?.as_array()?;
        Some(Self { record })
    }

    pub fn label(&self) -> Option<String> {
        text(self.record, &["label"])
    }

    pub fn identifiant(&self) -> Option<String> {
        text(self.record, &["identifiant"])
    }

    pub fn duration(&self) -> Option<String> {
        text(self.record, &["duration"])
    }

    pub fn active(&self) -> Option<bool> {
        flag(self.record, &["active"])
    }

    pub fn operations(&self) -> Vec<UpstreamOperation<'a>> {
        records(self.record, &[OPERATIONS_KEY])
            .unwrap_or_default()
            .into_iter()
            .map(|record| UpstreamOperation { record })
            .collect()
    }
}

/// One entry of `listOperations`.
#[derive(Debug, Clone, Copy)]
pub struct UpstreamOperation<'a> {
    record: &'a Map<String, Value>,
}

impl<'a> UpstreamOperation<'a> {
    pub fn id(&self) -> Option<String> {
        text(self.record, &["operationId", "id"]).filter(|id| !id.trim().is_empty())
    }

    pub fn label(&self) -> Option<String> {
        text(self.record, &["operationLabel", "label", "name"])
    }

    pub fn description(&self) -> Option<String> {
        string(self.record, &["operationDescription", "description"])
    }

    pub fn work_units(&self) -> Vec<UpstreamWorkUnit<'a>> {
        records(self.record, &["listUnitWorks", "listWorkUnits"])
            .unwrap_or_default()
            .into_iter()
            .map(|record| UpstreamWorkUnit { record })
            .collect()
    }
}

/// One entry of an operation's `listUnitWorks`.
#[derive(Debug, Clone, Copy)]
pub struct UpstreamWorkUnit<'a> {
    record: &'a Map<String, Value>,
}

impl UpstreamWorkUnit<'_> {
    pub fn id(&self) -> Option<String> {
        text(self.record, &["workUnitId", "id"]).filter(|id| !id.trim().is_empty())
    }

    pub fn label(&self) -> Option<String> {
        text(self.record, &["workUnitLabel", "label"])
    }

    pub fn description(&self) -> Option<String> {
        string(self.record, &["workUnitDescription", "description"])
    }

    pub fn work_unit_type(&self) -> Option<String> {
        code(self.record, &["workUnitType"])
    }

    pub fn response_type(&self) -> Option<String> {
        code(self.record, &["responseType"])
    }

    pub fn required(&self) -> Option<bool> {
        flag(self.record, &["required"])
    }

    /// Comma-delimited choice list of a select field, only when given as a string.
    pub fn options_source(&self) -> Option<String> {
        string(self.record, &["responseValues", "options", "listValues"])
    }
}
