use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;

/// Default number of unwrap attempts before a payload is given up as plain text.
pub const DEFAULT_MAX_UNWRAP_ATTEMPTS: usize = 6;

/// Tunables of the normalization pipeline, loadable from a JSON file.
///
/// Every key is optional in the file; missing keys take the defaults below.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Upper bound on decode attempts performed by the unwrapper.
    pub max_unwrap_attempts: usize,
    /// Token used in an operation id when upstream supplied none.
    pub operation_id_fallback: String,
    /// Token used in a field id when upstream supplied none.
    pub field_id_fallback: String,
    /// Record name used when the payload carries no `label`.
    pub default_record_name: String,
    /// Prefix of the placeholder functional id, followed by the invocation timestamp.
    pub functional_id_prefix: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            max_unwrap_attempts: DEFAULT_MAX_UNWRAP_ATTEMPTS,
            operation_id_fallback: "operation".to_string(),
            field_id_fallback: "field".to_string(),
            default_record_name: "Nouvelle Fiche".to_string(),
            functional_id_prefix: "FICHE".to_string(),
        }
    }
}

impl NormalizerConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&content)
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_unwrap_attempts == 0 {
            return Err(ConfigError::InvalidUnwrapBound(self.max_unwrap_attempts));
        }
        Ok(())
    }

    /// Placeholder functional id for a record generated at `stamp`.
    pub fn placeholder_functional_id(&self, stamp: i64) -> String {
        format!("{}-{}", self.functional_id_prefix, stamp)
    }
}
