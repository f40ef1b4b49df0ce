use crate::clock::{Clock, SystemClock};
use crate::config::NormalizerConfig;
use crate::error::PipelineError;
use crate::model::{FieldType, GeneratedResult};
use crate::response::extract;
use crate::transform::{Transformer, TypeMapping};
use crate::transport::GenerationClient;
use crate::unwrapper::{Unwrapped, Unwrapper};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

/// Output of a traced normalization: the result plus how the payload was decoded.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub result: GeneratedResult,
    pub unwrapped: Unwrapped,
}

/// Extractor, unwrapper and transformer wired together.
///
/// Holds only immutable configuration, so one instance can serve concurrent
/// invocations.
pub struct Pipeline {
    config: NormalizerConfig,
    mapping: TypeMapping,
    clock: Arc<dyn Clock>,
}

pub struct PipelineBuilder {
    config: NormalizerConfig,
    mapping: TypeMapping,
    clock: Arc<dyn Clock>,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            config: NormalizerConfig::default(),
            mapping: TypeMapping::default(),
            clock: Arc::new(SystemClock),
        }
    }
    pub fn config(mut self, config: NormalizerConfig) -> Self {
        self.config = config;
        self
    }
    /// Zero is stored as one, the bound the unwrapper applies anyway.
    pub fn max_unwrap_attempts(mut self, attempts: usize) -> Self {
        self.config.max_unwrap_attempts = attempts.max(1);
        self
    }
    /// Map a `workUnitType` code to a fixed field type.
    pub fn with_work_unit_type(mut self, code: &str, field_type: FieldType) -> Self {
        self.mapping.set_work_unit_type(code, field_type);
        self
    }
    /// Map a `responseType` code of response-driven work units to a field type.
    pub fn with_response_type(mut self, code: &str, field_type: FieldType) -> Self {
        self.mapping.set_response_type(code, field_type);
        self
    }
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
    pub fn build(self) -> Pipeline {
        Pipeline {
            config: self.config,
            mapping: self.mapping,
            clock: self.clock,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        PipelineBuilder::new().build()
    }
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize a raw response body into a `GeneratedResult`.
    ///
    /// Fails only when the envelope carries no payload at all.
    pub fn normalize(&self, raw: &Value) -> Result<GeneratedResult, PipelineError> {
        self.normalize_traced(raw).map(|normalized| normalized.result)
    }

    #[instrument(skip_all)]
    pub fn normalize_traced(&self, raw: &Value) -> Result<Normalized, PipelineError> {
        let payload = extract(raw).ok_or(PipelineError::MissingOutput)?;
        let unwrapped = Unwrapper::new(self.config.max_unwrap_attempts).unwrap_traced(&payload);

        let stamp = self.clock.now_millis();
        let result = Transformer::new(&self.config, &self.mapping).transform(&unwrapped.value, stamp);

        info!(
            operations = result.operations.len(),
            fields = result.field_count(),
            unwrap_attempts = unwrapped.trace.attempts(),
            "Normalized generated structure"
        );
        Ok(Normalized { result, unwrapped })
    }

    /// Ask the generation service for a structure and normalize its answer.
    ///
    /// Transport failures are returned unchanged and never retried.
    #[instrument(skip_all, fields(prompt_len = prompt.len()))]
    pub async fn generate<C>(
        &self,
        client: &C,
        prompt: &str,
        context: &Value,
    ) -> Result<GeneratedResult, PipelineError>
    where
        C: GenerationClient + ?Sized,
    {
        let raw = client.send(prompt, context).await?;
        self.normalize(&raw)
    }
}
