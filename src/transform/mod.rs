//! Reshaping of decoded generation payloads into the form domain model.

use crate::clock::{Clock, SystemClock};
use crate::config::NormalizerConfig;
use crate::model::{Field, FieldType, GeneratedResult, Operation, RecordDetails};
use crate::upstream::{OPERATIONS_KEY, UpstreamOperation, UpstreamStructure, UpstreamWorkUnit};
use serde_json::Value;
use tracing::debug;

mod ids;
pub mod mapping;
pub mod options;

use ids::IdAllocator;
pub use mapping::TypeMapping;
pub use options::parse_options;

/// Maps a decoded payload onto `GeneratedResult`, defaulting anything unexpected.
pub struct Transformer<'a> {
    config: &'a NormalizerConfig,
    mapping: &'a TypeMapping,
}

impl<'a> Transformer<'a> {
    pub fn new(config: &'a NormalizerConfig, mapping: &'a TypeMapping) -> Self {
        Self { config, mapping }
    }

    /// `stamp` is the invocation timestamp embedded in every synthesized id.
    pub fn transform(&self, value: &Value, stamp: i64) -> GeneratedResult {
        match UpstreamStructure::detect(value) {
            Some(structure) => self.transform_structure(structure, stamp),
            None => Self::pass_through(value, stamp),
        }
    }

    /// A value that is already a `GeneratedResult` is kept, with its ids made
    /// unique and options kept only on select fields; anything else (including
    /// text the unwrapper gave up on) becomes an empty form.
    fn pass_through(value: &Value, stamp: i64) -> GeneratedResult {
        let Some(record) = value.as_object() else {
            debug!("Decoded payload is not a record, producing an empty form");
            return GeneratedResult::empty();
        };
        if record.contains_key(OPERATIONS_KEY) || !record.contains_key("operations") {
            debug!("Decoded payload has no usable operation list, producing an empty form");
            return GeneratedResult::empty();
        }
        match serde_json::from_value::<GeneratedResult>(value.clone()) {
            Ok(result) => Self::enforce_invariants(result, stamp),
            Err(e) => {
                debug!(error = %e, "Payload resembles a form but does not match its shape");
                GeneratedResult::empty()
            }
        }
    }

    fn enforce_invariants(mut result: GeneratedResult, stamp: i64) -> GeneratedResult {
        let mut ids = IdAllocator::new(stamp);
        for operation in &mut result.operations {
            operation.id = ids.claim(std::mem::take(&mut operation.id));
            for field in &mut operation.fields {
                field.id = ids.claim(std::mem::take(&mut field.id));
                if field.field_type != FieldType::Select
                    || field.options.as_ref().is_some_and(Vec::is_empty)
                {
                    field.options = None;
                }
            }
        }
        result
    }

    fn transform_structure(&self, structure: UpstreamStructure<'_>, stamp: i64) -> GeneratedResult {
        let record_details = RecordDetails {
            name: structure
                .label()
                .unwrap_or_else(|| self.config.default_record_name.clone()),
            functional_id: structure
                .identifiant()
                .unwrap_or_else(|| self.config.placeholder_functional_id(stamp)),
            duration: structure.duration().unwrap_or_default(),
            active: structure.active().unwrap_or(true),
        };

        let mut ids = IdAllocator::new(stamp);
        let operations = structure
            .operations()
            .into_iter()
            .enumerate()
            .map(|(op_index, operation)| self.build_operation(&mut ids, op_index, operation))
            .collect();

        GeneratedResult {
            record_details: Some(record_details),
            operations,
        }
    }

    fn build_operation(
        &self,
        ids: &mut IdAllocator,
        op_index: usize,
        operation: UpstreamOperation<'_>,
    ) -> Operation {
        let hint = operation
            .id()
            .unwrap_or_else(|| self.config.operation_id_fallback.clone());
        let id = ids.operation_id(&hint, op_index);

        let fields = operation
            .work_units()
            .into_iter()
            .enumerate()
            .map(|(field_index, unit)| self.build_field(ids, op_index, field_index, unit))
            .collect();

        Operation {
            id,
            name: operation.label().unwrap_or_default(),
            description: operation.description(),
            fields,
        }
    }

    fn build_field(
        &self,
        ids: &mut IdAllocator,
        op_index: usize,
        field_index: usize,
        unit: UpstreamWorkUnit<'_>,
    ) -> Field {
        let hint = unit
            .id()
            .unwrap_or_else(|| self.config.field_id_fallback.clone());
        let field_type = self.mapping.resolve(
            unit.work_unit_type().as_deref(),
            unit.response_type().as_deref(),
        );
        let options = match field_type {
            FieldType::Select => unit
                .options_source()
                .map(|source| parse_options(&source))
                .filter(|options| !options.is_empty()),
            _ => None,
        };

        Field {
            id: ids.field_id(&hint, op_index, field_index),
            field_type,
            label: unit.label().unwrap_or_default(),
            description: unit.description(),
            required: unit.required().unwrap_or(false),
            options,
        }
    }
}

/// Transform with the default configuration, type mapping and the system clock.
pub fn transform(value: &Value) -> GeneratedResult {
    let config = NormalizerConfig::default();
    let mapping = TypeMapping::default();
    Transformer::new(&config, &mapping).transform(value, SystemClock.now_millis())
}
