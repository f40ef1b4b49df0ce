//! # Seiri - Normalization of AI-generated form structures
//!
//! **Seiri** turns the text payload returned by a form generation service into a
//! validated `GeneratedResult`: an ordered list of operations, each holding typed
//! fields, that a form editor can render without further checks.
//!
//! The upstream payload has no reliable contract. It may be JSON encoded as a
//! string several times over, carry literal newlines inside string values, use
//! single quotes, or leave out keys entirely. Seiri never panics on any of
//! this: only a missing payload or a transport failure is reported as an error,
//! everything else degrades to default values or an empty form.
//!
//! ## Pipeline
//!
//! 1.  **Extract**: find the payload under `output`, `result` or `data` of the
//!     response body (or of its first element when the body is an array).
//! 2.  **Unwrap**: decode nested JSON layers with a bounded state machine.
//! 3.  **Transform**: map the upstream type codes to [`model::FieldType`] and
//!     assign identifiers that are unique within the invocation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use seiri::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> std::result::Result<(), PipelineError> {
//!     let raw = json!({
//!         "output": "{\"listOperations\":[{\"operationLabel\":\"Armoire\",\"listUnitWorks\":[{\"workUnitLabel\":\"Etat\",\"workUnitType\":\"0\"}]}]}"
//!     });
//!
//!     let pipeline = Pipeline::builder().max_unwrap_attempts(6).build();
//!     let result = pipeline.normalize(&raw)?;
//!
//!     assert_eq!(result.operations[0].name, "Armoire");
//!     assert_eq!(result.operations[0].fields[0].field_type, FieldType::Checkpoint);
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod prelude;
pub mod response;
pub mod trace;
pub mod transform;
pub mod transport;
pub mod unwrapper;
pub mod upstream;

pub use pipeline::{Pipeline, PipelineBuilder};
pub use response::extract;
pub use transform::transform;
pub use unwrapper::unwrap_nested;
