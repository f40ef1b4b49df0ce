//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the seiri crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use seiri::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let raw_json = std::fs::read_to_string("path/to/response.json")?;
//! let raw: serde_json::Value = serde_json::from_str(&raw_json)?;
//!
//! let config = NormalizerConfig::from_file("path/to/seiri.json")?;
//! let pipeline = Pipeline::builder().config(config).build();
//! let result = pipeline.normalize(&raw)?;
//!
//! println!("{} operations", result.operations.len());
//! # Ok(())
//! # }
//! ```

// Pipeline and stages
pub use crate::pipeline::{Normalized, Pipeline, PipelineBuilder};
pub use crate::response::{ResponseEnvelope, extract};
pub use crate::transform::{Transformer, TypeMapping, transform};
pub use crate::unwrapper::{StateKind, UnwrapState, Unwrapped, Unwrapper, unwrap_nested};

// Domain model
pub use crate::model::{Field, FieldType, GeneratedResult, Operation, RecordDetails, SelectOption};

// Configuration and collaborators
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::config::NormalizerConfig;
pub use crate::transport::GenerationClient;

// Error types
pub use crate::error::{ConfigError, PipelineError, TransportError};

// Trace formatting
pub use crate::trace::{TraceFormatter, UnwrapTrace};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
