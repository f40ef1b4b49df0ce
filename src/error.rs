use thiserror::Error;

/// Errors surfaced by a `GenerationClient` while talking to the generation service.
///
/// The pipeline never retries these; they reach the caller unchanged inside
/// `PipelineError::Transport`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Generation service answered with HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network failure while calling the generation service: {0}")]
    Network(String),

    #[error("Request to the generation service was aborted")]
    Aborted,
}

/// Errors that end a pipeline invocation.
///
/// Everything else (unparseable payloads, unexpected field values) is absorbed
/// into default values so the caller always receives a renderable result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Response envelope carries none of the keys 'output', 'result' or 'data'")]
    MissingOutput,
}

/// Errors that can occur while loading or validating a `NormalizerConfig`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Could not read configuration file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse configuration JSON: {0}")]
    Parse(String),

    #[error("The unwrap attempt bound must be at least 1, got {0}")]
    InvalidUnwrapBound(usize),
}
