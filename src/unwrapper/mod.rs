//! Recovery of structured values from loosely encoded JSON text.
//!
//! Generation services regularly return JSON that was encoded as a string one
//! or more times, that carries literal newlines inside string values, or that
//! uses single quotes. The [`Unwrapper`] peels those layers off with a bounded
//! number of attempts and never fails: text it cannot decode is handed back
//! as a `Value::String`.

use crate::config::DEFAULT_MAX_UNWRAP_ATTEMPTS;
use crate::trace::UnwrapTrace;
use serde_json::Value;
use tracing::{debug, warn};

pub mod sanitize;
pub mod state;

pub use state::{StateKind, UnwrapState};

/// A decoded value together with the transitions that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Unwrapped {
    pub value: Value,
    pub trace: UnwrapTrace,
}

impl Unwrapped {
    /// True when decoding gave up and the value is the cleaned input text.
    pub fn degraded(&self) -> bool {
        self.value.is_string()
    }
}

/// Drives [`UnwrapState`] until it is done or the attempt bound is reached.
#[derive(Debug, Clone, Copy)]
pub struct Unwrapper {
    max_attempts: usize,
}

impl Default for Unwrapper {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UNWRAP_ATTEMPTS)
    }
}

impl Unwrapper {
    /// A bound of zero is treated as one: the input is always examined once.
    pub fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn unwrap(&self, input: &str) -> Value {
        self.unwrap_traced(input).value
    }

    pub fn unwrap_traced(&self, input: &str) -> Unwrapped {
        let mut trace = UnwrapTrace::default();
        let mut state = UnwrapState::raw(input);
        let mut attempt = 1;

        let value = loop {
            let from = state.kind();
            state = state.step(attempt >= self.max_attempts);
            trace.record(attempt, from, state.kind());

            match state {
                UnwrapState::Done(value) => break value,
                UnwrapState::Raw { candidate } => {
                    if attempt >= self.max_attempts {
                        // The last attempt decoded to a string: that string is the answer.
                        break Value::String(candidate);
                    }
                    attempt += 1;
                    state = UnwrapState::Raw { candidate };
                }
                other => state = other,
            }
        };

        let unwrapped = Unwrapped { value, trace };
        if unwrapped.degraded() {
            warn!(
                attempts = attempt,
                "Payload could not be decoded into a structure, keeping it as text"
            );
        } else {
            debug!(attempts = attempt, trace = %unwrapped.trace, "Payload decoded");
        }
        unwrapped
    }
}

/// Decode `input` with the default attempt bound.
pub fn unwrap_nested(input: &str) -> Value {
    Unwrapper::default().unwrap(input)
}

/// Decode `input` with the default attempt bound, keeping the transition trace.
pub fn unwrap_traced(input: &str) -> Unwrapped {
    Unwrapper::default().unwrap_traced(input)
}
