use super::sanitize::{escape_line_breaks, normalize_quotes};
use serde_json::Value;
use std::fmt;

/// States of the nested JSON decoder.
///
/// One attempt starts in `Raw` and ends either in `Done` or back in `Raw`
/// with a new candidate:
///
/// ```text
/// Raw ──strict ok──────────────────────────────▶ Done | Raw (decoded a string)
///  └─strict failed─▶ StrictParseAttempted
///                     ├─quotes ok──────────────▶ Done | Raw (decoded a string)
///                     └─quotes failed─▶ QuoteNormalizedAttempted
///                                        ├─final attempt─▶ Done (cleaned text)
///                                        └─otherwise─────▶ Raw (cleaned text)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum UnwrapState {
    Raw { candidate: String },
    StrictParseAttempted { cleaned: String },
    QuoteNormalizedAttempted { cleaned: String },
    Done(Value),
}

/// Payload-free view of an `UnwrapState`, used in traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    Raw,
    StrictParseAttempted,
    QuoteNormalizedAttempted,
    Done,
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StateKind::Raw => "RAW",
            StateKind::StrictParseAttempted => "STRICT_PARSE_ATTEMPTED",
            StateKind::QuoteNormalizedAttempted => "QUOTE_NORMALIZED_ATTEMPTED",
            StateKind::Done => "DONE",
        };
        write!(f, "{}", name)
    }
}

impl UnwrapState {
    pub fn raw(candidate: impl Into<String>) -> Self {
        UnwrapState::Raw {
            candidate: candidate.into(),
        }
    }

    pub fn kind(&self) -> StateKind {
        match self {
            UnwrapState::Raw { .. } => StateKind::Raw,
            UnwrapState::StrictParseAttempted { .. } => StateKind::StrictParseAttempted,
            UnwrapState::QuoteNormalizedAttempted { .. } => StateKind::QuoteNormalizedAttempted,
            UnwrapState::Done(_) => StateKind::Done,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, UnwrapState::Done(_))
    }

    /// Perform exactly one transition.
    ///
    /// `final_attempt` only matters in `QuoteNormalizedAttempted`, where it decides
    /// between giving up with the cleaned text and starting another attempt.
    pub fn step(self, final_attempt: bool) -> UnwrapState {
        match self {
            UnwrapState::Raw { candidate } => {
                let cleaned = escape_line_breaks(&candidate);
                match strict_parse(&cleaned, &candidate) {
                    Some(value) => Self::after_decode(value),
                    None => UnwrapState::StrictParseAttempted { cleaned },
                }
            }
            UnwrapState::StrictParseAttempted { cleaned } => {
                match serde_json::from_str::<Value>(&normalize_quotes(&cleaned)) {
                    Ok(value) => Self::after_decode(value),
                    Err(_) => UnwrapState::QuoteNormalizedAttempted { cleaned },
                }
            }
            UnwrapState::QuoteNormalizedAttempted { cleaned } => {
                if final_attempt {
                    UnwrapState::Done(Value::String(cleaned))
                } else {
                    UnwrapState::Raw { candidate: cleaned }
                }
            }
            done @ UnwrapState::Done(_) => done,
        }
    }

    /// A decoded string may be yet another encoding layer; anything else is final.
    fn after_decode(value: Value) -> UnwrapState {
        match value {
            Value::String(inner) => UnwrapState::Raw { candidate: inner },
            other => UnwrapState::Done(other),
        }
    }
}

/// Parse the escaped candidate, then fall back to two variants of the original
/// text: trimmed verbatim, since newlines between tokens are legal JSON
/// whitespace and only become a problem once escaped, and trimmed before
/// escaping, so a trailing newline does not survive as a literal `\n`.
fn strict_parse(cleaned: &str, original: &str) -> Option<Value> {
    if let Ok(value) = serde_json::from_str::<Value>(cleaned) {
        return Some(value);
    }
    let verbatim = original.trim();
    if verbatim == cleaned {
        return None;
    }
    serde_json::from_str::<Value>(verbatim)
        .or_else(|_| serde_json::from_str::<Value>(&escape_line_breaks(verbatim)))
        .ok()
}
