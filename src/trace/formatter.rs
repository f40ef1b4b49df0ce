use super::UnwrapTrace;
use itertools::Itertools;

/// Formats unwrap traces into human-readable strings
pub struct TraceFormatter;

impl TraceFormatter {
    /// One segment per attempt, e.g.
    /// `#1 RAW -> STRICT_PARSE_ATTEMPTED -> QUOTE_NORMALIZED_ATTEMPTED -> RAW | #2 RAW -> DONE`.
    pub fn format_trace(trace: &UnwrapTrace) -> String {
        if trace.steps().is_empty() {
            return "(no transitions)".to_string();
        }

        let attempts = trace.steps().iter().chunk_by(|step| step.attempt);
        let formatted = attempts
            .into_iter()
            .map(|(attempt, steps)| {
                let mut steps = steps.peekable();
                let start = steps.peek().map(|s| s.from.to_string()).unwrap_or_default();
                let chain = std::iter::once(start)
                    .chain(steps.map(|s| s.to.to_string()))
                    .join(" -> ");
                format!("#{} {}", attempt, chain)
            })
            .join(" | ");
        formatted
    }
}
