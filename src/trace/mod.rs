use crate::unwrapper::StateKind;
use std::fmt;

mod formatter;

pub use formatter::TraceFormatter;

/// One transition taken by the unwrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceStep {
    /// 1-based attempt number the transition belongs to.
    pub attempt: usize,
    pub from: StateKind,
    pub to: StateKind,
}

/// Ordered record of every transition of one unwrap run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnwrapTrace {
    steps: Vec<TraceStep>,
}

impl UnwrapTrace {
    pub fn record(&mut self, attempt: usize, from: StateKind, to: StateKind) {
        self.steps.push(TraceStep { attempt, from, to });
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Number of attempts started.
    pub fn attempts(&self) -> usize {
        self.steps.last().map_or(0, |s| s.attempt)
    }

    /// Kind of the state the run ended in.
    pub fn final_kind(&self) -> Option<StateKind> {
        self.steps.last().map(|s| s.to)
    }
}

impl fmt::Display for UnwrapTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TraceFormatter::format_trace(self))
    }
}
