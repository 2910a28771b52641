//! Non-fatal clause diagnostics.
//!
//! Degenerate clauses never fail evaluation; they degrade to no-ops. The
//! evaluators report them through a caller-supplied [`DiagnosticSink`] so
//! the core has no implicit logging dependency. The default is to report
//! nowhere.

use thiserror::Error;

/// A clause the filter evaluator ignored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClauseWarning {
    #[error("unknown operator '{operator}' on column \"{column}\" - clause ignored")]
    UnknownOperator { operator: String, column: String },

    #[error("malformed 'between' clause for column \"{column}\" - clause ignored")]
    MalformedBetween { column: String },
}

/// Receiver for clause warnings.
pub trait DiagnosticSink {
    fn warn(&self, warning: ClauseWarning);
}

/// Sink that discards every warning.
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn warn(&self, _warning: ClauseWarning) {}
}

impl<F: Fn(ClauseWarning)> DiagnosticSink for F {
    fn warn(&self, warning: ClauseWarning) {
        self(warning)
    }
}
