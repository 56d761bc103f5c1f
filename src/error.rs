//! Error types for the TSP genetic algorithm.
//!
//! Every fallible operation returns [`GaResult<T>`]. None of these errors
//! are transient, so nothing in the crate retries.

use thiserror::Error;

/// Result type alias for GA operations.
pub type GaResult<T> = Result<T, GaError>;

/// Unified error type for the GA engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaError {
    /// A configuration parameter or input shape is invalid.
    ///
    /// Detected before the run starts.
    #[error("configuration error: {parameter} {reason}")]
    Configuration {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// A distance lookup produced a non-finite or negative value.
    #[error("evaluation error: distance[{from}][{to}] is negative or not finite ({value})")]
    Evaluation {
        /// Row of the offending matrix cell.
        from: usize,
        /// Column of the offending matrix cell.
        to: usize,
        /// The value found there.
        value: f64,
    },

    /// Every leg was valid but their sum overflowed to infinity.
    #[error("evaluation error: length of tour {genes:?} is not finite")]
    NonFiniteTotal {
        /// The tour whose length overflowed.
        genes: Vec<usize>,
    },

    /// An internal invariant was broken (an algorithmic bug, not bad input).
    #[error("invariant violation in {operator}: {detail}")]
    InvariantViolation {
        /// Component that produced or read the bad state.
        operator: &'static str,
        /// Description of the broken invariant.
        detail: String,
    },
}

impl GaError {
    pub(crate) fn config(parameter: &'static str, reason: impl Into<String>) -> Self {
        GaError::Configuration {
            parameter,
            reason: reason.into(),
        }
    }

    pub(crate) fn invariant(operator: &'static str, detail: impl Into<String>) -> Self {
        GaError::InvariantViolation {
            operator,
            detail: detail.into(),
        }
    }
}
