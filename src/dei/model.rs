//! DEI data model
//!
//! Wire-level types for the scoring API. `DeiRecord` is immutable once
//! created and echoes the input it was computed from.

use serde::{Deserialize, Serialize};

use super::errors::DeiError;

/// Input to a DEI computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeiInput {
    /// Time taken to reach the decision; must be > 0
    pub decision_time: f64,

    /// Observed error rate; expected in [0, 1] but not enforced
    pub error_rate: f64,

    /// Robustness of the decision; unbounded
    pub robustness_score: f64,
}

impl DeiInput {
    /// Evaluate the DEI formula for this input.
    ///
    /// Fails only when `decision_time <= 0`. Out-of-range `error_rate` or
    /// `robustness_score` values still evaluate, including to negative or
    /// arbitrarily large scores.
    pub fn score(&self) -> Result<f64, DeiError> {
        if self.decision_time <= 0.0 {
            return Err(DeiError::NonPositiveDecisionTime);
        }

        Ok((1.0 / self.decision_time) * (1.0 - self.error_rate) * self.robustness_score)
    }
}

/// A completed DEI computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeiRecord {
    /// The computed index
    pub dei: f64,

    /// UTC wall-clock time of the computation, RFC 3339
    pub timestamp: String,

    /// The input the index was computed from
    pub input: DeiInput,
}
