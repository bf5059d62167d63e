//! DEI domain errors
//!
//! The compute operation has exactly one rejection case; everything else
//! (out-of-range rates, oversized scores) is accepted as-is.

use thiserror::Error;

/// Errors produced by DEI computation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeiError {
    /// Decision time must be strictly positive
    #[error("Decision time must be greater than 0")]
    NonPositiveDecisionTime,
}
