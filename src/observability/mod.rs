//! # Observability Module
//!
//! Structured logging for the DEI service:
//! - one JSON object per line
//! - deterministic key ordering
//! - explicit severity levels
//! - synchronous, unbuffered writes

pub mod logger;

pub use logger::{Logger, Severity};
