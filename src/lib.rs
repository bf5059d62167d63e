//! dei-service - Decision Efficiency Index over HTTP
//!
//! Computes `(1/decision_time) * (1 - error_rate) * robustness_score`,
//! keeps an in-memory log of past computations, and serves both through
//! a small JSON API.

pub mod cli;
pub mod dei;
pub mod http_server;
pub mod observability;
