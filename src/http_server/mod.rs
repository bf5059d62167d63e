//! # HTTP Server Module
//!
//! Axum HTTP surface for the DEI service.
//!
//! # Endpoints
//!
//! - `POST /compute` - evaluate the DEI formula and record the result
//! - `GET /history` - full computation history, insertion order
//! - `POST /reset` - clear the history
//! - `GET /health` - health check

pub mod config;
pub mod dei_routes;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
