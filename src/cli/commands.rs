//! CLI command implementations
//!
//! `serve` loads configuration, builds the HTTP server, and blocks on a
//! tokio runtime. `compute` evaluates the formula once and prints the
//! resulting record.

use std::fs;
use std::path::Path;

use crate::dei::{DeiInput, DeiService};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Load and validate server configuration from a JSON file
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    if config.host.is_empty() {
        return Err(CliError::config_error("host must not be empty"));
    }

    Ok(config)
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Compute {
            decision_time,
            error_rate,
            robustness_score,
        } => compute(decision_time, error_rate, robustness_score),
    }
}

/// Run the HTTP server until the process is stopped
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(port) = port {
        config.port = port;
    }

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server.start().await.map_err(|e| {
            let msg = e.to_string();
            Logger::error("HTTP_SERVER_FAILED", &[("error", msg.as_str())]);
            CliError::boot_failed(format!("HTTP server failed: {}", msg))
        })
    })?;

    Ok(())
}

/// Evaluate the DEI formula once and print the record as a JSON envelope
pub fn compute(decision_time: f64, error_rate: f64, robustness_score: f64) -> CliResult<()> {
    let service = DeiService::new();
    let input = DeiInput {
        decision_time,
        error_rate,
        robustness_score,
    };

    match service.compute(input) {
        Ok(record) => {
            write_response(serde_json::to_value(&record)?)?;
            Ok(())
        }
        Err(err) => {
            let message = err.to_string();
            write_error("DEI_CLI_INVALID_INPUT", &message)?;
            Err(CliError::invalid_input(message))
        }
    }
}
