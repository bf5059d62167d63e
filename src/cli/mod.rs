//! CLI module for the DEI service
//!
//! Provides the command-line interface:
//! - serve: run the HTTP server
//! - compute: one-shot DEI evaluation printed as JSON

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{compute, run, run_command, serve};
pub use errors::{CliError, CliResult};
pub use io::{write_error, write_response};
