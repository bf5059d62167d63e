//! CLI argument definitions using clap
//!
//! Commands:
//! - dei-service serve [--config <path>] [--port <port>]
//! - dei-service compute --decision-time <f> --error-rate <f> --robustness-score <f>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// DEI service - Decision Efficiency Index over HTTP
#[derive(Parser, Debug)]
#[command(name = "dei-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Path to a JSON configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Evaluate the DEI formula once and print the record as JSON
    Compute {
        /// Time taken to reach the decision; must be > 0
        #[arg(long)]
        decision_time: f64,

        /// Observed error rate
        #[arg(long)]
        error_rate: f64,

        /// Robustness of the decision
        #[arg(long)]
        robustness_score: f64,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compute() {
        let cli = Cli::try_parse_from([
            "dei-service",
            "compute",
            "--decision-time",
            "2",
            "--error-rate",
            "0.1",
            "--robustness-score",
            "0.9",
        ])
        .unwrap();

        match cli.command {
            Command::Compute {
                decision_time,
                error_rate,
                robustness_score,
            } => {
                assert_eq!(decision_time, 2.0);
                assert_eq!(error_rate, 0.1);
                assert_eq!(robustness_score, 0.9);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["dei-service", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert!(config.is_none());
                assert!(port.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
