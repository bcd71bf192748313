//! Runtime settings from the command line and the environment
//!
//! Precedence: command line, then `PROTCALC_*` variables, then built-in defaults.

use clap::Parser;
use log::debug;

use crate::protein::DEFAULT_SEQUENCE;

pub const LOG_LEVEL_VAR: &str = "PROTCALC_LOG_LEVEL";
pub const SEQUENCE_VAR: &str = "PROTCALC_SEQUENCE";

/// Molecular weight, extinction coefficient, pI and net charge of a protein sequence.
#[derive(Parser, Debug)]
#[command(name = "protcalc", version)]
pub struct Cli {
    /// Protein sequence in single-letter code; case and whitespace are ignored
    pub sequence: Option<String>,

    /// Print the report to stdout instead of opening the interactive view
    #[arg(long)]
    pub plain: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub initial_sequence: String,
    pub plain: bool,
    pub log_level: String,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Settings {
        Settings::resolve(
            cli,
            std::env::var(SEQUENCE_VAR).ok(),
            std::env::var(LOG_LEVEL_VAR).ok(),
        )
    }

    fn resolve(cli: Cli, env_sequence: Option<String>, env_log_level: Option<String>) -> Settings {
        let initial_sequence = cli
            .sequence
            .or(env_sequence)
            .unwrap_or_else(|| DEFAULT_SEQUENCE.to_string());
        let log_level = cli
            .log_level
            .or(env_log_level)
            .unwrap_or_else(|| "info".to_string());

        debug!("Resolved settings: plain={}, log_level={log_level}", cli.plain);

        Settings {
            initial_sequence,
            plain: cli.plain,
            log_level,
        }
    }
}
