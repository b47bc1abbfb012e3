//! Shared types used across all modules.
//!
//! Operations, evaluation records, and the output format selector live
//! here so the CLI, config, and renderers agree on one vocabulary.

pub mod evaluation;
pub mod operation;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use evaluation::Evaluation;
pub use operation::Operation;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unsupported output format: '{other}'. Supported: terminal, json"
            )),
        }
    }
}
