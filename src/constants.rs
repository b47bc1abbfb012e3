//! App-wide constants.
//!
//! Centralises the tool name, config paths, and environment variable
//! names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "calculator";

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was built for.
pub const TARGET: &str = env!("TARGET");

/// Largest accepted number of fixed decimals for results.
pub const MAX_PRECISION: u8 = 32;

/// Local config filename (e.g. `.calculator.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".calculator.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "calculator";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_FORMAT: &str = "CALCULATOR_FORMAT";
pub const ENV_PRECISION: &str = "CALCULATOR_PRECISION";
pub const ENV_LOG: &str = "CALCULATOR_LOG";
