//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::constants::MAX_PRECISION;
use crate::models::{Evaluation, OutputFormat};

/// Trait for rendering evaluations to an output format.
pub trait OutputRenderer {
    /// Render evaluations to a string.
    fn render(&self, evaluations: &[Evaluation]) -> String;
}

/// Build the renderer for `format`.
///
/// `precision` only affects the terminal renderer; JSON carries full values.
pub fn renderer_for(format: OutputFormat, precision: Option<u8>) -> Box<dyn OutputRenderer> {
    match format {
        OutputFormat::Terminal => Box::new(terminal::TerminalRenderer { precision }),
        OutputFormat::Json => Box::new(json::JsonRenderer),
    }
}

/// Format a result for display.
///
/// Without a precision this is the shortest representation that
/// round-trips (`15`, `2.5`); with one, a fixed number of decimals,
/// capped at [`MAX_PRECISION`].
pub fn format_number(value: f64, precision: Option<u8>) -> String {
    match precision {
        Some(p) => {
            let p = usize::from(p.min(MAX_PRECISION));
            format!("{value:.p$}")
        }
        None => value.to_string(),
    }
}
