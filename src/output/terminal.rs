//! Terminal renderer: one `expression = result` line per evaluation.

use colored::Colorize;

use crate::models::Evaluation;
use crate::output::{OutputRenderer, format_number};

/// Terminal output renderer with a highlighted result column.
pub struct TerminalRenderer {
    /// Fixed number of decimals for results, if configured.
    pub precision: Option<u8>,
}

impl OutputRenderer for TerminalRenderer {
    fn render(&self, evaluations: &[Evaluation]) -> String {
        let mut output = String::new();

        for eval in evaluations {
            output.push_str(&format!(
                "{} = {}\n",
                eval.expression(),
                format_number(eval.result, self.precision).green().bold()
            ));
        }

        output
    }
}
