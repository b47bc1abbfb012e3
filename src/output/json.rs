//! JSON output renderer.
//!
//! Outputs `{"evaluations": [...], "count": N}` format.

use crate::models::Evaluation;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, evaluations: &[Evaluation]) -> String {
        let output = serde_json::json!({
            "evaluations": evaluations,
            "count": evaluations.len(),
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
