pub mod json;
pub mod text;

use crate::error::GaugeError;
use crate::types::scoring::ScoreReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render(
    report: &ScoreReport,
    recommendation: &str,
    format: OutputFormat,
) -> Result<String, GaugeError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report, recommendation)),
        OutputFormat::Json => json::to_json(report, recommendation).map_err(GaugeError::Json),
    }
}
