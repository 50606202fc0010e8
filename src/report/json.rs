use crate::types::scoring::{Category, ScoreReport};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    categories: Vec<JsonCategory>,
    total_percentage: f64,
    degraded: bool,
    recommendation: &'a str,
}

#[derive(Serialize)]
struct JsonCategory {
    category: Category,
    score: u32,
    max: u32,
    percentage: f64,
}

pub fn to_json(report: &ScoreReport, recommendation: &str) -> Result<String, serde_json::Error> {
    let categories = report
        .scores
        .iter()
        .map(|s| JsonCategory {
            category: s.category,
            score: s.value,
            max: s.max,
            percentage: s.percentage(),
        })
        .collect();

    serde_json::to_string_pretty(&JsonReport {
        categories,
        total_percentage: report.total_percentage(),
        degraded: report.degraded,
        recommendation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::MetricScore;

    #[test]
    fn json_report_contains_categories_and_recommendation() {
        let scores = Category::ALL
            .iter()
            .map(|&c| MetricScore::new(c, c.max_score()))
            .collect();
        let report = ScoreReport::new(scores, false);

        let rendered =
            to_json(&report, "No improvements necessary.").expect("json should serialize");
        assert!(rendered.contains("\"Content Quantity\""));
        assert!(rendered.contains("\"total_percentage\": 100.0"));
        assert!(rendered.contains("\"recommendation\": \"No improvements necessary.\""));
        assert!(rendered.contains("\"degraded\": false"));
    }
}
