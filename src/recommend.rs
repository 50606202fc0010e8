//! Picks the single most important improvement from the score report.

use crate::types::scoring::{Category, ScoreReport};

pub const NO_IMPROVEMENTS: &str = "No improvements necessary.";

fn message(category: Category) -> &'static str {
    match category {
        Category::ContentQuantity => {
            "Increase the number of items in the library to improve content."
        }
        Category::ContentQuality => {
            "Upgrade videos to higher resolutions to enhance overall content quality."
        }
        Category::MetadataQuality => {
            "Add missing metadata like movie posters and descriptions for a more organized library."
        }
        Category::LibraryStructure => {
            "Reorganize the library structure for better content accessibility."
        }
        Category::Plugins => {
            "Install key plugins to improve functionality and enhance server performance."
        }
        Category::Subtitles => {
            "Add subtitles to your media for better accessibility and user experience."
        }
    }
}

/// Returns the message for the highest-weighted category whose percentage
/// is strictly below its threshold.
///
/// Weights tie-break on `Category` declaration order, which a stable sort
/// preserves, so the selection is deterministic.
pub fn recommend(report: &ScoreReport) -> &'static str {
    let mut deficient: Vec<Category> = Category::ALL
        .into_iter()
        .filter(|&category| report.percentage(category) < category.threshold_pct())
        .collect();

    deficient.sort_by_key(|category| std::cmp::Reverse(category.weight()));

    match deficient.first() {
        Some(&category) => message(category),
        None => NO_IMPROVEMENTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::MetricScore;

    /// Builds a report with the given percentages in canonical category
    /// order. Percentages must be representable by integer raw scores.
    fn report_with_pcts(pcts: [f64; 6]) -> ScoreReport {
        let scores = Category::ALL
            .iter()
            .zip(pcts)
            .map(|(&category, pct)| {
                let raw = (pct / 100.0 * f64::from(category.max_score())).round() as u32;
                MetricScore::new(category, raw)
            })
            .collect();
        ScoreReport::new(scores, false)
    }

    #[test]
    fn healthy_report_needs_no_improvements() {
        let report = report_with_pcts([100.0, 80.0, 80.0, 80.0, 100.0, 80.0]);
        assert_eq!(recommend(&report), NO_IMPROVEMENTS);
    }

    #[test]
    fn single_deficiency_names_its_category() {
        let report = report_with_pcts([100.0, 80.0, 80.0, 80.0, 100.0, 40.0]);
        assert_eq!(
            recommend(&report),
            "Add subtitles to your media for better accessibility and user experience."
        );
    }

    #[test]
    fn highest_weight_wins_among_deficiencies() {
        // Quality (weight 5) and structure (weight 2) both deficient.
        let report = report_with_pcts([100.0, 40.0, 80.0, 60.0, 100.0, 80.0]);
        assert_eq!(
            recommend(&report),
            "Upgrade videos to higher resolutions to enhance overall content quality."
        );
    }

    #[test]
    fn equal_weights_fall_back_to_category_order() {
        // Quantity and plugins are both weight 4 and both deficient;
        // quantity is declared first and must win.
        let report = report_with_pcts([40.0, 80.0, 80.0, 80.0, 20.0, 80.0]);
        assert_eq!(
            recommend(&report),
            "Increase the number of items in the library to improve content."
        );
    }

    #[test]
    fn threshold_comparison_is_strict() {
        // Exactly on the threshold is not deficient.
        let report = report_with_pcts([50.0, 50.0, 50.0, 100.0, 100.0, 100.0]);
        assert_eq!(recommend(&report), NO_IMPROVEMENTS);
    }

    #[test]
    fn structure_uses_its_higher_threshold() {
        // 60% clears the common 50% bar but not structure's 70%.
        let report = report_with_pcts([100.0, 80.0, 80.0, 60.0, 100.0, 80.0]);
        assert_eq!(
            recommend(&report),
            "Reorganize the library structure for better content accessibility."
        );
    }
}
