use crate::types::scoring::{Category, ScoreReport};

/// Pros/cons verdict thresholds and labels, per category. These are
/// presentation cut-offs, distinct from the recommendation thresholds.
fn verdict(category: Category, pct: f64) -> (bool, &'static str) {
    match category {
        Category::ContentQuantity => (pct > 80.0, "Large library"),
        Category::ContentQuality => (pct > 70.0, "High-resolution videos"),
        Category::MetadataQuality => (pct > 70.0, "Complete metadata"),
        Category::LibraryStructure => (pct > 60.0, "Organized libraries"),
        Category::Plugins => (pct > 50.0, "Essential key plugins"),
        Category::Subtitles => (pct > 70.0, "Massive subtitle availability"),
    }
}

fn con_label(category: Category) -> &'static str {
    match category {
        Category::ContentQuantity => "Small library",
        Category::ContentQuality => "Low-resolution videos",
        Category::MetadataQuality => "Incomplete metadata",
        Category::LibraryStructure => "Disorganized libraries",
        Category::Plugins => "Missing key plugins",
        Category::Subtitles => "Limited subtitle availability",
    }
}

pub fn to_text(report: &ScoreReport, recommendation: &str) -> String {
    let mut output = String::new();
    output.push_str("=====================================\n");
    output.push_str("=== JELLYFIN SERVER QUALITY SCORE ===\n");
    output.push_str("=====================================\n\n");

    for &category in &Category::ALL {
        output.push_str(&format!(
            "{:<21}: {:.1}%\n",
            category.name(),
            report.percentage(category)
        ));
    }
    output.push_str(&format!("\nTOTAL SCORE: {:.1}%\n\n", report.total_percentage()));

    if report.degraded {
        output.push_str("note: one or more categories could not be measured and scored 0\n\n");
    }

    let mut pros = Vec::new();
    let mut cons = Vec::new();
    for &category in &Category::ALL {
        let pct = report.percentage(category);
        let (is_pro, pro_label) = verdict(category, pct);
        if is_pro {
            pros.push(format!("{} ({})", category.name(), pro_label));
        } else {
            cons.push(format!("{} ({})", category.name(), con_label(category)));
        }
    }

    output.push_str("--- PROS ---\n");
    if pros.is_empty() {
        output.push_str("  none\n");
    }
    for p in &pros {
        output.push_str(&format!("+ {p}\n"));
    }

    output.push_str("\n--- CONS ---\n");
    if cons.is_empty() {
        output.push_str("  none\n");
    }
    for c in &cons {
        output.push_str(&format!("- {c}\n"));
    }

    output.push_str("\n--- RECOMMENDATION ---\n");
    output.push_str(recommendation);
    output.push('\n');

    output
}
