use serde::Serialize;

/// The six fixed quality dimensions, in their canonical order.
///
/// Declaration order doubles as the tie-break order when two categories
/// carry equal recommendation weight, so it must not be reshuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Content Quantity")]
    ContentQuantity,
    #[serde(rename = "Content Quality")]
    ContentQuality,
    #[serde(rename = "Metadata Quality")]
    MetadataQuality,
    #[serde(rename = "Library Structure")]
    LibraryStructure,
    #[serde(rename = "Plugins")]
    Plugins,
    #[serde(rename = "Subtitles")]
    Subtitles,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::ContentQuantity,
        Category::ContentQuality,
        Category::MetadataQuality,
        Category::LibraryStructure,
        Category::Plugins,
        Category::Subtitles,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::ContentQuantity => "Content Quantity",
            Category::ContentQuality => "Content Quality",
            Category::MetadataQuality => "Metadata Quality",
            Category::LibraryStructure => "Library Structure",
            Category::Plugins => "Plugins",
            Category::Subtitles => "Subtitles",
        }
    }

    /// Fixed ceiling for the raw score of this category.
    pub fn max_score(self) -> u32 {
        match self {
            Category::ContentQuantity => 10,
            Category::ContentQuality => 20,
            Category::MetadataQuality => 20,
            Category::LibraryStructure => 15,
            Category::Plugins => 5,
            Category::Subtitles => 5,
        }
    }

    /// Priority used to pick one recommendation among deficient categories.
    pub fn weight(self) -> u32 {
        match self {
            Category::ContentQuantity => 4,
            Category::ContentQuality => 5,
            Category::MetadataQuality => 3,
            Category::LibraryStructure => 2,
            Category::Plugins => 4,
            Category::Subtitles => 3,
        }
    }

    /// Percentage below which the category is considered deficient.
    pub fn threshold_pct(self) -> f64 {
        match self {
            Category::LibraryStructure => 70.0,
            _ => 50.0,
        }
    }
}

/// Raw score for one category, immutable once computed.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricScore {
    pub category: Category,
    pub value: u32,
    pub max: u32,
}

impl MetricScore {
    pub fn new(category: Category, value: u32) -> Self {
        let max = category.max_score();
        Self {
            category,
            value: value.min(max),
            max,
        }
    }

    pub fn percentage(&self) -> f64 {
        f64::from(self.value) / f64::from(self.max) * 100.0
    }
}

/// Scores for all six categories from one run, in canonical order.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub scores: Vec<MetricScore>,
    /// True when at least one category absorbed a fetch or parse failure.
    pub degraded: bool,
}

impl ScoreReport {
    pub fn new(scores: Vec<MetricScore>, degraded: bool) -> Self {
        debug_assert_eq!(scores.len(), Category::ALL.len());
        Self { scores, degraded }
    }

    pub fn score(&self, category: Category) -> Option<&MetricScore> {
        self.scores.iter().find(|s| s.category == category)
    }

    pub fn percentage(&self, category: Category) -> f64 {
        self.score(category).map_or(0.0, MetricScore::percentage)
    }

    pub fn total_percentage(&self) -> f64 {
        let raw: u32 = self.scores.iter().map(|s| s.value).sum();
        let max: u32 = self.scores.iter().map(|s| s.max).sum();
        if max == 0 {
            return 0.0;
        }
        f64::from(raw) / f64::from(max) * 100.0
    }
}
