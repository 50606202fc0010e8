//! The six metric functions and the concurrent aggregator.
//!
//! Each metric is a fetch over [`MediaApi`] plus a pure reduce function;
//! the aggregator fans all six out as tokio tasks and absorbs any
//! individual failure into a zero score for that category alone.

pub mod metadata;
pub mod plugins;
pub mod quality;
pub mod quantity;
pub mod structure;
pub mod subtitles;

use crate::client::MediaApi;
use crate::error::Result;
use crate::types::scoring::{Category, MetricScore, ScoreReport};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

async fn run_metric(category: Category, api: &dyn MediaApi) -> Result<u32> {
    match category {
        Category::ContentQuantity => quantity::fetch(api).await,
        Category::ContentQuality => quality::fetch(api).await,
        Category::MetadataQuality => metadata::fetch(api).await,
        Category::LibraryStructure => structure::fetch(api).await,
        Category::Plugins => plugins::fetch(api).await,
        Category::Subtitles => subtitles::fetch(api).await,
    }
}

/// Runs all six metrics concurrently and collects a full score report.
///
/// One task per metric; a failed or overdue task degrades its own
/// category to 0 without touching the others. Completion order never
/// affects the result because scores are keyed by category.
pub async fn run_all(api: Arc<dyn MediaApi>, overall_deadline: Duration) -> ScoreReport {
    let deadline = tokio::time::Instant::now() + overall_deadline;

    let handles: Vec<_> = Category::ALL
        .iter()
        .map(|&category| {
            let api = Arc::clone(&api);
            let task = tokio::spawn(async move { run_metric(category, api.as_ref()).await });
            (category, task)
        })
        .collect();

    let mut scores = Vec::with_capacity(handles.len());
    let mut degraded = false;

    for (category, mut task) in handles {
        let value = match tokio::time::timeout_at(deadline, &mut task).await {
            Ok(Ok(Ok(value))) => value,
            Ok(Ok(Err(error))) => {
                warn!(category = category.name(), %error, "metric failed, scoring 0");
                degraded = true;
                0
            }
            Ok(Err(join_error)) => {
                warn!(category = category.name(), %join_error, "metric task panicked, scoring 0");
                degraded = true;
                0
            }
            Err(_) => {
                task.abort();
                warn!(category = category.name(), "metric missed the deadline, scoring 0");
                degraded = true;
                0
            }
        };
        scores.push(MetricScore::new(category, value));
    }

    ScoreReport::new(scores, degraded)
}
