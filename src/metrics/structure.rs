//! Library Structure (max 15): series that actually contain episodes.

use crate::client::{ItemsQuery, MediaApi};
use crate::error::Result;
use crate::types::api::MediaItem;

pub async fn fetch(api: &dyn MediaApi) -> Result<u32> {
    let page = api
        .items(
            ItemsQuery::default()
                .with_types("Series")
                .with_fields("ChildCount"),
        )
        .await?;
    Ok(score(&page.items))
}

/// Fraction of series with at least one child, scaled to 15 points.
/// A library with no series has nothing to judge and scores perfect.
pub fn score(series: &[MediaItem]) -> u32 {
    if series.is_empty() {
        return 15;
    }

    let good = series
        .iter()
        .filter(|s| s.child_count.unwrap_or(0) >= 1)
        .count() as f64;
    (good / series.len() as f64 * 15.0) as u32
}
