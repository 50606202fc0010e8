//! Subtitles (max 5): share of the library carrying subtitle streams.

use crate::client::{ItemsQuery, MediaApi};
use crate::error::Result;
use crate::types::api::MediaItem;

/// Sample cap for the subtitle survey; large libraries are judged on
/// their first thousand movies and episodes.
const SAMPLE_LIMIT: u32 = 1000;

pub async fn fetch(api: &dyn MediaApi) -> Result<u32> {
    let page = api
        .items(
            ItemsQuery::default()
                .with_types("Movie,Episode")
                .with_fields("MediaStreams")
                .with_limit(SAMPLE_LIMIT),
        )
        .await?;
    Ok(score(&page.items))
}

/// Fraction of items with at least one subtitle stream, scaled to 5
/// points and truncated.
pub fn score(items: &[MediaItem]) -> u32 {
    if items.is_empty() {
        return 0;
    }

    let with_subs = items
        .iter()
        .filter(|item| item.media_streams.iter().any(|s| s.is_subtitle()))
        .count() as f64;
    (with_subs / items.len() as f64 * 5.0) as u32
}
