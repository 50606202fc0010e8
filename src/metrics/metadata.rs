//! Metadata Quality (max 20): posters, overviews, and genre tags.

use crate::client::{ItemsQuery, MediaApi};
use crate::error::Result;
use crate::types::api::MediaItem;

pub async fn fetch(api: &dyn MediaApi) -> Result<u32> {
    let page = api
        .items(ItemsQuery::default().with_fields("Overview,Genres,ImageTags"))
        .await?;
    Ok(score(&page.items))
}

/// Counts three independent completeness signals per item (primary poster,
/// non-empty overview, non-empty genre list) and scales their combined
/// fraction to 20 points.
pub fn score(items: &[MediaItem]) -> u32 {
    if items.is_empty() {
        return 0;
    }

    let mut has_posters = 0u64;
    let mut has_overviews = 0u64;
    let mut has_genres = 0u64;

    for item in items {
        if item.image_tags.contains_key("Primary") {
            has_posters += 1;
        }
        if item.overview.as_deref().is_some_and(|o| !o.is_empty()) {
            has_overviews += 1;
        }
        if !item.genres.is_empty() {
            has_genres += 1;
        }
    }

    let filled = (has_posters + has_overviews + has_genres) as f64;
    let possible = 3.0 * items.len() as f64;
    (filled / possible * 20.0) as u32
}
