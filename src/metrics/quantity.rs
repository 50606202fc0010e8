//! Content Quantity (max 10): how much of a library there is at all.

use crate::client::MediaApi;
use crate::error::Result;

pub async fn fetch(api: &dyn MediaApi) -> Result<u32> {
    let counts = api.item_counts().await?;
    Ok(score(counts.movie_count + counts.series_count))
}

/// Buckets the movie + series total into {0, 1, 4, 7, 10}.
pub fn score(total_items: u64) -> u32 {
    if total_items >= 1000 {
        10
    } else if total_items >= 500 {
        7
    } else if total_items >= 100 {
        4
    } else if total_items >= 1 {
        1
    } else {
        0
    }
}
