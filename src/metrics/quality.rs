//! Content Quality (max 20): resolution tiers plus an HDR bonus.

use crate::client::{ItemsQuery, MediaApi};
use crate::error::Result;
use crate::types::api::MediaItem;

pub async fn fetch(api: &dyn MediaApi) -> Result<u32> {
    let page = api
        .items(
            ItemsQuery::default()
                .with_types("Movie,Episode")
                .with_fields("MediaStreams"),
        )
        .await?;
    Ok(score(&page.items))
}

/// Classifies each item by the height of its first video stream (UHD
/// >= 2160, FHD >= 1080, HD >= 720) and flags HDR independently when the
/// stream's display title mentions it. Each tier contributes its fraction
/// of the library, truncated to whole points before summing.
pub fn score(items: &[MediaItem]) -> u32 {
    if items.is_empty() {
        return 0;
    }

    let total = items.len() as f64;
    let mut uhd = 0u32;
    let mut fhd = 0u32;
    let mut hd = 0u32;
    let mut hdr = 0u32;

    for item in items {
        // Only the first video stream counts.
        let Some(stream) = item.media_streams.iter().find(|s| s.is_video()) else {
            continue;
        };
        match stream.height.unwrap_or(0) {
            h if h >= 2160 => uhd += 1,
            h if h >= 1080 => fhd += 1,
            h if h >= 720 => hd += 1,
            _ => {}
        }
        let title = stream.display_title.as_deref().unwrap_or("");
        if title.to_lowercase().contains("hdr") {
            hdr += 1;
        }
    }

    let term = |count: u32, points: u32| -> u32 {
        points.min((f64::from(points) * f64::from(count) / total) as u32)
    };

    term(uhd, 10) + term(fhd, 5) + term(hd, 3) + term(hdr, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::api::MediaStream;

    fn video_item(height: u32, display_title: &str) -> MediaItem {
        MediaItem {
            media_streams: vec![MediaStream {
                stream_type: Some("Video".to_string()),
                height: Some(height),
                display_title: Some(display_title.to_string()),
            }],
            ..MediaItem::default()
        }
    }

    #[test]
    fn empty_library_scores_zero() {
        assert_eq!(score(&[]), 0);
    }

    #[test]
    fn half_uhd_library_earns_five_points() {
        let mut items: Vec<MediaItem> = (0..5).map(|_| video_item(2160, "4K HEVC")).collect();
        items.extend((0..5).map(|_| video_item(480, "SD")));
        assert_eq!(score(&items), 5);
    }

    #[test]
    fn all_uhd_hdr_library_earns_the_maximum() {
        let items: Vec<MediaItem> = (0..4).map(|_| video_item(2160, "4K HDR10")).collect();
        // 10 UHD + 2 HDR; no FHD/HD share.
        assert_eq!(score(&items), 12);
    }

    #[test]
    fn hdr_match_is_case_insensitive() {
        let items = vec![video_item(1080, "1080p Hdr Dolby Vision")];
        // 5 FHD + 2 HDR.
        assert_eq!(score(&items), 7);
    }

    #[test]
    fn only_the_first_video_stream_is_classified() {
        let mut item = video_item(480, "SD");
        item.media_streams.push(MediaStream {
            stream_type: Some("Video".to_string()),
            height: Some(2160),
            display_title: Some("4K".to_string()),
        });
        assert_eq!(score(&[item]), 0);
    }

    #[test]
    fn items_without_video_streams_dilute_the_fractions() {
        let items = vec![video_item(2160, "4K"), MediaItem::default()];
        // One UHD item out of two: floor(10 * 0.5) = 5.
        assert_eq!(score(&items), 5);
    }

    #[test]
    fn fractions_truncate_before_summing() {
        // 1 of 3 FHD: 5 * 1/3 = 1.66 -> 1 point.
        let mut items = vec![video_item(1080, "1080p")];
        items.extend((0..2).map(|_| video_item(480, "SD")));
        assert_eq!(score(&items), 1);
    }
}
