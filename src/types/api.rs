//! Deserialization models for the Jellyfin HTTP API payloads this tool
//! reads. Shapes are external and read-only; every field is optional or
//! defaulted so a sparse server response never fails to decode.

use serde::Deserialize;
use std::collections::HashMap;

/// Page of library items returned by `/Users/{id}/Items`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemsPage {
    #[serde(default)]
    pub items: Vec<MediaItem>,
    #[serde(default)]
    pub total_record_count: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MediaItem {
    #[serde(default)]
    pub media_streams: Vec<MediaStream>,
    pub overview: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub image_tags: HashMap<String, String>,
    pub child_count: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MediaStream {
    #[serde(rename = "Type")]
    pub stream_type: Option<String>,
    pub height: Option<u32>,
    pub display_title: Option<String>,
}

impl MediaStream {
    pub fn is_video(&self) -> bool {
        self.stream_type.as_deref() == Some("Video")
    }

    pub fn is_subtitle(&self) -> bool {
        self.stream_type.as_deref() == Some("Subtitle")
    }
}

/// Response of `/Users/{id}/Items/Counts`, reduced to the counts the
/// quantity metric reads. Other count fields in the payload are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemCounts {
    #[serde(default)]
    pub movie_count: u64,
    #[serde(default)]
    pub series_count: u64,
}

/// One entry of the bare array returned by `/Plugins`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PluginInfo {
    #[serde(default)]
    pub name: String,
}
