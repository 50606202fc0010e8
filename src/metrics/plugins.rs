//! Plugins (max 5): presence of a privacy-focused essential plugin stack.

use crate::client::MediaApi;
use crate::error::Result;
use crate::types::api::PluginInfo;

const ESSENTIAL_PLUGINS: [&str; 6] = [
    "autoboxset",
    "intro skipper",
    "theme songs",
    "playback reporting",
    "opensubtitles",
    "autoorganize",
];

pub async fn fetch(api: &dyn MediaApi) -> Result<u32> {
    let plugins = api.plugins().await?;
    Ok(score(&plugins))
}

/// One point per installed plugin whose name matches the essential list,
/// capped at the category maximum.
pub fn score(plugins: &[PluginInfo]) -> u32 {
    let count = plugins
        .iter()
        .map(|p| p.name.to_lowercase())
        .filter(|name| ESSENTIAL_PLUGINS.iter().any(|good| name.contains(good)))
        .count() as u32;
    count.min(5)
}
