use serde::Deserialize;

/// Fully resolved configuration, validated at startup and immutable for
/// the process lifetime. The API client is its only owner.
#[derive(Debug, Clone)]
pub struct GaugeConfig {
    pub server: ServerConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the Jellyfin server without a trailing slash.
    pub url: String,
    /// API token sent in the `X-Emby-Token` header.
    pub token: String,
    /// Optional user id to scope item queries to.
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_overall_deadline")]
    pub overall_deadline_secs: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout(),
            overall_deadline_secs: default_overall_deadline(),
        }
    }
}

fn default_request_timeout() -> u64 {
    15
}

fn default_overall_deadline() -> u64 {
    60
}

/// On-disk shape of `jellygauge.toml`. Server fields are optional here
/// because each may instead come from the environment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileServerConfig {
    pub url: Option<String>,
    pub token: Option<String>,
    pub user_id: Option<String>,
}
