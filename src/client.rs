//! Authenticated HTTP client for the Jellyfin REST API.
//!
//! One network call per invocation, no retries, no caching. The client is
//! stateless apart from its configuration and is safe to share across
//! concurrent callers.

use crate::error::{GaugeError, Result};
use crate::types::api::{ItemCounts, ItemsPage, PluginInfo};
use crate::types::config::GaugeConfig;
use async_trait::async_trait;
use std::time::Duration;

/// Query parameters for an item listing.
#[derive(Debug, Clone, Default)]
pub struct ItemsQuery {
    pub include_item_types: Option<&'static str>,
    pub fields: Option<&'static str>,
    pub limit: Option<u32>,
}

impl ItemsQuery {
    pub fn with_types(mut self, types: &'static str) -> Self {
        self.include_item_types = Some(types);
        self
    }

    pub fn with_fields(mut self, fields: &'static str) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// The read-only slice of the Jellyfin API the metrics depend on.
///
/// Metric functions and the aggregator take this trait instead of the
/// concrete client so tests can substitute canned responses.
#[async_trait]
pub trait MediaApi: Send + Sync {
    async fn item_counts(&self) -> Result<ItemCounts>;
    async fn items(&self, query: ItemsQuery) -> Result<ItemsPage>;
    async fn plugins(&self) -> Result<Vec<PluginInfo>>;
}

/// HTTP client for a single Jellyfin server.
pub struct JellyfinClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
    user_id: Option<String>,
}

impl JellyfinClient {
    pub fn new(config: &GaugeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.limits.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.server.url.clone(),
            token: config.server.token.clone(),
            user_id: config.server.user_id.clone(),
        })
    }

    /// Sends an authenticated GET to `{base_url}{endpoint}` and decodes
    /// the JSON body. Non-2xx statuses become [`GaugeError::Api`].
    pub async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<serde_json::Value> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, endpoint))
            .header("X-Emby-Token", &self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GaugeError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    fn items_endpoint(&self) -> String {
        match &self.user_id {
            Some(user_id) => format!("/Users/{user_id}/Items"),
            None => "/Items".to_string(),
        }
    }
}

#[async_trait]
impl MediaApi for JellyfinClient {
    async fn item_counts(&self) -> Result<ItemCounts> {
        let endpoint = format!("{}/Counts", self.items_endpoint());
        let value = self.get(&endpoint, &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn items(&self, query: ItemsQuery) -> Result<ItemsPage> {
        let mut params: Vec<(&str, String)> = vec![("Recursive", "true".to_string())];
        if let Some(types) = query.include_item_types {
            params.push(("IncludeItemTypes", types.to_string()));
        }
        if let Some(fields) = query.fields {
            params.push(("Fields", fields.to_string()));
        }
        if let Some(limit) = query.limit {
            params.push(("Limit", limit.to_string()));
        }

        let value = self.get(&self.items_endpoint(), &params).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn plugins(&self) -> Result<Vec<PluginInfo>> {
        let value = self.get("/Plugins", &[]).await?;
        Ok(serde_json::from_value(value)?)
    }
}
