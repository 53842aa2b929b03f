//! MLB Stats API client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    core::http::build_client, mlb::provider::StatsProvider, mlb::types::StatsResponse, MlbId,
    Result, Season,
};


/// Base path for the public MLB Stats API.
pub const STATS_API_BASE_URL: &str = "https://statsapi.mlb.com/api/v1";

/// Talks to `{base_url}/people/{id}/stats`.
#[derive(Debug, Clone)]
pub struct StatsApiClient {
    client: Client,
    base_url: String,
}

impl StatsApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: build_client()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn season_stats_url(&self, player: MlbId) -> String {
        format!("{}/people/{}/stats", self.base_url, player)
    }
}

#[async_trait]
impl StatsProvider for StatsApiClient {
    async fn season_hitting_stats(&self, player: MlbId, season: Season) -> Result<StatsResponse> {
        let url = self.season_stats_url(player);
        let season_param = season.to_string();
        let params = [
            ("stats", "season"),
            ("group", "hitting"),
            ("season", season_param.as_str()),
        ];

        debug!(%player, %season, %url, "requesting season hitting stats");

        let res = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<StatsResponse>()
            .await?;

        Ok(res)
    }
}
