//! Seam between the report pipeline and wherever season stats come from.

use async_trait::async_trait;

use crate::{mlb::types::StatsResponse, MlbId, Result, Season};

/// Anything that can answer "season hitting stats for player X in season Y".
///
/// The HTTP client implements this against the MLB Stats API; tests plug in
/// canned responses.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    async fn season_hitting_stats(&self, player: MlbId, season: Season) -> Result<StatsResponse>;
}
