//! Season lookup with fallback.
//!
//! A player's stats are requested for each candidate season in order; the
//! first season that reports anything wins. Provider failures never escape
//! this module: they count as "nothing for that season".

use tracing::debug;

use crate::{
    mlb::{
        provider::StatsProvider,
        types::{HittingStats, StatMap},
    },
    MlbId, Season, WatchlistError,
};

/// Outcome of asking the provider about one season.
#[derive(Debug)]
pub enum SeasonAttempt {
    Found(StatMap),
    NoData,
    Failed(WatchlistError),
}

/// The season a player's stats were taken from, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedStats {
    pub season: Option<Season>,
    pub stats: HittingStats,
}

impl ResolvedStats {
    pub fn none() -> Self {
        Self::default()
    }
}

pub async fn attempt_season<P>(provider: &P, player: MlbId, season: Season) -> SeasonAttempt
where
    P: StatsProvider + ?Sized,
{
    match provider.season_hitting_stats(player, season).await {
        Ok(response) => match response.first_stat_map() {
            Some(stat) => SeasonAttempt::Found(stat.clone()),
            None => SeasonAttempt::NoData,
        },
        Err(e) => SeasonAttempt::Failed(e),
    }
}

/// Try each candidate season in order. Both failing is not an error; the
/// player just gets an empty row.
pub async fn resolve_season_stats<P>(
    provider: &P,
    player: MlbId,
    candidates: &[Season],
) -> ResolvedStats
where
    P: StatsProvider + ?Sized,
{
    for &season in candidates {
        match attempt_season(provider, player, season).await {
            SeasonAttempt::Found(stat) => {
                debug!(%player, %season, "season stats found");
                return ResolvedStats {
                    season: Some(season),
                    stats: HittingStats::from_stat_map(&stat),
                };
            }
            SeasonAttempt::NoData => {
                debug!(%player, %season, "no season stats reported");
            }
            SeasonAttempt::Failed(e) => {
                debug!(%player, %season, error = %e, "season stats request failed");
            }
        }
    }

    debug!(%player, "no stats for any candidate season");
    ResolvedStats::none()
}
