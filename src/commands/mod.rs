//! Command implementations for the MLB watchlist CLI

pub mod player_stats;
pub mod update_players;

use crate::{mlb::STATS_API_BASE_URL, Season, BASE_URL_ENV_VAR};

/// Base URL from the flag, else `MLB_STATS_API_URL`, else the public API.
pub fn resolve_base_url(base_url: Option<String>) -> String {
    base_url
        .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| STATS_API_BASE_URL.to_string())
}

/// Seasons to try: the requested one (or the current UTC year), then the year before.
pub fn season_candidates(season: Option<Season>) -> [Season; 2] {
    season.unwrap_or_else(Season::current).candidates()
}
