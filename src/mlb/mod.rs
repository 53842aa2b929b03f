//! MLB Stats API access: wire types, the HTTP client, and season fallback.

pub mod fetch;
pub mod http;
pub mod provider;
pub mod types;

pub use fetch::{resolve_season_stats, ResolvedStats, SeasonAttempt};
pub use http::{StatsApiClient, STATS_API_BASE_URL};
pub use provider::StatsProvider;
pub use types::{HittingStats, StatValue, StatsResponse, STAT_KEYS};
