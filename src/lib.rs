//! MLB Watchlist Report Library
//!
//! Fetches season hitting stats from the MLB Stats API for a watchlist of
//! players and writes a flat CSV report, one row per player.
//!
//! ## Features
//!
//! - **Watchlist Loading**: `name,mlb_id` CSV, order preserved, ids validated up front
//! - **Season Fallback**: current season first, previous season if nothing is reported yet
//! - **Lenient Parsing**: missing or malformed stats become empty cells, never errors
//! - **Pluggable Provider**: anything implementing [`mlb::StatsProvider`] can feed the report
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use mlb_watchlist::{commands::update_players::update_players, mlb::StatsApiClient, Season};
//!
//! # async fn example() -> mlb_watchlist::Result<()> {
//! let client = StatsApiClient::new(mlb_watchlist::mlb::STATS_API_BASE_URL)?;
//! let written = update_players(
//!     &client,
//!     Path::new("data/watchlist.csv"),
//!     Path::new("data/players.csv"),
//!     &Season::current().candidates(),
//!     false,
//! )
//! .await?;
//! println!("{written} players");
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the client at a different Stats API host (a mirror, or a local stub):
//! ```bash
//! export MLB_STATS_API_URL=http://localhost:8080/api/v1
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod mlb;
pub mod report;

// Re-export commonly used types
pub use cli::types::{MlbId, Season};
pub use error::{Result, WatchlistError};
pub use report::{OutputRow, WatchlistEntry};

pub const BASE_URL_ENV_VAR: &str = "MLB_STATS_API_URL";
