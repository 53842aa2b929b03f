//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use types::{MlbId, Season};

pub const DEFAULT_WATCHLIST_PATH: &str = "data/watchlist.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "data/players.csv";

#[derive(Debug, Parser)]
#[clap(name = "mlb-watchlist", about = "MLB watchlist season stats report")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch season hitting stats for every player on the watchlist and write the CSV report.
    ///
    /// Each player is looked up for the given season (default: current UTC year),
    /// falling back to the previous season when nothing is reported yet.
    UpdatePlayers {
        /// Watchlist CSV with `name` and `mlb_id` columns.
        #[clap(long, default_value = DEFAULT_WATCHLIST_PATH)]
        watchlist: PathBuf,

        /// Report CSV to (over)write.
        #[clap(long, short, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// First season to try (e.g. 2025). Defaults to the current year.
        #[clap(long, short)]
        season: Option<Season>,

        /// Stats API base URL (or set `MLB_STATS_API_URL` env var).
        #[clap(long)]
        base_url: Option<String>,

        /// Print the resolved season for each player.
        #[clap(long)]
        verbose: bool,
    },

    /// Look up a single player's season hitting stats without writing anything.
    PlayerStats {
        /// MLB Stats API person id.
        #[clap(long)]
        mlb_id: MlbId,

        /// Display name to put on the row.
        #[clap(long, short = 'n')]
        name: Option<String>,

        /// First season to try (e.g. 2025). Defaults to the current year.
        #[clap(long, short)]
        season: Option<Season>,

        /// Stats API base URL (or set `MLB_STATS_API_URL` env var).
        #[clap(long)]
        base_url: Option<String>,

        /// Output the row as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
