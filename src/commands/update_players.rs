//! Update players command: watchlist in, season stats report out.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    mlb::{resolve_season_stats, StatsApiClient, StatsProvider},
    report::{load_watchlist, write_players_csv, OutputRow},
    Result, Season,
};

use super::{resolve_base_url, season_candidates};

/// Parameters for the update-players command
#[derive(Debug, Clone)]
pub struct UpdatePlayersParams {
    pub watchlist: PathBuf,
    pub output: PathBuf,
    pub season: Option<Season>,
    pub base_url: Option<String>,
    pub verbose: bool,
}

/// Build rows for every watchlist entry, one provider lookup at a time.
///
/// The watchlist is read (and validated) before any request is made, and the
/// output file is only touched once every row is ready.
pub async fn update_players<P>(
    provider: &P,
    watchlist: &Path,
    output: &Path,
    candidates: &[Season],
    verbose: bool,
) -> Result<usize>
where
    P: StatsProvider + ?Sized,
{
    let entries = load_watchlist(watchlist)?;
    let mut rows = Vec::with_capacity(entries.len());

    for entry in &entries {
        let resolved = resolve_season_stats(provider, entry.mlb_id, candidates).await;

        if verbose {
            match resolved.season {
                Some(season) => println!("  {} ({}): {}", entry.name, entry.mlb_id, season),
                None => println!("  {} ({}): no stats", entry.name, entry.mlb_id),
            }
        }

        rows.push(OutputRow::build(entry, resolved));
    }

    let with_stats = rows.iter().filter(|r| r.year.is_some()).count();
    info!(
        players = rows.len(),
        with_stats,
        "resolved season stats for watchlist"
    );

    write_players_csv(output, &rows)
}

/// Handle the update-players command
pub async fn handle_update_players(params: UpdatePlayersParams) -> Result<()> {
    let client = StatsApiClient::new(resolve_base_url(params.base_url))?;
    let candidates = season_candidates(params.season);

    if params.verbose {
        println!("Stats API: {}", client.base_url());
        println!(
            "Seasons: {} (falling back to {})",
            candidates[0], candidates[1]
        );
    }

    let written = update_players(
        &client,
        &params.watchlist,
        &params.output,
        &candidates,
        params.verbose,
    )
    .await?;

    println!(
        "✓ Wrote {} with {} players",
        params.output.display(),
        written
    );

    Ok(())
}
