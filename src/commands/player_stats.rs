//! Player stats command: resolve and print one player's row.

use crate::{
    mlb::{resolve_season_stats, StatsApiClient},
    report::{OutputRow, WatchlistEntry},
    MlbId, Result, Season,
};

use super::{resolve_base_url, season_candidates};

/// Parameters for the player-stats command
#[derive(Debug, Clone)]
pub struct PlayerStatsParams {
    pub mlb_id: MlbId,
    pub name: Option<String>,
    pub season: Option<Season>,
    pub base_url: Option<String>,
    pub as_json: bool,
}

/// Text rendering: one `column: value` line per field, `-` for missing.
pub fn format_row(row: &OutputRow) -> String {
    let mut lines = Vec::new();
    if !row.name.is_empty() {
        lines.push(format!("name: {}", row.name));
    }
    lines.push(format!("mlb_id: {}", row.mlb_id));
    lines.push(format!(
        "year: {}",
        row.year.map_or_else(|| "-".to_string(), |y| y.to_string())
    ));
    for (column, value) in row.stats.iter() {
        lines.push(format!(
            "{}: {}",
            column,
            value.map_or_else(|| "-".to_string(), |v| v.to_string())
        ));
    }
    lines.join("\n")
}

/// Handle the player-stats command
pub async fn handle_player_stats(params: PlayerStatsParams) -> Result<()> {
    let client = StatsApiClient::new(resolve_base_url(params.base_url))?;
    let candidates = season_candidates(params.season);

    let entry = WatchlistEntry {
        name: params.name.unwrap_or_default().trim().to_string(),
        mlb_id: params.mlb_id,
    };
    let resolved = resolve_season_stats(&client, entry.mlb_id, &candidates).await;
    let row = OutputRow::build(&entry, resolved);

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&row)?);
    } else {
        println!("{}", format_row(&row));
    }

    Ok(())
}
