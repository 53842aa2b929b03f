//! Report rows.

use serde::Serialize;

use crate::{
    mlb::{fetch::ResolvedStats, types::HittingStats, STAT_KEYS},
    report::watchlist::WatchlistEntry,
    MlbId, Season,
};

/// Leading columns before the stat columns.
pub const ID_COLUMNS: [&str; 3] = ["name", "mlb_id", "year"];

/// Full report header, in order.
pub fn header() -> Vec<&'static str> {
    ID_COLUMNS
        .iter()
        .copied()
        .chain(STAT_KEYS.iter().map(|(_, col)| *col))
        .collect()
}

/// One line of the report: a watchlist entry plus whatever season was found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRow {
    pub name: String,
    pub mlb_id: MlbId,
    pub year: Option<Season>,
    #[serde(flatten)]
    pub stats: HittingStats,
}

impl OutputRow {
    /// Values pass through untouched; absent stats stay `None`.
    pub fn build(entry: &WatchlistEntry, resolved: ResolvedStats) -> Self {
        Self {
            name: entry.name.clone(),
            mlb_id: entry.mlb_id,
            year: resolved.season,
            stats: resolved.stats,
        }
    }

    /// CSV fields in [`header`] order. `None` becomes an empty field.
    pub fn to_record(&self) -> Vec<String> {
        let mut record = Vec::with_capacity(ID_COLUMNS.len() + STAT_KEYS.len());
        record.push(self.name.clone());
        record.push(self.mlb_id.to_string());
        record.push(self.year.map(|y| y.to_string()).unwrap_or_default());
        record.extend(
            self.stats
                .iter()
                .map(|(_, value)| value.map(|v| v.to_string()).unwrap_or_default()),
        );
        record
    }
}
