//! Watchlist loading.

use std::{io::Read, path::Path};

use serde::Deserialize;
use tracing::info;

use crate::{MlbId, Result, WatchlistError};

/// One player to report on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchlistEntry {
    pub name: String,
    pub mlb_id: MlbId,
}

/// Raw CSV row. Extra columns are ignored; `mlb_id` is validated separately
/// so the error can name the offending line.
#[derive(Debug, Deserialize)]
struct RawWatchlistRow {
    name: String,
    mlb_id: String,
}

/// Read the watchlist at `path`, preserving row order.
///
/// A missing file is reported as [`WatchlistError::MissingWatchlist`] so the
/// caller can abort before anything is written.
pub fn load_watchlist(path: &Path) -> Result<Vec<WatchlistEntry>> {
    if !path.exists() {
        return Err(WatchlistError::MissingWatchlist {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path)?;
    let entries = load_watchlist_from_reader(file)?;

    info!(path = %path.display(), players = entries.len(), "loaded watchlist");
    Ok(entries)
}

pub(crate) fn load_watchlist_from_reader<R: Read>(rdr: R) -> Result<Vec<WatchlistEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(rdr);
    let headers = reader.headers()?.clone();
    let mut record = csv::StringRecord::new();
    let mut entries = Vec::new();

    while reader.read_record(&mut record)? {
        let raw: RawWatchlistRow = record.deserialize(Some(&headers))?;
        let mlb_id = raw
            .mlb_id
            .parse::<MlbId>()
            .map_err(|_| WatchlistError::InvalidPlayerId {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                value: raw.mlb_id.clone(),
            })?;

        entries.push(WatchlistEntry {
            name: raw.name.trim().to_string(),
            mlb_id,
        });
    }

    Ok(entries)
}
