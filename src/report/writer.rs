//! CSV report output.

use std::{io::Write, path::Path};

use tracing::info;

use crate::{
    core::fs::ensure_parent_dir,
    report::row::{header, OutputRow},
    Result,
};

/// Write `rows` to `path`, replacing whatever is there.
///
/// The header is always written, even for an empty watchlist. Returns the
/// number of rows written.
pub fn write_players_csv(path: &Path, rows: &[OutputRow]) -> Result<usize> {
    ensure_parent_dir(path)?;
    let file = std::fs::File::create(path)?;
    let written = write_players(file, rows)?;

    info!(path = %path.display(), rows = written, "wrote players report");
    Ok(written)
}

pub(crate) fn write_players<W: Write>(wtr: W, rows: &[OutputRow]) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(wtr);

    writer.write_record(header())?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }
    writer.flush()?;

    Ok(rows.len())
}
