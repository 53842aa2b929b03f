//! Error types for the MLB watchlist report

use std::path::PathBuf;

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, WatchlistError>;

#[derive(Error, Debug)]
pub enum WatchlistError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing watchlist file: {}", .path.display())]
    MissingWatchlist { path: PathBuf },

    /// `mlb_id` is not a whole number, or is negative. Stats API person ids
    /// are positive.
    #[error("Invalid mlb_id {value:?} on watchlist line {line}")]
    InvalidPlayerId { line: u64, value: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Stats provider error: {message}")]
    Provider { message: String },
}
