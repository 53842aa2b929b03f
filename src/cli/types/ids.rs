//! ID types for MLB players.

use crate::error::{Result, WatchlistError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for MLB Stats API person IDs.
///
/// Keeps player ids from being mixed up with seasons or row counts.
/// Stats API person ids are positive, so negative input fails to parse.
///
/// # Examples
///
/// ```rust
/// use mlb_watchlist::MlbId;
///
/// let id = MlbId::new(660271);
/// assert_eq!(id.as_u64(), 660271);
/// assert_eq!(id.to_string(), "660271");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MlbId(pub u64);

impl MlbId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MlbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MlbId {
    type Err = WatchlistError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
