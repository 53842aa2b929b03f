//! Season years.

use crate::error::{Result, WatchlistError};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The current calendar year in UTC.
    pub fn current() -> Self {
        Self(Utc::now().year() as u16)
    }

    pub fn previous(&self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Seasons to try, in order, when looking up a player's stats.
    ///
    /// If the requested season has no stats yet (spring, or a player who has
    /// not debuted), the prior season is used.
    pub fn candidates(&self) -> [Season; 2] {
        [*self, self.previous()]
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = WatchlistError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
