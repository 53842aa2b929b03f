//! Watchlist in, players report out.

pub mod row;
pub mod watchlist;
pub mod writer;


pub use row::{header, OutputRow};
pub use watchlist::{load_watchlist, WatchlistEntry};
pub use writer::write_players_csv;
