//! Type-safe wrappers for MLB player ids and seasons.

pub mod ids;
pub mod time;


pub use ids::MlbId;
pub use time::Season;
