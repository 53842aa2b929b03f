//! Core utilities for the MLB watchlist report
//!
//! - `fs`: output directory handling
//! - `http`: shared HTTP client and headers

pub mod fs;
pub mod http;

pub use fs::ensure_parent_dir;
pub use http::{build_client, common_headers};
