//! HTTP utilities for Stats API communication

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};

pub const USER_AGENT: &str = concat!("mlb-watchlist/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every Stats API request.
pub fn common_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Shared client. No request timeout: a hung call hangs the job.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(common_headers())
        .build()?)
}
