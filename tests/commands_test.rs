//! Integration tests for command helpers

use mlb_watchlist::{
    cli::{Cli, Commands, DEFAULT_OUTPUT_PATH, DEFAULT_WATCHLIST_PATH},
    commands::{resolve_base_url, season_candidates},
    mlb::STATS_API_BASE_URL,
    Season, BASE_URL_ENV_VAR,
};
use clap::Parser;

// Env var cases share one test so they cannot race each other.
#[test]
fn test_resolve_base_url_sources() {
    std::env::remove_var(BASE_URL_ENV_VAR);
    assert_eq!(resolve_base_url(None), STATS_API_BASE_URL);

    std::env::set_var(BASE_URL_ENV_VAR, "http://mirror.local/api/v1");
    assert_eq!(resolve_base_url(None), "http://mirror.local/api/v1");

    // flag overrides env
    assert_eq!(
        resolve_base_url(Some("http://flag.local/api/v1".to_string())),
        "http://flag.local/api/v1"
    );

    // blank env value falls through to the default
    std::env::set_var(BASE_URL_ENV_VAR, "   ");
    assert_eq!(resolve_base_url(None), STATS_API_BASE_URL);

    std::env::remove_var(BASE_URL_ENV_VAR);
}

#[test]
fn test_season_candidates_fall_back_one_year() {
    let [first, second] = season_candidates(Some(Season::new(2021)));
    assert_eq!(first.as_u16(), 2021);
    assert_eq!(second.as_u16(), 2020);
}

#[test]
fn test_cli_default_paths() {
    assert_eq!(DEFAULT_WATCHLIST_PATH, "data/watchlist.csv");
    assert_eq!(DEFAULT_OUTPUT_PATH, "data/players.csv");

    let cli = Cli::try_parse_from(["mlb-watchlist", "update-players", "--verbose"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::UpdatePlayers { verbose: true, .. }
    ));
}
