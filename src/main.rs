//! Entry point: parse CLI, set up logging, dispatch to command handlers.

use clap::Parser;
use mlb_watchlist::{
    cli::{Cli, Commands},
    commands::{
        player_stats::{handle_player_stats, PlayerStatsParams},
        update_players::{handle_update_players, UpdatePlayersParams},
    },
    Result,
};
use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout stays clean for `--json`.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mlb_watchlist=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let app = Cli::parse();

    match app.command {
        Commands::UpdatePlayers {
            watchlist,
            output,
            season,
            base_url,
            verbose,
        } => {
            handle_update_players(UpdatePlayersParams {
                watchlist,
                output,
                season,
                base_url,
                verbose,
            })
            .await?
        }

        Commands::PlayerStats {
            mlb_id,
            name,
            season,
            base_url,
            json,
        } => {
            handle_player_stats(PlayerStatsParams {
                mlb_id,
                name,
                season,
                base_url,
                as_json: json,
            })
            .await?
        }
    }

    Ok(())
}
