//! Entry point: parse CLI, set up logging, and run the collector.

use anyhow::Context;
use clap::Parser;
use espn_roster::{
    cli::CollectArgs,
    commands::collect_players::{handle_collect_players, CollectPlayersParams},
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CollectArgs::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    handle_collect_players(
        CollectPlayersParams {
            league_id: args.league_id,
            season_id: args.season_id,
            week: args.week,
            swid: args.swid,
            espn_s2: args.espn_s2,
            pretty: args.pretty,
            base_url: args.base_url,
        },
        &mut stdout,
    )
    .await
    .context("collect players")?;

    Ok(())
}
