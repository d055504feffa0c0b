//! Collect players command implementation

use std::io::Write;

use crate::{
    core::EspnCookies,
    espn::collector::{CollectRequest, PlayerCollector},
    models::PlayerRecord,
    LeagueId, Result, SeasonId, Week,
};

use super::resolve_league_id;

/// Parameters for the collect players command
#[derive(Debug, Clone)]
pub struct CollectPlayersParams {
    pub league_id: Option<LeagueId>,
    pub season_id: SeasonId,
    pub week: Week,
    pub swid: Option<String>,
    pub espn_s2: Option<String>,
    pub pretty: bool,
    pub base_url: Option<String>,
}

impl CollectPlayersParams {
    /// Resolve the league ID and cookies (falling back to env vars).
    pub fn into_request(self) -> Result<CollectRequest> {
        Ok(CollectRequest {
            league_id: resolve_league_id(self.league_id)?,
            season_id: self.season_id,
            week: self.week,
            cookies: EspnCookies::new(self.swid, self.espn_s2).or_from_env(),
        })
    }
}

/// Encode records as a JSON array.
pub fn render_players(players: &[PlayerRecord], pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(players)?
    } else {
        serde_json::to_string(players)?
    };
    Ok(out)
}

/// Handle the collect players command.
///
/// Upstream failures are logged and produce `[]`; only a missing league ID or
/// an output write failure is returned as an error.
pub async fn handle_collect_players<W: Write>(params: CollectPlayersParams, out: &mut W) -> Result<()> {
    let pretty = params.pretty;
    let collector = match &params.base_url {
        Some(url) => PlayerCollector::new().with_base_url(url.clone()),
        None => PlayerCollector::new(),
    };

    let request = params.into_request()?;
    let players = collector.collect_all_players(&request).await;

    writeln!(out, "{}", render_players(&players, pretty)?)?;
    Ok(())
}
