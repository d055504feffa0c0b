//! Upstream ESPN endpoints used by the player collector.
//!
//! Every call sends the same view set and `scoringPeriodId`. The base URL is a
//! parameter so tests can point the calls at a mock server.

use log::debug;
use reqwest::{header::HeaderMap, Client};
use serde::de::DeserializeOwned;

use crate::{
    cli::types::{LeagueId, SeasonId, TeamId, Week},
    espn::types::{FreeAgentResponse, LeagueResponse, TeamRosterResponse},
    Result,
};


/// Base path for ESPN Fantasy Football v3 seasons.
pub const FFL_SEASONS_BASE_URL: &str = "https://fantasy.espn.com/apis/v3/games/ffl/seasons";

pub const VIEWS: [&str; 4] = ["mRoster", "mTeam", "mMatchup", "mScoreboard"];

/// Query parameters shared by all three calls.
pub fn base_query(week: Week) -> Vec<(&'static str, String)> {
    let mut params: Vec<(&'static str, String)> =
        VIEWS.iter().map(|v| ("view", v.to_string())).collect();
    params.push(("scoringPeriodId", week.to_string()));
    params
}

fn league_url(base_url: &str, season: &SeasonId, league_id: &LeagueId) -> String {
    format!(
        "{}/{}/segments/0/leagues/{}",
        base_url.trim_end_matches('/'),
        season,
        league_id
    )
}

async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    headers: &HeaderMap,
    params: &[(&'static str, String)],
) -> Result<T> {
    debug!("GET {} {:?}", url, params);

    let body = client
        .get(url)
        .headers(headers.clone())
        .query(params)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(serde_json::from_str(&body)?)
}

/// League resource: team listing plus pro-team entries.
pub async fn get_league(
    client: &Client,
    base_url: &str,
    headers: &HeaderMap,
    season: &SeasonId,
    league_id: &LeagueId,
    week: Week,
) -> Result<LeagueResponse> {
    let url = league_url(base_url, season, league_id);
    get_json(client, &url, headers, &base_query(week)).await
}

/// One fantasy team's roster for the week.
pub async fn get_team_roster(
    client: &Client,
    base_url: &str,
    headers: &HeaderMap,
    season: &SeasonId,
    league_id: &LeagueId,
    team_id: TeamId,
    week: Week,
) -> Result<TeamRosterResponse> {
    let url = format!("{}/teams/{}", league_url(base_url, season, league_id), team_id);
    get_json(client, &url, headers, &base_query(week)).await
}

/// Free-agent pool (`status=FREEAGENT`).
pub async fn get_free_agents(
    client: &Client,
    base_url: &str,
    headers: &HeaderMap,
    season: &SeasonId,
    league_id: &LeagueId,
    week: Week,
) -> Result<FreeAgentResponse> {
    let url = format!("{}/players", league_url(base_url, season, league_id));
    let mut params = base_query(week);
    params.push(("status", "FREEAGENT".to_string()));
    get_json(client, &url, headers, &params).await
}
