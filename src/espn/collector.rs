//! Collect every rostered player and free agent in a league for one week.

use log::{debug, error, info};
use reqwest::Client;

use crate::{
    cli::types::{LeagueId, SeasonId, TeamId, Week},
    core::{build_header_map, EspnCookies},
    espn::{
        compute::{weekly_points, ProTeamDirectory},
        http::{get_free_agents, get_league, get_team_roster, FFL_SEASONS_BASE_URL},
        labels::{
            photo_url, resolve_lineup_slot, resolve_position, resolve_status, FREE_AGENT_STATUS,
        },
        types::{Player, RosterEntry},
    },
    models::PlayerRecord,
    EspnError, Result,
};

pub const DEFAULT_PLAYER_NAME: &str = "Unknown Player";
pub const DEFAULT_INJURY_STATUS: &str = "ACTIVE";

/// Which league and week to collect.
#[derive(Debug, Clone)]
pub struct CollectRequest {
    pub league_id: LeagueId,
    pub season_id: SeasonId,
    pub week: Week,
    pub cookies: EspnCookies,
}

/// Fetches the league, each team's roster and the free-agent pool, and
/// flattens them into [`PlayerRecord`]s.
///
/// Calls are issued one at a time: `1 + teams + 1` GET requests per run.
///
/// # Examples
///
/// ```rust,no_run
/// use espn_roster::{
///     core::EspnCookies,
///     espn::collector::{CollectRequest, PlayerCollector},
///     LeagueId, SeasonId, Week,
/// };
///
/// # async fn example() {
/// let collector = PlayerCollector::new();
/// let players = collector
///     .collect_all_players(&CollectRequest {
///         league_id: LeagueId::new("123456"),
///         season_id: SeasonId::new("2024"),
///         week: Week::new(1),
///         cookies: EspnCookies::default(),
///     })
///     .await;
/// println!("{} players", players.len());
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PlayerCollector {
    client: Client,
    base_url: String,
}

impl Default for PlayerCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerCollector {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Use a preconfigured [`reqwest::Client`] (timeouts, proxies, ...).
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: FFL_SEASONS_BASE_URL.to_string(),
        }
    }

    /// Point the collector at a different seasons base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Collect all players, returning an empty list on any failure.
    ///
    /// The failure is logged; callers cannot tell it apart from an empty league.
    pub async fn collect_all_players(&self, req: &CollectRequest) -> Vec<PlayerRecord> {
        match self.try_collect_all_players(req).await {
            Ok(players) => players,
            Err(e) => {
                error!("Error: {}", e);
                Vec::new()
            }
        }
    }

    /// Same as [`collect_all_players`](Self::collect_all_players) but surfaces
    /// the failure. Nothing is returned unless all calls succeed.
    pub async fn try_collect_all_players(&self, req: &CollectRequest) -> Result<Vec<PlayerRecord>> {
        let headers = build_header_map(&req.cookies)?;

        let league = get_league(
            &self.client,
            &self.base_url,
            &headers,
            &req.season_id,
            &req.league_id,
            req.week,
        )
        .await?;
        let directory = ProTeamDirectory::from_league(&league);
        debug!(
            "League {} lists {} teams ({} pro-team entries)",
            req.league_id,
            league.teams.len(),
            directory.len()
        );

        let mut players = Vec::new();

        for team in &league.teams {
            let roster = get_team_roster(
                &self.client,
                &self.base_url,
                &headers,
                &req.season_id,
                &req.league_id,
                team.id,
                req.week,
            )
            .await
            .map_err(|e| EspnError::Collection {
                message: format!("roster for team {}: {}", team.id, e),
            })?;

            debug!(
                "Team {} ({}): {} roster entries",
                team.id,
                team.name.as_deref().unwrap_or("Unknown Team"),
                roster.roster.entries.len()
            );

            players.extend(
                roster
                    .roster
                    .entries
                    .iter()
                    .map(|entry| rostered_record(entry, team.id, &directory, req.week)),
            );
        }
        let rostered = players.len();

        let pool = get_free_agents(
            &self.client,
            &self.base_url,
            &headers,
            &req.season_id,
            &req.league_id,
            req.week,
        )
        .await?;

        players.extend(
            pool.iter()
                .map(|entry| free_agent_record(&entry.player, &directory, req.week)),
        );

        info!(
            "Collected {} rostered players and {} free agents for week {}",
            rostered,
            players.len() - rostered,
            req.week
        );

        Ok(players)
    }
}

/// Fields shared by rostered and free-agent records.
fn base_record(player: &Player, directory: &ProTeamDirectory, week: Week) -> PlayerRecord {
    let points = weekly_points(&player.stats, week);

    PlayerRecord {
        id: player.id.to_string(),
        name: player
            .full_name
            .clone()
            .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string()),
        position: resolve_position(player.default_position_id).to_string(),
        team: directory.abbrev(player.pro_team_id),
        team_id: None,
        status: FREE_AGENT_STATUS.to_string(),
        injury_status: player
            .injury_status
            .clone()
            .unwrap_or_else(|| DEFAULT_INJURY_STATUS.to_string()),
        projected_points: points.projected,
        actual_points: points.actual,
        lineup_slot: None,
        opponent: None,
        opponent_rank: None,
        photo_url: photo_url(player.id),
    }
}

pub fn rostered_record(
    entry: &RosterEntry,
    team_id: TeamId,
    directory: &ProTeamDirectory,
    week: Week,
) -> PlayerRecord {
    PlayerRecord {
        team_id: Some(team_id.as_u32()),
        status: resolve_status(entry.lineup_slot_id).to_string(),
        lineup_slot: Some(resolve_lineup_slot(entry.lineup_slot_id).to_string()),
        ..base_record(&entry.player_pool_entry.player, directory, week)
    }
}

pub fn free_agent_record(player: &Player, directory: &ProTeamDirectory, week: Week) -> PlayerRecord {
    base_record(player, directory, week)
}
