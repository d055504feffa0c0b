use crate::cli::types::{PlayerId, TeamId};
use serde::{Deserialize, Serialize};


/// Root of the league resource (`mTeam` and friends).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueResponse {
    #[serde(default)]
    pub teams: Vec<LeagueTeam>,
}

/// One entry of the league's team listing.
///
/// Pro-team fields are optional; entries that carry `proTeamId` also feed
/// the pro-team abbreviation lookup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueTeam {
    pub id: TeamId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "proTeamId", default)]
    pub pro_team_id: Option<i64>,
    #[serde(default)]
    pub abbrev: Option<String>,
}

/// Root of a single team's roster resource.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamRosterResponse {
    #[serde(default)]
    pub roster: Roster,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Roster {
    #[serde(default)]
    pub entries: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterEntry {
    #[serde(rename = "lineupSlotId", default)]
    pub lineup_slot_id: Option<i64>,
    #[serde(rename = "playerPoolEntry")]
    pub player_pool_entry: PlayerPoolEntry,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerPoolEntry {
    pub player: Player,
}

/// Free-agent pool responses are a bare array of these.
pub type FreeAgentResponse = Vec<PlayerPoolEntry>;

/// Player data from ESPN API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "defaultPositionId", default)]
    pub default_position_id: Option<i64>,
    #[serde(rename = "proTeamId", default)]
    pub pro_team_id: Option<i64>,
    #[serde(rename = "injuryStatus", default)]
    pub injury_status: Option<String>,
    #[serde(default)]
    pub stats: Vec<PlayerStats>,
}

/// One stat line: a source (projection or result) for one scoring period.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerStats {
    #[serde(rename = "scoringPeriodId", default)]
    pub scoring_period_id: Option<i64>,
    #[serde(rename = "statSourceId", default)]
    pub stat_source_id: Option<i64>,
    #[serde(rename = "appliedTotal", default)]
    pub applied_total: Option<f64>,
}
