//! Output models used for JSON serialization.

use serde::{Deserialize, Serialize};

/// One normalized player row, rostered or free agent.
///
/// Field names serialize in camelCase. `teamId` is omitted entirely for free
/// agents, while `lineupSlot`, `opponent` and `opponentRank` serialize as
/// `null` when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    /// ESPN player ID, stringified.
    pub id: String,
    pub name: String,
    /// One of QB/RB/WR/TE/K/DST/FLEX.
    pub position: String,
    /// Pro-team abbreviation, or "FA".
    pub team: String,
    /// Fantasy team the player is rostered on.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub team_id: Option<u32>,
    pub status: String,
    pub injury_status: String,
    pub projected_points: f64,
    pub actual_points: f64,
    pub lineup_slot: Option<String>,
    /// Always null; opponent data is not collected.
    pub opponent: Option<String>,
    /// Always null.
    pub opponent_rank: Option<u32>,
    pub photo_url: String,
}
