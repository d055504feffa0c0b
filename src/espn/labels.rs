//! Static ESPN code → label tables.
//!
//! `resolve_status` and `resolve_lineup_slot` both read `lineupSlotId` but
//! map it to different label sets; keep them separate.

use crate::cli::types::PlayerId;

pub const DEFAULT_POSITION: &str = "FLEX";
pub const DEFAULT_ROSTER_STATUS: &str = "Bench";
pub const DEFAULT_LINEUP_SLOT: &str = "Bench";
pub const FREE_AGENT_STATUS: &str = "Free Agent";

const PHOTO_URL_PREFIX: &str = "https://a.espncdn.com/combiner/i?img=/i/headshots/nfl/players/full/";

/// Player position from `defaultPositionId`.
pub fn resolve_position(default_position_id: Option<i64>) -> &'static str {
    match default_position_id {
        Some(1) => "QB",
        Some(2) => "RB",
        Some(3) => "WR",
        Some(4) => "TE",
        Some(5) => "K",
        Some(16) => "DST",
        _ => DEFAULT_POSITION,
    }
}

/// Roster status from a roster entry's `lineupSlotId`.
pub fn resolve_status(lineup_slot_id: Option<i64>) -> &'static str {
    match lineup_slot_id {
        Some(0) => "Active",
        Some(20) => "Bench",
        Some(21) => "Injured Reserve",
        Some(23) => "FLEX",
        _ => DEFAULT_ROSTER_STATUS,
    }
}

/// Lineup slot label from a roster entry's `lineupSlotId`.
pub fn resolve_lineup_slot(lineup_slot_id: Option<i64>) -> &'static str {
    match lineup_slot_id {
        Some(0) => "QB",
        Some(2) => "RB",
        Some(4) => "WR",
        Some(6) => "TE",
        Some(16) => "DST",
        Some(17) => "K",
        Some(23) => "FLEX",
        _ => DEFAULT_LINEUP_SLOT,
    }
}

/// Headshot URL on the ESPN CDN.
pub fn photo_url(player_id: PlayerId) -> String {
    format!("{PHOTO_URL_PREFIX}{player_id}.png")
}
