//! Command implementations for the ESPN roster collector

pub mod collect_players;

use crate::{EspnError, LeagueId, Result, LEAGUE_ID_ENV_VAR};

/// Use the given league ID, or fall back to `ESPN_FFL_LEAGUE_ID`.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    league_id
        .or_else(|| {
            std::env::var(LEAGUE_ID_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(LeagueId::new)
        })
        .ok_or_else(|| EspnError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
}
