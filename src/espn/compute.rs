use crate::{
    cli::types::Week,
    espn::types::{LeagueResponse, PlayerStats},
    models::StatSource,
};


pub const FREE_AGENT_TEAM: &str = "FA";

/// Projected and actual applied totals for one scoring period.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeeklyPoints {
    pub projected: f64,
    pub actual: f64,
}

/// Scan a player's stat lines for `week`.
///
/// Lines for other weeks or unknown sources are ignored. If two lines share a
/// source for the same week, the later one wins. Missing values stay at 0.
pub fn weekly_points(stats: &[PlayerStats], week: Week) -> WeeklyPoints {
    let week = i64::from(week.as_u16());
    let mut points = WeeklyPoints::default();

    for s in stats {
        if s.scoring_period_id != Some(week) {
            continue;
        }
        let total = s.applied_total.unwrap_or(0.0);
        match s.stat_source_id.and_then(StatSource::from_id) {
            Some(StatSource::Projected) => points.projected = total,
            Some(StatSource::Actual) => points.actual = total,
            None => {}
        }
    }
    points
}

/// `proTeamId` → abbreviation lookup captured from the league resource.
///
/// Keeps listing order; the first entry with a matching id wins.
#[derive(Debug, Clone, Default)]
pub struct ProTeamDirectory {
    entries: Vec<(i64, Option<String>)>,
}

impl ProTeamDirectory {
    pub fn from_league(league: &LeagueResponse) -> Self {
        let entries = league
            .teams
            .iter()
            .filter_map(|t| t.pro_team_id.map(|id| (id, t.abbrev.clone())))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Abbreviation for a player's `proTeamId`; `"FA"` when unset, `0`, or unknown.
    pub fn abbrev(&self, pro_team_id: Option<i64>) -> String {
        let Some(id) = pro_team_id.filter(|&id| id != 0) else {
            return FREE_AGENT_TEAM.to_string();
        };
        self.entries
            .iter()
            .find(|(pid, _)| *pid == id)
            .and_then(|(_, abbrev)| abbrev.clone())
            .unwrap_or_else(|| FREE_AGENT_TEAM.to_string())
    }
}
