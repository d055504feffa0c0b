//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use types::{LeagueId, SeasonId, Week};

/// Collect every rostered player and free agent in a league for one week.
///
/// Prints the normalized player records as a JSON array on stdout.
#[derive(Debug, Parser)]
#[clap(
    name = "espn-roster",
    about = "Collect ESPN Fantasy Football rosters and free agents as JSON"
)]
pub struct CollectArgs {
    /// League ID. Required unless the `ESPN_FFL_LEAGUE_ID` env var is set.
    #[clap(long)]
    pub league_id: Option<LeagueId>,

    /// Season ID (e.g. 2024).
    #[clap(long)]
    pub season_id: SeasonId,

    /// Scoring period (week) to pull projected and actual points for.
    #[clap(long)]
    pub week: Week,

    /// ESPN `SWID` cookie (or set `ESPN_SWID` env var).
    #[clap(long)]
    pub swid: Option<String>,

    /// ESPN `espn_s2` cookie (or set `ESPN_S2` env var).
    #[clap(long = "espn-s2")]
    pub espn_s2: Option<String>,

    /// Pretty-print the JSON output.
    #[clap(long)]
    pub pretty: bool,

    /// Log each upstream request to stderr.
    #[clap(long, short)]
    pub verbose: bool,

    /// Override the upstream seasons base URL.
    #[clap(long, hide = true)]
    pub base_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_required_flags() {
        let args = CollectArgs::try_parse_from([
            "espn-roster",
            "--league-id",
            "123456",
            "--season-id",
            "2024",
            "--week",
            "3",
        ])
        .unwrap();

        assert_eq!(args.league_id, Some(LeagueId::new("123456")));
        assert_eq!(args.season_id, SeasonId::new("2024"));
        assert_eq!(args.week, Week::new(3));
        assert!(args.swid.is_none());
        assert!(args.espn_s2.is_none());
        assert!(!args.pretty);
    }

    #[test]
    fn test_parse_cookies() {
        let args = CollectArgs::try_parse_from([
            "espn-roster",
            "--season-id",
            "2024",
            "--week",
            "1",
            "--swid",
            "{ABC}",
            "--espn-s2",
            "s2value",
        ])
        .unwrap();

        assert!(args.league_id.is_none());
        assert_eq!(args.swid.as_deref(), Some("{ABC}"));
        assert_eq!(args.espn_s2.as_deref(), Some("s2value"));
    }

    #[test]
    fn test_league_id_help_mentions_requirement() {
        use clap::CommandFactory;

        let help = CollectArgs::command().render_long_help().to_string();
        assert!(help.contains("--league-id"));
        assert!(help.contains("Required unless"));
        assert!(help.contains("ESPN_FFL_LEAGUE_ID"));
    }

    #[test]
    fn test_week_is_required_and_positive() {
        let missing = CollectArgs::try_parse_from(["espn-roster", "--season-id", "2024"]);
        assert!(missing.is_err());

        let zero = CollectArgs::try_parse_from([
            "espn-roster",
            "--season-id",
            "2024",
            "--week",
            "0",
        ]);
        assert!(zero.is_err());
    }
}
