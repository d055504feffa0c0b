//! Type-safe wrappers for ESPN Fantasy Football identifiers.

pub mod ids;
pub mod time;

pub use ids::{LeagueId, PlayerId, SeasonId, TeamId};
pub use time::Week;
