//! ESPN Fantasy Football roster collector
//!
//! Fetches a league's team rosters and free-agent pool for one scoring period
//! and flattens them into uniform [`PlayerRecord`]s.
//!
//! ## Features
//!
//! - **Rosters**: every fantasy team's roster, with lineup slot and roster status
//! - **Free Agents**: the league's unassigned player pool
//! - **Weekly Points**: projected and actual points for the requested week
//! - **Private Leagues**: optional `SWID` / `espn_s2` cookies
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use espn_roster::{
//!     core::EspnCookies,
//!     espn::collector::{CollectRequest, PlayerCollector},
//!     LeagueId, SeasonId, Week,
//! };
//!
//! # async fn example() -> espn_roster::Result<()> {
//! let request = CollectRequest {
//!     league_id: LeagueId::new("123456"),
//!     season_id: SeasonId::new("2024"),
//!     week: Week::new(1),
//!     cookies: EspnCookies::default().or_from_env(),
//! };
//!
//! let players = PlayerCollector::new().try_collect_all_players(&request).await?;
//! println!("{}", serde_json::to_string(&players)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export ESPN_FFL_LEAGUE_ID=123456
//! export ESPN_SWID='{...}'
//! export ESPN_S2=...
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod espn;
pub mod models;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, SeasonId, TeamId, Week};
pub use error::{EspnError, Result};
pub use models::PlayerRecord;

pub const LEAGUE_ID_ENV_VAR: &str = "ESPN_FFL_LEAGUE_ID";
