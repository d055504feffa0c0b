//! ID types for ESPN Fantasy Football.

use crate::error::{EspnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ESPN Fantasy Football league identifier.
///
/// League IDs are forwarded verbatim into request paths, so they are kept as
/// opaque strings rather than parsed into a number.
///
/// # Examples
///
/// ```rust
/// use espn_roster::LeagueId;
///
/// let league_id = LeagueId::new("123456");
/// assert_eq!(league_id.as_str(), "123456");
/// assert_eq!(league_id.to_string(), "123456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(pub String);

impl LeagueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.to_string()))
    }
}

/// Season identifier (usually the year), also forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonId(pub String);

impl SeasonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeasonId {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.to_string()))
    }
}

/// Type-safe wrapper for Player IDs
///
/// Team defenses (D/ST) use negative IDs, e.g. `-16012`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub i64);

impl PlayerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fantasy team ID within a league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_id_is_opaque() {
        let id: LeagueId = "00123".parse().unwrap();
        assert_eq!(id.as_str(), "00123");
        assert_eq!(id, LeagueId::new("00123"));
    }

    #[test]
    fn test_season_id_display() {
        let season: SeasonId = "2024".parse().unwrap();
        assert_eq!(season.to_string(), "2024");
    }

    #[test]
    fn test_numeric_ids_display() {
        assert_eq!(PlayerId::new(3139477).to_string(), "3139477");
        assert_eq!(TeamId::new(7).as_u32(), 7);
    }

    #[test]
    fn test_player_id_deserializes_transparently() {
        let id: PlayerId = serde_json::from_str("4040715").unwrap();
        assert_eq!(id.as_i64(), 4040715);
    }

    #[test]
    fn test_player_id_negative_for_defense() {
        let id: PlayerId = serde_json::from_str("-16012").unwrap();
        assert_eq!(id.as_i64(), -16012);
        assert_eq!(id.to_string(), "-16012");
    }
}
