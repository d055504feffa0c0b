//! Scoring period (week) type.

use crate::error::{EspnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Week numbers (ESPN `scoringPeriodId`).
///
/// Weeks are positive; parsing rejects `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().parse::<u16>() {
            Ok(w) if w > 0 => Ok(Self(w)),
            _ => Err(EspnError::InvalidWeek {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_parse_valid() {
        assert_eq!("1".parse::<Week>().unwrap(), Week::new(1));
        assert_eq!("17".parse::<Week>().unwrap().as_u16(), 17);
    }

    #[test]
    fn test_week_parse_rejects_zero_and_garbage() {
        assert!(matches!(
            "0".parse::<Week>(),
            Err(EspnError::InvalidWeek { .. })
        ));
        assert!("-3".parse::<Week>().is_err());
        assert!("week1".parse::<Week>().is_err());
    }

    #[test]
    fn test_week_default_and_display() {
        assert_eq!(Week::default().as_u16(), 1);
        assert_eq!(Week::new(9).to_string(), "9");
    }
}
