//! Stat source for ESPN player stat lines
//!     - Projected:    statSourceId = 0
//!     - Actual:       statSourceId = 1

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatSource {
    Projected,
    Actual,
}

impl StatSource {
    /// ESPN statSourceId corresponding to this source
    pub fn id(self) -> i64 {
        match self {
            StatSource::Projected => 0,
            StatSource::Actual => 1,
        }
    }

    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            0 => Some(StatSource::Projected),
            1 => Some(StatSource::Actual),
            _ => None,
        }
    }
}
