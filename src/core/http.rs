//! HTTP utilities for ESPN API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};

pub const SWID_ENV_VAR: &str = "ESPN_SWID";
pub const ESPN_S2_ENV_VAR: &str = "ESPN_S2";

/// Credentials for private leagues: the `SWID` and `espn_s2` cookie values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EspnCookies {
    pub swid: Option<String>,
    pub espn_s2: Option<String>,
}

impl EspnCookies {
    pub fn new(swid: Option<String>, espn_s2: Option<String>) -> Self {
        Self { swid, espn_s2 }
    }

    /// Fill any value not given explicitly from `ESPN_SWID` / `ESPN_S2`.
    pub fn or_from_env(self) -> Self {
        Self {
            swid: self.swid.or_else(|| std::env::var(SWID_ENV_VAR).ok()),
            espn_s2: self.espn_s2.or_else(|| std::env::var(ESPN_S2_ENV_VAR).ok()),
        }
    }

    /// `Cookie` header value, only when both cookies are present.
    pub fn cookie_value(&self) -> Option<String> {
        match (&self.swid, &self.espn_s2) {
            (Some(swid), Some(s2)) => Some(format!("SWID={}; espn_s2={}", swid, s2)),
            _ => None,
        }
    }
}

/// Build request headers: always `Accept: application/json`, plus the
/// cookie header when both credentials are present (public leagues otherwise).
pub fn build_header_map(cookies: &EspnCookies) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(cookie) = cookies.cookie_value() {
        h.insert(COOKIE, HeaderValue::from_str(&cookie)?);
    }
    Ok(h)
}
