//! Core utilities for the ESPN roster collector
//!
//! - `http`: request headers and cookie credentials

pub mod http;

pub use http::{build_header_map, EspnCookies};
