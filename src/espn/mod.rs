//! ESPN Fantasy Football API access and normalization.

pub mod collector;
pub mod compute;
pub mod http;
pub mod labels;
pub mod types;
