//! Data models shared between the collector and the CLI.

pub mod output;
pub mod stat_source;

pub use output::PlayerRecord;
pub use stat_source::StatSource;
