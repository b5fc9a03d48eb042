//! Data models for MLSHub entities.
//!
//! - `Team`, `TeamColors`, `Conference`: the static catalog
//! - `TeamStats`, `Match`, `Standings`: the remote stats feed

pub mod stats;
pub mod team;

pub use stats::{Match, Standings, StatsMap, TeamStats};
pub use team::{Conference, Team, TeamColors};
