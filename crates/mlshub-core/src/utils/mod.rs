//! Display formatting helpers.

pub mod format;

pub use format::{format_date, format_kickoff, format_match_line, format_standings, truncate_string};
