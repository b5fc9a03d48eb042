//! Remotely sourced match and standings data.
//!
//! The stats feed uses snake_case keys. camelCase spellings are accepted as
//! aliases since the feed has shipped both.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stats snapshot keyed by stringified team id.
pub type StatsMap = HashMap<String, TeamStats>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TeamStats {
    #[serde(alias = "lastMatches")]
    pub last_matches: Vec<Match>,
    #[serde(alias = "nextMatches")]
    pub next_matches: Vec<Match>,
    pub standings: Standings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Match {
    /// Row identity for list rendering. Generated locally, never on the wire.
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub date: DateTime<Utc>,
    /// Opponent club name. Resolve it against the catalog by name.
    pub opponent: String,
    pub result: Option<String>,
    #[serde(alias = "homeScore")]
    pub home_score: Option<i32>,
    #[serde(alias = "awayScore")]
    pub away_score: Option<i32>,
}

// `id` is a rendering handle and does not take part in equality.
impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
            && self.opponent == other.opponent
            && self.result == other.result
            && self.home_score == other.home_score
            && self.away_score == other.away_score
    }
}

impl Match {
    pub fn new(
        date: DateTime<Utc>,
        opponent: impl Into<String>,
        result: Option<String>,
        home_score: Option<i32>,
        away_score: Option<i32>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            opponent: opponent.into(),
            result,
            home_score,
            away_score,
        }
    }

    /// A match is played once both scores are known.
    pub fn is_played(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }

    pub fn score_display(&self) -> Option<String> {
        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) => Some(format!("{} - {}", home, away)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Standings {
    pub conference: String,
    pub rank: u32,
    pub points: u32,
    #[serde(alias = "gamesPlayed")]
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    #[serde(alias = "goalsFor")]
    pub goals_for: u32,
    #[serde(alias = "goalsAgainst")]
    pub goals_against: u32,
    #[serde(alias = "goalDifference")]
    pub goal_difference: i32,
}

impl Standings {
    /// Games add up to results and goal difference matches the goal totals.
    pub fn is_consistent(&self) -> bool {
        u64::from(self.games_played)
            == u64::from(self.wins) + u64::from(self.losses) + u64::from(self.draws)
            && i64::from(self.goal_difference)
                == i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    pub fn record_display(&self) -> String {
        format!("{}W {}L {}D", self.wins, self.losses, self.draws)
    }
}
