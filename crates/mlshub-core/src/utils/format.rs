use chrono::{DateTime, Utc};

use crate::models::{Match, Standings};

/// Format a match date for display, e.g. "Sep 28, 2024"
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Format a kickoff time for display, e.g. "Sat Oct 05, 23:30 UTC"
pub fn format_kickoff(date: &DateTime<Utc>) -> String {
    date.format("%a %b %d, %H:%M UTC").to_string()
}

/// One-line summary of a match from the selected team's point of view
pub fn format_match_line(game: &Match) -> String {
    match (game.result.as_deref(), game.score_display()) {
        (Some(result), Some(score)) => {
            format!("{}  {} {}  vs {}", format_date(&game.date), result, score, game.opponent)
        }
        (None, Some(score)) => {
            format!("{}  {}  vs {}", format_date(&game.date), score, game.opponent)
        }
        _ => format!("{}  vs {}", format_kickoff(&game.date), game.opponent),
    }
}

/// Standings summary, e.g. "#1 Eastern  55 pts  17W 6L 5D  GD +25"
pub fn format_standings(standings: &Standings) -> String {
    format!(
        "#{} {}  {} pts  {}  GD {:+}",
        standings.rank,
        standings.conference,
        standings.points,
        standings.record_display(),
        standings.goal_difference
    )
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
