//! Raw record ingestion.
//!
//! This module provides:
//! - Fixed-column parsing of one game-log row into a [`GameLogRecord`]
//! - Splitting a record into its two directional [`TeamGame`] views
//! - Line-score parsing (per-inning scores, parenthesized multi-digit innings)
//!
//! A malformed field is terminal for the whole batch being ingested: errors
//! propagate to the caller instead of skipping the row, so a corrupt file can
//! never silently truncate an analysis.

use chrono::NaiveDate;

use crate::error::{GamelogError, Result};
use crate::franchise::FranchiseRegistry;
use crate::models::{GameLogRecord, TeamGame};

/// Fixed column offsets of a game-log row.
mod col {
    pub const DATE: usize = 0;
    pub const VISITING_TEAM: usize = 3;
    pub const VISITING_GAME_NUMBER: usize = 5;
    pub const HOME_TEAM: usize = 6;
    pub const HOME_GAME_NUMBER: usize = 8;
    pub const VISITING_SCORE: usize = 9;
    pub const HOME_SCORE: usize = 10;
    pub const FORFEIT_CODE: usize = 14;
    pub const VISITING_LINE_SCORE: usize = 19;
    pub const HOME_LINE_SCORE: usize = 20;
}

/// Minimum number of fields a game-log row must carry to cover every offset
/// in [`col`].
pub const MIN_RECORD_FIELDS: usize = 21;

/// Date format of the log: fixed-width numeric `yyyymmdd`.
const DATE_FORMAT: &str = "%Y%m%d";

/// Parse one raw game-log row into a [`GameLogRecord`].
pub fn parse_game_record<S: AsRef<str>>(fields: &[S]) -> Result<GameLogRecord> {
    if fields.len() < MIN_RECORD_FIELDS {
        return Err(GamelogError::TruncatedRecord {
            len: fields.len(),
            min: MIN_RECORD_FIELDS,
        });
    }
    let field = |idx: usize| fields[idx].as_ref();

    let visiting_game_number = parse_numeric("visiting game number", field(col::VISITING_GAME_NUMBER))?;
    let home_game_number = parse_numeric("home game number", field(col::HOME_GAME_NUMBER))?;
    let visiting_score = parse_numeric("visiting score", field(col::VISITING_SCORE))?;
    let home_score = parse_numeric("home score", field(col::HOME_SCORE))?;
    let date = NaiveDate::parse_from_str(field(col::DATE), DATE_FORMAT).map_err(|_| {
        GamelogError::DateParse {
            value: field(col::DATE).to_string(),
        }
    })?;

    Ok(GameLogRecord {
        date,
        visiting_team: field(col::VISITING_TEAM).to_string(),
        visiting_game_number,
        home_team: field(col::HOME_TEAM).to_string(),
        home_game_number,
        visiting_score,
        home_score,
        forfeit_code: field(col::FORFEIT_CODE).to_string(),
        visiting_line_score: field(col::VISITING_LINE_SCORE).to_string(),
        home_line_score: field(col::HOME_LINE_SCORE).to_string(),
    })
}

fn parse_numeric(field: &'static str, value: &str) -> Result<u32> {
    value.parse().map_err(|_| GamelogError::Parse {
        field,
        value: value.to_string(),
    })
}

/// Split a record into its home and visiting [`TeamGame`] views, resolving
/// each side's result and franchise and cross-referencing the opponent.
pub fn split_team_games(
    record: &GameLogRecord,
    registry: &FranchiseRegistry,
) -> (TeamGame, TeamGame) {
    (
        team_game(record, registry, true),
        team_game(record, registry, false),
    )
}

fn team_game(record: &GameLogRecord, registry: &FranchiseRegistry, is_home: bool) -> TeamGame {
    if is_home {
        TeamGame {
            date: record.date,
            team: record.home_team.clone(),
            franchise: registry.convert(&record.home_team).to_string(),
            opponent_team: record.visiting_team.clone(),
            opponent_franchise: registry.convert(&record.visiting_team).to_string(),
            opponent_game_number: record.visiting_game_number,
            team_game_number: record.home_game_number,
            opponent_score: record.visiting_score,
            team_score: record.home_score,
            forfeit_code: record.forfeit_code.clone(),
            opponent_line_score: record.visiting_line_score.clone(),
            team_line_score: record.home_line_score.clone(),
            result: record.home_result(),
        }
    } else {
        TeamGame {
            date: record.date,
            team: record.visiting_team.clone(),
            franchise: registry.convert(&record.visiting_team).to_string(),
            opponent_team: record.home_team.clone(),
            opponent_franchise: registry.convert(&record.home_team).to_string(),
            opponent_game_number: record.home_game_number,
            team_game_number: record.visiting_game_number,
            opponent_score: record.home_score,
            team_score: record.visiting_score,
            forfeit_code: record.forfeit_code.clone(),
            opponent_line_score: record.home_line_score.clone(),
            team_line_score: record.visiting_line_score.clone(),
            result: record.visitor_result(),
        }
    }
}

/// Parse a line score into per-inning scores.
///
/// Single characters are one-digit inning scores, `(..)` wraps a multi-digit
/// inning, and `x` marks an inning that was not played (skipped).
pub fn parse_line_score(raw: &str) -> Result<Vec<u32>> {
    let mut scores = Vec::with_capacity(9);
    let mut pending = String::new();
    let mut in_parens = false;
    for c in raw.chars() {
        match c {
            'x' => continue,
            '(' => in_parens = true,
            ')' => {
                in_parens = false;
                let score = pending.parse().map_err(|_| GamelogError::LineScoreParse {
                    value: raw.to_string(),
                    reason: format!("invalid inning score {pending:?}"),
                })?;
                scores.push(score);
                pending.clear();
            }
            _ if in_parens => pending.push(c),
            _ => {
                let score = c.to_digit(10).ok_or_else(|| GamelogError::LineScoreParse {
                    value: raw.to_string(),
                    reason: format!("invalid inning score {c:?}"),
                })?;
                scores.push(score);
            }
        }
    }
    Ok(scores)
}

// ============================================================================
// Tests
// ============================================================================
