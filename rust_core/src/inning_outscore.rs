//! Single-inning outscore tally.
//!
//! Counts, per season year, the games in which one side scored more in a
//! single inning than the opponent managed across the whole game. Fed from
//! parallel ingestion workers; line scores are parsed outside the lock.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::Result;
use crate::ingest::parse_line_score;
use crate::models::GameLogRecord;
use chrono::Datelike;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeasonOutscoreCounts {
    pub outscore_games: u32,
    pub total_games: u32,
}

impl SeasonOutscoreCounts {
    /// Integer percentage of outscore games for the season.
    pub fn percentage(&self) -> u32 {
        if self.total_games == 0 {
            return 0;
        }
        self.outscore_games * 100 / self.total_games
    }
}

/// Concurrent per-year tally.
#[derive(Debug, Default)]
pub struct InningOutscoreTally {
    inner: Mutex<FxHashMap<i32, SeasonOutscoreCounts>>,
}

impl InningOutscoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one game and bump its season counts. Malformed line scores
    /// abort the batch like any other parse failure.
    pub fn add(&self, game: &GameLogRecord) -> Result<()> {
        let home_innings = parse_line_score(&game.home_line_score)?;
        let visiting_innings = parse_line_score(&game.visiting_line_score)?;
        let outscored = inning_exceeds_total(&home_innings, game.visiting_score)
            || inning_exceeds_total(&visiting_innings, game.home_score);
        if outscored {
            debug!(
                date = %game.date,
                home = %game.home_line_score,
                visiting = %game.visiting_line_score,
                "single inning outscored opponent total"
            );
        }

        let mut map = self.inner.lock();
        let counts = map.entry(game.date.year()).or_default();
        counts.total_games += 1;
        if outscored {
            counts.outscore_games += 1;
        }
        Ok(())
    }

    /// Consume the tally into (year, counts) pairs sorted ascending by year.
    pub fn finalize(self) -> Vec<(i32, SeasonOutscoreCounts)> {
        let map = self.inner.into_inner();
        let mut entries: Vec<(i32, SeasonOutscoreCounts)> = map.into_iter().collect();
        entries.sort_by_key(|(year, _)| *year);
        entries
    }
}

/// Whether any single inning score exceeds the opponent's final total.
pub fn inning_exceeds_total(innings: &[u32], opponent_total: u32) -> bool {
    innings.iter().any(|&score| score > opponent_total)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(year: i32, home_line: &str, visiting_line: &str, home: u32, visiting: u32) -> GameLogRecord {
        GameLogRecord {
            date: NaiveDate::from_ymd_opt(year, 7, 4).unwrap(),
            visiting_team: "NYA".to_string(),
            visiting_game_number: 1,
            home_team: "BOS".to_string(),
            home_game_number: 1,
            visiting_score: visiting,
            home_score: home,
            forfeit_code: String::new(),
            visiting_line_score: visiting_line.to_string(),
            home_line_score: home_line.to_string(),
        }
    }

    #[test]
    fn test_inning_exceeds_total() {
        assert!(inning_exceeds_total(&[0, 5, 1], 4));
        assert!(!inning_exceeds_total(&[0, 4, 1], 4));
        assert!(!inning_exceeds_total(&[], 0));
    }

    #[test]
    fn test_tally_counts_per_year() {
        let tally = InningOutscoreTally::new();
        // Home scored 6 in one inning, visitors totaled 2
        tally.add(&record(1950, "060000000", "000200000", 6, 2)).unwrap();
        // No inning beats the opposing total
        tally.add(&record(1950, "111000000", "000200010", 3, 3)).unwrap();
        tally.add(&record(1951, "000000000", "000100000", 0, 1)).unwrap();

        let entries = tally.finalize();
        assert_eq!(
            entries,
            vec![
                (1950, SeasonOutscoreCounts { outscore_games: 1, total_games: 2 }),
                (1951, SeasonOutscoreCounts { outscore_games: 0, total_games: 1 }),
            ]
        );
        assert_eq!(entries[0].1.percentage(), 50);
    }

    #[test]
    fn test_malformed_line_score_is_terminal() {
        let tally = InningOutscoreTally::new();
        let err = tally.add(&record(1950, "0a0", "000", 1, 0)).unwrap_err();
        assert!(matches!(err, crate::error::GamelogError::LineScoreParse { .. }));
        assert!(tally.finalize().is_empty());
    }
}
