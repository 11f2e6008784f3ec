//! At-or-above-.500 streak tracking.
//!
//! A streak is a span of consecutive games during which a franchise's
//! cumulative wins have never trailed its cumulative losses. The tracker is a
//! per-franchise state machine over a chronologically ordered game stream:
//! feeding games out of order produces garbage, so the supported entry point
//! is [`StreakTracker::scan`], which drives the machine from a finalized
//! [`SeasonTable`] whose ordering is guaranteed by construction.
//! [`StreakTracker::feed`] stays available for callers with their own
//! ordered stream.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::models::{GameResult, TeamGame};
use crate::season_index::SeasonTable;

/// One streak's extent. `games == 0` is the neutral reset state; `start` is
/// only stamped by the first win, so a streak opened by ties carries its end
/// markers before its start markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Streak {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub start: Option<NaiveDate>,
    pub start_game: u32,
    pub end: Option<NaiveDate>,
    pub end_game: u32,
}

/// Per-franchise streak state machine with a best-ever table.
#[derive(Debug, Default)]
pub struct StreakTracker {
    streaks: FxHashMap<String, Streak>,
    best: FxHashMap<String, Streak>,
}

impl StreakTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the franchise's running streak with one game.
    ///
    /// Precondition: games arrive in chronological per-franchise order
    /// (ascending year, then game number within the year).
    pub fn feed(&mut self, game: &TeamGame) {
        let current = self
            .streaks
            .get(&game.franchise)
            .copied()
            .unwrap_or_default();
        let mut new_wins = current.wins;
        let mut new_losses = current.losses;
        match game.result {
            GameResult::Win => new_wins += 1,
            GameResult::Loss => new_losses += 1,
            GameResult::Tie => {}
        }

        if current.games > 0 && new_losses >= new_wins {
            // Dropped below .500: bank the streak and reset. The triggering
            // game is absorbed; it neither joins nor starts a streak.
            let best = self.best.get(&game.franchise).copied().unwrap_or_default();
            if best.games <= current.games {
                self.best.insert(game.franchise.clone(), current);
            }
            self.streaks.insert(game.franchise.clone(), Streak::default());
            return;
        }
        if current.games == 0 && game.result == GameResult::Loss {
            // A standalone loss never starts a streak
            return;
        }

        let mut current = current;
        current.games += 1;
        current.wins = new_wins;
        current.losses = new_losses;
        current.end = Some(game.date);
        current.end_game = game.team_game_number;
        if current.start_game == 0 && game.result == GameResult::Win {
            current.start = Some(game.date);
            current.start_game = game.team_game_number;
        }
        self.streaks.insert(game.franchise.clone(), current);
    }

    /// Fold every still-open running streak into the best table, so a streak
    /// active at the end of the data is not lost.
    pub fn flush(&mut self) {
        for (franchise, streak) in &self.streaks {
            let best = self.best.get(franchise).copied().unwrap_or_default();
            if best.games <= streak.games {
                self.best.insert(franchise.clone(), *streak);
            }
        }
    }

    /// Best-ever streak per franchise seen so far.
    pub fn best_streaks(&self) -> &FxHashMap<String, Streak> {
        &self.best
    }

    pub fn into_best(self) -> FxHashMap<String, Streak> {
        self.best
    }

    /// Run the tracker over a finalized table, whose per-franchise ordering
    /// (seasons ascending by year, games ascending by number) satisfies the
    /// feed precondition structurally.
    pub fn scan(table: &SeasonTable) -> FxHashMap<String, Streak> {
        let mut tracker = Self::new();
        for seasons in table.by_franchise().values() {
            for season in seasons {
                for game in &season.games {
                    tracker.feed(game);
                }
            }
        }
        tracker.flush();
        tracker.into_best()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn game(
        date_: NaiveDate,
        team: &str,
        franchise: &str,
        number: u32,
        result: GameResult,
    ) -> TeamGame {
        TeamGame {
            date: date_,
            team: team.to_string(),
            franchise: franchise.to_string(),
            opponent_team: String::new(),
            opponent_franchise: String::new(),
            opponent_game_number: 0,
            team_game_number: number,
            opponent_score: 0,
            team_score: 0,
            forfeit_code: String::new(),
            opponent_line_score: String::new(),
            team_line_score: String::new(),
            result,
        }
    }

    #[test]
    fn test_best_streaks_regression_fixture() {
        use GameResult::{Loss, Win};
        let games = vec![
            game(date(2020, 6, 1), "T1", "F1", 1, Win),
            game(date(2020, 6, 2), "T1", "F1", 2, Win),
            game(date(2020, 6, 3), "T1", "F1", 3, Loss),
            game(date(2020, 6, 4), "T1", "F1", 4, Loss),
            game(date(2020, 6, 5), "T1", "F1", 5, Win),
            game(date(2020, 6, 2), "T2", "F2", 1, Loss),
            game(date(2020, 6, 2), "T2", "F2", 2, Loss),
            game(date(2020, 6, 2), "T3", "F2", 3, Win),
            game(date(2020, 6, 3), "T2", "F2", 4, Loss),
            game(date(2020, 6, 4), "T4", "F2", 5, Win),
            game(date(2020, 6, 5), "T2", "F2", 6, Win),
            game(date(2020, 6, 6), "T2", "F2", 7, Loss),
            game(date(2020, 6, 7), "T2", "F2", 8, Win),
            game(date(2021, 6, 2), "T2", "F2", 1, Loss),
            game(date(2021, 6, 3), "T2", "F2", 2, Loss),
        ];

        let mut tracker = StreakTracker::new();
        for g in &games {
            tracker.feed(g);
        }
        tracker.flush();

        let best = tracker.best_streaks();
        assert_eq!(best.len(), 2);
        assert_eq!(
            best["F1"],
            Streak {
                games: 3,
                wins: 2,
                losses: 1,
                start: Some(date(2020, 6, 1)),
                start_game: 1,
                end: Some(date(2020, 6, 3)),
                end_game: 3,
            }
        );
        assert_eq!(
            best["F2"],
            Streak {
                games: 5,
                wins: 3,
                losses: 2,
                start: Some(date(2020, 6, 4)),
                start_game: 5,
                end: Some(date(2021, 6, 2)),
                end_game: 1,
            }
        );
    }

    #[test]
    fn test_standalone_loss_never_starts_a_streak() {
        let mut tracker = StreakTracker::new();
        tracker.feed(&game(date(2020, 4, 1), "T1", "F1", 1, GameResult::Loss));
        tracker.feed(&game(date(2020, 4, 2), "T1", "F1", 2, GameResult::Loss));
        tracker.flush();
        // Losses with no open streak leave no state at all
        assert!(tracker.best_streaks().is_empty());
    }

    #[test]
    fn test_flush_banks_open_streak() {
        let mut tracker = StreakTracker::new();
        tracker.feed(&game(date(2020, 4, 1), "T1", "F1", 1, GameResult::Win));
        tracker.feed(&game(date(2020, 4, 2), "T1", "F1", 2, GameResult::Win));
        assert!(tracker.best_streaks().is_empty());
        tracker.flush();
        let best = tracker.best_streaks()["F1"];
        assert_eq!(best.games, 2);
        assert_eq!(best.wins, 2);
        assert_eq!(best.start_game, 1);
        assert_eq!(best.end_game, 2);
    }

    #[test]
    fn test_reset_absorbs_triggering_game() {
        use GameResult::{Loss, Win};
        let mut tracker = StreakTracker::new();
        tracker.feed(&game(date(2020, 4, 1), "T1", "F1", 1, Win));
        tracker.feed(&game(date(2020, 4, 2), "T1", "F1", 2, Loss));
        // The reset loss is absorbed: the running streak is empty again
        tracker.feed(&game(date(2020, 4, 3), "T1", "F1", 3, Win));
        tracker.flush();
        let best = tracker.best_streaks()["F1"];
        // Tie rule: the later 1-game streak replaces the earlier 1-game one
        assert_eq!(best.games, 1);
        assert_eq!(best.start_game, 3);
        assert_eq!(best.end_game, 3);
    }

    #[test]
    fn test_tie_extends_without_stamping_start() {
        use GameResult::{Tie, Win};
        let mut tracker = StreakTracker::new();
        tracker.feed(&game(date(2020, 4, 1), "T1", "F1", 1, Tie));
        tracker.feed(&game(date(2020, 4, 2), "T1", "F1", 2, Win));
        tracker.flush();
        let best = tracker.best_streaks()["F1"];
        assert_eq!(best.games, 2);
        assert_eq!(best.wins, 1);
        assert_eq!(best.losses, 0);
        // Start markers come from the first win, not the opening tie
        assert_eq!(best.start, Some(date(2020, 4, 2)));
        assert_eq!(best.start_game, 2);
        assert_eq!(best.end_game, 2);
    }
}
