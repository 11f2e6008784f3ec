//! Gamelog Core - game-sequence normalization and sequence matching.
//!
//! This module provides:
//! - Fixed-column game-log record parsing and directional splitting
//! - Franchise identity resolution across relocations and renames
//! - Concurrent season accumulation with a finalized, sorted view
//! - Identical-window matching across team-seasons (outcome strings)
//! - At-or-above-.500 streak tracking with best-ever records per franchise
//! - Exact win/loss record window search within a season
//! - Single-inning outscore tallies per season
//!
//! All CSV reading, file traversal and report formatting live in the service
//! crate; this library only ever sees already-extracted row fields.

pub mod error;
pub mod franchise;
pub mod ingest;
pub mod inning_outscore;
pub mod models;
pub mod record_window;
pub mod season_index;
pub mod streak;
pub mod window_match;

pub use error::{GamelogError, Result};
pub use franchise::FranchiseRegistry;
pub use ingest::{parse_game_record, parse_line_score, split_team_games, MIN_RECORD_FIELDS};
pub use inning_outscore::{InningOutscoreTally, SeasonOutscoreCounts};
pub use models::{GameLogRecord, GameResult, Season, SeasonRecord, TeamGame};
pub use record_window::find_record_window;
pub use season_index::{SeasonIndex, SeasonTable};
pub use streak::{Streak, StreakTracker};
pub use window_match::{scan_outcome_rows, MatchSet, OutcomeMatches, OutcomeRow, WindowOccurrence};
