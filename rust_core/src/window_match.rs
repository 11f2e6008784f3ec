//! Identical-window matching across team-seasons.
//!
//! This module provides:
//! - [`OutcomeRow`]: one team-season's results as an ordered slot sequence,
//!   `None` marking a scheduled slot with no recorded game
//! - [`OutcomeMatches`]: the shared outcome-string multimap, safe for
//!   concurrent insertion
//! - [`scan_outcome_rows`]: parallel window enumeration over many rows
//!
//! For every window length in the requested range and every offset where the
//! window fits, the window's results are concatenated into an outcome string
//! and recorded under that key. A key holding two or more occurrences is a
//! match. Windows whose final slot is the unplayed placeholder are skipped:
//! they would otherwise alias shorter seasons onto shorter strings.

use parking_lot::Mutex;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::models::{GameResult, Season};

/// One team-season's outcome slots, in game-number order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeRow {
    pub season: String,
    pub team: String,
    pub results: Vec<Option<GameResult>>,
}

impl OutcomeRow {
    /// Build a row from a finalized season. Every slot is played, so the row
    /// carries no placeholders.
    pub fn from_season(season: &Season) -> Self {
        Self {
            season: season.year.to_string(),
            team: season.team.clone(),
            results: season.games.iter().map(|game| Some(game.result)).collect(),
        }
    }
}

/// One occurrence of an outcome string: which team-season produced it and
/// where. Game bounds are 1-based and inclusive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct WindowOccurrence {
    pub season: String,
    pub team: String,
    pub length: usize,
    pub game_start: usize,
    pub game_end: usize,
}

#[derive(Debug, Default)]
struct MatchState {
    combos: FxHashMap<String, Vec<WindowOccurrence>>,
    matches: FxHashSet<String>,
}

/// Shared accumulator of window occurrences keyed by outcome string.
///
/// Insertion is one lookup-append-check under a single mutex, so ingestion
/// workers may insert concurrently. [`OutcomeMatches::finalize`] consumes the
/// accumulator into a lock-free [`MatchSet`].
#[derive(Debug, Default)]
pub struct OutcomeMatches {
    inner: Mutex<MatchState>,
}

impl OutcomeMatches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence. The key becomes a match the moment a second
    /// occurrence lands under it.
    pub fn add(&self, key: String, occurrence: WindowOccurrence) {
        let mut guard = self.inner.lock();
        let state = &mut *guard;
        let occurrences = state.combos.entry(key.clone()).or_default();
        if !occurrences.is_empty() {
            state.matches.insert(key);
        }
        occurrences.push(occurrence);
    }

    /// Consume the accumulator. Occurrence lists are sorted so output is
    /// deterministic regardless of insertion interleaving.
    pub fn finalize(self) -> MatchSet {
        let mut state = self.inner.into_inner();
        for occurrences in state.combos.values_mut() {
            occurrences.sort();
        }
        MatchSet {
            combos: state.combos,
            matches: state.matches,
        }
    }
}

/// Finalized, read-only match results.
#[derive(Debug, Clone, Default)]
pub struct MatchSet {
    combos: FxHashMap<String, Vec<WindowOccurrence>>,
    matches: FxHashSet<String>,
}

impl MatchSet {
    /// Outcome strings recorded by two or more team-season windows.
    pub fn matched_keys(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().map(String::as_str)
    }

    pub fn is_match(&self, key: &str) -> bool {
        self.matches.contains(key)
    }

    /// Every occurrence recorded under a key, matched or not.
    pub fn occurrences(&self, key: &str) -> &[WindowOccurrence] {
        self.combos.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn key_count(&self) -> usize {
        self.combos.len()
    }
}

/// Enumerate every window of every row across the inclusive length range,
/// fanning rows out over the rayon pool. Insertions serialize on the
/// accumulator's single critical section.
pub fn scan_outcome_rows(rows: &[OutcomeRow], min_len: usize, max_len: usize) -> MatchSet {
    let matches = OutcomeMatches::new();
    rows.par_iter()
        .for_each(|row| enumerate_row(row, min_len, max_len, &matches));
    matches.finalize()
}

fn enumerate_row(row: &OutcomeRow, min_len: usize, max_len: usize, matches: &OutcomeMatches) {
    let max_games = row.results.len();
    for window in min_len..=max_len {
        for start in 0..max_games {
            let end = start + window;
            if end > max_games {
                break;
            }
            let slots = &row.results[start..end];
            // Scheduling-gap filter: a window ending on an unplayed slot ran
            // past the season's recorded games.
            match slots.last() {
                Some(Some(_)) => {}
                _ => continue,
            }
            let key: String = slots.iter().filter_map(|slot| slot.map(|r| r.code())).collect();
            matches.add(
                key,
                WindowOccurrence {
                    season: row.season.clone(),
                    team: row.team.clone(),
                    length: window,
                    game_start: start + 1,
                    game_end: start + window,
                },
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
