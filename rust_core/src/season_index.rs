//! Season accumulation and ordering.
//!
//! This module provides:
//! - [`SeasonIndex`]: a concurrency-safe accumulator populated by parallel
//!   ingestion workers
//! - [`SeasonTable`]: the finalized, immutable franchise -> seasons view
//!
//! Ingestion order is non-deterministic (workers race on independent rows),
//! so game sequences are only meaningful after [`SeasonIndex::finalize`] has
//! sorted them by game number. Finalization consumes the accumulator; the
//! lock cannot outlive the ingestion phase.

use chrono::Datelike;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::models::{Season, TeamGame};

/// Concurrent accumulator of directional games into (franchise, year) seasons.
#[derive(Debug, Default)]
pub struct SeasonIndex {
    inner: Mutex<FxHashMap<String, FxHashMap<i32, Season>>>,
}

impl SeasonIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one directional game to its (franchise, year) season, creating
    /// the season on first sight. Safe for many concurrent callers; the lock
    /// is held only for the single lookup-append.
    pub fn add_game(&self, game: TeamGame) {
        let year = game.date.year();
        let mut map = self.inner.lock();
        let season = map
            .entry(game.franchise.clone())
            .or_default()
            .entry(year)
            .or_insert_with(|| Season {
                franchise: game.franchise.clone(),
                team: game.team.clone(),
                year,
                games: Vec::new(),
            });
        season.games.push(game);
    }

    /// Consume the accumulator into an immutable [`SeasonTable`]: every
    /// season's games sorted ascending by team game number, every franchise's
    /// seasons sorted ascending by year.
    pub fn finalize(self) -> SeasonTable {
        let map = self.inner.into_inner();
        let mut by_franchise: FxHashMap<String, Vec<Season>> = FxHashMap::default();
        for (franchise, seasons) in map {
            let mut list: Vec<Season> = seasons.into_values().collect();
            for season in &mut list {
                season.games.sort_by_key(|game| game.team_game_number);
            }
            list.sort_by_key(|season| season.year);
            by_franchise.insert(franchise, list);
        }
        SeasonTable { by_franchise }
    }
}

/// Finalized, read-only view of every ingested season. No lock is needed:
/// the table is only constructed after ingestion completes.
#[derive(Debug, Clone, Default)]
pub struct SeasonTable {
    by_franchise: FxHashMap<String, Vec<Season>>,
}

impl SeasonTable {
    /// Seasons per franchise, each franchise's list ordered ascending by year.
    pub fn by_franchise(&self) -> &FxHashMap<String, Vec<Season>> {
        &self.by_franchise
    }

    /// Iterate every season in the table, franchise order unspecified.
    pub fn seasons(&self) -> impl Iterator<Item = &Season> {
        self.by_franchise.values().flatten()
    }

    pub fn franchise_count(&self) -> usize {
        self.by_franchise.len()
    }

    pub fn season_count(&self) -> usize {
        self.by_franchise.values().map(Vec::len).sum()
    }
}

// ============================================================================
// Tests
// ============================================================================
