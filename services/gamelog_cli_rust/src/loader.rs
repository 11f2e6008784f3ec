//! Archive loading: file traversal, CSV decoding and parallel ingestion.
//!
//! Rows from every game-log file are collected serially, then parsed and
//! handed to the caller's handler across the rayon pool. The first parse or
//! handler error aborts the whole batch; no partial result set is ever
//! returned.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use tracing::{debug, info};

use gamelog_rust_core::{
    parse_game_record, split_team_games, FranchiseRegistry, GameLogRecord, GameResult,
    OutcomeRow, SeasonIndex, SeasonTable,
};

use crate::config::{DataLayout, GAME_FILE_PREFIX};

/// Invoke `handler` for every game record in the archive, in parallel.
pub fn for_each_game<F>(layout: &DataLayout, handler: F) -> Result<()>
where
    F: Fn(&GameLogRecord) -> gamelog_rust_core::Result<()> + Sync,
{
    let games_dir = layout.games_dir();
    let mut records: Vec<csv::StringRecord> = Vec::new();
    let entries = fs::read_dir(&games_dir)
        .with_context(|| format!("reading game directory {}", games_dir.display()))?;
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !name.starts_with(GAME_FILE_PREFIX) {
            continue;
        }
        read_records_into(&entry.path(), &mut records)?;
    }
    debug!(records = records.len(), "ingesting game records");

    records.par_iter().try_for_each(|record| {
        let fields: Vec<&str> = record.iter().collect();
        let game = parse_game_record(&fields)?;
        handler(&game)
    })?;
    Ok(())
}

fn read_records_into(path: &Path, records: &mut Vec<csv::StringRecord>) -> Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening game log {}", path.display()))?;
    for record in reader.records() {
        records.push(record.with_context(|| format!("reading game log {}", path.display()))?);
    }
    Ok(())
}

/// Load the team-code -> franchise-code table.
pub fn load_franchise_registry(path: &Path) -> Result<FranchiseRegistry> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening franchise table {}", path.display()))?;
    let mut registry = FranchiseRegistry::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("reading franchise table {}", path.display()))?;
        let (Some(franchise), Some(team)) = (record.get(0), record.get(1)) else {
            bail!("franchise table row in {} is missing columns", path.display());
        };
        registry.insert(team, franchise);
    }
    Ok(registry)
}

/// Ingest the whole archive into a finalized [`SeasonTable`].
pub fn load_season_table(layout: &DataLayout) -> Result<SeasonTable> {
    let registry = load_franchise_registry(&layout.franchise_table())?;
    info!(mappings = registry.len(), "loaded franchise table");

    let index = SeasonIndex::new();
    for_each_game(layout, |game| {
        let (home, visiting) = split_team_games(game, &registry);
        index.add_game(home);
        index.add_game(visiting);
        Ok(())
    })?;

    let table = index.finalize();
    info!(
        franchises = table.franchise_count(),
        seasons = table.season_count(),
        "season table finalized"
    );
    Ok(table)
}

/// Load a result-grid CSV (`Year,Team,Game1..GameN`) into outcome rows.
/// Empty cells are unplayed-slot placeholders.
pub fn load_outcome_rows(path: &Path) -> Result<Vec<OutcomeRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening result grid {}", path.display()))?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("reading result grid {}", path.display()))?;
        let mut fields = record.iter();
        let (Some(season), Some(team)) = (fields.next(), fields.next()) else {
            bail!("result grid row in {} is missing columns", path.display());
        };
        let mut results = Vec::with_capacity(record.len().saturating_sub(2));
        for code in fields {
            if code.is_empty() {
                results.push(None);
                continue;
            }
            let Some(result) = GameResult::from_code(code) else {
                bail!("unknown result code {:?} in {}", code, path.display());
            };
            results.push(Some(result));
        }
        rows.push(OutcomeRow {
            season: season.to_string(),
            team: team.to_string(),
            results,
        });
    }
    Ok(rows)
}

// ============================================================================
// Tests
// ============================================================================
