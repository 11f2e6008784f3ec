//! Season grid export.
//!
//! Reads every game-log file in a directory and writes one CSV row per
//! team-season: `Year,Team,Game1..GameN`, single-letter result codes,
//! empty cells padding seasons shorter than the longest one. The season year
//! comes from the file name (`gl<year>.<ext>`); the grid keeps raw team
//! codes, since it feeds the window matcher rather than the franchise index.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use gamelog_rust_core::{parse_game_record, GameResult};

use crate::config::GAME_FILE_PREFIX;

struct SeasonGrid {
    year: i32,
    // team code -> games ordered by game number
    games: BTreeMap<String, Vec<GridGame>>,
}

struct GridGame {
    game_number: u32,
    result: GameResult,
}

pub fn run(in_dir: &Path, out_file: &Path) -> Result<()> {
    let mut seasons: Vec<SeasonGrid> = Vec::new();
    let entries = fs::read_dir(in_dir)
        .with_context(|| format!("reading game directory {}", in_dir.display()))?;
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let Some(year) = season_from_file_name(&name) else {
            warn!(file = %name, "skipping file without a season year in its name");
            continue;
        };
        let games = collect_season_games(&entry.path())?;
        seasons.push(SeasonGrid { year, games });
    }
    seasons.sort_by_key(|season| season.year);

    let max_games = seasons
        .iter()
        .flat_map(|season| season.games.values().flatten())
        .map(|game| game.game_number)
        .max()
        .unwrap_or(0) as usize;

    let mut writer = csv::Writer::from_path(out_file)
        .with_context(|| format!("creating result grid {}", out_file.display()))?;
    let mut header = Vec::with_capacity(max_games + 2);
    header.push("Year".to_string());
    header.push("Team".to_string());
    for game in 1..=max_games {
        header.push(format!("Game{game}"));
    }
    writer.write_record(&header)?;

    let mut row_count = 0usize;
    for season in &seasons {
        for (team, games) in &season.games {
            let mut row = Vec::with_capacity(max_games + 2);
            row.push(season.year.to_string());
            row.push(team.clone());
            for slot in 0..max_games {
                row.push(
                    games
                        .get(slot)
                        .map(|game| game.result.as_str().to_string())
                        .unwrap_or_default(),
                );
            }
            writer.write_record(&row)?;
            row_count += 1;
        }
    }
    writer.flush()?;
    info!(
        seasons = seasons.len(),
        rows = row_count,
        columns = max_games,
        "wrote result grid"
    );
    Ok(())
}

fn collect_season_games(path: &Path) -> Result<BTreeMap<String, Vec<GridGame>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening game log {}", path.display()))?;
    let mut games: BTreeMap<String, Vec<GridGame>> = BTreeMap::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("reading game log {}", path.display()))?;
        let fields: Vec<&str> = record.iter().collect();
        let game = parse_game_record(&fields)
            .with_context(|| format!("parsing game log {}", path.display()))?;
        games.entry(game.home_team.clone()).or_default().push(GridGame {
            game_number: game.home_game_number,
            result: game.home_result(),
        });
        games.entry(game.visiting_team.clone()).or_default().push(GridGame {
            game_number: game.visiting_game_number,
            result: game.visitor_result(),
        });
    }
    for team_games in games.values_mut() {
        team_games.sort_by_key(|game| game.game_number);
    }
    Ok(games)
}

/// Extract the season year from a game-log file name: strip the extension,
/// strip the `gl` prefix, parse the rest.
pub(crate) fn season_from_file_name(name: &str) -> Option<i32> {
    let stem = name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(name);
    stem.get(GAME_FILE_PREFIX.len()..)?.parse().ok()
}

// ============================================================================
// Tests
// ============================================================================
