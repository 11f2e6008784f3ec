//! Report formatting.
//!
//! All ordering is fixed here so reports are stable run to run: matched
//! outcome strings alphabetically, streaks by length ascending, record
//! windows by season wins ascending, tally years ascending.

use anyhow::Result;
use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::Serialize;

use gamelog_rust_core::{MatchSet, Season, SeasonOutscoreCounts, Streak};

pub fn print_matches(set: &MatchSet) {
    let mut keys: Vec<&str> = set.matched_keys().collect();
    keys.sort_unstable();
    for key in &keys {
        println!("Match Found: {key}");
        for occurrence in set.occurrences(key) {
            println!(
                "  season {} team {} games {}-{} (length {})",
                occurrence.season,
                occurrence.team,
                occurrence.game_start,
                occurrence.game_end,
                occurrence.length
            );
        }
    }
    println!("{} matched outcome strings", keys.len());
}

/// Flatten the best-streak table into rows ordered by streak length
/// ascending, franchise code breaking ties.
pub fn sorted_streaks(best: &FxHashMap<String, Streak>) -> Vec<(String, Streak)> {
    let mut rows: Vec<(String, Streak)> = best
        .iter()
        .map(|(franchise, streak)| (franchise.clone(), *streak))
        .collect();
    rows.sort_by(|a, b| a.1.games.cmp(&b.1.games).then_with(|| a.0.cmp(&b.0)));
    rows
}

pub fn print_streaks(rows: &[(String, Streak)]) {
    for (franchise, streak) in rows {
        println!(
            "Franchise: {franchise}, Games: {}, Wins: {}, Losses: {}, Start: {} (game {}), End: {} (game {})",
            streak.games,
            streak.wins,
            streak.losses,
            format_date(streak.start),
            streak.start_game,
            format_date(streak.end),
            streak.end_game
        );
    }
}

pub fn streaks_json(rows: &[(String, Streak)]) -> Result<String> {
    #[derive(Serialize)]
    struct Row<'a> {
        franchise: &'a str,
        #[serde(flatten)]
        streak: &'a Streak,
    }
    let rows: Vec<Row> = rows
        .iter()
        .map(|(franchise, streak)| Row { franchise, streak })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Print record-window hits ordered by season win total ascending.
pub fn print_record_windows(windows: &mut Vec<(&Season, (usize, usize))>) {
    windows.sort_by(|a, b| {
        a.0.record()
            .wins
            .cmp(&b.0.record().wins)
            .then_with(|| a.0.franchise.cmp(&b.0.franchise))
            .then_with(|| a.0.year.cmp(&b.0.year))
    });
    for (season, (start, end)) in windows.iter() {
        println!(
            "{} {} Start {} End {} Record {}",
            season.franchise,
            season.year,
            start,
            end,
            season.record()
        );
    }
}

pub fn print_inning_outscore(entries: &[(i32, SeasonOutscoreCounts)]) {
    for (year, counts) in entries {
        println!("{year}\t{}", counts.percentage());
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
}

// ============================================================================
// Tests
// ============================================================================
