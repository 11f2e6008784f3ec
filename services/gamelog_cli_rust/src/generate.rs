//! Synthetic result-grid generation.
//!
//! Emits a grid CSV shaped like the `transform` output, with uniformly
//! random wins and losses, sized to exercise the window matcher at full
//! historical scale.

use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::info;

const NUM_TEAMS: u32 = 30;
const NUM_SEASONS: u32 = 150;
const NUM_MIN_GAMES: u32 = 150;
const NUM_MAX_GAMES: u32 = 162;

pub fn run(out_file: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(out_file)
        .with_context(|| format!("creating output file {}", out_file.display()))?;

    let mut header = Vec::with_capacity(NUM_MAX_GAMES as usize + 2);
    header.push("Year".to_string());
    header.push("Team".to_string());
    for game in 1..=NUM_MAX_GAMES {
        header.push(format!("Game {game}"));
    }
    writer.write_record(&header)?;

    let mut rng = rand::thread_rng();
    for season in 1..=NUM_SEASONS {
        for team in 1..=NUM_TEAMS {
            let games = rng.gen_range(NUM_MIN_GAMES..=NUM_MAX_GAMES);
            let mut row = Vec::with_capacity(NUM_MAX_GAMES as usize + 2);
            row.push(season.to_string());
            row.push(team.to_string());
            for game in 1..=NUM_MAX_GAMES {
                row.push(game_result(&mut rng, game, games));
            }
            writer
                .write_record(&row)
                .with_context(|| format!("writing data for season {season} and team {team}"))?;
        }
    }
    writer.flush()?;
    info!(
        seasons = NUM_SEASONS,
        teams = NUM_TEAMS,
        "wrote synthetic result grid"
    );
    Ok(())
}

fn game_result(rng: &mut impl Rng, game: u32, games: u32) -> String {
    if game > games {
        return String::new();
    }
    if rng.gen_bool(0.5) {
        "W".to_string()
    } else {
        "L".to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_generated_grid_shape() {
        let dir = tempfile::tempdir().unwrap();
        let out_file = dir.path().join("synthetic.csv");
        run(&out_file).unwrap();

        let grid = fs::read_to_string(&out_file).unwrap();
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 1 + (NUM_SEASONS * NUM_TEAMS) as usize);
        assert!(lines[0].starts_with("Year,Team,Game 1,"));

        // Every row has a played prefix of at least the minimum length and
        // only W/L/empty cells after season and team
        for line in &lines[1..] {
            let cells: Vec<&str> = line.split(',').collect();
            assert_eq!(cells.len(), NUM_MAX_GAMES as usize + 2);
            let played = cells[2..].iter().take_while(|cell| !cell.is_empty()).count();
            assert!(played >= NUM_MIN_GAMES as usize);
            assert!(cells[2..]
                .iter()
                .all(|cell| matches!(*cell, "W" | "L" | "")));
            assert!(cells[2 + played..].iter().all(|cell| cell.is_empty()));
        }
    }
}
