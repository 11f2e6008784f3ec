//! Game-log analysis CLI.
//!
//! Commands:
//! - `transform`: export every season as a W/L result-grid CSV
//! - `compare`: find identical result windows across team-seasons in a grid
//! - `streaks`: best at-or-above-.500 streak per franchise
//! - `record`: seasons containing a window with an exact win/loss record
//! - `inning-outscore`: per-season share of games where one inning beat the
//!   opponent's final total
//! - `generate`: synthetic grid data for exercising the matcher

mod config;
mod generate;
mod loader;
mod report;
mod transform;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gamelog_rust_core::{find_record_window, scan_outcome_rows, InningOutscoreTally, StreakTracker};

use config::DataLayout;

#[derive(Parser)]
#[command(name = "gamelog", about = "Historical game-log sequence analysis", version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export every season as a result-grid CSV
    Transform {
        /// Directory containing raw game-log files
        #[arg(long)]
        in_dir: PathBuf,
        /// Path of the grid CSV to write
        #[arg(long)]
        out_file: PathBuf,
    },
    /// Find identical result windows across team-seasons in a grid CSV
    Compare {
        /// Path of a result-grid CSV (see `transform`)
        #[arg(long)]
        in_file: PathBuf,
        /// Lower bound of the window-length range
        #[arg(long)]
        min_game_window: usize,
        /// Upper bound of the window-length range
        #[arg(long)]
        max_game_window: usize,
    },
    /// Report each franchise's longest at-or-above-.500 streak
    Streaks {
        /// Root of the game-log archive
        #[arg(long, env = "GAMELOG_DATA_DIR", default_value = config::DEFAULT_DATA_DIR)]
        data_dir: PathBuf,
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Find seasons containing a window with an exact win/loss record
    Record {
        /// Wins within the window
        #[arg(long)]
        wins: u32,
        /// Losses within the window
        #[arg(long)]
        losses: u32,
        /// Earliest season year to consider
        #[arg(long, default_value_t = 0)]
        since: i32,
        /// Root of the game-log archive
        #[arg(long, env = "GAMELOG_DATA_DIR", default_value = config::DEFAULT_DATA_DIR)]
        data_dir: PathBuf,
    },
    /// Per-season share of games where one inning outscored the opponent
    InningOutscore {
        /// Root of the game-log archive
        #[arg(long, env = "GAMELOG_DATA_DIR", default_value = config::DEFAULT_DATA_DIR)]
        data_dir: PathBuf,
    },
    /// Generate a synthetic result grid
    Generate {
        /// Path of the grid CSV to write
        #[arg(long)]
        out_file: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Transform { in_dir, out_file } => transform::run(&in_dir, &out_file),
        Commands::Compare {
            in_file,
            min_game_window,
            max_game_window,
        } => compare(&in_file, min_game_window, max_game_window),
        Commands::Streaks { data_dir, format } => streaks(&DataLayout::new(data_dir), format),
        Commands::Record {
            wins,
            losses,
            since,
            data_dir,
        } => record(&DataLayout::new(data_dir), wins, losses, since),
        Commands::InningOutscore { data_dir } => inning_outscore(&DataLayout::new(data_dir)),
        Commands::Generate { out_file } => generate::run(&out_file),
    }
}

fn compare(in_file: &Path, min_window: usize, max_window: usize) -> Result<()> {
    let rows = loader::load_outcome_rows(in_file)?;
    info!(rows = rows.len(), "loaded outcome rows");
    let matches = scan_outcome_rows(&rows, min_window, max_window);
    report::print_matches(&matches);
    Ok(())
}

fn streaks(layout: &DataLayout, format: OutputFormat) -> Result<()> {
    let table = loader::load_season_table(layout)?;
    let best = StreakTracker::scan(&table);
    let rows = report::sorted_streaks(&best);
    match format {
        OutputFormat::Table => report::print_streaks(&rows),
        OutputFormat::Json => println!("{}", report::streaks_json(&rows)?),
    }
    Ok(())
}

fn record(layout: &DataLayout, wins: u32, losses: u32, since: i32) -> Result<()> {
    let table = loader::load_season_table(layout)?;
    let mut windows = Vec::new();
    for seasons in table.by_franchise().values() {
        for season in seasons {
            if let Some(bounds) = find_record_window(season, wins, losses, since) {
                windows.push((season, bounds));
            }
        }
    }
    report::print_record_windows(&mut windows);
    Ok(())
}

fn inning_outscore(layout: &DataLayout) -> Result<()> {
    let tally = InningOutscoreTally::new();
    loader::for_each_game(layout, |game| tally.add(game))?;
    report::print_inning_outscore(&tally.finalize());
    Ok(())
}
