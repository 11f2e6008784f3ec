//! Data-store layout for the game-log archive.
//!
//! The archive is a directory tree: raw game logs under `games/`, one file
//! per season, names prefixed `gl`; the franchise key/value table at
//! `misc/CurrentNames.csv`.

use std::path::{Path, PathBuf};

/// Default archive root (can be overridden via the GAMELOG_DATA_DIR env var).
pub const DEFAULT_DATA_DIR: &str = "rs_data";

/// Subdirectory holding the raw game-log files.
pub const GAMES_SUBDIR: &str = "games";

/// Game-log file name prefix; other files in the directory are ignored.
pub const GAME_FILE_PREFIX: &str = "gl";

/// Relative path of the team-code -> franchise-code table.
pub const FRANCHISE_TABLE: &str = "misc/CurrentNames.csv";

/// Resolved paths of one archive root.
#[derive(Debug, Clone)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn games_dir(&self) -> PathBuf {
        self.root.join(GAMES_SUBDIR)
    }

    pub fn franchise_table(&self) -> PathBuf {
        self.root.join(FRANCHISE_TABLE)
    }
}
