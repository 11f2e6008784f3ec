// Shared models for game-log processing
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// Game Result
// ============================================================================

/// Outcome of a single game from one team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameResult {
    Win,
    Loss,
    Tie,
}

impl GameResult {
    /// Single-letter result code used in outcome strings and grid exports.
    pub fn code(&self) -> char {
        match self {
            GameResult::Win => 'W',
            GameResult::Loss => 'L',
            GameResult::Tie => 'T',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameResult::Win => "W",
            GameResult::Loss => "L",
            GameResult::Tie => "T",
        }
    }

    /// Inverse of [`GameResult::code`]; unknown codes return `None`.
    pub fn from_code(code: &str) -> Option<GameResult> {
        match code {
            "W" => Some(GameResult::Win),
            "L" => Some(GameResult::Loss),
            "T" => Some(GameResult::Tie),
            _ => None,
        }
    }

    /// Resolve a team's result from the two final scores and the forfeit code.
    ///
    /// The forfeit code takes precedence over the scores: `"T"` is a tie,
    /// `"H"` awards the game to the home side and `"V"` to the visiting side,
    /// whichever perspective we are resolving for. Any other non-empty code
    /// carries no forfeit information and falls through to score comparison.
    pub fn resolve(
        team_score: u32,
        opponent_score: u32,
        is_home: bool,
        forfeit_code: &str,
    ) -> GameResult {
        if !forfeit_code.is_empty() {
            if forfeit_code == "T" {
                return GameResult::Tie;
            }
            if is_home {
                if forfeit_code == "H" {
                    return GameResult::Win;
                }
                if forfeit_code == "V" {
                    return GameResult::Loss;
                }
            } else {
                if forfeit_code == "H" {
                    return GameResult::Loss;
                }
                if forfeit_code == "V" {
                    return GameResult::Win;
                }
            }
        }

        if team_score == opponent_score {
            return GameResult::Tie;
        }
        if team_score > opponent_score {
            return GameResult::Win;
        }
        GameResult::Loss
    }
}

// ============================================================================
// Raw Game Log Record
// ============================================================================

/// One row of source data: a single game as recorded in the log, with both
/// participants' codes, game numbers, scores and line scores. Immutable once
/// parsed; discarded after it is split into the two directional views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLogRecord {
    pub date: NaiveDate,
    pub visiting_team: String,
    pub visiting_game_number: u32,
    pub home_team: String,
    pub home_game_number: u32,
    pub visiting_score: u32,
    pub home_score: u32,
    pub forfeit_code: String,
    pub visiting_line_score: String,
    pub home_line_score: String,
}

impl GameLogRecord {
    pub fn home_result(&self) -> GameResult {
        GameResult::resolve(self.home_score, self.visiting_score, true, &self.forfeit_code)
    }

    pub fn visitor_result(&self) -> GameResult {
        GameResult::resolve(self.visiting_score, self.home_score, false, &self.forfeit_code)
    }
}

// ============================================================================
// Directional Team Game
// ============================================================================

/// One participant's view of a [`GameLogRecord`]: everything about the game
/// from that team's side, with the opponent's fields cross-referenced. Two
/// are produced per record (home and visiting perspectives).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamGame {
    pub date: NaiveDate,
    pub team: String,
    pub franchise: String,
    pub opponent_team: String,
    pub opponent_franchise: String,
    pub opponent_game_number: u32,
    pub team_game_number: u32,
    pub opponent_score: u32,
    pub team_score: u32,
    pub forfeit_code: String,
    pub opponent_line_score: String,
    pub team_line_score: String,
    pub result: GameResult,
}

impl TeamGame {
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

// ============================================================================
// Season
// ============================================================================

/// One franchise's season: the team code it played under that year and its
/// game sequence. Games are sorted ascending by team game number once the
/// owning index is finalized; game numbers are the canonical play order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub franchise: String,
    pub team: String,
    pub year: i32,
    pub games: Vec<TeamGame>,
}

impl Season {
    /// Aggregate win/loss/tie record over the whole season.
    pub fn record(&self) -> SeasonRecord {
        let mut record = SeasonRecord::default();
        for game in &self.games {
            match game.result {
                GameResult::Win => record.wins += 1,
                GameResult::Loss => record.losses += 1,
                GameResult::Tie => record.ties += 1,
            }
        }
        record
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl std::fmt::Display for SeasonRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.ties)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_score() {
        assert_eq!(GameResult::resolve(5, 3, true, ""), GameResult::Win);
        assert_eq!(GameResult::resolve(3, 5, true, ""), GameResult::Loss);
        assert_eq!(GameResult::resolve(4, 4, false, ""), GameResult::Tie);
    }

    #[test]
    fn test_resolve_forfeit_overrides_score() {
        // Home forfeit win even though the home side was outscored
        assert_eq!(GameResult::resolve(0, 9, true, "H"), GameResult::Win);
        assert_eq!(GameResult::resolve(9, 0, false, "H"), GameResult::Loss);
        assert_eq!(GameResult::resolve(9, 0, true, "V"), GameResult::Loss);
        assert_eq!(GameResult::resolve(0, 9, false, "V"), GameResult::Win);
        assert_eq!(GameResult::resolve(9, 0, true, "T"), GameResult::Tie);
    }

    #[test]
    fn test_resolve_unknown_forfeit_falls_through() {
        // Codes other than H/V/T carry no forfeit information
        assert_eq!(GameResult::resolve(5, 3, true, "X"), GameResult::Win);
        assert_eq!(GameResult::resolve(3, 3, false, "X"), GameResult::Tie);
    }

    #[test]
    fn test_result_codes_round_trip() {
        for result in [GameResult::Win, GameResult::Loss, GameResult::Tie] {
            assert_eq!(GameResult::from_code(result.as_str()), Some(result));
        }
        assert_eq!(GameResult::from_code(""), None);
        assert_eq!(GameResult::from_code("Q"), None);
    }

    #[test]
    fn test_season_record() {
        let date = NaiveDate::from_ymd_opt(1975, 6, 1).unwrap();
        let game = |result| TeamGame {
            date,
            team: "BOS".to_string(),
            franchise: "BOS".to_string(),
            opponent_team: "NYA".to_string(),
            opponent_franchise: "NYA".to_string(),
            opponent_game_number: 1,
            team_game_number: 1,
            opponent_score: 0,
            team_score: 0,
            forfeit_code: String::new(),
            opponent_line_score: String::new(),
            team_line_score: String::new(),
            result,
        };
        let season = Season {
            franchise: "BOS".to_string(),
            team: "BOS".to_string(),
            year: 1975,
            games: vec![
                game(GameResult::Win),
                game(GameResult::Loss),
                game(GameResult::Win),
                game(GameResult::Tie),
            ],
        };
        let record = season.record();
        assert_eq!(record, SeasonRecord { wins: 2, losses: 1, ties: 1 });
        assert_eq!(record.to_string(), "2-1-1");
    }
}
