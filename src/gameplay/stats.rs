use super::outcome::Outcome;
use super::outcome::Resolution;
use serde::Deserialize;
use serde::Serialize;

/// Running counters for one session.
///
/// Field names on the wire are stable keys shared with every store; a
/// missing key falls back to its default, so older or partial records
/// still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    #[serde(rename = "totalGames")]
    games: u32,
    #[serde(rename = "playerFolds")]
    folds: u32,
    #[serde(rename = "correctMoves")]
    correct: u32,
    #[serde(rename = "totalMoves")]
    attempted: u32,
    #[serde(rename = "isComputerTurnFirst")]
    opponent_first: bool,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            games: 0,
            folds: 0,
            correct: 0,
            attempted: 0,
            opponent_first: true,
        }
    }
}

impl Stats {
    pub fn games(&self) -> u32 {
        self.games
    }
    pub fn folds(&self) -> u32 {
        self.folds
    }
    pub fn correct(&self) -> u32 {
        self.correct
    }
    pub fn attempted(&self) -> u32 {
        self.attempted
    }
    pub fn opponent_first(&self) -> bool {
        self.opponent_first
    }
    /// Share of player decisions that matched the recommendation, in percent.
    pub fn accuracy(&self) -> f32 {
        match self.attempted {
            0 => 0.0,
            n => self.correct as f32 * 100.0 / n as f32,
        }
    }
    /// Hands the first move to the other side for the next round.
    pub fn flip(&mut self) {
        self.opponent_first = !self.opponent_first;
    }
    pub fn reset(&mut self) {
        *self = Self::default();
    }
    pub fn record(&mut self, outcome: &Outcome) {
        self.games += 1;
        match outcome.resolution() {
            Resolution::OpponentFolded => {}
            Resolution::PlayerFolded => {
                self.folds += 1;
                self.attempted += 1;
            }
            Resolution::Showdown => {
                self.attempted += 1;
            }
        }
        if outcome.correct() == Some(true) {
            self.correct += 1;
        }
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "games {} · folds {} · accuracy {:.1}%",
            self.games,
            self.folds,
            self.accuracy()
        )
    }
}
