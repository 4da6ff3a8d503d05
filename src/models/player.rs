//! Per-player countdown state and the score history it is rebuilt from.

use serde::{Deserialize, Serialize};

/// Which of the two players. The engine addresses players through this discriminant
/// plus [`PlayerNumber::other`]; there is no dynamic field lookup.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerNumber {
    #[default]
    One,
    Two,
}

impl PlayerNumber {
    /// The opponent.
    pub fn other(self) -> Self {
        match self {
            PlayerNumber::One => PlayerNumber::Two,
            PlayerNumber::Two => PlayerNumber::One,
        }
    }
}

impl std::fmt::Display for PlayerNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerNumber::One => write!(f, "player 1"),
            PlayerNumber::Two => write!(f, "player 2"),
        }
    }
}

/// One accepted dart value. Only busts and other rejections leave no entry.
///
/// Entries exist for exactly two consumers: turn-summary reconstruction (groups of 3
/// in insertion order) and undo (pop the last entry, add its value back).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: PlayerNumber,
    /// Dart value, 0..=180.
    pub score: u16,
    /// Position within the current leg's history, starting at 0.
    pub sequence: u32,
}

/// One player's state. Replaced wholesale on every transition, never mutated in place
/// from the caller's point of view.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Remaining score in the current leg, counting down to exactly 0.
    pub current_score: u16,
    pub sets_won: u32,
    /// Reset to 0 whenever a set is decided (for both winner and loser).
    pub legs_won_in_current_set: u32,
    /// Accepted entries for the current leg only; cleared on leg/set rollover.
    pub history: Vec<ScoreEntry>,
}

impl PlayerState {
    /// Fresh state at the top of a match: full countdown, nothing won.
    pub fn new(starting_score: u16) -> Self {
        Self {
            current_score: starting_score,
            sets_won: 0,
            legs_won_in_current_set: 0,
            history: Vec::new(),
        }
    }

    /// Start a new leg: countdown restored, history wiped. Sets/legs tallies untouched.
    pub fn begin_leg(&mut self, starting_score: u16) {
        self.current_score = starting_score;
        self.history.clear();
    }
}
