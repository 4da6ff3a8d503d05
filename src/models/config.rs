//! Match configuration: best-of series sizes and countdown starting score.

use serde::{Deserialize, Serialize};

/// Errors from a malformed match configuration.
///
/// These are the only engine conditions treated as errors: they are caller contract
/// violations, not normal play events (busts and invalid finishes are reported via
/// outcomes, never errors).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// `sets_to_win` must be at least 1.
    SetsOutOfRange,
    /// `legs_per_set` must be at least 1.
    LegsOutOfRange,
    /// `starting_score` must be positive.
    StartingScoreOutOfRange,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::SetsOutOfRange => write!(f, "Sets to win must be at least 1"),
            ConfigError::LegsOutOfRange => write!(f, "Legs per set must be at least 1"),
            ConfigError::StartingScoreOutOfRange => {
                write!(f, "Starting score must be greater than 0")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

fn default_sets_to_win() -> u32 {
    1
}

fn default_legs_per_set() -> u32 {
    1
}

fn default_starting_score() -> u16 {
    501
}

/// Immutable match configuration, fixed at match start.
///
/// `sets_to_win` and `legs_per_set` are "best of N" sizes: the match (or set) is won
/// by reaching a majority, i.e. `ceil(N / 2)`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    #[serde(default = "default_sets_to_win")]
    pub sets_to_win: u32,
    #[serde(default = "default_legs_per_set")]
    pub legs_per_set: u32,
    /// Countdown starting value for every leg (commonly 501).
    #[serde(default = "default_starting_score")]
    pub starting_score: u16,
    /// Display name; defaults to "Player 1" when absent.
    #[serde(default)]
    pub player1_name: Option<String>,
    /// Display name; defaults to "Player 2" when absent.
    #[serde(default)]
    pub player2_name: Option<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            sets_to_win: default_sets_to_win(),
            legs_per_set: default_legs_per_set(),
            starting_score: default_starting_score(),
            player1_name: None,
            player2_name: None,
        }
    }
}

impl MatchConfig {
    /// Standard 501 double-out, best of `sets` sets, best of `legs` legs.
    pub fn best_of(sets: u32, legs: u32) -> Self {
        Self {
            sets_to_win: sets,
            legs_per_set: legs,
            ..Self::default()
        }
    }

    /// Check the numeric ranges. The presentation layer is expected to have validated
    /// already; the engine re-validates defensively at match start.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sets_to_win < 1 {
            return Err(ConfigError::SetsOutOfRange);
        }
        if self.legs_per_set < 1 {
            return Err(ConfigError::LegsOutOfRange);
        }
        if self.starting_score == 0 {
            return Err(ConfigError::StartingScoreOutOfRange);
        }
        Ok(())
    }

    /// Legs needed to win a set: majority of a best-of-`legs_per_set` series.
    pub fn legs_needed(&self) -> u32 {
        (self.legs_per_set + 1) / 2
    }

    /// Sets needed to win the match: majority of a best-of-`sets_to_win` series.
    pub fn sets_needed(&self) -> u32 {
        (self.sets_to_win + 1) / 2
    }
}
