//! Data structures for the match scorer: configuration, players, match state.

mod config;
mod match_state;
mod player;

pub use config::{ConfigError, MatchConfig};
pub use match_state::{MatchId, MatchState};
pub use player::{PlayerNumber, PlayerState, ScoreEntry};
