//! MatchState: the single root value the engine transitions over.

use crate::models::config::MatchConfig;
use crate::models::player::{PlayerNumber, PlayerState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match (used by the web layer to key concurrent matches).
pub type MatchId = Uuid;

/// Full match state: configuration, both players, and turn/leg/set progression.
///
/// Treated as an immutable value: every engine operation takes the current state by
/// reference and returns a wholly new one. "No match" is absence of the value, not a
/// null state.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub id: MatchId,
    pub config: MatchConfig,
    pub player1: PlayerState,
    pub player2: PlayerState,
    /// Resolved display name (custom or "Player 1").
    pub player1_name: String,
    /// Resolved display name (custom or "Player 2").
    pub player2_name: String,
    /// Whose turn it is.
    pub current_player: PlayerNumber,
    /// Which dart within the current 3-dart turn is next, 1..=3.
    pub current_dart: u8,
    pub current_set: u32,
    pub current_leg: u32,
    pub match_won: bool,
    pub winner: Option<PlayerNumber>,
    pub started_at: DateTime<Utc>,
}

impl MatchState {
    /// Fresh match from a (pre-validated) configuration: both players at the starting
    /// score, player 1 to throw dart 1 of leg 1, set 1.
    pub fn new(config: MatchConfig) -> Self {
        let player1_name = config
            .player1_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Player 1".to_string());
        let player2_name = config
            .player2_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Player 2".to_string());
        let starting_score = config.starting_score;
        Self {
            id: Uuid::new_v4(),
            config,
            player1: PlayerState::new(starting_score),
            player2: PlayerState::new(starting_score),
            player1_name,
            player2_name,
            current_player: PlayerNumber::One,
            current_dart: 1,
            current_set: 1,
            current_leg: 1,
            match_won: false,
            winner: None,
            started_at: Utc::now(),
        }
    }

    /// The state of the given player.
    pub fn player(&self, number: PlayerNumber) -> &PlayerState {
        match number {
            PlayerNumber::One => &self.player1,
            PlayerNumber::Two => &self.player2,
        }
    }

    /// Mutable state of the given player (engine-internal: used on cloned states only).
    pub fn player_mut(&mut self, number: PlayerNumber) -> &mut PlayerState {
        match number {
            PlayerNumber::One => &mut self.player1,
            PlayerNumber::Two => &mut self.player2,
        }
    }

    /// The player whose turn it is.
    pub fn active_player(&self) -> &PlayerState {
        self.player(self.current_player)
    }

    /// Resolved display name for the given player.
    pub fn player_name(&self, number: PlayerNumber) -> &str {
        match number {
            PlayerNumber::One => &self.player1_name,
            PlayerNumber::Two => &self.player2_name,
        }
    }
}
