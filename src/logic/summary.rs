//! Turn-summary projection: read-only view over the engine's per-leg histories.

use crate::models::{MatchState, PlayerNumber};
use serde::{Deserialize, Serialize};

/// One row of the turn summary: both players' totals for the same turn number.
/// `None` means the player has not completed (or started) that turn yet.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnTotal {
    /// 1-based turn number within the current leg.
    pub turn_number: u32,
    pub player1_total: Option<u32>,
    pub player2_total: Option<u32>,
}

/// Group each player's current-leg history into consecutive turns of up to 3 darts,
/// in insertion order, and sum each group.
///
/// Stateless projection over [`MatchState`]; the engine owns no turn-summary data.
pub fn turn_totals(state: &MatchState) -> Vec<TurnTotal> {
    let player1 = per_turn_sums(state, PlayerNumber::One);
    let player2 = per_turn_sums(state, PlayerNumber::Two);
    let turns = player1.len().max(player2.len());
    (0..turns)
        .map(|i| TurnTotal {
            turn_number: (i + 1) as u32,
            player1_total: player1.get(i).copied(),
            player2_total: player2.get(i).copied(),
        })
        .collect()
}

fn per_turn_sums(state: &MatchState, number: PlayerNumber) -> Vec<u32> {
    state
        .player(number)
        .history
        .chunks(3)
        .map(|turn| turn.iter().map(|entry| u32::from(entry.score)).sum())
        .collect()
}
