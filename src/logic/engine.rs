//! The match engine: pure state transitions for start, score, and undo.
//!
//! Every function takes the current [`MatchState`] by reference and returns a new
//! value; the input is never mutated. In-play rejections (bust, invalid finish,
//! out-of-range, terminal state) are normal events, reported through the outcome enum
//! with the state returned unchanged - they are not errors.

use crate::models::{ConfigError, MatchConfig, MatchState, PlayerNumber, ScoreEntry};
use serde::{Deserialize, Serialize};

/// Why a scoring or undo action was rejected. The state is unchanged in every case.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Value outside 0..=180.
    OutOfRange,
    /// Value would drive the remaining score below zero. Rejected outright: no turn
    /// advance, no history entry (this scorer does not forfeit the turn on a bust).
    Bust,
    /// Value would reach exactly 0 but is not a double (even, 2..=40) or bull (50).
    InvalidFinish,
    /// The match is already decided; scoring and undo are no-ops.
    MatchOver,
}

/// Result of a [`record_score`] call, alongside the next state.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreOutcome {
    /// Accepted; same player throws the next dart.
    DartScored,
    /// Accepted as the third dart of the turn; play passes to the other player.
    TurnComplete,
    /// Legal finish; leg won, next leg started (opponent opens).
    LegWon,
    /// Leg won and with it the set; next set started (player 1 opens).
    SetWon,
    /// Set won and with it the match; state is terminal.
    MatchWon,
    /// Rejected; returned state equals the input state.
    Rejected(RejectReason),
}

impl ScoreOutcome {
    /// Whether the dart was recorded (any non-rejected outcome).
    pub fn accepted(self) -> bool {
        !matches!(self, ScoreOutcome::Rejected(_))
    }
}

/// Result of an [`undo_last_score`] call, alongside the next state.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndoOutcome {
    /// The last accepted dart was reversed.
    Undone,
    /// No entry to reverse: start of a leg, or the last action closed out a leg/set
    /// (history is per-leg, so undo cannot cross a rollover boundary).
    NothingToUndo,
    /// The match is already decided.
    MatchOver,
}

/// Whether a dart value is a legal checkout: bullseye (50) or a double (even, 2..=40).
/// Only consulted when the dart would bring the remaining score to exactly 0.
pub fn is_valid_finish(value: u16) -> bool {
    value == 50 || (value % 2 == 0 && (2..=40).contains(&value))
}

/// Start a fresh match from the given configuration.
///
/// The configuration is re-validated defensively; a malformed one is the single
/// condition the engine treats as an error rather than a play event.
pub fn start_match(config: MatchConfig) -> Result<MatchState, ConfigError> {
    config.validate()?;
    Ok(MatchState::new(config))
}

/// Record one dart (or one pre-split slice of a turn total) for the active player.
///
/// Transition rules:
/// 1. Terminal match or value outside 0..=180: rejected, state unchanged.
/// 2. Value exceeding the remaining score (bust) or an illegal checkout at exactly 0:
///    rejected, state unchanged - no history entry, no dart advance.
/// 3. Otherwise the entry is appended and the countdown reduced. Reaching 0 wins the
///    leg; legs and sets roll over at `ceil(n / 2)` majorities. A set rollover hands
///    the opening throw to player 1; a plain leg rollover hands it to the leg loser.
///    A match-winning finish freezes both players' scores and histories as they stand.
pub fn record_score(state: &MatchState, value: i32) -> (MatchState, ScoreOutcome) {
    if state.match_won {
        return (state.clone(), ScoreOutcome::Rejected(RejectReason::MatchOver));
    }
    if !(0..=180).contains(&value) {
        return (state.clone(), ScoreOutcome::Rejected(RejectReason::OutOfRange));
    }
    let value = value as u16;

    let thrower = state.current_player;
    let before = state.player(thrower).current_score;
    if value > before {
        return (state.clone(), ScoreOutcome::Rejected(RejectReason::Bust));
    }
    let remaining = before - value;
    if remaining == 0 && !is_valid_finish(value) {
        return (state.clone(), ScoreOutcome::Rejected(RejectReason::InvalidFinish));
    }

    let mut next = state.clone();
    {
        let player = next.player_mut(thrower);
        let sequence = player.history.len() as u32;
        player.history.push(ScoreEntry {
            player: thrower,
            score: value,
            sequence,
        });
        player.current_score = remaining;
    }

    if remaining > 0 {
        let advanced = next.current_dart + 1;
        if advanced > 3 {
            next.current_player = thrower.other();
            next.current_dart = 1;
            return (next, ScoreOutcome::TurnComplete);
        }
        next.current_dart = advanced;
        return (next, ScoreOutcome::DartScored);
    }

    // Leg won.
    next.player_mut(thrower).legs_won_in_current_set += 1;
    if next.player(thrower).legs_won_in_current_set < next.config.legs_needed() {
        begin_next_leg(&mut next);
        next.current_leg += 1;
        next.current_player = thrower.other();
        return (next, ScoreOutcome::LegWon);
    }

    // Set won.
    {
        let winner = next.player_mut(thrower);
        winner.sets_won += 1;
        winner.legs_won_in_current_set = 0;
    }
    if next.player(thrower).sets_won >= next.config.sets_needed() {
        next.match_won = true;
        next.winner = Some(thrower);
        return (next, ScoreOutcome::MatchWon);
    }
    begin_next_leg(&mut next);
    next.player_mut(thrower.other()).legs_won_in_current_set = 0;
    next.current_set += 1;
    next.current_leg = 1;
    // Player 1 always opens a new set.
    next.current_player = PlayerNumber::One;
    (next, ScoreOutcome::SetWon)
}

/// Restore both countdowns and wipe both histories for the next leg. Callers adjust
/// leg/set counters and the opening player themselves.
fn begin_next_leg(state: &mut MatchState) {
    let starting_score = state.config.starting_score;
    state.player1.begin_leg(starting_score);
    state.player2.begin_leg(starting_score);
    state.current_dart = 1;
}

/// Reverse the most recent accepted dart.
///
/// If `current_dart` is 1 the turn has just rotated, so the entry to reverse is the
/// other player's dart 3; otherwise it is the current player's previous dart. The
/// popped value is added back to that player's countdown. Exact inverse of any
/// accepted [`record_score`] that did not roll a leg or set over; rollovers clear the
/// histories, so there is nothing to reach back into and the call is a no-op.
pub fn undo_last_score(state: &MatchState) -> (MatchState, UndoOutcome) {
    if state.match_won {
        return (state.clone(), UndoOutcome::MatchOver);
    }

    let target = if state.current_dart == 1 {
        state.current_player.other()
    } else {
        state.current_player
    };

    let mut next = state.clone();
    let player = next.player_mut(target);
    let entry = match player.history.pop() {
        Some(entry) => entry,
        None => return (state.clone(), UndoOutcome::NothingToUndo),
    };
    player.current_score += entry.score;

    if state.current_dart == 1 {
        next.current_player = target;
        next.current_dart = 3;
    } else {
        next.current_dart -= 1;
    }
    (next, UndoOutcome::Undone)
}
