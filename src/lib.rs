//! Two-player darts match scorer: library with models and the match engine.

pub mod logic;
pub mod models;

pub use logic::{
    is_valid_finish, record_score, split_turn_total, start_match, turn_totals, undo_last_score,
    RejectReason, ScoreOutcome, TurnTotal, UndoOutcome,
};
pub use models::{
    ConfigError, MatchConfig, MatchId, MatchState, PlayerNumber, PlayerState, ScoreEntry,
};
