//! Match engine and its read-only projections.

mod engine;
mod input;
mod summary;

pub use engine::{
    is_valid_finish, record_score, start_match, undo_last_score, RejectReason, ScoreOutcome,
    UndoOutcome,
};
pub use input::split_turn_total;
pub use summary::{turn_totals, TurnTotal};
