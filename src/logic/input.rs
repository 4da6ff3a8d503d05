//! Turn-total splitting for batch ("all darts") entry mode.
//!
//! The engine only accepts one value per call; batch mode is an input-side concern.
//! A turn total is distributed as evenly as possible across the darts remaining in
//! the current turn, with any remainder going to the earlier darts, and the parts are
//! then submitted as individual score calls.

/// Split a 0..=180 turn total across the darts left in the turn (`current_dart` is
/// the next dart to be thrown, 1..=3).
///
/// With 3 darts left the total is split into floor thirds plus remainder on the first
/// one or two darts; with 2 left, floor halves plus remainder on the first; with 1
/// left, the total stands alone. The parts always sum to the input.
pub fn split_turn_total(total: u16, current_dart: u8) -> Vec<u16> {
    let darts_remaining = match current_dart {
        1 => 3,
        2 => 2,
        _ => 1,
    };
    match darts_remaining {
        3 => {
            let per_dart = total / 3;
            let remainder = total % 3;
            vec![
                per_dart + u16::from(remainder >= 1),
                per_dart + u16::from(remainder >= 2),
                per_dart,
            ]
        }
        2 => {
            let per_dart = total / 2;
            vec![per_dart + total % 2, per_dart]
        }
        _ => vec![total],
    }
}
