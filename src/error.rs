//! Error types for move validation

use crate::board::BOARD_SIZE;

/// Errors reported when a move cannot be applied.
///
/// These are terminal for the attempted move: the engine performs no
/// retries, the caller decides whether to re-prompt. Out-of-range
/// difficulty values are clamped and never produce an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("coordinates ({row}, {col}) are outside the {size}x{size} board", size = BOARD_SIZE)]
    OutOfBounds { row: i32, col: i32 },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },
}
