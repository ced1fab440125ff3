//! Win condition checking
//!
//! Win detection is local to the last-played cell: any earlier state had
//! no winner, so a new five-in-a-row must pass through the most recent
//! move. Only the four orientations through that cell are scanned, the
//! rest of the board is never rescanned.

use crate::board::{Board, Pos, Stone, BOARD_SIZE, WIN_LENGTH};

/// Direction vectors for line checking (4 orientations)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal down-left
];

/// Fast five-in-a-row check at a specific position.
///
/// Counts consecutive same-colored stones extending from `pos` in the
/// positive direction, then independently in the negative direction,
/// stopping at a board edge or any non-matching cell. The placed stone
/// itself counts as one; a total of 5+ in any orientation wins.
#[inline]
pub fn has_five_at(board: &Board, pos: Pos, color: Stone) -> bool {
    let sz = BOARD_SIZE as i32;
    for (dr, dc) in DIRECTIONS {
        let mut count = 1;
        // Positive direction
        let mut r = i32::from(pos.row) + dr;
        let mut c = i32::from(pos.col) + dc;
        while r >= 0 && r < sz && c >= 0 && c < sz {
            if board.get(Pos::new(r as u8, c as u8)) == color {
                count += 1;
                r += dr;
                c += dc;
            } else {
                break;
            }
        }
        // Negative direction
        r = i32::from(pos.row) - dr;
        c = i32::from(pos.col) - dc;
        while r >= 0 && r < sz && c >= 0 && c < sz {
            if board.get(Pos::new(r as u8, c as u8)) == color {
                count += 1;
                r -= dr;
                c -= dc;
            } else {
                break;
            }
        }
        if count >= WIN_LENGTH as i32 {
            return true;
        }
    }
    false
}

/// Check for a winner given the last-played position.
///
/// Returns the occupant of `pos` if placing it there completed a line of
/// five or more, `None` otherwise (including when `pos` is empty).
pub fn winner_at(board: &Board, pos: Pos) -> Option<Stone> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }
    if has_five_at(board, pos, color) {
        Some(color)
    } else {
        None
    }
}
