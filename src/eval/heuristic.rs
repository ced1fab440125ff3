//! Heuristic scoring of candidate cells
//!
//! Scores an empty cell as a prospective move for the AI without mutating
//! the board: each of the four orientations contributes a directional
//! strength for the AI's color at full weight plus the opponent's color
//! scaled by the difficulty's blocking weight, then positional bonuses
//! reward central play in the opening and contiguous shapes throughout.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::difficulty::Difficulty;
use crate::rules::DIRECTIONS;

use super::patterns::score_run;

/// Maximum Manhattan distance from the center cell on a 15x15 board
const MAX_CENTER_DIST: i32 = 14;

/// Weight per distance unit from center during the opening
const CENTER_WEIGHT: i32 = 2;

/// Stone count below which the center bonus applies
const OPENING_STONES: u32 = 10;

/// Bonus for having any occupied cell in the 5x5 neighborhood
const NEIGHBOR_BONUS: f64 = 20.0;

/// Penalty for an isolated placement once the midgame has started
const ISOLATION_PENALTY: f64 = 50.0;

/// Stone count above which isolated placements are penalized
const MIDGAME_STONES: u32 = 5;

/// Directional strength of a hypothetical `color` stone at (row, col)
/// along direction (dr, dc).
///
/// Walks outward up to four steps each way counting consecutive `color`
/// stones. An empty cell records one open end and stops; an opposing
/// stone or the board edge blocks and stops. On the negative side an
/// open end only counts if the positive side was not blocked, and the
/// edge merely stops the walk without marking a block.
pub fn directional_strength(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> i32 {
    let mut consecutive = 0;
    let mut open_ends = 0;
    let mut blocked = false;

    // Positive direction
    for i in 1..5 {
        let r = i32::from(pos.row) + i * dr;
        let c = i32::from(pos.col) + i * dc;
        if !Pos::is_valid(r, c) {
            blocked = true;
            break;
        }
        match board.get(Pos::new(r as u8, c as u8)) {
            s if s == color => consecutive += 1,
            Stone::Empty => {
                open_ends += 1;
                break;
            }
            _ => {
                blocked = true;
                break;
            }
        }
    }

    // Negative direction
    for i in 1..5 {
        let r = i32::from(pos.row) - i * dr;
        let c = i32::from(pos.col) - i * dc;
        if !Pos::is_valid(r, c) {
            break;
        }
        match board.get(Pos::new(r as u8, c as u8)) {
            s if s == color => consecutive += 1,
            Stone::Empty => {
                if !blocked {
                    open_ends += 1;
                }
                break;
            }
            _ => break,
        }
    }

    score_run(consecutive, open_ends)
}

/// Heuristic score of placing the AI's stone at the empty cell `pos`.
///
/// The opponent's directional strength is scaled by the difficulty's
/// blocking weight: a weak AI barely cares about proactive blocking, a
/// strong one weighs the opponent's shapes at full value.
pub fn evaluate_move(board: &Board, pos: Pos, ai: Stone, difficulty: Difficulty) -> f64 {
    debug_assert!(ai != Stone::Empty);
    debug_assert!(board.is_empty_at(pos));

    let opponent = ai.opponent();
    let blocking = difficulty.blocking_weight();
    let mut score = 0.0;

    for (dr, dc) in DIRECTIONS {
        let own = directional_strength(board, pos, dr, dc, ai);
        let theirs = directional_strength(board, pos, dr, dc, opponent);
        score += f64::from(own) + f64::from(theirs) * blocking;
    }

    // Favor central play during the opening
    let total_stones = board.stone_count();
    if total_stones < OPENING_STONES {
        let center = (BOARD_SIZE / 2) as i32;
        let dist = (i32::from(pos.row) - center).abs() + (i32::from(pos.col) - center).abs();
        score += f64::from((MAX_CENTER_DIST - dist) * CENTER_WEIGHT);
    }

    // Favor contiguous shapes; past the early game, punish isolated stones
    if has_nearby_stone(board, pos) {
        score += NEIGHBOR_BONUS;
    } else if total_stones > MIDGAME_STONES {
        score -= ISOLATION_PENALTY;
    }

    score
}

/// Whether any occupied cell exists within the 5x5 neighborhood
/// (±2 rows, ±2 cols) of `pos`.
fn has_nearby_stone(board: &Board, pos: Pos) -> bool {
    for dr in -2i32..=2 {
        for dc in -2i32..=2 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = i32::from(pos.row) + dr;
            let c = i32::from(pos.col) + dc;
            if Pos::is_valid(r, c) && !board.is_empty_at(Pos::new(r as u8, c as u8)) {
                return true;
            }
        }
    }
    false
}
