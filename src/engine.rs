//! AI move selection
//!
//! This module picks the computer's move for a given position. Selection
//! follows a priority system:
//!
//! 1. **Immediate win**: any cell that completes five for the AI
//! 2. **Immediate block**: any cell where the opponent would complete five
//! 3. **Heuristic**: score every empty cell, keep the difficulty-scaled
//!    top-K pool and pick one uniformly at random
//!
//! The tactical tiers are deterministic (row-major, first hit wins); the
//! heuristic tier is the engine's only source of randomness and draws
//! from the RNG held by [`AiEngine`], so a seeded RNG makes selection
//! fully reproducible.
//!
//! # Example
//!
//! ```
//! use omok::{AiEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let mut engine = AiEngine::new();
//! if let Some(pos) = engine.select_move(&board, Stone::White, Difficulty::new(5)) {
//!     board.place_stone(pos, Stone::White);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::difficulty::Difficulty;
use crate::eval::evaluate_move;
use crate::rules::winner_at;

/// Tier of the selection hierarchy that produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Move completes five for the AI
    ImmediateWin,
    /// Move denies the opponent a five next turn
    Block,
    /// Move chosen from the heuristic top-K pool
    Heuristic,
}

/// Result of a move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Selected move, `None` when the board is full
    pub best_move: Option<Pos>,
    /// Tier that produced the move
    pub search_type: SearchType,
}

impl MoveResult {
    #[inline]
    fn immediate_win(pos: Pos) -> Self {
        Self {
            best_move: Some(pos),
            search_type: SearchType::ImmediateWin,
        }
    }

    #[inline]
    fn block(pos: Pos) -> Self {
        Self {
            best_move: Some(pos),
            search_type: SearchType::Block,
        }
    }

    #[inline]
    fn heuristic(pos: Pos) -> Self {
        Self {
            best_move: Some(pos),
            search_type: SearchType::Heuristic,
        }
    }

    #[inline]
    fn no_move() -> Self {
        Self {
            best_move: None,
            search_type: SearchType::Heuristic,
        }
    }
}

/// AI move selector.
///
/// Stateless across calls apart from the random source it owns: each
/// query takes a board snapshot and returns a result without retaining
/// the position. Holding the RNG here (instead of reaching for ambient
/// process-wide randomness) keeps concurrent games independent and lets
/// tests inject a seeded source.
///
/// # Example
///
/// ```
/// use omok::{AiEngine, Board, Difficulty, Stone};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// // Seeded engine: identical inputs give identical moves
/// let mut engine = AiEngine::with_rng(StdRng::seed_from_u64(42));
/// let board = Board::new();
/// let pos = engine.select_move(&board, Stone::Black, Difficulty::new(5));
/// assert!(pos.is_some());
/// ```
pub struct AiEngine<R: Rng = StdRng> {
    rng: R,
}

impl AiEngine<StdRng> {
    /// Create an engine with an OS-seeded random source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for AiEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AiEngine<R> {
    /// Create an engine with an explicit random source.
    ///
    /// Pass a seeded RNG for reproducible move selection.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Select the AI's move for the given position.
    ///
    /// Convenience wrapper around [`select_move_with_stats`] returning
    /// only the coordinate.
    ///
    /// [`select_move_with_stats`]: AiEngine::select_move_with_stats
    #[must_use]
    pub fn select_move(&mut self, board: &Board, ai: Stone, difficulty: Difficulty) -> Option<Pos> {
        self.select_move_with_stats(board, ai, difficulty).best_move
    }

    /// Select the AI's move and report which tier produced it.
    ///
    /// Returns a result with `best_move: None` when no empty cell
    /// remains — a full board is a valid "no move available" outcome,
    /// not an error.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `ai` is not `Stone::Empty`.
    #[must_use]
    pub fn select_move_with_stats(
        &mut self,
        board: &Board,
        ai: Stone,
        difficulty: Difficulty,
    ) -> MoveResult {
        debug_assert!(ai != Stone::Empty);
        let opponent = ai.opponent();

        // 1. Enumerate candidates in row-major order
        let candidates = empty_cells(board);
        if candidates.is_empty() {
            return MoveResult::no_move();
        }

        // Scratch board for speculative placements. Place/remove keeps
        // one clone alive across all candidates; the caller's board is
        // never mutated.
        let mut scratch = board.clone();

        // 2. Immediate win: first candidate that completes five for us.
        // No randomization at this tier, a guaranteed win is never
        // skipped for variety.
        for &pos in &candidates {
            scratch.place_stone(pos, ai);
            let wins = winner_at(&scratch, pos) == Some(ai);
            scratch.remove_stone(pos);
            if wins {
                return MoveResult::immediate_win(pos);
            }
        }

        // 3. Immediate block: first candidate where the opponent would
        // complete five. Subordinate to our own win, above everything else.
        for &pos in &candidates {
            scratch.place_stone(pos, opponent);
            let threatens = winner_at(&scratch, pos) == Some(opponent);
            scratch.remove_stone(pos);
            if threatens {
                return MoveResult::block(pos);
            }
        }

        // 4. Heuristic scoring, descending. The sort is stable, so ties
        // keep their row-major order.
        let mut scored: Vec<(Pos, f64)> = candidates
            .iter()
            .map(|&pos| (pos, evaluate_move(board, pos, ai, difficulty)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        // 5. Difficulty-scaled pool, uniform pick
        let pool = difficulty.pool_size(scored.len());
        let pick = self.rng.random_range(0..pool);
        MoveResult::heuristic(scored[pick].0)
    }
}

/// All empty cells in row-major order (top-to-bottom, left-to-right)
fn empty_cells(board: &Board) -> Vec<Pos> {
    let mut cells = Vec::new();
    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(row, col);
            if board.is_empty_at(pos) {
                cells.push(pos);
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_engine(seed: u64) -> AiEngine<StdRng> {
        AiEngine::with_rng(StdRng::seed_from_u64(seed))
    }

    fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new();
        for &(row, col, color) in stones {
            board.place_stone(Pos::new(row, col), color);
        }
        board
    }

    #[test]
    fn test_immediate_win_taken() {
        // White has four in a row: (5,4)..(5,7). Completing at (5,3)
        // or (5,8) wins; row-major order finds (5,3) first.
        let board = board_with(&[
            (5, 4, Stone::White),
            (5, 5, Stone::White),
            (5, 6, Stone::White),
            (5, 7, Stone::White),
        ]);

        for level in [1, 5, 10] {
            let mut engine = seeded_engine(7);
            let result =
                engine.select_move_with_stats(&board, Stone::White, Difficulty::new(level));
            assert_eq!(result.search_type, SearchType::ImmediateWin);
            assert_eq!(
                result.best_move,
                Some(Pos::new(5, 3)),
                "winning completion must be taken at difficulty {}",
                level
            );
        }
    }

    #[test]
    fn test_win_preferred_over_block() {
        // Both sides have an open four; the AI must take its own win
        // rather than block.
        let board = board_with(&[
            (2, 2, Stone::Black),
            (2, 3, Stone::Black),
            (2, 4, Stone::Black),
            (2, 5, Stone::Black),
            (9, 4, Stone::White),
            (9, 5, Stone::White),
            (9, 6, Stone::White),
            (9, 7, Stone::White),
        ]);

        let mut engine = seeded_engine(0);
        let result = engine.select_move_with_stats(&board, Stone::White, Difficulty::new(5));
        assert_eq!(result.search_type, SearchType::ImmediateWin);
        assert_eq!(result.best_move, Some(Pos::new(9, 3)));
    }

    #[test]
    fn test_open_four_blocked() {
        // Black has an open four at (5,5)..(5,8); White must answer at
        // (5,4) or (5,9). Row-major order makes (5,4) the deterministic pick.
        let board = board_with(&[
            (5, 5, Stone::Black),
            (5, 6, Stone::Black),
            (5, 7, Stone::Black),
            (5, 8, Stone::Black),
        ]);

        for level in [1, 4, 10] {
            let mut engine = seeded_engine(99);
            let result =
                engine.select_move_with_stats(&board, Stone::White, Difficulty::new(level));
            assert_eq!(result.search_type, SearchType::Block);
            assert_eq!(
                result.best_move,
                Some(Pos::new(5, 4)),
                "open four must be blocked at difficulty {}",
                level
            );
        }
    }

    #[test]
    fn test_vertical_threat_blocked() {
        let board = board_with(&[
            (3, 10, Stone::Black),
            (4, 10, Stone::Black),
            (5, 10, Stone::Black),
            (6, 10, Stone::Black),
        ]);

        let mut engine = seeded_engine(1);
        let result = engine.select_move_with_stats(&board, Stone::White, Difficulty::new(5));
        assert_eq!(result.search_type, SearchType::Block);
        assert_eq!(result.best_move, Some(Pos::new(2, 10)));
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut board = Board::new();
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                // Fill in column stripes so no five-in-a-row matters;
                // only occupancy does here.
                let color = if (col / 2) % 2 == 0 {
                    Stone::Black
                } else {
                    Stone::White
                };
                board.place_stone(Pos::new(row, col), color);
            }
        }
        assert!(board.is_full());

        let mut engine = seeded_engine(5);
        let result = engine.select_move_with_stats(&board, Stone::White, Difficulty::new(5));
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_seeded_selection_reproducible() {
        let board = board_with(&[(7, 7, Stone::Black), (8, 8, Stone::White)]);

        let first = seeded_engine(1234).select_move(&board, Stone::White, Difficulty::new(3));
        let second = seeded_engine(1234).select_move(&board, Stone::White, Difficulty::new(3));
        assert_eq!(first, second, "identical seeds must give identical moves");
    }

    #[test]
    fn test_opening_reply_stays_near_center() {
        // Black opens at center. At top difficulty the pool is the three
        // best cells, all of which carry the neighbor bonus, so the reply
        // always lands inside the 5x5 neighborhood of (7,7).
        let board = board_with(&[(7, 7, Stone::Black)]);

        for seed in 0..20 {
            let mut engine = seeded_engine(seed);
            let pos = engine
                .select_move(&board, Stone::White, Difficulty::new(10))
                .expect("board is nearly empty");
            let dr = (i32::from(pos.row) - 7).abs();
            let dc = (i32::from(pos.col) - 7).abs();
            assert!(
                dr <= 2 && dc <= 2,
                "seed {}: reply ({}, {}) strayed from the center neighborhood",
                seed,
                pos.row,
                pos.col
            );
        }
    }

    #[test]
    fn test_opening_reply_near_center_mid_difficulty() {
        // At difficulty 5 the pool is 20% of 224 candidates. Every cell
        // in that pool scores at least the opening center bonus of a
        // Manhattan-distance-5 cell, so the reply never lands in the
        // outer reaches of the board.
        let board = board_with(&[(7, 7, Stone::Black)]);

        for seed in 0..20 {
            let mut engine = seeded_engine(seed);
            let pos = engine
                .select_move(&board, Stone::White, Difficulty::new(5))
                .expect("board is nearly empty");
            let dr = (i32::from(pos.row) - 7).abs();
            let dc = (i32::from(pos.col) - 7).abs();
            assert!(
                dr.max(dc) <= 5,
                "seed {}: reply ({}, {}) strayed far from the opening stone",
                seed,
                pos.row,
                pos.col
            );
        }
    }

    #[test]
    fn test_selected_move_is_legal() {
        let board = board_with(&[
            (7, 7, Stone::Black),
            (7, 8, Stone::White),
            (8, 7, Stone::Black),
        ]);

        for seed in 0..10 {
            let mut engine = seeded_engine(seed);
            let pos = engine
                .select_move(&board, Stone::White, Difficulty::new(1))
                .expect("moves available");
            assert!(
                board.is_empty_at(pos),
                "seed {}: selected occupied cell ({}, {})",
                seed,
                pos.row,
                pos.col
            );
        }
    }

    #[test]
    fn test_caller_board_untouched() {
        let board = board_with(&[(7, 7, Stone::Black)]);
        let snapshot = board.clone();

        let mut engine = seeded_engine(3);
        let _ = engine.select_move(&board, Stone::White, Difficulty::new(8));
        assert_eq!(board, snapshot, "selection must not mutate the input board");
    }

    #[test]
    fn test_high_difficulty_narrows_pool() {
        // At difficulty 10 the pool is the top three cells, so across
        // many seeds at most three distinct moves appear.
        let board = board_with(&[(7, 7, Stone::Black), (8, 8, Stone::White)]);

        let mut seen = std::collections::HashSet::new();
        for seed in 0..50 {
            let mut engine = seeded_engine(seed);
            let pos = engine
                .select_move(&board, Stone::White, Difficulty::new(10))
                .expect("moves available");
            seen.insert(pos);
        }
        assert!(
            seen.len() <= 3,
            "difficulty 10 must choose among the top 3, saw {} distinct moves",
            seen.len()
        );
    }
}
