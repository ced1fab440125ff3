//! Omok (five-in-a-row) game engine
//!
//! A board-and-rules engine with a heuristic AI move selector for
//! standard Omok: 15x15 board, five or more in a row wins. The engine is
//! stateless across calls — the caller owns the authoritative board and
//! passes a snapshot per query — and deterministic except for the
//! explicitly injected random tie-break among top candidates.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection local to the last-played cell
//! - [`eval`]: Candidate-cell heuristic scoring
//! - [`engine`]: AI move selection (tactical short-circuits + scored pool)
//! - [`difficulty`]: Difficulty level, clamped to [1, 10]
//! - [`error`]: Move validation errors
//!
//! # Quick Start
//!
//! ```
//! use omok::{AiEngine, Board, Difficulty, Stone};
//! use omok::rules::winner_at;
//!
//! let mut board = Board::new();
//! let mut engine = AiEngine::new();
//!
//! // Human opens at center
//! let played = board.try_place(7, 7, Stone::Black).unwrap();
//! assert_eq!(winner_at(&board, played), None);
//!
//! // AI responds as White
//! if let Some(pos) = engine.select_move(&board, Stone::White, Difficulty::new(5)) {
//!     board.place_stone(pos, Stone::White);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Selection Priority
//!
//! The AI move selector follows this priority:
//! 1. Immediate winning move (deterministic, row-major first hit)
//! 2. Immediate block of the opponent's winning move
//! 3. Heuristic scoring with a difficulty-scaled random top-K pick

pub mod board;
pub mod difficulty;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE, WIN_LENGTH};
pub use difficulty::Difficulty;
pub use engine::{AiEngine, MoveResult, SearchType};
pub use error::MoveError;
