//! Board structure with validated and raw placement

use super::bitboard::Bitboard;
use super::{Pos, Stone, TOTAL_CELLS};
use crate::error::MoveError;

/// Game board holding one bitboard per color.
///
/// The board is a plain value: callers own the authoritative game state
/// and pass `&Board` (or a clone) into the engine per query. Speculative
/// placements during move evaluation use `place_stone`/`remove_stone`
/// on a scratch clone and never touch the caller's board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Check if a move at (row, col) is legal: in range and on an empty cell
    #[inline]
    pub fn is_legal(&self, row: i32, col: i32) -> bool {
        Pos::is_valid(row, col) && self.is_empty_at(Pos::new(row as u8, col as u8))
    }

    /// Place a stone without validation.
    /// Use `try_place` for game moves; this is for setup and for
    /// speculative placements on scratch boards.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone (undo of a speculative placement)
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Apply a validated game move.
    ///
    /// Sets exactly one cell to `stone` and returns its position, or
    /// rejects the move with a [`MoveError`] leaving the board unchanged.
    pub fn try_place(&mut self, row: i32, col: i32, stone: Stone) -> Result<Pos, MoveError> {
        if !Pos::is_valid(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        let pos = Pos::new(row as u8, col as u8);
        if !self.is_empty_at(pos) {
            return Err(MoveError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.place_stone(pos, stone);
        Ok(pos)
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if no empty cell remains (draw when there is no winner)
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Check if board has no stones
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }
}
