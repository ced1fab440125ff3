//! Game rules for Omok
//!
//! Standard five-in-a-row on a 15x15 board: the first player to place
//! five or more consecutive stones along any of the four line
//! orientations wins. A full board with no winner is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{has_five_at, winner_at, DIRECTIONS};
