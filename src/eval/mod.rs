//! Position evaluation and heuristics

pub mod heuristic;
pub mod patterns;

// Re-exports
pub use heuristic::{directional_strength, evaluate_move};
pub use patterns::{score_run, LineScore};
