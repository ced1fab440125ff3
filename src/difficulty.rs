//! Difficulty level controlling AI strength
//!
//! Difficulty shapes play in two ways:
//! - How much the heuristic rewards blocking the opponent's shapes
//!   (`blocking_weight`), and
//! - How wide the random top-K candidate pool is (`pool_size`).
//!
//! Lower levels widen the pool (more randomness, weaker play); level 9+
//! narrows it to the top three candidates.

/// AI difficulty level in [1, 10].
///
/// Out-of-range values are clamped on construction rather than rejected —
/// the paired UI slider already enforces the range, clamping just keeps
/// hand-built callers from panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: Difficulty = Difficulty(1);
    pub const MAX: Difficulty = Difficulty(10);

    /// Create a difficulty, clamping to [1, 10]
    #[inline]
    pub fn new(level: i32) -> Self {
        Self(level.clamp(1, 10) as u8)
    }

    /// The clamped level
    #[inline]
    pub fn level(self) -> u8 {
        self.0
    }

    /// Weight applied to the opponent's directional strength during
    /// scoring: level/10, so the AI cares about proactive blocking in
    /// proportion to its skill.
    #[inline]
    pub fn blocking_weight(self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// Size of the top-K candidate pool for a given candidate count.
    ///
    /// Fractions use floor division, always at least one candidate:
    /// - level 1-2: 50% of candidates
    /// - level 3-4: 30%
    /// - level 5-6: 20%
    /// - level 7-8: 10%
    /// - level 9-10: top 3
    pub fn pool_size(self, candidates: usize) -> usize {
        debug_assert!(candidates > 0);
        match self.0 {
            ..=2 => (candidates / 2).max(1),
            3..=4 => (candidates * 3 / 10).max(1),
            5..=6 => (candidates / 5).max(1),
            7..=8 => (candidates / 10).max(1),
            _ => candidates.min(3),
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(5)
    }
}
