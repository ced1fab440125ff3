//! Line pattern scores for candidate evaluation
//!
//! Scores for a run of same-colored stones adjacent in-line to a
//! candidate cell, by run length and number of open ends. The table
//! encodes the standard intuition that an open three or four is far more
//! dangerous than a blocked one.

/// Pattern scores for a directional run
pub struct LineScore;

impl LineScore {
    /// Four or more adjacent: placing here makes five, near-certain win
    pub const FOUR: i32 = 1_000;

    /// Three adjacent, both ends open
    pub const THREE_OPEN: i32 = 200;
    /// Three adjacent, one end open
    pub const THREE_HALF: i32 = 50;
    /// Three adjacent, both ends blocked
    pub const THREE_CLOSED: i32 = 10;

    /// Two adjacent, both ends open
    pub const TWO_OPEN: i32 = 50;
    /// Two adjacent, one end open
    pub const TWO_HALF: i32 = 15;
    /// Two adjacent, both ends blocked
    pub const TWO_CLOSED: i32 = 3;

    /// Single adjacent stone, both ends open
    pub const ONE_OPEN: i32 = 15;
    /// Single adjacent stone, one end open
    pub const ONE_HALF: i32 = 5;
    /// Single adjacent stone, both ends blocked
    pub const ONE_CLOSED: i32 = 1;
}

/// Score a run of `consecutive` adjacent stones with `open_ends` open
/// ends. A run of four ignores open ends: the completing move is this
/// very placement.
pub fn score_run(consecutive: i32, open_ends: i32) -> i32 {
    match consecutive {
        4.. => LineScore::FOUR,
        3 => match open_ends {
            2.. => LineScore::THREE_OPEN,
            1 => LineScore::THREE_HALF,
            _ => LineScore::THREE_CLOSED,
        },
        2 => match open_ends {
            2.. => LineScore::TWO_OPEN,
            1 => LineScore::TWO_HALF,
            _ => LineScore::TWO_CLOSED,
        },
        1 => match open_ends {
            2.. => LineScore::ONE_OPEN,
            1 => LineScore::ONE_HALF,
            _ => LineScore::ONE_CLOSED,
        },
        _ => 0,
    }
}
