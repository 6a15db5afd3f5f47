//! Search score constants.

/// Score of delivering mate at the root. A mate found `ply` plies below the
/// root scores `MATE_SCORE - ply`, so nearer mates score higher.
pub const MATE_SCORE: i32 = 100_000;

/// Sentinel returned by a pruned node; exceeds every real score.
pub const INFINITY: i32 = 1_000_000;

/// Scores with absolute value >= this are mate scores
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;
