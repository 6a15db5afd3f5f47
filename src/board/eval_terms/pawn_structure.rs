//! Pawn structure evaluation.
//!
//! Doubled pawns and pawn islands.

use crate::board::state::Position;
use crate::board::types::Color;

use super::tables::{DOUBLED_PAWN, PAWN_ISLAND};

impl Position {
    /// Flat penalty per file holding more than one pawn of `color`.
    #[must_use]
    pub fn eval_doubled_pawns(&self, color: Color) -> i32 {
        let doubled = self
            .pawn_files(color)
            .iter()
            .filter(|&&count| count > 1)
            .count() as i32;
        doubled * DOUBLED_PAWN
    }

    /// Penalty per island beyond the first, an island being a run of
    /// adjacent files that all hold a pawn of `color`.
    #[must_use]
    pub fn eval_pawn_islands(&self, color: Color) -> i32 {
        let islands = count_islands(&self.pawn_files(color));
        (islands.max(1) - 1) * PAWN_ISLAND
    }
}

fn count_islands(files: &[u8; 8]) -> i32 {
    let mut islands = 0;
    let mut in_island = false;
    for &count in files {
        if count > 0 && !in_island {
            islands += 1;
        }
        in_island = count > 0;
    }
    islands
}

#[cfg(test)]
mod tests {
    use super::count_islands;

    #[test]
    fn test_count_islands() {
        assert_eq!(count_islands(&[0; 8]), 0);
        assert_eq!(count_islands(&[1; 8]), 1);
        assert_eq!(count_islands(&[1, 1, 0, 2, 0, 0, 1, 1]), 3);
        assert_eq!(count_islands(&[0, 1, 0, 1, 0, 1, 0, 1]), 4);
    }
}
