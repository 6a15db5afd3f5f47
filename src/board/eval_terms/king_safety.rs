//! King safety evaluation.
//!
//! Penalizes a king that has left its back ranks or sits near the center and
//! rewards friendly pieces directly in front of it. Ignored in the endgame,
//! where the king is expected to take part.

use crate::board::state::Position;
use crate::board::types::Color;

use super::tables::{KING_ADVANCED, KING_FAR_ADVANCED, KING_FILE_PENALTY, KING_SHIELD_BONUS};

impl Position {
    #[must_use]
    pub fn eval_king_safety(&self, color: Color, endgame: bool) -> i32 {
        if endgame {
            return 0;
        }
        let Some(king) = self.king(color) else {
            return 0;
        };
        let sq = king.square;

        let mut score = match color.relative_rank(sq.rank()) {
            r if r >= 4 => KING_FAR_ADVANCED,
            r if r >= 2 => KING_ADVANCED,
            _ => 0,
        };
        score += KING_FILE_PENALTY[sq.file() as usize];

        let forward = match color {
            Color::White => 1,
            Color::Black => -1,
        };
        let shield = (-1..=1)
            .filter_map(|df| sq.offset(forward, df))
            .filter(|&s| self.piece_at(s).is_some_and(|p| p.color == color))
            .count() as i32;
        score + shield * KING_SHIELD_BONUS
    }
}
