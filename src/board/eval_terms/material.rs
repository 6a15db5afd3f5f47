//! Material and bishop pair.

use crate::board::state::Position;
use crate::board::types::{Color, PieceKind};

use super::tables::BISHOP_PAIR_BONUS;

impl Position {
    /// Sum of piece values of `color`, king included.
    #[must_use]
    pub fn eval_material(&self, color: Color) -> i32 {
        self.pieces(color).map(|p| p.kind.value()).sum()
    }

    #[must_use]
    pub fn eval_bishop_pair(&self, color: Color) -> i32 {
        let bishops = self
            .pieces(color)
            .filter(|p| p.kind == PieceKind::Bishop)
            .count();
        if bishops >= 2 {
            BISHOP_PAIR_BONUS
        } else {
            0
        }
    }
}
