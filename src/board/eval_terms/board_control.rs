//! Board control evaluation.
//!
//! Scores every square a side attacks, favoring advanced squares, central
//! files and the neighborhood of the enemy king.

use crate::board::state::Position;
use crate::board::types::{Color, PieceKind};

use super::helpers::AttackMap;
use super::tables::{
    CONTROL_BASE, CONTROL_FILE_EG, CONTROL_FILE_MG, CONTROL_KING_PROXIMITY_EG,
    CONTROL_KING_PROXIMITY_MG, CONTROL_RANK_EG, CONTROL_RANK_MG,
};

impl Position {
    /// Each attack counts once per attacking piece. The king's attacks only
    /// count in the endgame.
    #[must_use]
    pub fn eval_board_control(&self, color: Color, attacks: &AttackMap, endgame: bool) -> i32 {
        let (rank_bonus, file_bonus, king_bonus) = if endgame {
            (&CONTROL_RANK_EG, &CONTROL_FILE_EG, &CONTROL_KING_PROXIMITY_EG)
        } else {
            (&CONTROL_RANK_MG, &CONTROL_FILE_MG, &CONTROL_KING_PROXIMITY_MG)
        };
        let enemy_king = self.king(color.opponent()).map(|k| k.square);

        let mut score = 0;
        for (sq, kinds) in attacks.iter(color) {
            let counted = kinds
                .iter()
                .filter(|&&kind| endgame || kind != PieceKind::King)
                .count() as i32;
            if counted == 0 {
                continue;
            }
            let mut value = CONTROL_BASE
                + rank_bonus[color.relative_rank(sq.rank()) as usize]
                + file_bonus[sq.file() as usize];
            if let Some(king_sq) = enemy_king {
                value += king_bonus[sq.distance(king_sq) as usize];
            }
            score += counted * value;
        }
        score
    }
}
