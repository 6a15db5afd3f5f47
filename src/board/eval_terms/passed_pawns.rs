//! Passed pawn evaluation.

use crate::board::state::Position;
use crate::board::types::{Color, PieceKind, Square};

use super::tables::{
    PASSED_ENDGAME_BONUS, PASSED_PAWN_BASE, PASSED_PROTECTED_BONUS, PASSED_RANK_BONUS,
};

impl Position {
    /// Squares of `color`'s passed pawns: no enemy pawn ahead of them on the
    /// same or an adjacent file.
    #[must_use]
    pub fn passed_pawns(&self, color: Color) -> Vec<Square> {
        let enemy_pawns: Vec<Square> = self
            .pieces(color.opponent())
            .filter(|p| p.kind == PieceKind::Pawn)
            .map(|p| p.square)
            .collect();

        self.pieces(color)
            .filter(|p| p.kind == PieceKind::Pawn)
            .map(|p| p.square)
            .filter(|&sq| {
                let rank = color.relative_rank(sq.rank());
                !enemy_pawns.iter().any(|enemy| {
                    enemy.file().abs_diff(sq.file()) <= 1
                        && color.relative_rank(enemy.rank()) > rank
                })
            })
            .collect()
    }

    /// Flat and rank bonus per passed pawn, more when another passed pawn
    /// trails it by one rank on an adjacent file, more again for far advanced
    /// passers in the endgame.
    #[must_use]
    pub fn eval_passed_pawns(&self, color: Color, endgame: bool) -> i32 {
        let passers = self.passed_pawns(color);
        let mut score = 0;
        for &sq in &passers {
            let rank = color.relative_rank(sq.rank());
            score += PASSED_PAWN_BASE + PASSED_RANK_BONUS[rank as usize];

            let protected = passers.iter().any(|other| {
                other.file().abs_diff(sq.file()) == 1
                    && color.relative_rank(other.rank()) + 1 == rank
            });
            if protected {
                score += PASSED_PROTECTED_BONUS;
            }
            if endgame {
                score += PASSED_ENDGAME_BONUS[rank as usize];
            }
        }
        score
    }
}
