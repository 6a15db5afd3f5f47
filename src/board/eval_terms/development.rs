use crate::board::state::Position;
use crate::board::types::{Color, PieceKind, Square};

use super::tables::{BLOCKED_CENTER_PAWN, UNDEVELOPED_MINOR, UNMOVED_CENTER_PAWN};

const CENTER_FILES: [u8; 2] = [3, 4];

impl Position {
    /// Penalties for minors on the back rank and unmoved d/e pawns.
    #[must_use]
    pub fn eval_development(&self, color: Color) -> i32 {
        let mut score = 0;
        for piece in self.pieces(color) {
            if piece.kind.is_minor() && piece.square.rank() == color.back_rank() {
                score += UNDEVELOPED_MINOR;
            }
        }

        let start_rank = color.pawn_start_rank();
        for file in CENTER_FILES {
            let home = Square::at(start_rank, file);
            let unmoved = self
                .piece_at(home)
                .is_some_and(|p| p.color == color && p.kind == PieceKind::Pawn);
            if !unmoved {
                continue;
            }
            score += UNMOVED_CENTER_PAWN;
            let blocked = self
                .tables
                .pawn_advance(color, home)
                .is_some_and(|ahead| !self.is_empty(ahead));
            if blocked {
                score += BLOCKED_CENTER_PAWN;
            }
        }
        score
    }
}
